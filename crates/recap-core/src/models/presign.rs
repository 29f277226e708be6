use serde::{Deserialize, Serialize};

/// Response of `GET /pre_signed_url`: a time-limited, credential-embedded
/// URL granting temporary write access to one storage object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresignedUrlResponse {
    pub pre_signed_url: String,
    /// Storage key the backend chose for the object. Informational; the
    /// upload itself goes to `pre_signed_url`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_response_with_key() {
        let json = r#"{"key":"source/abc.mp3","pre_signed_url":"https://bucket.example/source/abc.mp3?sig=x"}"#;
        let resp: PresignedUrlResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.key.as_deref(), Some("source/abc.mp3"));
        assert!(resp.pre_signed_url.starts_with("https://"));
    }

    #[test]
    fn parses_response_without_key() {
        let json = r#"{"pre_signed_url":"https://bucket.example/o?sig=x"}"#;
        let resp: PresignedUrlResponse = serde_json::from_str(json).unwrap();
        assert!(resp.key.is_none());
    }
}
