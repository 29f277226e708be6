use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// One entry in the backend-maintained catalog of uploads.
///
/// Server-owned and read-only from the client's perspective; fetched as a
/// full-snapshot list, never created or mutated individually by the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadRecord {
    /// Storage identifier assigned by the backend (a random key, so the same
    /// display name can be uploaded more than once).
    pub file_name: String,
    /// Display name the user uploaded the file under.
    pub file_original: String,
    /// Unix seconds. The backend stores this as a string attribute, so the
    /// wire value may be either a JSON string or a number.
    #[serde(deserialize_with = "unix_seconds_from_string_or_number")]
    pub file_timestamp: i64,
}

impl UploadRecord {
    pub fn uploaded_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.file_timestamp, 0)
    }
}

fn unix_seconds_from_string_or_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        Number(i64),
        Text(String),
    }

    match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::Number(n) => Ok(n),
        StringOrNumber::Text(s) => s.trim().parse::<i64>().map_err(serde::de::Error::custom),
    }
}

/// A single attribute-typed string field, e.g. `{ "S": "text" }`. The shape
/// reflects the backend key-value store's wire encoding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeString {
    #[serde(rename = "S")]
    pub value: String,
}

/// Wire shape of `GET /get_file`: the stored item with attribute-typed
/// fields. Only `combined_summary` is required; the remaining attributes are
/// ignored by the workflow but tolerated when present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryDocument {
    pub combined_summary: AttributeString,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<AttributeString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_original: Option<AttributeString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_owner: Option<AttributeString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_timestamp: Option<AttributeString>,
}

impl SummaryDocument {
    /// Textual output of the asynchronous processing pipeline.
    pub fn summary_text(&self) -> &str {
        &self.combined_summary.value
    }
}
