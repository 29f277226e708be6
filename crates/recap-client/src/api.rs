//! Domain methods for the Recap API client.
//!
//! Wire types live in `recap_core::models`. Each method maps failures into
//! its operation's error variant; auth failures propagate unchanged.

use recap_core::{
    validate_audio_filename, AppError, PresignedUrlResponse, SummaryDocument, UploadRecord,
};
use reqwest::header::CONTENT_TYPE;

use crate::ApiClient;

impl ApiClient {
    /// Request a pre-signed write URL for a file, parameterized by file name
    /// and owner label. The extension is validated client-side first; the
    /// backend refuses anything but mp3/m4a anyway.
    #[tracing::instrument(skip(self), fields(operation = "presigned_upload_url"))]
    pub async fn presigned_upload_url(
        &self,
        file_name: &str,
        owner_label: &str,
    ) -> Result<PresignedUrlResponse, AppError> {
        validate_audio_filename(file_name)?;

        self.get_json(
            "/pre_signed_url",
            &[("file", file_name), ("name", owner_label)],
        )
        .await
        .map_err(|f| f.into_operation_error(AppError::Presign))
    }

    /// PUT raw file bytes directly to storage. No auth header: the write
    /// credential is embedded in the pre-signed URL itself. The storage tier
    /// returns success/failure only, no body contract assumed.
    #[tracing::instrument(skip(self, bytes), fields(operation = "put_object", size = bytes.len()))]
    pub async fn put_object(
        &self,
        url: &str,
        content_type: &str,
        bytes: &[u8],
    ) -> Result<(), AppError> {
        let response = self
            .http()
            .put(url)
            .header(CONTENT_TYPE, content_type)
            .body(bytes.to_vec())
            .send()
            .await
            .map_err(|e| AppError::Upload(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::Upload(format!("status {}: {}", status, body)));
        }

        Ok(())
    }

    /// List the current user's uploads. The backend returns a full snapshot,
    /// newest first.
    #[tracing::instrument(skip(self), fields(operation = "list_uploads"))]
    pub async fn list_uploads(&self) -> Result<Vec<UploadRecord>, AppError> {
        self.get_json("/list_uploads", &[])
            .await
            .map_err(|f| f.into_operation_error(AppError::List))
    }

    /// Fetch the computed summary for one catalog entry, keyed by the
    /// backend-assigned file identifier.
    #[tracing::instrument(skip(self), fields(operation = "fetch_summary"))]
    pub async fn fetch_summary(&self, file_id: &str) -> Result<String, AppError> {
        let document: SummaryDocument = self
            .get_json("/get_file", &[("file", file_id)])
            .await
            .map_err(|f| f.into_operation_error(AppError::Fetch))?;

        Ok(document.summary_text().to_string())
    }
}
