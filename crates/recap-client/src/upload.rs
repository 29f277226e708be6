//! Upload client
//!
//! Drives the submit workflow: bearer credential, pre-signed URL, direct
//! storage PUT. The two-step pattern keeps file bytes off the application
//! backend while the backend still decides whether to grant the write
//! credential. Processing is asynchronous; success here only means the
//! upload was accepted.

use recap_core::{AppError, PendingSelection, PresignedUrlResponse};

use crate::ApiClient;

#[derive(Clone)]
pub struct UploadClient {
    api: ApiClient,
}

impl UploadClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Submit one selected file under `owner_label`.
    ///
    /// Failure at any step aborts the submission without touching the
    /// selection, so the caller can retry. Nothing is auto-retried here.
    #[tracing::instrument(
        skip(self, selection),
        fields(
            file = %selection.file_name,
            owner = %owner_label,
            size = selection.size_bytes(),
            operation = "submit"
        )
    )]
    pub async fn submit(
        &self,
        selection: &PendingSelection,
        owner_label: &str,
    ) -> Result<PresignedUrlResponse, AppError> {
        let presigned = self
            .api
            .presigned_upload_url(&selection.file_name, owner_label)
            .await?;

        self.api
            .put_object(
                &presigned.pre_signed_url,
                &selection.media_type,
                &selection.bytes,
            )
            .await?;

        tracing::info!(key = ?presigned.key, "upload accepted, processing is asynchronous");
        Ok(presigned)
    }
}
