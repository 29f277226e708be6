//! Catalog client
//!
//! Read-only view of the backend-maintained catalog: the snapshot listing of
//! previous uploads and the per-file summary. Recovery policy on failure is
//! the caller's (the session controller keeps a stale listing but clears a
//! stale summary).

use recap_core::{AppError, UploadRecord};

use crate::ApiClient;

#[derive(Clone)]
pub struct CatalogClient {
    api: ApiClient,
}

impl CatalogClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Full snapshot of the user's uploads; replaces any previous listing,
    /// never merged incrementally.
    pub async fn list_uploads(&self) -> Result<Vec<UploadRecord>, AppError> {
        self.api.list_uploads().await
    }

    /// Summary text for one upload, fetched on demand and not cached.
    pub async fn fetch_summary(&self, file_id: &str) -> Result<String, AppError> {
        self.api.fetch_summary(file_id).await
    }
}
