//! Session controller
//!
//! Owns the client-visible state (selection, listing, summary) in one
//! explicit container and reacts to the identity service's auth events:
//! sign-in triggers a listing refresh, sign-out resets everything. The event
//! subscription is acquired once when the controller is created and dropped
//! with it, so handlers are never registered twice.

use recap_core::{AppError, AuthEvent, ErrorMetadata, LogLevel, PendingSelection, UploadRecord};
use tokio::sync::broadcast;

use crate::{ApiClient, CatalogClient, UploadClient};

/// Client-visible state. All mutation goes through the controller; the
/// upload and catalog clients receive it by reference, never as globals.
#[derive(Debug, Default)]
pub struct SessionState {
    pub selection: Option<PendingSelection>,
    pub uploads: Vec<UploadRecord>,
    pub summary: Option<String>,
}

impl SessionState {
    /// Empty state, applied on construction and on sign-out. Idempotent.
    fn reset(&mut self) {
        self.selection = None;
        self.uploads.clear();
        self.summary = None;
    }
}

pub struct SessionController {
    api: ApiClient,
    uploads: UploadClient,
    catalog: CatalogClient,
    events: broadcast::Receiver<AuthEvent>,
    state: SessionState,
}

impl SessionController {
    pub fn new(api: ApiClient) -> Self {
        let events = api.subscribe_auth_events();
        Self {
            uploads: UploadClient::new(api.clone()),
            catalog: CatalogClient::new(api.clone()),
            api,
            events,
            state: SessionState::default(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Choose a file for upload, replacing any previous selection.
    pub fn select_file(&mut self, selection: PendingSelection) {
        self.state.selection = Some(selection);
    }

    pub fn clear_selection(&mut self) {
        self.state.selection = None;
    }

    /// Submit the pending selection under `owner_label`.
    ///
    /// On success the selection is cleared and a listing refresh is
    /// triggered; a refresh failure leaves the stale listing and does not
    /// undo the accepted upload. On any submit failure the selection stays
    /// untouched for retry.
    pub async fn submit(&mut self, owner_label: &str) -> Result<(), AppError> {
        let selection = self.state.selection.as_ref().ok_or_else(|| {
            AppError::InvalidInput("No file selected".to_string())
        })?;

        match self.uploads.submit(selection, owner_label).await {
            Ok(_receipt) => {
                self.state.selection = None;
                let _ = self.refresh_uploads().await;
                Ok(())
            }
            Err(err) => {
                report_failure(&err);
                Err(err)
            }
        }
    }

    /// Replace the listing with a fresh snapshot. On failure the previous
    /// listing stays displayed; stale-but-present beats blanking.
    pub async fn refresh_uploads(&mut self) -> Result<(), AppError> {
        match self.catalog.list_uploads().await {
            Ok(records) => {
                self.state.uploads = records;
                Ok(())
            }
            Err(err) => {
                report_failure(&err);
                Err(err)
            }
        }
    }

    /// Fetch and display the summary for one upload.
    pub async fn view_summary(&mut self, file_id: &str) -> Result<(), AppError> {
        let result = self.catalog.fetch_summary(file_id).await;
        self.apply_summary(result)
    }

    /// Apply one summary response to the displayed state.
    ///
    /// Responses are applied in arrival order: when several summary requests
    /// are in flight, the last one to resolve wins the display, whichever
    /// was issued first. A failure clears the summary outright, since
    /// whatever was shown belonged to a different request.
    pub fn apply_summary(&mut self, result: Result<String, AppError>) -> Result<(), AppError> {
        match result {
            Ok(text) => {
                self.state.summary = Some(text);
                Ok(())
            }
            Err(err) => {
                self.state.summary = None;
                report_failure(&err);
                Err(err)
            }
        }
    }

    /// React to one auth event.
    pub async fn handle_event(&mut self, event: AuthEvent) {
        match event {
            AuthEvent::SignedIn => {
                // Failure already surfaced; the listing stays empty until
                // the user refreshes.
                let _ = self.refresh_uploads().await;
            }
            AuthEvent::SignedOut => {
                self.api.clear_session().await;
                self.state.reset();
            }
        }
    }

    /// Drive the controller from the auth event stream until the identity
    /// service shuts down. The single subscription taken in `new` is used
    /// for the whole session and released when the controller drops.
    pub async fn run(&mut self) {
        loop {
            match self.events.recv().await {
                Ok(event) => self.handle_event(event).await,
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "auth event stream lagged");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    }
}

/// Surface a failure as a user-visible signal at the level the error calls
/// for. Nothing is swallowed and nothing is fatal to the process.
fn report_failure(err: &AppError) {
    let message = err.user_message();
    match err.log_level() {
        LogLevel::Debug => tracing::debug!(code = err.error_code(), %message, detail = %err),
        LogLevel::Warn => tracing::warn!(code = err.error_code(), %message, detail = %err),
        LogLevel::Error => tracing::error!(code = err.error_code(), %message, detail = %err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_is_idempotent() {
        let mut state = SessionState {
            selection: Some(PendingSelection::new("a.mp3", "audio/mpeg", vec![1])),
            uploads: vec![],
            summary: Some("old".to_string()),
        };
        state.reset();
        state.reset();
        assert!(state.selection.is_none());
        assert!(state.uploads.is_empty());
        assert!(state.summary.is_none());
    }
}
