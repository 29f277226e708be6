//! Error types module
//!
//! All client failures are unified under the `AppError` enum. Each network
//! operation maps transport and non-success responses into its own variant
//! (`Presign`, `Upload`, `List`, `Fetch`) so callers can apply the
//! per-operation recovery policy without inspecting message text.

use std::io;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for recoverable issues that leave prior state intact
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error presentation - defines how an error is surfaced to the
/// user. Every failure produces a user-visible signal; none is silently
/// swallowed and none is auto-retried.
pub trait ErrorMetadata {
    /// Machine-readable error code (e.g. "PRESIGN_ERROR")
    fn error_code(&self) -> &'static str;

    /// Whether the user may reasonably retry the operation as-is
    fn is_recoverable(&self) -> bool;

    /// Suggested action for the user
    fn suggested_action(&self) -> Option<&'static str>;

    /// User-facing message (may differ from the internal error message)
    fn user_message(&self) -> String;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// No session exists or the token could not be refreshed.
    #[error("Not authenticated: {0}")]
    Auth(String),

    /// The backend refused or failed the pre-signed URL request.
    #[error("Pre-signed URL request failed: {0}")]
    Presign(String),

    /// The direct PUT of the file bytes to storage failed.
    #[error("Storage upload failed: {0}")]
    Upload(String),

    /// Listing the upload catalog failed.
    #[error("Listing uploads failed: {0}")]
    List(String),

    /// Fetching a summary for one catalog entry failed.
    #[error("Summary fetch failed: {0}")]
    Fetch(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Internal error: {message}")]
    InternalWithSource {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalWithSource {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Internal(format!("IO error: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidInput(format!("JSON parsing error: {}", err))
    }
}

/// Static metadata for each variant: (error_code, recoverable, suggested_action, log_level).
/// user_message stays per-variant for dynamic content.
fn app_error_static_metadata(
    err: &AppError,
) -> (&'static str, bool, Option<&'static str>, LogLevel) {
    match err {
        AppError::Auth(_) => (
            "AUTH_ERROR",
            false,
            Some("Sign in again and retry"),
            LogLevel::Debug,
        ),
        AppError::Presign(_) => (
            "PRESIGN_ERROR",
            true,
            Some("Retry the upload"),
            LogLevel::Error,
        ),
        AppError::Upload(_) => (
            "UPLOAD_ERROR",
            true,
            Some("Retry the upload"),
            LogLevel::Error,
        ),
        AppError::List(_) => (
            "LIST_ERROR",
            true,
            Some("Refresh the listing after a short delay"),
            LogLevel::Warn,
        ),
        AppError::Fetch(_) => (
            "FETCH_ERROR",
            true,
            Some("Request the summary again"),
            LogLevel::Warn,
        ),
        AppError::InvalidInput(_) => (
            "INVALID_INPUT",
            false,
            Some("Check the selected file and parameters"),
            LogLevel::Debug,
        ),
        AppError::Internal(_) => (
            "INTERNAL_ERROR",
            true,
            Some("Retry after a short delay"),
            LogLevel::Error,
        ),
        AppError::InternalWithSource { .. } => (
            "INTERNAL_ERROR",
            true,
            Some("Retry after a short delay"),
            LogLevel::Error,
        ),
    }
}

impl AppError {
    /// Get the error type name for detailed error reporting
    pub fn error_type(&self) -> &str {
        match self {
            AppError::Auth(_) => "Auth",
            AppError::Presign(_) => "Presign",
            AppError::Upload(_) => "Upload",
            AppError::List(_) => "List",
            AppError::Fetch(_) => "Fetch",
            AppError::InvalidInput(_) => "InvalidInput",
            AppError::Internal(_) => "Internal",
            AppError::InternalWithSource { .. } => "Internal",
        }
    }

    /// Get detailed error information including the source chain
    pub fn detailed_message(&self) -> String {
        use std::error::Error;

        let mut details = self.to_string();

        let mut source = self.source();
        let mut depth = 0;
        while let Some(err) = source {
            depth += 1;
            if depth > 5 {
                details.push_str("\n  ... (truncated)");
                break;
            }
            details.push_str(&format!("\n  Caused by: {}", err));
            source = err.source();
        }

        details
    }
}

impl ErrorMetadata for AppError {
    fn error_code(&self) -> &'static str {
        app_error_static_metadata(self).0
    }

    fn is_recoverable(&self) -> bool {
        app_error_static_metadata(self).1
    }

    fn suggested_action(&self) -> Option<&'static str> {
        app_error_static_metadata(self).2
    }

    fn log_level(&self) -> LogLevel {
        app_error_static_metadata(self).3
    }

    fn user_message(&self) -> String {
        match self {
            AppError::Auth(_) => "You are not signed in".to_string(),
            AppError::Presign(_) => "File upload error!".to_string(),
            AppError::Upload(_) => "File upload error!".to_string(),
            AppError::List(_) => "File load error!".to_string(),
            AppError::Fetch(_) => "View File error!".to_string(),
            AppError::InvalidInput(ref msg) => msg.clone(),
            AppError::Internal(_) => "Internal client error".to_string(),
            AppError::InternalWithSource { .. } => "Internal client error".to_string(),
        }
    }
}
