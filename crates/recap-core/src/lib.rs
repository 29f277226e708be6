//! Recap Core Library
//!
//! This crate provides the domain models, error types, configuration, and
//! client-side validation shared across all Recap components. It contains no
//! network code; the HTTP workflow lives in `recap-client`.

pub mod config;
pub mod error;
pub mod models;
pub mod validation;

// Re-export commonly used types
pub use config::ClientConfig;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use models::{
    AttributeString, AuthEvent, AuthenticatedUser, BearerToken, PendingSelection,
    PresignedUrlResponse, SummaryDocument, UploadRecord,
};
pub use validation::{media_type_for, validate_audio_filename, ALLOWED_AUDIO_EXTENSIONS};
