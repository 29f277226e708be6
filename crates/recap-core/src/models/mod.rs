//! Data models for the application
//!
//! Wire types match the backend exactly, including the key-value store's
//! attribute-typed field shapes, so the client never reinterprets payloads.

mod auth;
mod catalog;
mod presign;
mod selection;

// Re-export all models for convenient imports
pub use auth::*;
pub use catalog::*;
pub use presign::*;
pub use selection::*;
