//! Client-side validation
//!
//! The backend only grants write credentials for `mp3` and `m4a` files.
//! Validating the extension before submit fails fast instead of spending a
//! round-trip on a request the backend will refuse.

use crate::error::AppError;

/// Audio formats the processing pipeline accepts.
pub const ALLOWED_AUDIO_EXTENSIONS: [&str; 2] = ["mp3", "m4a"];

/// Extract and validate the extension of `file_name`. Returns the lowercased
/// extension.
pub fn validate_audio_filename(file_name: &str) -> Result<String, AppError> {
    let extension = file_name
        .rsplit_once('.')
        .map(|(stem, ext)| (stem, ext.to_ascii_lowercase()))
        .filter(|(stem, ext)| !stem.is_empty() && !ext.is_empty())
        .map(|(_, ext)| ext)
        .ok_or_else(|| {
            AppError::InvalidInput(format!("File has no extension: {}", file_name))
        })?;

    if !ALLOWED_AUDIO_EXTENSIONS.contains(&extension.as_str()) {
        return Err(AppError::InvalidInput(format!(
            "Not allowed file type: {} (allowed: {})",
            extension,
            ALLOWED_AUDIO_EXTENSIONS.join(", ")
        )));
    }

    Ok(extension)
}

/// Media type for a validated audio file name, used as the `Content-Type` of
/// the storage PUT when the caller has no declared type to forward.
pub fn media_type_for(file_name: &str) -> Result<&'static str, AppError> {
    match validate_audio_filename(file_name)?.as_str() {
        "mp3" => Ok("audio/mpeg"),
        "m4a" => Ok("audio/mp4"),
        other => Err(AppError::InvalidInput(format!(
            "Not allowed file type: {}",
            other
        ))),
    }
}
