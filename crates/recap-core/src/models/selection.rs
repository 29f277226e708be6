use std::path::Path;

use crate::error::AppError;
use crate::validation::media_type_for;

/// The file chosen by the user for upload, held client-side until submit.
///
/// At most one selection is active at a time. It is cleared on submit
/// success and on sign-out, and retained on submit failure so the user may
/// retry.
#[derive(Debug, Clone)]
pub struct PendingSelection {
    /// Name the file is submitted under (the display name in the catalog).
    pub file_name: String,
    /// Declared media type, sent as `Content-Type` on the storage PUT.
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl PendingSelection {
    pub fn new(
        file_name: impl Into<String>,
        media_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            media_type: media_type.into(),
            bytes,
        }
    }

    /// Read a selection from a local file, validating the extension and
    /// inferring the media type from it. Path traversal components are
    /// rejected up front.
    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        if path
            .components()
            .any(|c| c == std::path::Component::ParentDir)
        {
            return Err(AppError::InvalidInput(format!(
                "Path traversal not allowed: {}",
                path.display()
            )));
        }

        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                AppError::InvalidInput(format!("Not a file path: {}", path.display()))
            })?
            .to_string();

        let media_type = media_type_for(&file_name)?;
        let bytes = std::fs::read(path)?;

        Ok(Self::new(file_name, media_type, bytes))
    }

    pub fn size_bytes(&self) -> usize {
        self.bytes.len()
    }
}
