//! File validation gate for CV uploads
//!
//! The gate inspects only the declared media type and filename of an upload. It
//! never reads the file content and performs no I/O, so it can run before any
//! bytes reach storage.

use thiserror::Error;

/// Rejection produced by [`FileValidationGate::check`]. Terminal for the request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid file type. Only {allowed} files are allowed.")]
    InvalidFileType { allowed: String },

    #[error("Invalid file extension. Only {allowed} files are allowed.")]
    InvalidExtension { allowed: String },
}

/// Allow-lists for uploaded CVs.
///
/// Media types are stored lowercased without parameters; extensions are stored
/// lowercased with a leading dot (see `jobboard_core::config::normalize_extensions`).
#[derive(Debug, Clone)]
pub struct FileValidationGate {
    allowed_mime_types: Vec<String>,
    allowed_extensions: Vec<String>,
}

impl FileValidationGate {
    pub fn new(allowed_mime_types: &[String], allowed_extensions: &[String]) -> Self {
        Self {
            allowed_mime_types: allowed_mime_types
                .iter()
                .map(|t| normalize_mime_type(t).to_lowercase())
                .collect(),
            allowed_extensions: allowed_extensions
                .iter()
                .map(|e| {
                    let e = e.trim().to_lowercase();
                    if e.starts_with('.') {
                        e
                    } else {
                        format!(".{}", e)
                    }
                })
                .collect(),
        }
    }

    /// Accept or reject an upload by its declared media type and filename.
    ///
    /// The media type is checked first: a disallowed type is reported as such even
    /// when the extension is also wrong.
    pub fn check(&self, content_type: &str, filename: &str) -> Result<(), ValidationError> {
        let mime = normalize_mime_type(content_type).to_lowercase();
        if !self.allowed_mime_types.iter().any(|t| *t == mime) {
            return Err(ValidationError::InvalidFileType {
                allowed: self.allowed_list(),
            });
        }

        let lowered = filename.to_lowercase();
        if !self
            .allowed_extensions
            .iter()
            .any(|ext| lowered.ends_with(ext.as_str()))
        {
            return Err(ValidationError::InvalidExtension {
                allowed: self.allowed_list(),
            });
        }

        Ok(())
    }

    /// Human-readable list of allowed extensions, e.g. ".doc, .docx, and .pdf"
    pub fn allowed_list(&self) -> String {
        human_list(&self.allowed_extensions)
    }
}

/// Normalize MIME type by stripping parameters (e.g. "application/pdf; charset=utf-8" -> "application/pdf").
fn normalize_mime_type(content_type: &str) -> &str {
    content_type
        .split(';')
        .next()
        .map(|s| s.trim())
        .unwrap_or(content_type)
}

fn human_list(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{} and {}", first, second),
        [init @ .., last] => format!("{}, and {}", init.join(", "), last),
    }
}
