#[cfg(test)]
#[path = "upload_test.rs"]
mod tests;

use std::path::Path;
use std::path::PathBuf;

use thiserror::Error;
use tokio::fs;

use super::format_file_size;
use super::UploadRequest;

/// 50 MiB, matching the backend's request size limit.
pub const MAX_UPLOAD_BYTES: u64 = 50 * 1024 * 1024;

pub const ALLOWED_MIME_TYPES: [&str; 6] = [
    "application/pdf",
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/tiff",
    "image/bmp",
];

/// Reasons a file is refused before anything is sent over the network.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum UploadRejection {
    #[error("Unsupported file type ({mime}). Please upload a PDF or an image (JPEG, PNG, TIFF, BMP).")]
    UnsupportedType { mime: String },

    #[error("File is too large ({}). The maximum size is {}.", display_size(.size), format_file_size(MAX_UPLOAD_BYTES))]
    TooLarge { size: u64 },

    #[error("Unable to read {path}: {message}")]
    Unreadable { path: String, message: String },
}

fn display_size(size: &u64) -> String {
    return format_file_size(*size);
}

pub fn mime_for_path(path: &Path) -> String {
    return mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string();
}

pub fn validate(mime: &str, size: u64) -> Result<(), UploadRejection> {
    if !ALLOWED_MIME_TYPES.contains(&mime) {
        return Err(UploadRejection::UnsupportedType {
            mime: mime.to_string(),
        });
    }

    if size > MAX_UPLOAD_BYTES {
        return Err(UploadRejection::TooLarge { size });
    }

    return Ok(());
}

/// Expands a leading `~/` to the home directory.
pub fn expand_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim().trim_matches('"');
    if let Some(rest) = trimmed.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }

    return PathBuf::from(trimmed);
}

/// Resolves and validates a file selected for upload.
pub async fn prepare(raw_path: &str) -> Result<UploadRequest, UploadRejection> {
    let path = expand_path(raw_path);
    let unreadable = |message: String| {
        return UploadRejection::Unreadable {
            path: path.to_string_lossy().to_string(),
            message,
        };
    };

    let metadata = fs::metadata(&path)
        .await
        .map_err(|err| return unreadable(err.to_string()))?;
    if !metadata.is_file() {
        return Err(unreadable("not a file".to_string()));
    }

    let mime = mime_for_path(&path);
    validate(&mime, metadata.len())?;

    let file_name = path
        .file_name()
        .map(|name| return name.to_string_lossy().to_string())
        .unwrap_or_default();

    return Ok(UploadRequest {
        path,
        file_name,
        size: metadata.len(),
        mime,
    });
}
