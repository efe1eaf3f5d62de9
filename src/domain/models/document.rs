#[cfg(test)]
#[path = "document_test.rs"]
mod tests;

use chrono::DateTime;
use chrono::Local;

use super::UploadRequest;
use super::UploadedDocument;

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Formats a byte count with two decimals at most, dropping trailing zeros.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    let mut value = bytes as f64;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = (value * 100.0).round() / 100.0;
    return format!("{rounded} {}", SIZE_UNITS[unit]);
}

/// A document the backend accepted and indexed. The id is an opaque token
/// handed back on chat requests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentDescriptor {
    pub id: String,
    pub name: String,
    pub size: String,
    pub text_length: u64,
    pub uploaded_at: DateTime<Local>,
}

impl DocumentDescriptor {
    pub fn from_upload(uploaded: UploadedDocument, request: &UploadRequest) -> DocumentDescriptor {
        let mut name = uploaded.filename;
        if name.trim().is_empty() {
            name = request.file_name.to_string();
        }

        return DocumentDescriptor {
            id: uploaded.document_id,
            name,
            size: format_file_size(request.size),
            text_length: uploaded.text_length,
            uploaded_at: Local::now(),
        };
    }

    pub fn summary(&self) -> String {
        return format!(
            "{} ({}, {} characters, uploaded {})",
            self.name,
            self.size,
            self.text_length,
            self.uploaded_at.format("%H:%M:%S")
        );
    }
}
