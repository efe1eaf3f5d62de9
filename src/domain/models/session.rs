#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use super::DocumentDescriptor;
use super::HealthStatus;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum UploadStatus {
    #[default]
    Idle,
    Uploading {
        file_name: String,
    },
    Succeeded {
        file_name: String,
    },
    Failed {
        message: String,
    },
}

impl UploadStatus {
    pub fn label(&self) -> String {
        match self {
            UploadStatus::Idle => return "No upload in progress".to_string(),
            UploadStatus::Uploading { file_name } => return format!("Uploading {file_name}..."),
            UploadStatus::Succeeded { file_name } => return format!("Uploaded {file_name}"),
            UploadStatus::Failed { message } => return format!("Upload failed: {message}"),
        }
    }
}

/// Everything the client knows about the current session. Lives only as long
/// as the process.
#[derive(Debug, Default)]
pub struct SessionState {
    pub documents: Vec<DocumentDescriptor>,
    /// In-flight guard shared by the chat and upload flows.
    pub is_processing: bool,
    pub health: HealthStatus,
    pub indexed_documents: Option<u64>,
    pub selected_document: Option<String>,
    pub upload_status: UploadStatus,
    /// Cosmetic percentage, `None` when the progress bar is hidden.
    pub upload_progress: Option<u16>,
}

impl SessionState {
    /// Whether the send control is enabled. Recomputed on every render rather
    /// than stored.
    pub fn can_send(&self, has_text: bool) -> bool {
        return has_text && !self.is_processing && self.health == HealthStatus::Healthy;
    }

    pub fn add_document(&mut self, document: DocumentDescriptor) {
        self.documents.push(document);
    }

    /// Selects a document by its 1-based position in the document list.
    /// Passing `None` goes back to searching every document.
    pub fn select_document(&mut self, position: Option<usize>) -> bool {
        match position {
            None => {
                self.selected_document = None;
                return true;
            }
            Some(position) => {
                if position == 0 || position > self.documents.len() {
                    return false;
                }
                self.selected_document = Some(self.documents[position - 1].id.to_string());
                return true;
            }
        }
    }

    pub fn selected(&self) -> Option<&DocumentDescriptor> {
        let id = self.selected_document.as_ref()?;
        return self.documents.iter().find(|doc| return &doc.id == id);
    }

    pub fn reset_documents(&mut self) {
        self.documents.clear();
        self.selected_document = None;
        self.upload_status = UploadStatus::Idle;
        self.upload_progress = None;
    }
}
