#[cfg(test)]
#[path = "api_test.rs"]
mod tests;

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use serde_derive::Serialize;
use thiserror::Error;

use super::HealthReport;

/// Failures reaching or talking to the legal assistant backend.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    #[error("Unable to reach the backend: {0}")]
    Transport(String),

    #[error("The backend did not respond in time")]
    Timeout,

    /// Non-2xx status, or a well formed body with `success: false`.
    #[error("The backend rejected the request (status {status}): {}", .message.as_deref().unwrap_or("no error message"))]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    #[error("Unexpected response from the backend: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message safe to show to the user, preferring what the backend said.
    pub fn user_message(&self, generic: &str) -> String {
        if let ApiError::Rejected {
            message: Some(message),
            ..
        } = self
        {
            if !message.trim().is_empty() {
                return message.to_string();
            }
        }

        return generic.to_string();
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatAnswer {
    pub response: String,
    pub sources: Vec<String>,
    pub confidence: Option<f64>,
    pub processing_time: Option<f64>,
}

impl ChatAnswer {
    /// Formats the answer for the transcript, appending citations and the
    /// confidence/timing footer when the backend provided them.
    pub fn render(&self) -> String {
        let mut sections = vec![self.response.trim().to_string()];

        if !self.sources.is_empty() {
            let sources = self
                .sources
                .iter()
                .map(|source| return format!("- {source}"))
                .collect::<Vec<String>>()
                .join("\n");
            sections.push(format!("Sources:\n{sources}"));
        }

        let mut footer = vec![];
        if let Some(confidence) = self.confidence {
            footer.push(format!("Confidence: {:.1}%", confidence * 100.0));
        }
        if let Some(processing_time) = self.processing_time {
            footer.push(format!("Time: {processing_time:.2}s"));
        }
        if !footer.is_empty() {
            sections.push(footer.join(" | "));
        }

        return sections.join("\n\n");
    }
}

/// A file that passed client side validation and is ready to be sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadRequest {
    pub path: PathBuf,
    pub file_name: String,
    pub size: u64,
    pub mime: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadedDocument {
    pub document_id: String,
    pub filename: String,
    pub text_length: u64,
}

#[async_trait]
pub trait LegalApi {
    /// Polled on an interval to drive the status indicators.
    async fn health_check(&self) -> Result<HealthReport, ApiError>;

    /// Sends a document for text extraction and indexing.
    async fn upload(&self, request: &UploadRequest) -> Result<UploadedDocument, ApiError>;

    /// Asks a question, optionally scoped to one uploaded document.
    async fn chat(&self, request: &ChatRequest) -> Result<ChatAnswer, ApiError>;

    /// Drops every uploaded document on the backend.
    async fn clear(&self) -> Result<(), ApiError>;
}

pub type LegalApiRef = Arc<dyn LegalApi + Send + Sync>;
