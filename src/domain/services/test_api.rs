use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::models::ApiError;
use crate::domain::models::ChatAnswer;
use crate::domain::models::ChatRequest;
use crate::domain::models::HealthReport;
use crate::domain::models::HealthStatus;
use crate::domain::models::LegalApi;
use crate::domain::models::LegalApiRef;
use crate::domain::models::UploadRequest;
use crate::domain::models::UploadedDocument;

/// Canned backend that records every call it receives.
pub struct FakeApi {
    pub health: Result<HealthReport, ApiError>,
    pub upload: Result<UploadedDocument, ApiError>,
    pub chat: Result<ChatAnswer, ApiError>,
    pub clear: Result<(), ApiError>,
    pub calls: Mutex<Vec<String>>,
}

impl Default for FakeApi {
    fn default() -> FakeApi {
        return FakeApi {
            health: Ok(HealthReport {
                status: HealthStatus::Healthy,
                indexed_documents: Some(12),
            }),
            upload: Ok(UploadedDocument {
                document_id: "doc_1".to_string(),
                filename: "notice.pdf".to_string(),
                text_length: 1200,
            }),
            chat: Ok(ChatAnswer {
                response: "Section 138 covers dishonoured cheques.".to_string(),
                sources: vec![],
                confidence: Some(0.87),
                processing_time: Some(1.42),
            }),
            clear: Ok(()),
            calls: Mutex::new(vec![]),
        };
    }
}

impl FakeApi {
    pub fn into_ref(self) -> (Arc<FakeApi>, LegalApiRef) {
        let api = Arc::new(self);
        let api_ref: LegalApiRef = api.clone();
        return (api, api_ref);
    }

    pub fn calls(&self) -> Vec<String> {
        return self.calls.lock().unwrap().clone();
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl LegalApi for FakeApi {
    async fn health_check(&self) -> Result<HealthReport, ApiError> {
        self.record("health".to_string());
        return self.health.clone();
    }

    async fn upload(&self, request: &UploadRequest) -> Result<UploadedDocument, ApiError> {
        self.record(format!("upload {}", request.file_name));
        return self.upload.clone();
    }

    async fn chat(&self, request: &ChatRequest) -> Result<ChatAnswer, ApiError> {
        self.record(format!("chat {}", request.message));
        return self.chat.clone();
    }

    async fn clear(&self) -> Result<(), ApiError> {
        self.record("clear".to_string());
        return self.clear.clone();
    }
}
