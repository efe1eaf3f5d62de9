use super::ChatRequest;
use super::UploadRequest;

pub enum Action {
    ChatRequest(ChatRequest),
    ClearRequest(),
    HealthCheck(),
    UploadRequest(UploadRequest),
}
