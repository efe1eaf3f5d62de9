use tui_textarea::Input;

use super::ApiError;
use super::ChatAnswer;
use super::DocumentDescriptor;
use super::HealthReport;

pub enum Event {
    ChatResponse(Result<ChatAnswer, ApiError>),
    ClearResponse(Result<(), ApiError>),
    HealthUpdate(HealthReport),
    KeyboardCharInput(Input),
    KeyboardCTRLC(),
    KeyboardEnter(),
    KeyboardPaste(String),
    UITick(),
    UIScrollDown(),
    UIScrollUp(),
    UIScrollPageDown(),
    UIScrollPageUp(),
    UploadComplete(DocumentDescriptor),
    UploadFailed(ApiError),
    UploadProgress(u16),
}
