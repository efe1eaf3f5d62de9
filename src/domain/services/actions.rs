#[cfg(test)]
#[path = "actions_test.rs"]
mod tests;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::mpsc;
use tokio::time;

use super::health::check_health;
use super::progress::ProgressSimulator;
use super::progress::COMPLETION_DELAY;
use super::progress::PROGRESS_TICK;
use crate::domain::models::Action;
use crate::domain::models::ChatRequest;
use crate::domain::models::DocumentDescriptor;
use crate::domain::models::Event;
use crate::domain::models::LegalApiRef;
use crate::domain::models::UploadRequest;

pub fn help_text() -> String {
    let text = r#"
COMMANDS:
- /upload (/u) [PATH] - Uploads a PDF, JPEG, PNG, TIFF or BMP file (50 MB max) for text extraction and indexing.
- /docs - Lists uploaded documents with their numbers.
- /doc (/d) [NUMBER,none] - Scopes questions to one uploaded document, or back to all documents with `none`.
- /clear - Removes every uploaded document and resets the conversation. Asks for confirmation first.
- /health - Checks the backend status right away.
- /quit /exit (/q) - Exit Lexchat.
- /help (/h) - Provides this help menu.

HOTKEYS:
- Up arrow - Scroll up
- Down arrow - Scroll down
- CTRL+U - Page up
- CTRL+D - Page down
- CTRL+C - Exit.
- Enter - Send your question. Disabled while a request is in flight or the backend is offline.
        "#;

    return text.trim().to_string();
}

async fn chat(api: LegalApiRef, request: ChatRequest, tx: mpsc::UnboundedSender<Event>) -> Result<()> {
    tracing::debug!(
        message_length = request.message.len(),
        document_id = ?request.document_id,
        "Sending chat request"
    );

    let res = api.chat(&request).await;
    if let Err(err) = &res {
        tracing::error!(error = ?err, "Chat request failed");
    }

    tx.send(Event::ChatResponse(res))?;
    return Ok(());
}

async fn upload(
    api: LegalApiRef,
    request: UploadRequest,
    tx: mpsc::UnboundedSender<Event>,
) -> Result<()> {
    tracing::debug!(
        file_name = %request.file_name,
        size = request.size,
        mime = %request.mime,
        "Uploading document"
    );

    let mut progress = ProgressSimulator::default();
    let mut rng = StdRng::from_entropy();
    let mut ticker = time::interval(PROGRESS_TICK);
    // The first tick completes immediately.
    ticker.tick().await;

    let upload_fut = api.upload(&request);
    tokio::pin!(upload_fut);

    let res = loop {
        tokio::select! {
            res = &mut upload_fut => break res,
            _ = ticker.tick() => {
                tx.send(Event::UploadProgress(progress.advance_random(&mut rng)))?;
            }
        }
    };

    match res {
        Ok(uploaded) => {
            tracing::debug!(
                document_id = %uploaded.document_id,
                text_length = uploaded.text_length,
                "Document indexed"
            );
            tx.send(Event::UploadProgress(100))?;
            time::sleep(COMPLETION_DELAY).await;
            tx.send(Event::UploadComplete(DocumentDescriptor::from_upload(
                uploaded, &request,
            )))?;
        }
        Err(err) => {
            tracing::error!(error = ?err, file_name = %request.file_name, "Upload failed");
            tx.send(Event::UploadFailed(err))?;
        }
    }

    return Ok(());
}

async fn clear(api: LegalApiRef, tx: mpsc::UnboundedSender<Event>) -> Result<()> {
    let res = api.clear().await;
    if let Err(err) = &res {
        tracing::error!(error = ?err, "Clear session failed");
    }

    tx.send(Event::ClearResponse(res))?;
    return Ok(());
}

async fn health(api: LegalApiRef, tx: mpsc::UnboundedSender<Event>) -> Result<()> {
    tx.send(Event::HealthUpdate(check_health(&api).await))?;
    return Ok(());
}

/// Runs outbound requests off the render loop. Every request gets its own
/// task so a slow upload never holds up a health check; the in-flight guard
/// in the session state keeps chat and upload requests from overlapping.
pub struct ActionsService {}

impl ActionsService {
    pub async fn start(
        api: LegalApiRef,
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        while let Some(action) = rx.recv().await {
            let worker_tx = tx.clone();
            let worker_api = api.clone();

            match action {
                Action::ChatRequest(request) => {
                    tokio::spawn(async move {
                        return chat(worker_api, request, worker_tx).await;
                    });
                }
                Action::UploadRequest(request) => {
                    tokio::spawn(async move {
                        return upload(worker_api, request, worker_tx).await;
                    });
                }
                Action::ClearRequest() => {
                    tokio::spawn(async move {
                        return clear(worker_api, worker_tx).await;
                    });
                }
                Action::HealthCheck() => {
                    tokio::spawn(async move {
                        return health(worker_api, worker_tx).await;
                    });
                }
            }
        }

        return Ok(());
    }
}
