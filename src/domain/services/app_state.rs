#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use anyhow::Result;
use ratatui::prelude::Rect;
use tokio::sync::mpsc;

use super::actions::help_text;
use super::BubbleList;
use super::Scroll;
use super::Toasts;
use crate::domain::models::upload;
use crate::domain::models::Action;
use crate::domain::models::ApiError;
use crate::domain::models::Author;
use crate::domain::models::ChatAnswer;
use crate::domain::models::ChatRequest;
use crate::domain::models::DocumentDescriptor;
use crate::domain::models::HealthReport;
use crate::domain::models::HealthStatus;
use crate::domain::models::Message;
use crate::domain::models::MessageType;
use crate::domain::models::SessionState;
use crate::domain::models::SlashCommand;
use crate::domain::models::ToastLevel;
use crate::domain::models::UploadStatus;

pub const GREETING: &str = "Hello! I'm your legal assistant for Indian law. Upload a notice, agreement or judgment with `/upload PATH` and ask me about it, or ask a general question about Indian statutes and case law. Type `/help` to see every command.";
pub const CHAT_FAILURE: &str =
    "Sorry, I encountered an error while processing your request. Please try again.";
pub const UPLOAD_FAILURE: &str = "Failed to upload the document. Please try again.";
pub const CLEAR_FAILURE: &str = "Failed to clear the session. Please try again.";

pub struct AppState {
    pub session: SessionState,
    pub messages: Vec<Message>,
    pub bubble_list: BubbleList,
    pub toasts: Toasts,
    pub scroll: Scroll,
    pub awaiting_clear_confirmation: bool,
    pub last_known_height: u16,
    pub last_known_width: u16,
}

impl Default for AppState {
    fn default() -> AppState {
        return AppState::new();
    }
}

impl AppState {
    pub fn new() -> AppState {
        return AppState {
            session: SessionState::default(),
            messages: vec![Message::new(Author::Assistant, GREETING)],
            bubble_list: BubbleList::new(),
            toasts: Toasts::default(),
            scroll: Scroll::default(),
            awaiting_clear_confirmation: false,
            last_known_height: 0,
            last_known_width: 0,
        };
    }

    /// Handles the text in the input box when Enter is pressed. Returns
    /// `(should_break, should_clear_input)`.
    pub async fn submit_input(
        &mut self,
        input_str: &str,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<(bool, bool)> {
        if let Some(command) = SlashCommand::parse(input_str) {
            let should_break = self.handle_slash_command(&command, tx).await?;
            return Ok((should_break, true));
        }

        let has_text = !input_str.trim().is_empty();
        if !self.session.can_send(has_text) {
            if has_text && !self.session.is_processing {
                self.toasts.push(
                    ToastLevel::Warning,
                    "The legal assistant is unavailable right now. Please wait for the backend to come online.",
                );
            }
            return Ok((false, false));
        }

        if let Some(action) = self.submit_chat(input_str) {
            tx.send(action)?;
            return Ok((false, true));
        }

        return Ok((false, false));
    }

    async fn handle_slash_command(
        &mut self,
        command: &SlashCommand,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<bool> {
        if command.is_quit() {
            return Ok(true);
        }

        if command.is_help() {
            self.add_message(Message::new(Author::Lexchat, &help_text()));
        } else if command.is_upload() {
            let path = command.arg_text();
            if path.is_empty() {
                self.add_message(Message::new_with_type(
                    Author::Lexchat,
                    MessageType::Error,
                    "Usage: /upload PATH",
                ));
            } else if let Some(action) = self.begin_upload(&path).await {
                tx.send(action)?;
            }
        } else if command.is_list_documents() {
            self.list_documents();
        } else if command.is_select_document() {
            self.select_document(&command.arg_text());
        } else if command.is_clear() {
            self.request_clear();
        } else if command.is_health() {
            self.toasts
                .push(ToastLevel::Info, "Checking the backend status...");
            tx.send(Action::HealthCheck())?;
        }

        return Ok(false);
    }

    pub fn submit_chat(&mut self, text: &str) -> Option<Action> {
        let message = text.trim();
        if message.is_empty() || self.session.is_processing {
            return None;
        }

        self.session.is_processing = true;
        self.add_message(Message::new(Author::User, message));
        self.add_message(Message::typing());

        return Some(Action::ChatRequest(ChatRequest {
            message: message.to_string(),
            document_id: self.session.selected_document.clone(),
        }));
    }

    pub fn handle_chat_response(&mut self, res: Result<ChatAnswer, ApiError>) {
        let message = match res {
            Ok(answer) => Message::new(Author::Assistant, &answer.render()),
            Err(err) => Message::new_with_type(
                Author::Assistant,
                MessageType::Error,
                &err.user_message(CHAT_FAILURE),
            ),
        };

        // The answer takes the typing indicator's slot so output from slash
        // commands run in the meantime stays below it.
        match self.messages.iter().position(|m| return m.is_typing()) {
            Some(idx) => {
                self.messages[idx] = message;
                self.messages.retain(|m| return !m.is_typing());
                self.sync_dependants();
            }
            None => self.add_message(message),
        }

        self.session.is_processing = false;
    }

    pub async fn begin_upload(&mut self, raw_path: &str) -> Option<Action> {
        if self.session.is_processing {
            self.toasts.push(
                ToastLevel::Warning,
                "Please wait for the current request to finish before uploading.",
            );
            return None;
        }

        let request = match upload::prepare(raw_path).await {
            Ok(request) => request,
            Err(rejection) => {
                tracing::warn!(path = raw_path, error = ?rejection, "Upload rejected");
                self.toasts.push(ToastLevel::Warning, &rejection.to_string());
                return None;
            }
        };

        self.session.is_processing = true;
        self.session.upload_status = UploadStatus::Uploading {
            file_name: request.file_name.to_string(),
        };
        self.session.upload_progress = Some(0);
        self.toasts.push(
            ToastLevel::Info,
            &format!("Uploading {}...", request.file_name),
        );

        return Some(Action::UploadRequest(request));
    }

    pub fn handle_upload_progress(&mut self, percent: u16) {
        if self.session.upload_progress.is_some() {
            self.session.upload_progress = Some(percent.min(100));
        }
    }

    pub fn handle_upload_complete(&mut self, document: DocumentDescriptor) {
        let file_name = document.name.to_string();
        self.toasts.push(
            ToastLevel::Success,
            &format!(
                "{} uploaded and indexed ({} characters).",
                file_name, document.text_length
            ),
        );

        self.session.add_document(document);
        self.session.upload_status = UploadStatus::Succeeded { file_name };
        self.session.upload_progress = None;
        self.session.is_processing = false;
    }

    pub fn handle_upload_failed(&mut self, err: ApiError) {
        let message = err.user_message(UPLOAD_FAILURE);
        self.toasts.push(ToastLevel::Error, &message);

        self.session.upload_progress = None;
        self.session.upload_status = UploadStatus::Failed { message };
        self.session.is_processing = false;
    }

    pub fn handle_health(&mut self, report: HealthReport) {
        let previous = self.session.health;

        if previous == HealthStatus::Healthy && report.status == HealthStatus::Unhealthy {
            self.toasts.push(
                ToastLevel::Warning,
                "Lost connection to the legal assistant backend.",
            );
        } else if previous == HealthStatus::Unhealthy && report.status == HealthStatus::Healthy {
            self.toasts
                .push(ToastLevel::Success, "The legal assistant is back online.");
        }

        self.session.health = report.status;
        self.session.indexed_documents = report.indexed_documents;
    }

    pub fn request_clear(&mut self) {
        if self.session.is_processing {
            self.toasts.push(
                ToastLevel::Warning,
                "Please wait for the current request to finish before clearing.",
            );
            return;
        }

        self.awaiting_clear_confirmation = true;
    }

    /// Answers the confirmation prompt. Only a confirmed prompt reaches the
    /// backend.
    pub fn confirm_clear(&mut self, confirmed: bool) -> Option<Action> {
        if !self.awaiting_clear_confirmation {
            return None;
        }

        self.awaiting_clear_confirmation = false;
        if !confirmed {
            return None;
        }

        // Held until the result arrives so chat and upload stay refused.
        self.session.is_processing = true;
        return Some(Action::ClearRequest());
    }

    pub fn handle_clear_result(&mut self, res: Result<(), ApiError>) {
        self.session.is_processing = false;
        if let Err(err) = res {
            self.toasts
                .push(ToastLevel::Error, &err.user_message(CLEAR_FAILURE));
            return;
        }

        self.session.reset_documents();
        self.messages = vec![Message::new(Author::Assistant, GREETING)];
        self.sync_dependants();
        self.scroll.reset();
        self.toasts.push(
            ToastLevel::Success,
            "Session cleared. All documents were removed.",
        );
    }

    pub fn select_document(&mut self, arg: &str) {
        let arg = arg.trim();
        if arg.is_empty() {
            let text = match self.session.selected() {
                Some(doc) => format!("Questions are scoped to {}.", doc.name),
                None => "Questions search all documents.".to_string(),
            };
            self.add_message(Message::new(Author::Lexchat, &text));
            return;
        }

        if arg == "none" || arg == "all" {
            self.session.select_document(None);
            self.add_message(Message::new(
                Author::Lexchat,
                "Questions search all documents.",
            ));
            return;
        }

        let position = arg.parse::<usize>().ok();
        if position.is_some() && self.session.select_document(position) {
            if let Some(doc) = self.session.selected() {
                let text = format!("Questions are scoped to {}.", doc.name);
                self.add_message(Message::new(Author::Lexchat, &text));
            }
            return;
        }

        self.add_message(Message::new_with_type(
            Author::Lexchat,
            MessageType::Error,
            &format!("Document {arg} doesn't exist. Use /docs to list uploaded documents."),
        ));
    }

    pub fn list_documents(&mut self) {
        if self.session.documents.is_empty() {
            self.add_message(Message::new(
                Author::Lexchat,
                "No documents uploaded yet. Use /upload PATH to add one.",
            ));
            return;
        }

        let selected = self.session.selected_document.clone();
        let lines = self
            .session
            .documents
            .iter()
            .enumerate()
            .map(|(idx, doc)| {
                let mut marker = " ";
                if selected.as_ref() == Some(&doc.id) {
                    marker = "*";
                }
                return format!("{marker} {}. {}", idx + 1, doc.summary());
            })
            .collect::<Vec<String>>()
            .join("\n");

        self.add_message(Message::new(
            Author::Lexchat,
            &format!("Uploaded documents:\n{lines}"),
        ));
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.last_known_width = rect.width;
        self.last_known_height = rect.height;
        self.sync_dependants();
    }

    pub fn add_message(&mut self, message: Message) {
        self.messages.push(message);
        self.sync_dependants();
        self.scroll.last();
    }

    pub fn sync_dependants(&mut self) {
        self.bubble_list
            .set_messages(&self.messages, self.last_known_width as usize);

        self.scroll
            .set_state(self.bubble_list.len() as u16, self.last_known_height);

        if self.session.is_processing {
            self.scroll.last();
        }
    }
}
