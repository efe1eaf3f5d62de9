mod action;
mod api;
mod author;
mod document;
mod event;
mod health;
mod message;
mod session;
mod slash_commands;
mod textarea;
mod toast;
pub mod upload;

pub use action::*;
pub use api::*;
pub use author::*;
pub use document::*;
pub use event::*;
pub use health::*;
pub use message::*;
pub use session::*;
pub use slash_commands::*;
pub use textarea::*;
pub use toast::*;
