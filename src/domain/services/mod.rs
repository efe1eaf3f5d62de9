pub mod actions;
mod app_state;
mod bubble;
mod bubble_list;
pub mod events;
pub mod health;
mod indicators;
pub mod progress;
mod scroll;
#[cfg(test)]
pub mod test_api;
mod toasts;

pub use app_state::*;
pub use bubble::*;
pub use bubble_list::*;
pub use indicators::*;
pub use scroll::*;
pub use toasts::*;
