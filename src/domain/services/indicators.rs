#[cfg(test)]
#[path = "indicators_test.rs"]
mod tests;

use ratatui::style::Color;

use crate::domain::models::HealthStatus;
use crate::domain::models::SessionState;

/// Text and colours for the three places backend health shows up: the
/// header banner, the footer counters and the chat-ready indicator on the
/// input box.
pub struct Indicators {}

impl Indicators {
    pub fn health_color(health: HealthStatus) -> Color {
        match health {
            HealthStatus::Healthy => return Color::Green,
            HealthStatus::Unhealthy => return Color::Red,
            HealthStatus::Unknown => return Color::Yellow,
        }
    }

    pub fn banner(session: &SessionState) -> String {
        let status = match session.health {
            HealthStatus::Healthy => "System online",
            HealthStatus::Unhealthy => "System offline",
            HealthStatus::Unknown => "Checking system status",
        };

        return format!("● {status}");
    }

    pub fn footer(session: &SessionState) -> String {
        let indexed = session
            .indexed_documents
            .map(|count| return count.to_string())
            .unwrap_or_else(|| return "-".to_string());

        let scope = session
            .selected()
            .map(|doc| return doc.name.to_string())
            .unwrap_or_else(|| return "all documents".to_string());

        return format!(
            "Documents: {} | Indexed: {} | Backend: {} | Searching: {}",
            session.documents.len(),
            indexed,
            session.health,
            scope
        );
    }

    pub fn chat_ready(session: &SessionState, has_text: bool) -> (String, Color) {
        if session.is_processing {
            return ("Processing...".to_string(), Color::Yellow);
        }

        match session.health {
            HealthStatus::Unhealthy => {
                return ("Assistant unavailable".to_string(), Color::Red);
            }
            HealthStatus::Unknown => {
                return ("Connecting...".to_string(), Color::Yellow);
            }
            HealthStatus::Healthy => {
                if session.can_send(has_text) {
                    return ("Ready - press Enter to send".to_string(), Color::Green);
                }
                return ("Ready".to_string(), Color::Gray);
            }
        }
    }
}
