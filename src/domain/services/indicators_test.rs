use ratatui::style::Color;

use super::Indicators;
use crate::domain::models::HealthStatus;
use crate::domain::models::SessionState;

#[test]
fn it_reports_banner_per_health() {
    let mut session = SessionState::default();
    assert_eq!(Indicators::banner(&session), "● Checking system status");

    session.health = HealthStatus::Healthy;
    assert_eq!(Indicators::banner(&session), "● System online");

    session.health = HealthStatus::Unhealthy;
    assert_eq!(Indicators::banner(&session), "● System offline");
}

#[test]
fn it_reports_footer_counters() {
    let mut session = SessionState::default();
    insta::assert_snapshot!(Indicators::footer(&session), @"Documents: 0 | Indexed: - | Backend: unknown | Searching: all documents");

    session.health = HealthStatus::Healthy;
    session.indexed_documents = Some(42);
    insta::assert_snapshot!(Indicators::footer(&session), @"Documents: 0 | Indexed: 42 | Backend: healthy | Searching: all documents");
}

#[test]
fn it_reports_chat_ready() {
    let mut session = SessionState::default();
    session.health = HealthStatus::Healthy;

    assert_eq!(
        Indicators::chat_ready(&session, true),
        ("Ready - press Enter to send".to_string(), Color::Green)
    );
    assert_eq!(
        Indicators::chat_ready(&session, false),
        ("Ready".to_string(), Color::Gray)
    );

    session.is_processing = true;
    assert_eq!(Indicators::chat_ready(&session, true).0, "Processing...");

    session.is_processing = false;
    session.health = HealthStatus::Unhealthy;
    assert_eq!(Indicators::chat_ready(&session, true).0, "Assistant unavailable");
}
