use super::SlashCommand;

#[test]
fn it_ignores_plain_text() {
    assert!(SlashCommand::parse("What is Section 138?").is_none());
    assert!(SlashCommand::parse("").is_none());
    assert!(SlashCommand::parse("/unknown").is_none());
}

#[test]
fn it_parses_quit() {
    for text in ["/q", "/quit", "/exit"] {
        assert!(SlashCommand::parse(text).unwrap().is_quit());
    }
}

#[test]
fn it_parses_upload_with_spaced_path() {
    let cmd = SlashCommand::parse("/upload ~/Legal Docs/notice.pdf").unwrap();
    assert!(cmd.is_upload());
    assert_eq!(cmd.arg_text(), "~/Legal Docs/notice.pdf");

    let short = SlashCommand::parse("/u scan.png").unwrap();
    assert!(short.is_upload());
    assert_eq!(short.args, vec!["scan.png".to_string()]);
}

#[test]
fn it_parses_document_commands() {
    let select = SlashCommand::parse("/doc 2").unwrap();
    assert!(select.is_select_document());
    assert!(!select.is_list_documents());
    assert_eq!(select.args, vec!["2".to_string()]);

    assert!(SlashCommand::parse("/d none").unwrap().is_select_document());
    assert!(SlashCommand::parse("/docs").unwrap().is_list_documents());
    assert!(SlashCommand::parse("/documents").unwrap().is_list_documents());
}

#[test]
fn it_parses_session_commands() {
    assert!(SlashCommand::parse("/clear").unwrap().is_clear());
    assert!(SlashCommand::parse("  /health ").unwrap().is_health());
    assert!(SlashCommand::parse("/h").unwrap().is_help());
    assert!(SlashCommand::parse("/help").unwrap().is_help());
}
