use std::io;
use std::time::Instant;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableBracketedPaste;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableBracketedPaste;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::*;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Clear;
use ratatui::widgets::Gauge;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Scrollbar;
use ratatui::widgets::ScrollbarOrientation;
use ratatui::widgets::Wrap;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tui_textarea::Input;
use tui_textarea::Key;

use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::SessionState;
use crate::domain::models::TextArea;
use crate::domain::models::UploadStatus;
use crate::domain::services::events::EventsService;
use crate::domain::services::AppState;
use crate::domain::services::Indicators;

const SIDEBAR_WIDTH: u16 = 34;

fn render_header<B: Backend>(frame: &mut Frame<B>, rect: Rect, session: &SessionState) {
    let line = Line::from(vec![
        Span::styled(
            " Lexchat ",
            Style::default()
                .fg(Color::Rgb(138, 85, 63))
                .add_modifier(Modifier::BOLD),
        ),
        Span::from("Legal document assistant  "),
        Span::styled(
            Indicators::banner(session),
            Style::default().fg(Indicators::health_color(session.health)),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), rect);
}

fn render_documents<B: Backend>(frame: &mut Frame<B>, rect: Rect, session: &SessionState) {
    let mut lines: Vec<Line> = vec![];

    if session.documents.is_empty() {
        lines.push(Line::from(Span::styled(
            "No documents yet. /upload PATH",
            Style::default().fg(Color::DarkGray),
        )));
    }

    for (idx, doc) in session.documents.iter().enumerate() {
        let mut style = Style::default();
        let mut marker = "  ";
        if session.selected_document.as_ref() == Some(&doc.id) {
            style = style.fg(Color::Green).add_modifier(Modifier::BOLD);
            marker = "> ";
        }

        lines.push(Line::from(Span::styled(
            format!("{marker}{}. {}", idx + 1, doc.name),
            style,
        )));
        lines.push(Line::from(Span::styled(
            format!("     {}, {} chars", doc.size, doc.text_length),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let status_color = match session.upload_status {
        UploadStatus::Idle => Color::DarkGray,
        UploadStatus::Uploading { .. } => Color::Yellow,
        UploadStatus::Succeeded { .. } => Color::Green,
        UploadStatus::Failed { .. } => Color::Red,
    };
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        session.upload_status.label(),
        Style::default().fg(status_color),
    )));

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::default()
                .borders(Borders::LEFT)
                .title(" Documents ")
                .padding(ratatui::widgets::Padding::new(1, 0, 0, 0)),
        ),
        rect,
    );
}

fn render_clear_confirmation<B: Backend>(frame: &mut Frame<B>, rect: Rect) {
    let width = 50.min(rect.width);
    let height = 5.min(rect.height);
    let area = Rect::new(
        rect.x + (rect.width - width) / 2,
        rect.y + (rect.height - height) / 2,
        width,
        height,
    );

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new("Remove every uploaded document and reset the conversation?\n(y) confirm, any other key cancels")
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::Yellow))
                    .title(" Clear session "),
            ),
        area,
    );
}

async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: &mut AppState,
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut textarea = TextArea::default();
    let mut events = EventsService::new(rx);

    #[cfg(feature = "dev")]
    {
        let test_str = "What is Section 138 of the Negotiable Instruments Act?";
        for char in test_str.chars() {
            textarea.input(Input {
                key: Key::Char(char),
                ctrl: false,
                alt: false,
            });
        }
    }

    loop {
        terminal.draw(|frame| {
            let mut gauge_height = 0;
            if app_state.session.upload_progress.is_some() {
                gauge_height = 1;
            }

            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints(vec![
                    Constraint::Length(1),
                    Constraint::Min(1),
                    Constraint::Length(gauge_height),
                    Constraint::Max(4),
                    Constraint::Length(1),
                ])
                .split(frame.size());

            let body = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Min(1), Constraint::Length(SIDEBAR_WIDTH)])
                .split(layout[1]);

            if body[0].width != app_state.last_known_width
                || body[0].height != app_state.last_known_height
            {
                app_state.set_rect(body[0]);
            }

            render_header(frame, layout[0], &app_state.session);

            app_state
                .bubble_list
                .render(frame, body[0], app_state.scroll.position);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight),
                body[0].inner(&Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut app_state.scroll.scrollbar_state,
            );
            render_documents(frame, body[1], &app_state.session);

            if let Some(percent) = app_state.session.upload_progress {
                frame.render_widget(
                    Gauge::default()
                        .gauge_style(Style::default().fg(Color::Blue))
                        .percent(percent)
                        .label(format!("Uploading... {percent}%")),
                    layout[2],
                );
            }

            let has_text = !textarea.lines().join("\n").trim().is_empty();
            let (title, color) = Indicators::chat_ready(&app_state.session, has_text);
            textarea.set_block(TextArea::block(&title, color));
            frame.render_widget(textarea.widget(), layout[3]);

            frame.render_widget(
                Paragraph::new(Indicators::footer(&app_state.session))
                    .style(Style::default().fg(Color::DarkGray)),
                layout[4],
            );

            app_state.toasts.render(frame, layout[1]);

            if app_state.awaiting_clear_confirmation {
                render_clear_confirmation(frame, layout[1]);
            }
        })?;

        match events.next().await? {
            Event::ChatResponse(res) => {
                app_state.handle_chat_response(res);
            }
            Event::ClearResponse(res) => {
                app_state.handle_clear_result(res);
            }
            Event::HealthUpdate(report) => {
                app_state.handle_health(report);
            }
            Event::UploadProgress(percent) => {
                app_state.handle_upload_progress(percent);
            }
            Event::UploadComplete(document) => {
                app_state.handle_upload_complete(document);
            }
            Event::UploadFailed(err) => {
                app_state.handle_upload_failed(err);
            }
            Event::KeyboardCTRLC() => {
                break;
            }
            Event::KeyboardCharInput(input) => {
                if app_state.awaiting_clear_confirmation {
                    let confirmed = matches!(
                        input,
                        Input {
                            key: Key::Char('y' | 'Y'),
                            ..
                        }
                    );
                    if let Some(action) = app_state.confirm_clear(confirmed) {
                        tx.send(action)?;
                    }
                    continue;
                }

                textarea.input(input);
            }
            Event::KeyboardPaste(text) => {
                textarea.insert_str(text);
            }
            Event::KeyboardEnter() => {
                if app_state.awaiting_clear_confirmation {
                    app_state.confirm_clear(false);
                    continue;
                }

                let input_str = textarea.lines().join("\n");
                let (should_break, should_clear) =
                    app_state.submit_input(&input_str, &tx).await?;
                if should_break {
                    break;
                }
                if should_clear {
                    textarea = TextArea::default();
                }
            }
            Event::UIScrollDown() => {
                app_state.scroll.down();
            }
            Event::UIScrollUp() => {
                app_state.scroll.up();
            }
            Event::UIScrollPageDown() => {
                app_state.scroll.down_page();
            }
            Event::UIScrollPageUp() => {
                app_state.scroll.up_page();
            }
            Event::UITick() => {
                app_state.toasts.prune(Instant::now());
            }
        }
    }

    return Ok(());
}

pub fn destruct_terminal_for_panic() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    );
    let _ = crossterm::execute!(io::stdout(), cursor::Show);
}

pub async fn start(
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;
    let mut app_state = AppState::new();

    start_loop(&mut terminal, &mut app_state, tx, rx).await?;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    return Ok(());
}
