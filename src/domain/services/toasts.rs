#[cfg(test)]
#[path = "toasts_test.rs"]
mod tests;

use std::collections::VecDeque;
use std::time::Instant;

use ratatui::prelude::Backend;
use ratatui::prelude::Rect;
use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Clear;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Wrap;
use ratatui::Frame;

use crate::domain::models::Toast;
use crate::domain::models::ToastLevel;

const MAX_VISIBLE: usize = 3;
const TOAST_WIDTH: u16 = 44;

#[derive(Default)]
pub struct Toasts {
    items: VecDeque<Toast>,
}

impl Toasts {
    pub fn push(&mut self, level: ToastLevel, text: &str) {
        tracing::debug!(level = ?level, text, "toast");
        self.items.push_back(Toast::new(level, text));
        while self.items.len() > MAX_VISIBLE {
            self.items.pop_front();
        }
    }

    pub fn prune(&mut self, now: Instant) {
        self.items.retain(|toast| return !toast.is_expired(now));
    }

    #[cfg(test)]
    pub fn latest(&self) -> Option<&Toast> {
        return self.items.back();
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        return self.items.len();
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        return self.items.is_empty();
    }

    fn color(level: ToastLevel) -> Color {
        match level {
            ToastLevel::Info => return Color::Blue,
            ToastLevel::Success => return Color::Green,
            ToastLevel::Warning => return Color::Yellow,
            ToastLevel::Error => return Color::Red,
        }
    }

    /// Stacks toasts in the top right corner of `rect`, newest first.
    pub fn render<B: Backend>(&self, frame: &mut Frame<B>, rect: Rect) {
        let width = TOAST_WIDTH.min(rect.width);
        let mut y = rect.y;

        for toast in self.items.iter().rev() {
            let text_width = width.saturating_sub(4).max(1) as usize;
            let wrapped_lines = (toast.text.chars().count() / text_width) as u16 + 1;
            let height = (wrapped_lines + 2).min(rect.height);
            if y + height > rect.y + rect.height {
                break;
            }

            let area = Rect::new(rect.x + rect.width - width, y, width, height);
            let color = Toasts::color(toast.level);
            frame.render_widget(Clear, area);
            frame.render_widget(
                Paragraph::new(toast.text.to_string())
                    .wrap(Wrap { trim: true })
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .border_type(BorderType::Rounded)
                            .border_style(Style::default().fg(color)),
                    ),
                area,
            );

            y += height;
        }
    }
}
