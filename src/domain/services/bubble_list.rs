#[cfg(test)]
#[path = "bubble_list_test.rs"]
mod tests;

use ratatui::prelude::Backend;
use ratatui::prelude::Rect;
use ratatui::text::Line;
use ratatui::widgets::Block;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::Bubble;
use super::BubbleAlignment;
use crate::domain::models::Author;
use crate::domain::models::Message;
use crate::domain::models::MessageType;

struct BubbleCacheEntry {
    text: String,
    mtype: MessageType,
    lines: Vec<Line<'static>>,
}

/// Rendered chat transcript. Bubbles are cached per message index and only
/// rebuilt when the message at that index changes.
pub struct BubbleList {
    cache: Vec<BubbleCacheEntry>,
    line_width: usize,
}

impl Default for BubbleList {
    fn default() -> BubbleList {
        return BubbleList::new();
    }
}

impl BubbleList {
    pub fn new() -> BubbleList {
        return BubbleList {
            cache: vec![],
            line_width: 0,
        };
    }

    pub fn set_messages(&mut self, messages: &[Message], line_width: usize) {
        if self.line_width != line_width {
            self.cache.clear();
            self.line_width = line_width;
        }

        self.cache.truncate(messages.len());

        for (idx, message) in messages.iter().enumerate() {
            if let Some(entry) = self.cache.get(idx) {
                if entry.text == message.text && entry.mtype == message.message_type() {
                    continue;
                }
            }

            let mut align = BubbleAlignment::Left;
            if message.author == Author::User {
                align = BubbleAlignment::Right;
            }

            let entry = BubbleCacheEntry {
                text: message.text.to_string(),
                mtype: message.message_type(),
                lines: Bubble::new(message, align, line_width).as_lines(),
            };

            if idx < self.cache.len() {
                self.cache[idx] = entry;
            } else {
                self.cache.push(entry);
            }
        }
    }

    pub fn len(&self) -> usize {
        return self.cache.iter().map(|entry| return entry.lines.len()).sum();
    }

    pub fn render<B: Backend>(&self, frame: &mut Frame<B>, rect: Rect, scroll: u16) {
        let lines: Vec<Line<'static>> = self
            .cache
            .iter()
            .flat_map(|entry| return entry.lines.to_owned())
            .collect();

        frame.render_widget(
            Paragraph::new(lines)
                .block(Block::default())
                .scroll((scroll, 0)),
            rect,
        );
    }
}
