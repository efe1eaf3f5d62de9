#[cfg(test)]
#[path = "bubble_test.rs"]
mod tests;

use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;

use crate::domain::models::Author;
use crate::domain::models::Message;
use crate::domain::models::MessageType;

#[derive(PartialEq, Eq)]
pub enum BubbleAlignment {
    Left,
    Right,
}

pub struct Bubble<'a> {
    alignment: BubbleAlignment,
    message: &'a Message,
    window_max_width: usize,
}

pub struct BubbleConfig {
    pub bubble_padding: usize,
    pub border_elements_length: usize,
    pub outer_padding_percentage: f32,
}

fn fill(width: usize, used: usize) -> String {
    return " ".repeat(width.saturating_sub(used));
}

impl<'a> Bubble<'a> {
    pub fn new(message: &'a Message, alignment: BubbleAlignment, window_max_width: usize) -> Bubble<'a> {
        return Bubble {
            alignment,
            message,
            window_max_width,
        };
    }

    pub fn style_config() -> BubbleConfig {
        return BubbleConfig {
            // Unicode character border + padding.
            bubble_padding: 8,
            // left border + left padding + (text, not counted) + right padding + right border +
            // scrollbar.
            border_elements_length: 5,
            outer_padding_percentage: 0.04,
        };
    }

    pub fn as_lines(&self) -> Vec<Line<'static>> {
        let max_line_length = self.get_max_line_length();
        let text_style = self.text_style();
        let mut lines: Vec<Line<'static>> = vec![];

        for line in self.message.text.lines() {
            if line.chars().count() <= max_line_length {
                lines.push(self.wrap_text_line(line.to_string(), text_style, max_line_length));
                continue;
            }

            let mut word_set: Vec<&str> = vec![];
            let mut line_char_count = 0;

            for word in line.split(' ') {
                let word_len = word.chars().count();
                if !word_set.is_empty() && word_len + line_char_count > max_line_length {
                    lines.push(self.wrap_text_line(word_set.join(" "), text_style, max_line_length));
                    word_set = vec![];
                    line_char_count = 0;
                }

                word_set.push(word);
                line_char_count += word_len + 1;
            }

            if !word_set.is_empty() {
                lines.push(self.wrap_text_line(word_set.join(" "), text_style, max_line_length));
            }
        }

        return self.wrap_lines_in_bubble(lines, max_line_length);
    }

    fn wrap_text_line(&self, text: String, style: Style, max_line_length: usize) -> Line<'static> {
        let text_len = text.chars().count();
        let formatted_line_length = max_line_length + Bubble::style_config().bubble_padding;
        let outer_bubble_padding = fill(self.window_max_width, formatted_line_length);

        let mut spans = vec![
            self.border_span("│ ".to_string()),
            Span::styled(text, style),
            self.border_span(format!("{} │", fill(max_line_length, text_len))),
        ];

        if self.alignment == BubbleAlignment::Left {
            spans.push(Span::from(outer_bubble_padding));
            return Line::from(spans);
        }

        let mut line_spans = vec![Span::from(outer_bubble_padding)];
        line_spans.extend(spans);

        return Line::from(line_spans);
    }

    fn get_max_line_length(&self) -> usize {
        let style_config = Bubble::style_config();
        // Add a minimum 4% of padding on the side.
        let min_bubble_padding_length = ((self.window_max_width as f32
            * style_config.outer_padding_percentage)
            .ceil()) as usize;

        // Border elements + minimum bubble padding.
        let line_border_width = style_config.border_elements_length + min_bubble_padding_length;
        let available = self.window_max_width.saturating_sub(line_border_width).max(1);

        let mut max_line_length = self
            .message
            .text
            .lines()
            .map(|line| return line.chars().count())
            .max()
            .unwrap_or(0)
            .min(available);

        let username_len = self.message.author.to_string().chars().count();
        if max_line_length < username_len {
            max_line_length = username_len;
        }

        return max_line_length;
    }

    fn wrap_lines_in_bubble(
        &self,
        lines: Vec<Line<'static>>,
        max_line_length: usize,
    ) -> Vec<Line<'static>> {
        let username = self.message.author.to_string();
        let username_len = username.chars().count();

        // Add 2 for the vertical bars.
        let inner_bar = "─".repeat((max_line_length + 2).saturating_sub(username_len));
        let top_bar = format!("╭{username}{inner_bar}╮");
        let bottom_bar = format!("╰{}╯", "─".repeat(max_line_length + 2));
        let bar_bubble_padding = fill(
            self.window_max_width,
            max_line_length + Bubble::style_config().bubble_padding,
        );

        let mut res = vec![];
        if self.alignment == BubbleAlignment::Left {
            res.push(self.border_line(format!("{top_bar}{bar_bubble_padding}")));
            res.extend(lines);
            res.push(self.border_line(format!("{bottom_bar}{bar_bubble_padding}")));
        } else {
            res.push(self.border_line(format!("{bar_bubble_padding}{top_bar}")));
            res.extend(lines);
            res.push(self.border_line(format!("{bar_bubble_padding}{bottom_bar}")));
        }

        return res;
    }

    fn border_style(&self) -> Style {
        match self.message.message_type() {
            MessageType::Error => return Style::default().fg(Color::Red),
            MessageType::Typing => return Style::default().fg(Color::DarkGray),
            MessageType::Normal => {
                if self.message.author == Author::Lexchat {
                    return Style::default().fg(Color::Rgb(138, 85, 63)); // Brown
                }
                return Style::default();
            }
        }
    }

    fn text_style(&self) -> Style {
        if self.message.is_typing() {
            return Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC);
        }

        return Style::default();
    }

    fn border_span(&self, text: String) -> Span<'static> {
        return Span::styled(text, self.border_style());
    }

    fn border_line(&self, text: String) -> Line<'static> {
        return Line::from(self.border_span(text));
    }
}
