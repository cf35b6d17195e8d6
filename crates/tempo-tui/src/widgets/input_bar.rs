//! Input bar widget for composing messages.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use tempo_core::InputBuffer;

use crate::theme::Theme;

/// Single-field input bar shown at the bottom of the chat pane.
pub struct InputBar<'a> {
    input: &'a InputBuffer,
    theme: &'a Theme,
    focused: bool,
    placeholder: &'a str,
}

impl<'a> InputBar<'a> {
    /// Create a new input bar widget.
    pub fn new(input: &'a InputBuffer, theme: &'a Theme) -> Self {
        Self {
            input,
            theme,
            focused: false,
            placeholder: "Type a message...",
        }
    }

    /// Set whether the input bar is focused.
    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Build the display line with prompt and cursor.
    fn build_line(&self) -> Line<'static> {
        let prompt = Span::styled("> ".to_string(), Style::default().fg(self.theme.primary));

        if self.input.is_empty() {
            let mut spans = vec![prompt];
            if self.focused {
                spans.push(Span::styled(
                    "█".to_string(),
                    Style::default().fg(self.theme.text),
                ));
            } else {
                spans.push(Span::styled(
                    self.placeholder.to_string(),
                    Style::default().fg(self.theme.muted),
                ));
            }
            return Line::from(spans);
        }

        let chars: Vec<char> = self.input.content().chars().collect();
        let cursor = self.input.cursor().min(chars.len());
        let text_style = Style::default().fg(self.theme.text);

        let mut spans = vec![prompt];
        if self.focused {
            let before: String = chars[..cursor].iter().collect();
            let after: String = chars[cursor..].iter().collect();
            spans.push(Span::styled(before, text_style));
            spans.push(Span::styled(
                "█".to_string(),
                Style::default().fg(self.theme.text),
            ));
            spans.push(Span::styled(after, text_style));
        } else {
            spans.push(Span::styled(
                self.input.content().to_string(),
                text_style,
            ));
        }
        Line::from(spans)
    }
}

impl Widget for InputBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(self.theme.border_focused)
        } else {
            Style::default().fg(self.theme.border)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);

        Paragraph::new(self.build_line())
            .block(block)
            .render(area, buf);
    }
}
