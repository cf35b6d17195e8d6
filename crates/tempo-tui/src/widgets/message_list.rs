//! Scrolling message list widget.
//!
//! Renders the transcript as right-aligned accent blocks, newest at the
//! bottom. While pinned, the view follows new messages; scrolling up unpins.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use tempo_core::Transcript;

use crate::theme::Theme;

/// Message list for the chat pane.
pub struct MessageList<'a> {
    transcript: &'a Transcript,
    scroll_from_bottom: usize,
    theme: &'a Theme,
    focused: bool,
}

impl<'a> MessageList<'a> {
    /// Create a new message list widget.
    pub fn new(transcript: &'a Transcript, theme: &'a Theme) -> Self {
        Self {
            transcript,
            scroll_from_bottom: 0,
            theme,
            focused: false,
        }
    }

    /// Set how many lines the view is scrolled up from the newest message.
    #[must_use]
    pub fn scroll_from_bottom(mut self, lines: usize) -> Self {
        self.scroll_from_bottom = lines;
        self
    }

    /// Set whether the chat pane is focused.
    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Build one right-aligned line per message, with a spacer line after
    /// each so blocks read as separate bubbles.
    fn build_lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::with_capacity(self.transcript.len() * 2);
        for message in self.transcript.messages() {
            // Literal text content: the message is never parsed as markup.
            let block = Span::styled(
                format!(" {} ", message.text),
                Style::default().fg(self.theme.base).bg(self.theme.user),
            );
            lines.push(Line::from(block).alignment(Alignment::Right));
            lines.push(Line::default());
        }
        lines
    }
}

#[allow(clippy::cast_possible_truncation)]
impl Widget for MessageList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(self.theme.border_focused)
        } else {
            Style::default().fg(self.theme.border)
        };

        let block = Block::default()
            .title(" Chat ")
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 1 || inner.width < 1 {
            return;
        }

        if self.transcript.is_empty() {
            Paragraph::new("No messages yet")
                .style(Style::default().fg(self.theme.muted))
                .render(inner, buf);
            return;
        }

        let lines = self.build_lines();

        // Bottom of the content is the scroll height; clamp the requested
        // offset so the view never scrolls past the first message.
        let max_scroll = lines.len().saturating_sub(inner.height as usize);
        let offset = max_scroll.saturating_sub(self.scroll_from_bottom.min(max_scroll));

        Paragraph::new(lines)
            .scroll((offset as u16, 0))
            .render(inner, buf);
    }
}
