//! Calendar pane widget.
//!
//! Shows the embedded feed URL plus its reload state. The generation line
//! advances once per reload, which is how a refetch becomes observable.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use tempo_core::CalendarView;

use crate::theme::Theme;

/// Calendar pane rendering the embedded feed state.
pub struct CalendarPane<'a> {
    calendar: &'a CalendarView,
    pending_reloads: usize,
    theme: &'a Theme,
    focused: bool,
}

impl<'a> CalendarPane<'a> {
    /// Create a new calendar pane widget.
    pub fn new(calendar: &'a CalendarView, theme: &'a Theme) -> Self {
        Self {
            calendar,
            pending_reloads: 0,
            theme,
            focused: false,
        }
    }

    /// Set the number of armed (not yet fired) reloads.
    #[must_use]
    pub fn pending_reloads(mut self, pending: usize) -> Self {
        self.pending_reloads = pending;
        self
    }

    /// Set whether the calendar pane is focused.
    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for CalendarPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(self.theme.border_focused)
        } else {
            Style::default().fg(self.theme.border)
        };

        let block = Block::default()
            .title(" Calendar ")
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 1 || inner.width < 1 {
            return;
        }

        let label_style = Style::default().fg(self.theme.subtext);
        let value_style = Style::default().fg(self.theme.text);

        let last_refresh = self.calendar.refreshed_at().map_or_else(
            || "never".to_string(),
            |at| at.format("%H:%M:%S").to_string(),
        );

        let mut lines = vec![
            Line::from(vec![
                Span::styled("Feed: ", label_style),
                Span::styled(self.calendar.url().to_string(), value_style),
            ]),
            Line::from(vec![
                Span::styled("Reloads: ", label_style),
                Span::styled(self.calendar.generation().to_string(), value_style),
            ]),
            Line::from(vec![
                Span::styled("Last refresh: ", label_style),
                Span::styled(last_refresh, value_style),
            ]),
        ];

        if self.pending_reloads > 0 {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                format!("● {} refresh(es) pending", self.pending_reloads),
                Style::default().fg(self.theme.warning),
            )));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}
