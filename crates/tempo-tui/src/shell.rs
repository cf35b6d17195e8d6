//! Main shell layout.
//!
//! Regions:
//! 1. Status line (top, 1 line)
//! 2. Chat pane (message list + input bar) | Calendar pane, split per layout
//! 3. Footer hints (bottom, 1 line)

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use tempo_core::FocusedPane;

use crate::app::App;
use crate::theme::Theme;
use crate::widgets::{CalendarPane, InputBar, MessageList};

/// Minimum terminal width.
pub const MIN_WIDTH: u16 = 40;
/// Minimum terminal height.
pub const MIN_HEIGHT: u16 = 10;

/// Height of the input bar including its border.
const INPUT_HEIGHT: u16 = 3;

/// Render the main shell layout.
pub fn render_shell(frame: &mut Frame<'_>, app: &App, theme: &Theme) {
    let area = frame.area();

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let warning = Paragraph::new("Terminal too small")
            .style(Style::default().fg(theme.warning));
        frame.render_widget(warning, area);
        return;
    }

    // Divide into: StatusLine | Panels | FooterHints
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Status line
            Constraint::Min(0),    // Panels (expands)
            Constraint::Length(1), // Footer hints
        ])
        .split(area);

    render_status_line(frame, chunks[0], app, theme);
    render_panels(frame, chunks[1], app, theme);
    render_footer(frame, chunks[2], theme);

    if app.show_help {
        render_help_overlay(frame, area, theme);
    }
}

#[allow(clippy::cast_possible_truncation)]
fn render_status_line(frame: &mut Frame<'_>, area: Rect, app: &App, theme: &Theme) {
    let (chat, calendar) = app.controller.layout().percentages();
    let split = format!("chat {chat}% | calendar {calendar}%");

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(split.len() as u16 + 1)])
        .split(area);

    let title = Paragraph::new(Span::styled(
        " tempo",
        Style::default().fg(theme.primary),
    ));
    frame.render_widget(title, chunks[0]);

    let split_info = Paragraph::new(Span::styled(split, Style::default().fg(theme.subtext)))
        .alignment(Alignment::Right);
    frame.render_widget(split_info, chunks[1]);
}

/// Render the two-pane area with widths derived from the current layout.
fn render_panels(frame: &mut Frame<'_>, area: Rect, app: &App, theme: &Theme) {
    let (chat_percent, calendar_percent) = app.controller.layout().percentages();

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(chat_percent),
            Constraint::Percentage(calendar_percent),
        ])
        .split(area);

    render_chat_pane(frame, chunks[0], app, theme);

    let calendar_pane = CalendarPane::new(app.controller.calendar(), theme)
        .pending_reloads(app.controller.pending_reloads())
        .focused(app.controller.focus() == FocusedPane::Calendar);
    frame.render_widget(calendar_pane, chunks[1]);
}

/// Render the chat pane: message list above the input bar.
fn render_chat_pane(frame: &mut Frame<'_>, area: Rect, app: &App, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(INPUT_HEIGHT)])
        .split(area);

    let focused = app.controller.focus() == FocusedPane::Chat;
    let scroll = if app.controller.follow() {
        0
    } else {
        app.scroll_from_bottom
    };

    let message_list = MessageList::new(app.controller.transcript(), theme)
        .scroll_from_bottom(scroll)
        .focused(focused);
    frame.render_widget(message_list, chunks[0]);

    let input_bar = InputBar::new(app.controller.input(), theme).focused(focused);
    frame.render_widget(input_bar, chunks[1]);
}

fn render_footer(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let key_style = Style::default().fg(theme.primary);
    let desc_style = Style::default().fg(theme.muted);

    let hints = [
        ("Enter", "Send"),
        ("Tab", "Focus"),
        ("Ctrl+T", "Layout"),
        ("↑/↓", "Scroll"),
        ("?", "Help"),
        ("Ctrl+C", "Quit"),
    ];

    let mut spans = vec![Span::raw(" ")];
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" · ", desc_style));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(format!(" {desc}"), desc_style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the help overlay centered on the screen.
fn render_help_overlay(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let overlay = centered_rect(area, 44, 12);

    frame.render_widget(Clear, overlay);

    let lines = vec![
        Line::default(),
        Line::from("  Enter    Send the typed message"),
        Line::from("  Tab      Switch pane focus"),
        Line::from("  Ctrl+T   Toggle panel layout"),
        Line::from("  ↑/↓      Scroll the transcript"),
        Line::from("  ?        Toggle this help (calendar focus)"),
        Line::from("  q        Quit (calendar focus)"),
        Line::from("  Ctrl+C   Quit"),
        Line::default(),
        Line::from("  Press any key to close"),
    ];

    let help = Paragraph::new(lines)
        .style(Style::default().fg(theme.text).bg(theme.surface))
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border_focused)),
        );
    frame.render_widget(help, overlay);
}

/// A rect of at most `width` x `height`, centered in `area`.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Action;
    use crate::test_utils::{create_test_app, render_app_to_string};

    #[test]
    fn test_shell_renders_both_panes() {
        let app = create_test_app();
        let content = render_app_to_string(&app, 100, 24);
        assert!(content.contains(" Chat "));
        assert!(content.contains(" Calendar "));
        assert!(content.contains("tempo"));
        assert!(content.contains("chat 50% | calendar 50%"));
    }

    #[test]
    fn test_collapsed_layout_moves_calendar_border_left() {
        let mut app = create_test_app();
        let expanded = render_app_to_string(&app, 100, 24);

        app.handle_action(Action::ToggleLayout);
        let collapsed = render_app_to_string(&app, 100, 24);
        assert!(collapsed.contains("chat 20% | calendar 80%"));

        let title_column = |content: &str| {
            content
                .lines()
                .find_map(|line| line.find("Calendar"))
                .expect("calendar title rendered")
        };
        assert!(title_column(&collapsed) < title_column(&expanded));
    }

    #[test]
    fn test_help_overlay_renders_on_top() {
        let mut app = create_test_app();
        app.show_help = true;
        let content = render_app_to_string(&app, 100, 24);
        assert!(content.contains(" Help "));
        assert!(content.contains("Toggle panel layout"));
    }

    #[test]
    fn test_small_terminal_shows_warning() {
        let app = create_test_app();
        let content = render_app_to_string(&app, 30, 5);
        assert!(content.contains("Terminal too small"));
    }

    #[test]
    fn test_typed_text_reaches_input_bar() {
        let mut app = create_test_app();
        for c in "status?".chars() {
            app.handle_action(Action::Insert(c));
        }
        let content = render_app_to_string(&app, 100, 24);
        assert!(content.contains("status?"));
    }
}
