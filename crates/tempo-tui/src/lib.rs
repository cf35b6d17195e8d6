//! tempo-tui: Terminal UI for the tempo chat and calendar shell
//!
//! This crate provides the TUI layer for tempo, including:
//! - The two-pane shell (chat | calendar) with a toggleable split
//! - The input bar, message list, and calendar pane widgets
//! - Headless mode for testing and automation

mod app;
mod event;
pub mod headless;
mod shell;
#[cfg(test)]
pub mod test_utils;
mod theme;
mod widgets;

pub use app::App;
pub use event::{key_to_action, Action, Event, EventHandler};
pub use theme::Theme;
pub use tempo_core;

use crossterm::{
    cursor::Show as ShowCursor,
    event::{DisableMouseCapture, EnableMouseCapture, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use tempo_core::Config;

use crate::app::deliver_message;

/// RAII guard for terminal state restoration.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen, ShowCursor);
    }
}

/// Run the TUI application.
///
/// This is the main entry point for the TUI. It sets up the terminal,
/// runs the event loop, and restores the terminal on exit.
pub async fn run_tui(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal with RAII guard for cleanup
    enable_raw_mode()?;
    let _guard = TerminalGuard;

    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);

    // Create event handler (4 Hz tick rate = 250ms)
    let mut events = EventHandler::new(250);

    // Main loop
    let result = run_loop(&mut terminal, &mut app, &mut events).await;

    // Restore cursor before guard drops
    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
) -> Result<(), Box<dyn std::error::Error>> {
    let theme = Theme::default();

    // Delivery task handles
    let mut delivery_handles: Vec<tokio::task::JoinHandle<u16>> = Vec::new();

    loop {
        // Draw
        terminal.draw(|frame| shell::render_shell(frame, app, &theme))?;

        // Hand queued submissions to delivery tasks
        for message in app.take_pending_deliveries() {
            let journal = app.journal().clone();
            delivery_handles.push(tokio::task::spawn_blocking(move || {
                deliver_message(&journal, &message)
            }));
        }

        // Check for completed deliveries (non-blocking)
        let mut completed = Vec::new();
        for (i, handle) in delivery_handles.iter().enumerate() {
            if handle.is_finished() {
                completed.push(i);
            }
        }
        for i in completed.into_iter().rev() {
            if let Ok(status) = delivery_handles.remove(i).await {
                app.handle_delivery_status(status);
            }
        }

        // Handle events
        if let Some(event) = events.next().await {
            match event {
                Event::Key(key) => {
                    let action = key_to_action(key, app.controller.focus());
                    app.handle_action(action);
                }
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::ScrollUp => {
                        app.handle_action(Action::ScrollUp);
                    }
                    MouseEventKind::ScrollDown => {
                        app.handle_action(Action::ScrollDown);
                    }
                    _ => {}
                },
                Event::Tick => {
                    app.tick();
                }
                Event::Resize(_, _) => {
                    // Terminal will handle resize automatically
                }
            }
        }

        if app.should_quit {
            // Let in-flight journal writes finish before tearing down
            for handle in delivery_handles {
                let _ = handle.await;
            }
            break;
        }
    }

    Ok(())
}

/// Get the TUI version.
pub fn tui_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
