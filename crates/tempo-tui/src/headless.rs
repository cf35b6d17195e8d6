//! Headless mode for the tempo TUI.
//!
//! This module provides a way to run the TUI without a real terminal,
//! enabling E2E testing and automation. Actions are sent via channels
//! and screen state is captured after each render.

use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use tempo_core::{Config, FocusedPane, PanelLayout};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::app::{deliver_message, App};
use crate::event::Action;
use crate::shell;
use crate::theme::Theme;

/// Default terminal dimensions for headless mode.
pub const DEFAULT_WIDTH: u16 = 80;
pub const DEFAULT_HEIGHT: u16 = 24;

/// State captured from the headless TUI after each render.
#[derive(Debug, Clone, Default)]
pub struct HeadlessState {
    /// Text contents of the terminal buffer.
    pub screen_contents: String,
    /// Whether the TUI should quit.
    pub should_quit: bool,
    /// Whether help overlay is visible.
    pub show_help: bool,
    /// Current panel layout.
    pub layout: PanelLayout,
    /// Which pane has focus.
    pub focus: FocusedPane,
    /// Number of messages in the transcript.
    pub messages: usize,
    /// Calendar reload generation.
    pub calendar_generation: u64,
    /// Number of armed (not yet fired) calendar reloads.
    pub pending_reloads: usize,
}

/// Handle to control a headless TUI instance.
///
/// Use this to send actions and observe state changes.
pub struct HeadlessHandle {
    action_tx: mpsc::UnboundedSender<Action>,
    state_rx: watch::Receiver<HeadlessState>,
}

impl HeadlessHandle {
    /// Send an action to the TUI.
    ///
    /// Returns `true` if the action was sent successfully.
    pub fn send_action(&self, action: Action) -> bool {
        self.action_tx.send(action).is_ok()
    }

    /// Get the current state of the TUI.
    pub fn state(&self) -> HeadlessState {
        self.state_rx.borrow().clone()
    }

    /// Wait for the state to change, with a timeout.
    ///
    /// Returns `true` if state changed, `false` if timed out.
    pub async fn wait_for_change(&mut self, timeout: std::time::Duration) -> bool {
        tokio::time::timeout(timeout, self.state_rx.changed())
            .await
            .is_ok()
    }

    /// Wait until a condition is met on the state.
    ///
    /// Returns the state when the condition is met, or `None` if timed out.
    pub async fn wait_for<F>(
        &mut self,
        condition: F,
        timeout: std::time::Duration,
    ) -> Option<HeadlessState>
    where
        F: Fn(&HeadlessState) -> bool,
    {
        let deadline = tokio::time::Instant::now() + timeout;

        loop {
            let state = self.state();
            if condition(&state) {
                return Some(state);
            }

            let remaining = deadline.saturating_duration_since(tokio::time::Instant::now());
            if remaining.is_zero() {
                return None;
            }

            if tokio::time::timeout(remaining, self.state_rx.changed())
                .await
                .is_err()
            {
                return None;
            }
        }
    }

    /// Wait for specific text to appear on screen.
    pub async fn wait_for_text(
        &mut self,
        text: &str,
        timeout: std::time::Duration,
    ) -> Option<HeadlessState> {
        let text = text.to_string();
        self.wait_for(|s| s.screen_contents.contains(&text), timeout)
            .await
    }

    /// Check if the TUI has quit.
    pub fn has_quit(&self) -> bool {
        self.state().should_quit
    }
}

/// Configuration for headless mode.
#[derive(Debug, Clone)]
pub struct HeadlessConfig {
    /// Terminal width.
    pub width: u16,
    /// Terminal height.
    pub height: u16,
    /// Tick rate in milliseconds.
    pub tick_rate_ms: u64,
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            tick_rate_ms: 25, // Faster tick rate for testing
        }
    }
}

/// Run the TUI in headless mode.
///
/// Returns a handle to control the TUI and a join handle for the background
/// task.
pub fn run_tui_headless(
    config: Config,
    headless: HeadlessConfig,
) -> (HeadlessHandle, JoinHandle<Result<(), String>>) {
    let (action_tx, action_rx) = mpsc::unbounded_channel();
    let (state_tx, state_rx) = watch::channel(HeadlessState::default());

    let task = tokio::spawn(async move {
        run_headless_loop(config, headless, action_rx, state_tx)
            .await
            .map_err(|e| e.to_string())
    });

    let handle = HeadlessHandle {
        action_tx,
        state_rx,
    };

    (handle, task)
}

async fn run_headless_loop(
    config: Config,
    headless: HeadlessConfig,
    mut action_rx: mpsc::UnboundedReceiver<Action>,
    state_tx: watch::Sender<HeadlessState>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Create test backend
    let backend = TestBackend::new(headless.width, headless.height);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let theme = Theme::default();

    // Delivery task handles
    let mut delivery_handles: Vec<tokio::task::JoinHandle<u16>> = Vec::new();

    let tick_duration = std::time::Duration::from_millis(headless.tick_rate_ms);

    loop {
        // Draw
        terminal.draw(|frame| shell::render_shell(frame, &app, &theme))?;

        // Capture screen contents
        let screen_contents = buffer_to_string(terminal.backend().buffer());

        // Update state
        let _ = state_tx.send(HeadlessState {
            screen_contents,
            should_quit: app.should_quit,
            show_help: app.show_help,
            layout: app.controller.layout(),
            focus: app.controller.focus(),
            messages: app.controller.transcript().len(),
            calendar_generation: app.controller.calendar().generation(),
            pending_reloads: app.controller.pending_reloads(),
        });

        // Check for quit
        if app.should_quit {
            for handle in delivery_handles {
                let _ = handle.await;
            }
            break;
        }

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

        // Wait for action or tick
        let action = tokio::select! {
            Some(action) = action_rx.recv() => action,
            () = tokio::time::sleep(tick_duration) => Action::None,
        };

        if action != Action::None {
            app.handle_action(action);
        }
        app.tick();
    }

    Ok(())
}

/// Convert a terminal buffer to a string representation.
fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut result = String::new();

    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                result.push_str(cell.symbol());
            }
        }
        // Trim trailing whitespace from each line
        while result.ends_with(' ') {
            result.pop();
        }
        result.push('\n');
    }

    // Remove trailing newline
    if result.ends_with('\n') {
        result.pop();
    }

    result
}
