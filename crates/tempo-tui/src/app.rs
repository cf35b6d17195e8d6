//! Application state and update logic for the tempo TUI.

use std::time::Instant;

use tempo_core::{
    ChatController, CompletionNotice, Config, FocusedPane, JournalStore, Message, SUCCESS_STATUS,
};

use crate::event::Action;

/// Status code reported when a journal delivery fails.
const DELIVERY_FAILURE_STATUS: u16 = 500;

/// Deliver a message to the journal, returning the status code carried by
/// the completion notice.
pub(crate) fn deliver_message(journal: &JournalStore, message: &Message) -> u16 {
    match journal.append(message) {
        Ok(()) => SUCCESS_STATUS,
        Err(e) => {
            tracing::warn!(error = %e, "journal append failed");
            DELIVERY_FAILURE_STATUS
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Whether the app should quit.
    pub should_quit: bool,

    /// Whether the help overlay is visible.
    pub show_help: bool,

    /// The chat panel controller owning all interactive state.
    pub controller: ChatController,

    /// Lines scrolled up from the newest message (0 = pinned to bottom).
    pub scroll_from_bottom: usize,

    /// Journal that submitted messages are delivered to.
    journal: JournalStore,

    /// Messages submitted but not yet handed to a delivery task.
    pending_deliveries: Vec<Message>,
}

impl App {
    /// Create a new app instance from configuration.
    pub fn new(config: Config) -> Self {
        let controller = ChatController::new(
            config.initial_layout,
            config.calendar_url.clone(),
            config.refresh_delay(),
        );
        let journal = JournalStore::new(config.journal_path);

        Self {
            should_quit: false,
            show_help: false,
            controller,
            scroll_from_bottom: 0,
            journal,
            pending_deliveries: Vec::new(),
        }
    }

    /// Handle an action.
    pub fn handle_action(&mut self, action: Action) {
        // Global actions
        match action {
            Action::Quit => {
                if self.show_help {
                    self.show_help = false;
                } else {
                    self.should_quit = true;
                }
                return;
            }
            Action::Help => {
                self.show_help = !self.show_help;
                return;
            }
            Action::Back => {
                self.show_help = false;
                return;
            }
            _ => {}
        }

        // If help is showing, any key closes it
        if self.show_help {
            self.show_help = false;
            return;
        }

        match action {
            Action::Submit => {
                if let Some(message) = self.controller.submit_message() {
                    self.scroll_from_bottom = 0;
                    self.pending_deliveries.push(message);
                }
            }
            Action::ToggleLayout => {
                self.controller.toggle_layout();
            }
            Action::FocusNext => {
                self.controller.toggle_focus();
            }
            Action::ScrollUp => {
                // Scrolling up unpins the transcript; rendering clamps the
                // offset to the actual content height.
                self.scroll_from_bottom += 1;
                self.controller.set_follow(false);
            }
            Action::ScrollDown => {
                self.scroll_from_bottom = self.scroll_from_bottom.saturating_sub(1);
                if self.scroll_from_bottom == 0 {
                    self.controller.set_follow(true);
                }
            }
            Action::Insert(c) => {
                if self.controller.focus() == FocusedPane::Chat {
                    self.controller.input_mut().insert(c);
                }
            }
            Action::Backspace => {
                if self.controller.focus() == FocusedPane::Chat {
                    self.controller.input_mut().backspace();
                }
            }
            Action::Delete => {
                if self.controller.focus() == FocusedPane::Chat {
                    self.controller.input_mut().delete();
                }
            }
            Action::Left => {
                if self.controller.focus() == FocusedPane::Chat {
                    self.controller.input_mut().move_left();
                }
            }
            Action::Right => {
                if self.controller.focus() == FocusedPane::Chat {
                    self.controller.input_mut().move_right();
                }
            }
            Action::Home => {
                if self.controller.focus() == FocusedPane::Chat {
                    self.controller.input_mut().move_home();
                }
            }
            Action::End => {
                if self.controller.focus() == FocusedPane::Chat {
                    self.controller.input_mut().move_end();
                }
            }
            Action::Quit | Action::Help | Action::Back | Action::None => {}
        }
    }

    /// Advance time-based state. Returns how many calendar reloads fired.
    pub fn tick(&mut self) -> usize {
        self.controller.tick(Instant::now())
    }

    /// Feed a delivery status code back into the controller.
    pub fn handle_delivery_status(&mut self, status: u16) {
        self.controller
            .handle_completion(CompletionNotice::from_status(status), Instant::now());
    }

    /// Take all messages waiting for delivery.
    pub fn take_pending_deliveries(&mut self) -> Vec<Message> {
        std::mem::take(&mut self.pending_deliveries)
    }

    /// The journal that deliveries write to.
    pub fn journal(&self) -> &JournalStore {
        &self.journal
    }
}
