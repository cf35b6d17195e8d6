//! tempo-core: headless chat and calendar panel controller
//!
//! This crate provides the domain logic for tempo, including:
//! - Message submission and transcript state
//! - Panel layout and focus state
//! - Delayed calendar refresh scheduling
//! - Configuration and message journaling

pub mod calendar;
pub mod config;
pub mod controller;
pub mod input;
pub mod journal;
pub mod message;
pub mod panel;
pub mod refresh;
pub mod submission;

// Re-export commonly used types
pub use calendar::CalendarView;
pub use config::{Config, ConfigError};
pub use controller::ChatController;
pub use input::InputBuffer;
pub use journal::{JournalError, JournalStore};
pub use message::{Message, Transcript};
pub use panel::{FocusedPane, PanelLayout};
pub use refresh::{RefreshScheduler, DEFAULT_REFRESH_DELAY};
pub use submission::{CompletionNotice, SUCCESS_STATUS};

/// Returns the core version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_version() {
        let version = core_version();
        assert!(!version.is_empty());
        assert!(version.starts_with("0."));
    }
}
