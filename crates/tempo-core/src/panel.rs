//! Panel layout and focus state for the two-pane shell.
//!
//! - Expanded: Chat (50%) | Calendar (50%)
//! - Collapsed: Chat (20%) | Calendar (80%)

use serde::{Deserialize, Serialize};

/// Width allocation between the chat and calendar panes.
///
/// Exactly one variant holds at any time; the percentage pair is derived
/// from the variant, never parsed back out of rendered widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelLayout {
    /// Even split: Chat (50%) | Calendar (50%).
    #[default]
    Expanded,
    /// Chat minimized: Chat (20%) | Calendar (80%).
    Collapsed,
}

impl PanelLayout {
    /// Switch to the other layout.
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::Expanded => Self::Collapsed,
            Self::Collapsed => Self::Expanded,
        }
    }

    /// Width percentages as `(chat, calendar)`.
    pub fn percentages(self) -> (u16, u16) {
        match self {
            Self::Expanded => (50, 50),
            Self::Collapsed => (20, 80),
        }
    }

    /// Chat pane width percentage.
    pub fn chat_percent(self) -> u16 {
        self.percentages().0
    }

    /// Calendar pane width percentage.
    pub fn calendar_percent(self) -> u16 {
        self.percentages().1
    }
}

/// Which pane has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPane {
    /// Chat pane (and its input bar) has focus.
    #[default]
    Chat,
    /// Calendar pane has focus.
    Calendar,
}

impl FocusedPane {
    /// Toggle focus to the other pane.
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::Chat => Self::Calendar,
            Self::Calendar => Self::Chat,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_is_expanded() {
        assert_eq!(PanelLayout::default(), PanelLayout::Expanded);
        assert_eq!(PanelLayout::default().percentages(), (50, 50));
    }

    #[test]
    fn test_toggle_yields_exact_widths() {
        let layout = PanelLayout::Expanded.toggle();
        assert_eq!(layout, PanelLayout::Collapsed);
        assert_eq!(layout.percentages(), (20, 80));

        let layout = PanelLayout::Collapsed.toggle();
        assert_eq!(layout, PanelLayout::Expanded);
        assert_eq!(layout.percentages(), (50, 50));
    }

    #[test]
    fn test_toggle_round_trips() {
        for start in [PanelLayout::Expanded, PanelLayout::Collapsed] {
            assert_eq!(start.toggle().toggle(), start);
            assert_eq!(
                start.toggle().toggle().percentages(),
                start.percentages()
            );
        }
    }

    #[test]
    fn test_percentages_sum_to_full_width() {
        for layout in [PanelLayout::Expanded, PanelLayout::Collapsed] {
            let (chat, calendar) = layout.percentages();
            assert_eq!(chat + calendar, 100);
            assert_eq!(chat, layout.chat_percent());
            assert_eq!(calendar, layout.calendar_percent());
        }
    }

    #[test]
    fn test_default_focus_is_chat() {
        assert_eq!(FocusedPane::default(), FocusedPane::Chat);
        assert_eq!(FocusedPane::Chat.toggle(), FocusedPane::Calendar);
        assert_eq!(FocusedPane::Chat.toggle().toggle(), FocusedPane::Chat);
    }
}
