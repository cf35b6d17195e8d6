//! Chat panel controller: mediates all user-visible interactions.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::calendar::CalendarView;
use crate::input::InputBuffer;
use crate::message::{Message, Transcript};
use crate::panel::{FocusedPane, PanelLayout};
use crate::refresh::RefreshScheduler;
use crate::submission::CompletionNotice;

/// Owns the chat input, transcript, panel layout, focus, and calendar view,
/// and applies every user-visible state transition.
///
/// The controller holds its view state outright instead of looking elements
/// up per call, so the whole component can be driven and observed without a
/// live terminal. Failure policy is silent no-op throughout: empty input and
/// failed deliveries change nothing and surface nothing.
#[derive(Debug)]
pub struct ChatController {
    input: InputBuffer,
    transcript: Transcript,
    layout: PanelLayout,
    focus: FocusedPane,
    calendar: CalendarView,
    scheduler: RefreshScheduler,
    follow: bool,
}

impl ChatController {
    /// Create a controller with the given initial layout, calendar feed URL,
    /// and refresh delay. Focus starts on the chat input.
    pub fn new(
        initial_layout: PanelLayout,
        calendar_url: impl Into<String>,
        refresh_delay: Duration,
    ) -> Self {
        Self {
            input: InputBuffer::new(),
            transcript: Transcript::new(),
            layout: initial_layout,
            focus: FocusedPane::Chat,
            calendar: CalendarView::new(calendar_url),
            scheduler: RefreshScheduler::new(refresh_delay),
            follow: true,
        }
    }

    /// Submit the current input as a message.
    ///
    /// Whitespace-only input is a no-op: the buffer is left untouched and
    /// nothing is appended. Otherwise exactly one message is appended to the
    /// transcript, the transcript is pinned back to its newest entry, and
    /// the buffer is cleared. Returns the submitted message so the caller
    /// can hand it to the delivery mechanism.
    pub fn submit_message(&mut self) -> Option<Message> {
        let message = Message::from_input(self.input.content())?;
        self.input.clear();
        self.transcript.push(message.clone());
        self.follow = true;
        debug!(chars = message.text.chars().count(), "message submitted");
        Some(message)
    }

    /// Toggle the panel layout between Expanded and Collapsed.
    pub fn toggle_layout(&mut self) {
        self.layout = self.layout.toggle();
        debug!(layout = ?self.layout, "panel layout toggled");
    }

    /// Put keyboard focus on the chat input.
    pub fn focus_input(&mut self) {
        self.focus = FocusedPane::Chat;
    }

    /// Move keyboard focus to the other pane.
    pub fn toggle_focus(&mut self) {
        self.focus = self.focus.toggle();
    }

    /// React to a delivery completion notice.
    ///
    /// A success arms exactly one delayed calendar reload; any failure is
    /// silently ignored.
    pub fn handle_completion(&mut self, notice: CompletionNotice, now: Instant) {
        match notice {
            CompletionNotice::Success => {
                self.scheduler.schedule(now);
                debug!(pending = self.scheduler.pending(), "calendar reload armed");
            }
            CompletionNotice::Failure(status) => {
                debug!(status, "delivery failed, no reload armed");
            }
        }
    }

    /// Advance time-based state: every reload entry due at `now` fires,
    /// each one independently reloading the calendar. Returns the number of
    /// reloads applied.
    pub fn tick(&mut self, now: Instant) -> usize {
        let fired = self.scheduler.drain_due(now);
        for _ in 0..fired {
            self.calendar.reload();
        }
        fired
    }

    /// Mutable access to the input buffer for editing keys.
    pub fn input_mut(&mut self) -> &mut InputBuffer {
        &mut self.input
    }

    /// The input buffer.
    pub fn input(&self) -> &InputBuffer {
        &self.input
    }

    /// The transcript.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Current panel layout.
    pub fn layout(&self) -> PanelLayout {
        self.layout
    }

    /// Current focused pane.
    pub fn focus(&self) -> FocusedPane {
        self.focus
    }

    /// The calendar view.
    pub fn calendar(&self) -> &CalendarView {
        &self.calendar
    }

    /// Number of armed calendar reloads.
    pub fn pending_reloads(&self) -> usize {
        self.scheduler.pending()
    }

    /// Whether the transcript is pinned to its newest entry.
    pub fn follow(&self) -> bool {
        self.follow
    }

    /// Pin or unpin the transcript from its newest entry.
    pub fn set_follow(&mut self, follow: bool) {
        self.follow = follow;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_controller() -> ChatController {
        ChatController::new(
            PanelLayout::Expanded,
            "https://calendar.example/embed",
            Duration::from_millis(2000),
        )
    }

    #[test]
    fn test_initial_focus_is_on_input() {
        let controller = test_controller();
        assert_eq!(controller.focus(), FocusedPane::Chat);
    }

    #[test]
    fn test_submit_trims_appends_and_clears() {
        let mut controller = test_controller();
        controller.input_mut().insert_str("Hello   ");

        let message = controller.submit_message().unwrap();
        assert_eq!(message.text, "Hello");
        assert_eq!(controller.transcript().len(), 1);
        assert_eq!(controller.transcript().last().unwrap().text, "Hello");
        assert!(controller.input().is_empty());
    }

    #[test]
    fn test_submit_whitespace_is_noop() {
        let mut controller = test_controller();
        controller.input_mut().insert_str("   ");

        assert!(controller.submit_message().is_none());
        assert!(controller.transcript().is_empty());
        // The buffer is not cleared further.
        assert_eq!(controller.input().content(), "   ");
    }

    #[test]
    fn test_submit_empty_is_noop() {
        let mut controller = test_controller();
        assert!(controller.submit_message().is_none());
        assert!(controller.transcript().is_empty());
    }

    #[test]
    fn test_submit_pins_transcript_to_bottom() {
        let mut controller = test_controller();
        controller.set_follow(false);
        controller.input_mut().insert_str("new message");
        controller.submit_message().unwrap();
        assert!(controller.follow());
    }

    #[test]
    fn test_toggle_layout_round_trips() {
        let mut controller = test_controller();
        assert_eq!(controller.layout().percentages(), (50, 50));

        controller.toggle_layout();
        assert_eq!(controller.layout().percentages(), (20, 80));

        controller.toggle_layout();
        assert_eq!(controller.layout().percentages(), (50, 50));
    }

    #[test]
    fn test_success_arms_exactly_one_reload() {
        let mut controller = test_controller();
        let now = Instant::now();

        controller.handle_completion(CompletionNotice::from_status(200), now);
        assert_eq!(controller.pending_reloads(), 1);

        // Not yet due.
        assert_eq!(controller.tick(now + Duration::from_millis(1999)), 0);
        assert_eq!(controller.calendar().generation(), 0);

        // Fires after the full delay.
        assert_eq!(controller.tick(now + Duration::from_millis(2000)), 1);
        assert_eq!(controller.calendar().generation(), 1);
        assert_eq!(controller.pending_reloads(), 0);
    }

    #[test]
    fn test_failures_arm_nothing() {
        let mut controller = test_controller();
        let now = Instant::now();

        controller.handle_completion(CompletionNotice::from_status(404), now);
        controller.handle_completion(CompletionNotice::from_status(500), now);
        assert_eq!(controller.pending_reloads(), 0);

        assert_eq!(controller.tick(now + Duration::from_secs(10)), 0);
        assert_eq!(controller.calendar().generation(), 0);
    }

    #[test]
    fn test_overlapping_successes_reload_independently() {
        let mut controller = test_controller();
        let now = Instant::now();

        controller.handle_completion(CompletionNotice::Success, now);
        controller.handle_completion(
            CompletionNotice::Success,
            now + Duration::from_millis(500),
        );
        assert_eq!(controller.pending_reloads(), 2);

        assert_eq!(controller.tick(now + Duration::from_millis(2100)), 1);
        assert_eq!(controller.calendar().generation(), 1);

        assert_eq!(controller.tick(now + Duration::from_millis(2500)), 1);
        assert_eq!(controller.calendar().generation(), 2);
    }

    #[test]
    fn test_focus_toggle_and_refocus() {
        let mut controller = test_controller();
        controller.toggle_focus();
        assert_eq!(controller.focus(), FocusedPane::Calendar);

        controller.focus_input();
        assert_eq!(controller.focus(), FocusedPane::Chat);
    }

    #[test]
    fn test_message_text_is_kept_verbatim() {
        let mut controller = test_controller();
        controller
            .input_mut()
            .insert_str("<b>bold</b> & \"quoted\"");
        let message = controller.submit_message().unwrap();
        // Text is carried as literal content, never interpreted as markup.
        assert_eq!(message.text, "<b>bold</b> & \"quoted\"");
    }
}
