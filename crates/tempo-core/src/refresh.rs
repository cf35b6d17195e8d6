//! Delayed calendar reload scheduling.

use std::time::{Duration, Instant};

/// Delay between a successful delivery and the calendar reload.
pub const DEFAULT_REFRESH_DELAY: Duration = Duration::from_millis(2000);

/// Schedules fire-and-forget calendar reloads.
///
/// Every successful delivery arms its own entry: nothing cancels, retries,
/// or coalesces them, so overlapping deliveries each trigger a reload.
/// Entries are drained by the caller's tick rather than by OS timers, which
/// keeps the timing testable with injected instants.
#[derive(Debug, Clone)]
pub struct RefreshScheduler {
    delay: Duration,
    pending: Vec<Instant>,
}

impl RefreshScheduler {
    /// Create a scheduler with the given reload delay.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Vec::new(),
        }
    }

    /// Arm one reload at `now + delay`.
    pub fn schedule(&mut self, now: Instant) {
        self.pending.push(now + self.delay);
    }

    /// Remove every entry due at `now`, returning how many fired.
    pub fn drain_due(&mut self, now: Instant) -> usize {
        let before = self.pending.len();
        self.pending.retain(|due| *due > now);
        before - self.pending.len()
    }

    /// Number of armed entries.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// The configured reload delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for RefreshScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_REFRESH_DELAY)
    }
}
