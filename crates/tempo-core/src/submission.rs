//! Delivery completion notices.

/// Status code that marks a delivery as successful.
pub const SUCCESS_STATUS: u16 = 200;

/// Outcome of an asynchronous message delivery.
///
/// The delivery mechanism itself lives outside the controller; the
/// controller only inspects the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionNotice {
    /// Delivery succeeded.
    Success,
    /// Delivery failed with the given status code.
    Failure(u16),
}

impl CompletionNotice {
    /// Classify a raw status code.
    pub fn from_status(status: u16) -> Self {
        if status == SUCCESS_STATUS {
            Self::Success
        } else {
            Self::Failure(status)
        }
    }

    /// Check whether the delivery succeeded.
    pub fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}
