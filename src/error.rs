use crate::model::task::TaskStatus;
use thiserror::Error;

/// Business-rule rejections raised by the engines.
///
/// Every variant is a deterministic validation failure meant to be shown to the
/// caller as-is; there is nothing transient or retryable here. Persistence and
/// transport failures never originate in this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("Already checked in today")]
    AlreadyCheckedIn,

    #[error("No active check-in found for today")]
    NoCheckInFound,

    #[error("Already checked out today")]
    AlreadyCheckedOut,

    /// Check-out time precedes check-in time. The source data does not guard
    /// against this (clock skew, manual entry), so it is rejected here instead
    /// of storing a negative hours figure.
    #[error("Check-out time is earlier than check-in time")]
    InvalidDuration,

    #[error("start_date cannot be after end_date")]
    InvalidRange,

    #[error("start_date cannot be in the past")]
    PastStartDate,

    #[error("Insufficient leave balance: {remaining} day(s) remaining")]
    InsufficientBalance { remaining: i64 },

    #[error("Leave request is not pending")]
    NotPending,

    #[error("Not allowed")]
    Forbidden,

    #[error("Cannot move task from '{from}' to '{to}'")]
    InvalidTransition { from: TaskStatus, to: TaskStatus },
}

impl EngineError {
    /// Suggested HTTP status for callers translating engine errors to
    /// responses. Everything is a 400 except authorization failures.
    pub fn status_hint(&self) -> u16 {
        match self {
            EngineError::Forbidden => 403,
            _ => 400,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forbidden_maps_to_403_everything_else_400() {
        assert_eq!(EngineError::Forbidden.status_hint(), 403);
        assert_eq!(EngineError::AlreadyCheckedIn.status_hint(), 400);
        assert_eq!(EngineError::NotPending.status_hint(), 400);
        assert_eq!(
            EngineError::InsufficientBalance { remaining: 3 }.status_hint(),
            400
        );
    }

    #[test]
    fn insufficient_balance_message_carries_remaining_days() {
        let err = EngineError::InsufficientBalance { remaining: 5 };
        assert_eq!(
            err.to_string(),
            "Insufficient leave balance: 5 day(s) remaining"
        );
    }
}
