//! Rejection-reason taxonomy.
//!
//! The decision surface stays a plain allow/deny; these reasons exist for
//! structured logging and diagnostics and never alter the decision. They
//! are RT-safe: `Copy`, fixed `#[repr(u8)]`, pre-allocated codes.

/// Why a TX frame was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[repr(u8)]
pub enum RejectReason {
    /// The identifier has no legitimate use on the actuation bus.
    #[error("identifier is not allowed on the actuation bus")]
    DisallowedMessage = 1,
    /// Acceleration command outside the physical bounds.
    #[error("acceleration command outside physical bounds")]
    AccelOutOfBounds = 2,
    /// Steering torque above the absolute ceiling.
    #[error("steering torque above the absolute ceiling")]
    TorqueOutOfBounds = 3,
    /// Steering torque left the driver rate/measurement envelope.
    #[error("steering torque rate outside the driver envelope")]
    TorqueRateExceeded = 4,
    /// Steering torque drifted past the real-time window.
    #[error("steering torque drifted past the real-time window")]
    RealtimeRateExceeded = 5,
    /// Nonzero command while controls are not allowed.
    #[error("nonzero command while controls are not allowed")]
    UnauthorizedCommand = 6,
}

impl RejectReason {
    /// Numeric code for structured logging.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Recover a reason from its code. Returns `None` for unknown codes.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(RejectReason::DisallowedMessage),
            2 => Some(RejectReason::AccelOutOfBounds),
            3 => Some(RejectReason::TorqueOutOfBounds),
            4 => Some(RejectReason::TorqueRateExceeded),
            5 => Some(RejectReason::RealtimeRateExceeded),
            6 => Some(RejectReason::UnauthorizedCommand),
            _ => None,
        }
    }
}
