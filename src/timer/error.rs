//! Timer error types.

use thiserror::Error;

use crate::timer::clock::ClockKind;

/// Error reading or using a timer.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TimerError {
    #[error("Trying to get elapsed time of a timer which was not started")]
    TimerNotStarted,

    #[error("Trying to stop a clock which was not started")]
    ClockNotStarted,

    #[error("Failed to get time: errno {errno}")]
    Clock { kind: ClockKind, errno: i32 },
}
