//! Timer over all three clocks at once.

use std::time::Duration;

use serde::Serialize;

use crate::timer::clock::{ClockKind, Timespec};
use crate::timer::error::TimerError;

/// Elapsed time on each clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TimerResult {
    pub real: Duration,
    pub process: Duration,
    pub thread: Duration,
}

impl TimerResult {
    /// Elapsed time for one clock.
    pub fn get(&self, kind: ClockKind) -> Duration {
        match kind {
            ClockKind::Real => self.real,
            ClockKind::Process => self.process,
            ClockKind::Thread => self.thread,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct StartTimes {
    real: Timespec,
    process: Timespec,
    thread: Timespec,
}

/// Measures real, process and thread time together.
///
/// Works as a `RealTimer`, `ProcessTimer` and `ThreadTimer` all at once,
/// with a single started check.
#[derive(Debug, Clone, Default)]
pub struct Timer {
    start: Option<StartTimes>,
}

impl Timer {
    /// Create a timer. It is not started.
    pub const fn new() -> Self {
        Timer { start: None }
    }

    /// Create and start a timer.
    pub fn started() -> Result<Self, TimerError> {
        let mut timer = Self::new();
        timer.start()?;
        Ok(timer)
    }

    /// Start the timer.
    ///
    /// Can be called multiple times, which restarts the timer.
    pub fn start(&mut self) -> Result<(), TimerError> {
        self.start = Some(StartTimes {
            real: Timespec::now(ClockKind::Real)?,
            process: Timespec::now(ClockKind::Process)?,
            thread: Timespec::now(ClockKind::Thread)?,
        });
        Ok(())
    }

    /// Get the time elapsed on every clock since the last start.
    pub fn elapsed(&self) -> Result<TimerResult, TimerError> {
        let start = self.start.ok_or(TimerError::TimerNotStarted)?;

        Ok(TimerResult {
            real: Timespec::now(ClockKind::Real)?.duration_since(start.real),
            process: Timespec::now(ClockKind::Process)?.duration_since(start.process),
            thread: Timespec::now(ClockKind::Thread)?.duration_since(start.thread),
        })
    }

    pub fn is_started(&self) -> bool {
        self.start.is_some()
    }
}
