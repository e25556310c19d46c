//! Timer over a single clock.

use std::fmt;
use std::marker::PhantomData;
use std::time::Duration;

use crate::timer::clock::{Clock, ClockKind, Process, Real, Thread, Timespec};
use crate::timer::error::TimerError;

/// Measures elapsed time on one clock.
pub struct SingleTimer<C: Clock> {
    start: Option<Timespec>,
    _clock: PhantomData<C>,
}

/// Measures real/wall time.
pub type RealTimer = SingleTimer<Real>;

/// Measures CPU time of this process.
pub type ProcessTimer = SingleTimer<Process>;

/// Measures CPU time of the calling thread.
pub type ThreadTimer = SingleTimer<Thread>;

impl<C: Clock> SingleTimer<C> {
    /// Create a timer. It is not started.
    pub const fn new() -> Self {
        SingleTimer {
            start: None,
            _clock: PhantomData,
        }
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
        self.start = Some(C::now()?);
        Ok(())
    }

    /// Get the time elapsed since the last start.
    pub fn elapsed(&self) -> Result<Duration, TimerError> {
        let start = self.start.ok_or(TimerError::TimerNotStarted)?;
        Ok(C::now()?.duration_since(start))
    }

    pub fn is_started(&self) -> bool {
        self.start.is_some()
    }

    /// The clock this timer reads.
    pub fn kind(&self) -> ClockKind {
        C::KIND
    }
}

impl<C: Clock> Default for SingleTimer<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Clone for SingleTimer<C> {
    fn clone(&self) -> Self {
        SingleTimer {
            start: self.start,
            _clock: PhantomData,
        }
    }
}

impl<C: Clock> fmt::Debug for SingleTimer<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SingleTimer")
            .field("clock", &C::KIND)
            .field("start", &self.start)
            .finish()
    }
}
