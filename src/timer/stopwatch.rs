//! Stopwatch with stop and lap semantics over a single clock.

use std::marker::PhantomData;
use std::time::Duration;

use crate::timer::clock::{Clock, ClockKind, Timespec};
use crate::timer::error::TimerError;

/// A stoppable timer.
///
/// While running, [`elapsed`](Stopwatch::elapsed) returns the lap time up to
/// now. After [`stop`](Stopwatch::stop) it returns the frozen start-to-stop
/// time until the stopwatch is started again.
#[derive(Debug)]
pub struct Stopwatch<C: Clock> {
    start: Option<Timespec>,
    stop: Option<Timespec>,
    _clock: PhantomData<C>,
}

impl<C: Clock> Stopwatch<C> {
    pub const fn new() -> Self {
        Stopwatch {
            start: None,
            stop: None,
            _clock: PhantomData,
        }
    }

    /// Start or restart the stopwatch. Clears any previous stop.
    pub fn start(&mut self) -> Result<(), TimerError> {
        self.start = Some(C::now()?);
        self.stop = None;
        Ok(())
    }

    /// Stop the stopwatch, freezing the elapsed time.
    pub fn stop(&mut self) -> Result<(), TimerError> {
        self.require_started()?;
        self.stop = Some(C::now()?);
        Ok(())
    }

    pub fn elapsed(&self) -> Result<Duration, TimerError> {
        let start = self.require_started()?;
        let until = match self.stop {
            Some(stop) => stop,
            None => C::now()?,
        };
        Ok(until.duration_since(start))
    }

    pub fn is_running(&self) -> bool {
        self.start.is_some() && self.stop.is_none()
    }

    pub fn kind(&self) -> ClockKind {
        C::KIND
    }

    fn require_started(&self) -> Result<Timespec, TimerError> {
        self.start.ok_or(TimerError::ClockNotStarted)
    }
}

impl<C: Clock> Default for Stopwatch<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::clock::Real;
    use std::thread::sleep;

    #[test]
    fn test_lap_then_stop() {
        let mut watch = Stopwatch::<Real>::new();
        watch.start().unwrap();

        sleep(Duration::from_millis(10));
        let lap = watch.elapsed().unwrap();
        assert!(lap >= Duration::from_millis(10));
        assert!(watch.is_running());

        sleep(Duration::from_millis(10));
        watch.stop().unwrap();
        let stopped = watch.elapsed().unwrap();
        assert!(stopped > lap);
        assert!(stopped < Duration::from_millis(1000));

        // After stopping, elapsed stays the same
        sleep(Duration::from_millis(10));
        assert_eq!(watch.elapsed().unwrap(), stopped);
        assert!(!watch.is_running());
    }

    #[test]
    fn test_stop_without_start_fails() {
        let mut watch = Stopwatch::<Real>::new();
        let err = watch.stop().unwrap_err();
        assert_eq!(err.to_string(), "Trying to stop a clock which was not started");
    }

    #[test]
    fn test_elapsed_without_start_fails() {
        let watch = Stopwatch::<Real>::default();
        assert_eq!(watch.elapsed().unwrap_err(), TimerError::ClockNotStarted);
    }

    #[test]
    fn test_restart_clears_stop() {
        let mut watch = Stopwatch::<Real>::new();
        watch.start().unwrap();
        watch.stop().unwrap();

        watch.start().unwrap();
        assert!(watch.is_running());
        assert_eq!(watch.kind(), ClockKind::Real);
    }
}
