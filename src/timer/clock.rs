//! POSIX clock access.
//!
//! Each clock is a zero-sized marker type implementing [`Clock`], so a
//! timer's clock is chosen at compile time.

use std::fmt;
use std::time::Duration;

use crate::timer::error::TimerError;

#[cfg(not(unix))]
compile_error!("cputimer requires POSIX clocks (clock_gettime)");

const NANOS_PER_SEC: i128 = 1_000_000_000;

/// Which clock a reading comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClockKind {
    /// Real/wall time (`CLOCK_REALTIME`)
    Real,
    /// CPU time of this process (`CLOCK_PROCESS_CPUTIME_ID`)
    Process,
    /// CPU time of the calling thread (`CLOCK_THREAD_CPUTIME_ID`)
    Thread,
}

impl ClockKind {
    pub const ALL: [ClockKind; 3] = [ClockKind::Real, ClockKind::Process, ClockKind::Thread];

    fn clock_id(self) -> libc::clockid_t {
        match self {
            ClockKind::Real => libc::CLOCK_REALTIME,
            ClockKind::Process => libc::CLOCK_PROCESS_CPUTIME_ID,
            ClockKind::Thread => libc::CLOCK_THREAD_CPUTIME_ID,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ClockKind::Real => "real",
            ClockKind::Process => "process",
            ClockKind::Thread => "thread",
        }
    }
}

impl fmt::Display for ClockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single clock reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timespec {
    secs: i64,
    nanos: i64,
}

impl Timespec {
    pub const fn new(secs: i64, nanos: i64) -> Self {
        Timespec { secs, nanos }
    }

    /// Read the given clock.
    pub fn now(kind: ClockKind) -> Result<Self, TimerError> {
        let mut ts = libc::timespec {
            tv_sec: 0,
            tv_nsec: 0,
        };

        // SAFETY: `ts` is a valid, writable timespec for the duration of the call.
        let result = unsafe { libc::clock_gettime(kind.clock_id(), &mut ts) };
        if result == -1 {
            let errno = std::io::Error::last_os_error().raw_os_error().unwrap_or(0);
            return Err(TimerError::Clock { kind, errno });
        }

        // time_t and c_long are 32 bits on some targets.
        #[allow(clippy::unnecessary_cast)]
        let reading = Timespec::new(ts.tv_sec as i64, ts.tv_nsec as i64);
        Ok(reading)
    }

    /// Time elapsed from `earlier` to `self`.
    ///
    /// A reading before `earlier` (the real clock stepping backwards)
    /// yields zero.
    pub fn duration_since(&self, earlier: Timespec) -> Duration {
        let ns = (i128::from(self.secs) - i128::from(earlier.secs)) * NANOS_PER_SEC
            + (i128::from(self.nanos) - i128::from(earlier.nanos));

        if ns <= 0 {
            Duration::ZERO
        } else {
            Duration::from_nanos(u64::try_from(ns).unwrap_or(u64::MAX))
        }
    }
}

mod sealed {
    pub trait Sealed {}
}

/// A clock a timer can be parameterised over.
pub trait Clock: sealed::Sealed {
    const KIND: ClockKind;

    fn now() -> Result<Timespec, TimerError> {
        Timespec::now(Self::KIND)
    }
}

/// Real/wall time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Real;

/// CPU time (user or kernel mode) of this process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Process;

/// CPU time (user or kernel mode) of the calling thread.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thread;

impl sealed::Sealed for Real {}
impl sealed::Sealed for Process {}
impl sealed::Sealed for Thread {}

impl Clock for Real {
    const KIND: ClockKind = ClockKind::Real;
}

impl Clock for Process {
    const KIND: ClockKind = ClockKind::Process;
}

impl Clock for Thread {
    const KIND: ClockKind = ClockKind::Thread;
}
