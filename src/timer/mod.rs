//! Timers for real/process/thread time.
//!
//! Three clocks are available:
//! - [`Real`]: the real/wall time
//! - [`Process`]: the CPU time (user or kernel mode) of this process
//! - [`Thread`]: the CPU time (user or kernel mode) of the calling thread
//!
//! [`SingleTimer`] measures one clock, [`Timer`] measures all three at once
//! and [`Stopwatch`] adds stop/lap semantics on top of a single clock.
//! Creating a timer does not start it.
//!
//! ```no_run
//! use cputimer::timer::{RealTimer, Timer};
//!
//! # fn main() -> Result<(), cputimer::TimerError> {
//! let mut real = RealTimer::new();
//! real.start()?;
//! // ... do some work ...
//! println!("took {} ns", real.elapsed()?.as_nanos());
//!
//! let mut timer = Timer::new();
//! timer.start()?;
//! let elapsed = timer.elapsed()?;
//! println!("real {:?}, process {:?}, thread {:?}", elapsed.real, elapsed.process, elapsed.thread);
//! # Ok(())
//! # }
//! ```

pub mod clock;
pub mod error;
pub mod multi;
pub mod single;
pub mod stopwatch;

pub use clock::{Clock, ClockKind, Process, Real, Thread, Timespec};
pub use error::TimerError;
pub use multi::{Timer, TimerResult};
pub use single::{ProcessTimer, RealTimer, SingleTimer, ThreadTimer};
pub use stopwatch::Stopwatch;
