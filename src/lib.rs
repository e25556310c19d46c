//! cputimer - Timers for real/process/thread time
//!
//! This crate provides the timer library itself (wall clock, process CPU
//! time and thread CPU time) together with the package recipe used to
//! distribute its headers: identity metadata, declared dependencies and
//! the header export step.

pub mod core;
pub mod ops;
pub mod timer;
pub mod util;

/// Test utilities for building source trees in unit tests.
#[cfg(test)]
pub mod test_support;

pub use core::{
    dependency::Dependency, descriptor::PackageDescriptor, settings::BuildSettings,
    settings::BuildType,
};

pub use ops::{export_package, ExportError, ExportReport};
pub use timer::{
    ProcessTimer, RealTimer, SingleTimer, Stopwatch, ThreadTimer, Timer, TimerError, TimerResult,
};
pub use util::context::GlobalContext;
