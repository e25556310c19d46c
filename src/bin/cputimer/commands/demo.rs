//! `cputimer demo` command
//!
//! Walks through the timers: a `RealTimer` around some work, a restart,
//! and a `Timer` reporting all three clocks.

use std::thread::sleep;
use std::time::Duration;

use anyhow::Result;

use crate::cli::DemoArgs;
use cputimer::timer::{RealTimer, Timer};

pub fn execute(args: DemoArgs) -> Result<()> {
    let work = Duration::from_millis(args.work_ms);

    // Creating the timer does not start it
    let mut real_timer = RealTimer::new();
    real_timer.start()?;
    sleep(work);
    println!(
        "Doing some work took {} nanoseconds\n",
        real_timer.elapsed()?.as_nanos()
    );

    // Calling start() again restarts the timer
    real_timer.start()?;
    println!(
        "Not doing anything after restart took {} milliseconds\n",
        real_timer.elapsed()?.as_millis()
    );

    // Timer measures real, process and thread time together
    let mut timer = Timer::new();
    timer.start()?;
    sleep(work);

    // Process and thread time stay near zero since we only sleep
    let elapsed = timer.elapsed()?;
    println!("Doing some work took:");
    println!("  {} milliseconds of real/wall time", elapsed.real.as_millis());
    println!("  {} milliseconds of process CPU time", elapsed.process.as_millis());
    println!("  {} milliseconds of thread CPU time", elapsed.thread.as_millis());

    Ok(())
}
