use std::io::Write;
use std::thread;
use std::time::Duration;

use crate::error::Result;
use crate::workload;

/// Parameters for one workload run.
#[derive(Debug, Clone)]
pub struct Plan {
    pub rounds: u32,
    pub iterations: u64,
    pub pause: Duration,
}

/// Runs the round loop: a start banner, then for each round a progress
/// line, a busy-work call, and a fixed pause, then a completion banner.
///
/// Status lines go to `out` so tests can capture them. Each progress line
/// is flushed before the work starts; otherwise a line-buffered sink would
/// hold it back through the round's work-plus-pause window.
pub fn run(plan: &Plan, out: &mut impl Write) -> Result<()> {
    writeln!(out, "Starting workload run...")?;

    for round in 1..=plan.rounds {
        writeln!(out, "Working... {round}/{}", plan.rounds)?;
        out.flush()?;
        workload::burn(plan.iterations);
        thread::sleep(plan.pause);
    }

    writeln!(out, "Workload run complete")?;
    Ok(())
}
