use std::io;
use std::time::Duration;

use clap::Parser;

mod driver;
mod error;
mod workload;

use driver::Plan;
use error::Result;

/// Deterministic CPU workload for exercising sampling profilers.
///
/// Alternates rounds of busy-work with fixed pauses, so a profiler
/// attached to the process sees a clean on-CPU/off-CPU pattern. With no
/// arguments: ten rounds of a million-step summation, one second apart.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Number of work rounds to run
    #[arg(long, default_value_t = 10)]
    rounds: u32,

    /// Summation loop length per round
    #[arg(long, default_value_t = 1_000_000)]
    iterations: u64,

    /// Pause between rounds, in milliseconds
    #[arg(long, default_value_t = 1_000)]
    pause_ms: u64,
}

fn main() -> Result<()> {
    better_panic::install();

    let args = Args::parse();
    let plan = Plan {
        rounds: args.rounds,
        iterations: args.iterations,
        pause: Duration::from_millis(args.pause_ms),
    };

    driver::run(&plan, &mut io::stdout().lock())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_fixed_workload() {
        let args = Args::parse_from(["busywork"]);
        assert_eq!(args.rounds, 10);
        assert_eq!(args.iterations, 1_000_000);
        assert_eq!(args.pause_ms, 1_000);
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::parse_from(["busywork", "--rounds", "3", "--pause-ms", "50"]);
        assert_eq!(args.rounds, 3);
        assert_eq!(args.iterations, 1_000_000);
        assert_eq!(args.pause_ms, 50);
    }
}
