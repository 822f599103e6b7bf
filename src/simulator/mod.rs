//! Automated play: full stone runs, batches until success, and the headless
//! simulator's configuration.

mod config;
mod runner;

pub use config::{ParsedArgs, SimConfig, USAGE};
pub use runner::{
    run_batch, run_batch_until, run_instant, simulate_stone, BatchOutcome, BatchReport, RunResult,
};
