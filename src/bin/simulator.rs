//! Stonecut Headless Batch Simulator
//!
//! Runs the same automated play as the interactive screen, without a
//! terminal UI, and prints one result line per run.
//!
//! Usage:
//!   cargo run --bin simulator -- [OPTIONS]
//!
//! See `--help` for options. Log output goes to stderr and honours RUST_LOG.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io::{self, Write};
use std::process::ExitCode;
use stonecut::simulator::{run_batch, run_instant, BatchReport, ParsedArgs, SimConfig, USAGE};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_directive = if verbose { "stonecut=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn rng_for_run(config: &SimConfig, index: u32) -> ChaCha8Rng {
    match config.seed_for_run(index) {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

fn write_report(
    out: &mut impl Write,
    config: &SimConfig,
    index: u32,
    report: &BatchReport,
) -> io::Result<()> {
    if config.json {
        let line = serde_json::to_string(report).map_err(io::Error::other)?;
        return writeln!(out, "{line}");
    }

    let seed = config
        .seed_for_run(index)
        .map_or_else(|| "-".to_string(), |s| s.to_string());
    write!(
        out,
        "run={} seed={} attempts={} result={}",
        index + 1,
        seed,
        report.attempts,
        report
    )?;
    if let Some(run) = report.last_run.as_ref().filter(|_| !config.quiet) {
        write!(out, " board={} p={}", run.board, run.probability)?;
    }
    writeln!(out)
}

fn main() -> ExitCode {
    let config = match SimConfig::from_args(std::env::args().skip(1)) {
        Ok(ParsedArgs::Run(config)) => config,
        Ok(ParsedArgs::Help) => {
            eprintln!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("error: {e}\n\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    init_logging(config.verbose);

    if !config.quiet && !config.json {
        eprintln!(
            "Stonecut Simulator: strategy={} mode={} runs={} cap={} seed={}",
            config.strategy,
            if config.instant { "instant" } else { "batch" },
            config.runs,
            config.batch_cap,
            config
                .seed
                .map_or_else(|| "entropy".to_string(), |s| s.to_string()),
        );
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for index in 0..config.runs {
        let mut rng = rng_for_run(&config, index);
        let report = if config.instant {
            run_instant(config.strategy, &mut rng)
        } else {
            run_batch(config.strategy, config.batch_cap, &mut rng)
        };
        tracing::debug!(
            run = index + 1,
            attempts = report.attempts,
            outcome = ?report.outcome,
            "run complete"
        );

        if let Err(e) = write_report(&mut out, &config, index, &report) {
            eprintln!("error: failed to write result: {e}");
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
