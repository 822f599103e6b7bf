//! Automated stone runs: one full run, and repeated runs until success.

use crate::constants::MAX_STEPS_PER_RUN;
use crate::stone::{attempt_cut, Board, Probability, RollSource};
use crate::strategy::{is_target_met, next_move, Strategy};
use serde::Serialize;
use std::fmt;

/// Final state of one automated run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunResult {
    pub board: Board,
    pub probability: Probability,
}

/// How a batch ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BatchOutcome {
    Success,
    /// A single instant run missed the target.
    Failure,
    /// Every run up to the cap missed the target.
    CappedFailure,
    /// The caller stopped the batch before success or the cap.
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub strategy: Strategy,
    /// Runs performed. On success this is the 1-based index of the winning run.
    pub attempts: u32,
    pub cap: u32,
    pub outcome: BatchOutcome,
    /// The winning run on success, otherwise the last run performed.
    /// `None` only when cancelled before the first run.
    pub last_run: Option<RunResult>,
}

impl BatchReport {
    pub fn succeeded(&self) -> bool {
        self.outcome == BatchOutcome::Success
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            BatchOutcome::Success => f.write_str("success"),
            BatchOutcome::Failure => f.write_str("fail"),
            BatchOutcome::CappedFailure => write!(f, "fail (exceeded {} attempts)", self.cap),
            BatchOutcome::Cancelled => f.write_str("cancelled"),
        }
    }
}

/// Play one stone from a clean board at the starting probability until the
/// heuristic has nothing left to cut.
pub fn simulate_stone<R: RollSource + ?Sized>(strategy: Strategy, rng: &mut R) -> RunResult {
    let mut board = Board::new();
    let mut probability = Probability::START;

    // Every step fills one cell, so the bound is never the reason we stop
    for _ in 0..MAX_STEPS_PER_RUN {
        let Some(slot) = next_move(probability, &board, strategy) else {
            break;
        };
        attempt_cut(&mut board, &mut probability, slot, rng);
    }
    debug_assert!(board.is_complete());

    tracing::trace!(%strategy, %board, %probability, "stone finished");
    RunResult { board, probability }
}

/// One run reported as a batch of one.
pub fn run_instant<R: RollSource + ?Sized>(strategy: Strategy, rng: &mut R) -> BatchReport {
    let run = simulate_stone(strategy, rng);
    let outcome = if is_target_met(&run.board, strategy) {
        BatchOutcome::Success
    } else {
        BatchOutcome::Failure
    };
    BatchReport {
        strategy,
        attempts: 1,
        cap: 1,
        outcome,
        last_run: Some(run),
    }
}

/// Repeat [`simulate_stone`] until a run meets the target or `cap` runs fail.
pub fn run_batch<R: RollSource + ?Sized>(
    strategy: Strategy,
    cap: u32,
    rng: &mut R,
) -> BatchReport {
    run_batch_until(strategy, cap, rng, |_| true)
}

/// [`run_batch`] with a cooperative stop hook.
///
/// `keep_going` is called before every run with the number of runs done so
/// far; returning `false` ends the batch as [`BatchOutcome::Cancelled`].
pub fn run_batch_until<R, F>(
    strategy: Strategy,
    cap: u32,
    rng: &mut R,
    mut keep_going: F,
) -> BatchReport
where
    R: RollSource + ?Sized,
    F: FnMut(u32) -> bool,
{
    let mut attempts = 0;
    let mut last_run = None;

    let outcome = loop {
        if attempts >= cap {
            break BatchOutcome::CappedFailure;
        }
        if !keep_going(attempts) {
            break BatchOutcome::Cancelled;
        }

        attempts += 1;
        let run = simulate_stone(strategy, rng);
        last_run = Some(run);

        if is_target_met(&run.board, strategy) {
            break BatchOutcome::Success;
        }
    };

    tracing::debug!(%strategy, attempts, cap, ?outcome, "batch finished");
    BatchReport {
        strategy,
        attempts,
        cap,
        outcome,
        last_run,
    }
}
