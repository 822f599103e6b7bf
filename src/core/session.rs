//! Session state shared by the interactive commands.
//!
//! One `Session` owns the board, the current probability, the attempt counter
//! and the last status. Every command takes the session by `&mut` together
//! with a roll source, so there is no hidden global state.

use crate::constants::BATCH_ATTEMPT_CAP;
use crate::simulator::{run_batch_until, run_instant, BatchOutcome, BatchReport, RunResult};
use crate::stone::{attempt_cut, Board, Outcome, Probability, RollSource, Slot};
use crate::strategy::Strategy;
use serde::Serialize;
use std::fmt;

/// Outcome of the last automated command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case", tag = "kind")]
pub enum Status {
    /// Nothing run since start or reset.
    #[default]
    Idle,
    Success,
    Failure,
    /// A batch used every attempt without success.
    CappedFailure { cap: u32 },
    Cancelled { attempts: u32 },
}

impl Status {
    pub fn is_success(self) -> bool {
        self == Status::Success
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Idle => Ok(()),
            Status::Success => f.write_str("Success!"),
            Status::Failure => f.write_str("Failed"),
            Status::CappedFailure { cap } => write!(f, "Failed (exceeded {cap} attempts)"),
            Status::Cancelled { attempts } => write!(f, "Cancelled after {attempts} attempts"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub board: Board,
    pub probability: Probability,
    /// Completed automated runs since the last reset.
    pub attempts: u32,
    pub status: Status,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            probability: Probability::START,
            attempts: 0,
            status: Status::Idle,
        }
    }

    /// Manual cut on `slot` at the session's probability.
    ///
    /// A full slot rejects the cut and leaves the session unchanged.
    pub fn cut<R: RollSource + ?Sized>(&mut self, slot: Slot, rng: &mut R) -> Option<Outcome> {
        attempt_cut(&mut self.board, &mut self.probability, slot, rng)
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// One automated run from a clean stone; its result replaces the board.
    pub fn run_instant<R: RollSource + ?Sized>(
        &mut self,
        strategy: Strategy,
        rng: &mut R,
    ) -> Status {
        let report = run_instant(strategy, rng);
        let attempts = self.attempts + 1;
        self.apply_batch(&report);
        self.attempts = attempts;
        self.status
    }

    /// Automated runs until success or the standard cap.
    pub fn run_batch<R: RollSource + ?Sized>(
        &mut self,
        strategy: Strategy,
        rng: &mut R,
    ) -> Status {
        self.run_batch_until(strategy, rng, |_| true)
    }

    /// [`Session::run_batch`] with a cooperative stop hook checked before
    /// every run.
    pub fn run_batch_until<R, F>(
        &mut self,
        strategy: Strategy,
        rng: &mut R,
        keep_going: F,
    ) -> Status
    where
        R: RollSource + ?Sized,
        F: FnMut(u32) -> bool,
    {
        let report = run_batch_until(strategy, BATCH_ATTEMPT_CAP, rng, keep_going);
        self.apply_batch(&report);
        self.status
    }

    fn apply_batch(&mut self, report: &BatchReport) {
        if let Some(run) = report.last_run {
            self.apply(run);
        }
        self.attempts = report.attempts;
        self.status = match report.outcome {
            BatchOutcome::Success => Status::Success,
            BatchOutcome::Failure => Status::Failure,
            BatchOutcome::CappedFailure => Status::CappedFailure { cap: report.cap },
            BatchOutcome::Cancelled => Status::Cancelled {
                attempts: report.attempts,
            },
        };
    }

    fn apply(&mut self, run: RunResult) {
        self.board = run.board;
        self.probability = run.probability;
    }

    /// Status line text; empty when idle.
    pub fn status_message(&self) -> String {
        self.status.to_string()
    }
}
