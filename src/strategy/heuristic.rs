//! Next-cut selection for automated runs.
//!
//! Each strategy is an ordered list of rules; the first rule that returns a
//! verdict wins. Shared rules run before the per-strategy list. The cascade is
//! a fixed heuristic, not a search, so the same inputs always pick the same
//! slot.

use super::types::Strategy;
use crate::constants::LOW_PROBABILITY_THRESHOLD;
use crate::stone::{Board, Probability, Slot};

/// What a rule decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Cut(Slot),
    /// Nothing left to cut; the run is over.
    Halt,
}

impl Verdict {
    pub fn slot(self) -> Option<Slot> {
        match self {
            Verdict::Cut(slot) => Some(slot),
            Verdict::Halt => None,
        }
    }
}

/// Inputs visible to a rule.
#[derive(Debug, Clone, Copy)]
pub struct MoveContext<'a> {
    pub probability: Probability,
    pub board: &'a Board,
}

impl MoveContext<'_> {
    fn open(&self, slot: Slot) -> bool {
        !self.board.is_full(slot)
    }
}

/// A rule either decides (`Some`) or defers to the next one (`None`).
pub type Rule = fn(&MoveContext) -> Option<Verdict>;

const SHARED_RULES: &[Rule] = &[halt_when_complete, dump_low_chance_into_c];

const SEVEN_SEVEN_RULES: &[Rule] = &[
    finish_c_when_a_and_b_full,
    b_when_only_a_full,
    a_when_only_b_full,
    fewer_successes_of_a_and_b,
];

const SIXTEEN_RULES: &[Rule] = &[finish_c_when_a_and_b_full, a_while_open, fall_back_to_b];

pub fn rules_for(strategy: Strategy) -> &'static [Rule] {
    match strategy {
        Strategy::SevenSeven => SEVEN_SEVEN_RULES,
        Strategy::Sixteen => SIXTEEN_RULES,
    }
}

/// Slot the next automated cut should target, or `None` once every slot is
/// full.
pub fn next_move(probability: Probability, board: &Board, strategy: Strategy) -> Option<Slot> {
    let ctx = MoveContext { probability, board };
    SHARED_RULES
        .iter()
        .chain(rules_for(strategy))
        .find_map(|rule| rule(&ctx))
        .unwrap_or(Verdict::Halt)
        .slot()
}

// ── Shared rules ─────────────────────────────────────────────────────

fn halt_when_complete(ctx: &MoveContext) -> Option<Verdict> {
    ctx.board.is_complete().then_some(Verdict::Halt)
}

fn dump_low_chance_into_c(ctx: &MoveContext) -> Option<Verdict> {
    let low = ctx.probability.percent() <= LOW_PROBABILITY_THRESHOLD;
    (low && ctx.open(Slot::C)).then_some(Verdict::Cut(Slot::C))
}

fn finish_c_when_a_and_b_full(ctx: &MoveContext) -> Option<Verdict> {
    if ctx.open(Slot::A) || ctx.open(Slot::B) {
        return None;
    }
    Some(if ctx.open(Slot::C) {
        Verdict::Cut(Slot::C)
    } else {
        Verdict::Halt
    })
}

// ── seven-seven ──────────────────────────────────────────────────────

fn b_when_only_a_full(ctx: &MoveContext) -> Option<Verdict> {
    (!ctx.open(Slot::A)).then_some(Verdict::Cut(Slot::B))
}

fn a_when_only_b_full(ctx: &MoveContext) -> Option<Verdict> {
    (!ctx.open(Slot::B)).then_some(Verdict::Cut(Slot::A))
}

fn fewer_successes_of_a_and_b(ctx: &MoveContext) -> Option<Verdict> {
    let a = ctx.board.successes(Slot::A);
    let b = ctx.board.successes(Slot::B);
    // Ties go to A
    Some(Verdict::Cut(if b < a { Slot::B } else { Slot::A }))
}

// ── sixteen ──────────────────────────────────────────────────────────

fn a_while_open(ctx: &MoveContext) -> Option<Verdict> {
    ctx.open(Slot::A).then_some(Verdict::Cut(Slot::A))
}

fn fall_back_to_b(_ctx: &MoveContext) -> Option<Verdict> {
    Some(Verdict::Cut(Slot::B))
}
