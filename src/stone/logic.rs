use super::types::*;
use crate::constants::{PROBABILITY_MAX, PROBABILITY_MIN, PROBABILITY_STEP};
use rand::Rng;

/// Source of uniform percentile rolls in `[0, 100)`.
///
/// Every `rand::Rng` is a roll source; tests can implement it directly to
/// replay a fixed sequence of draws.
pub trait RollSource {
    fn roll_percent(&mut self) -> u32;
}

impl<R: Rng + ?Sized> RollSource for R {
    fn roll_percent(&mut self) -> u32 {
        self.gen_range(0..100)
    }
}

/// Next success chance after one cut: down a step on success, up a step on
/// failure, clamped to the 25..=75 band.
pub fn next_probability(current: u8, success: bool) -> u8 {
    if success {
        current.saturating_sub(PROBABILITY_STEP).max(PROBABILITY_MIN)
    } else {
        current.saturating_add(PROBABILITY_STEP).min(PROBABILITY_MAX)
    }
}

impl Probability {
    pub fn advance(self, success: bool) -> Probability {
        // Stepping from a grid value and clamping to the band lands on the grid
        Probability::new(next_probability(self.percent(), success)).unwrap_or(self)
    }
}

/// Cut `slot` once at the current probability.
///
/// Returns the recorded outcome, or `None` without touching the board or the
/// probability when the slot is already full.
pub fn attempt_cut<R: RollSource + ?Sized>(
    board: &mut Board,
    probability: &mut Probability,
    slot: Slot,
    rng: &mut R,
) -> Option<Outcome> {
    if board.is_full(slot) {
        return None;
    }

    let roll = rng.roll_percent();
    let success = roll < u32::from(probability.percent());
    let outcome = Outcome::from_success(success);
    board.slot_mut(slot).push(outcome);

    let before = *probability;
    let after = before.advance(success);
    *probability = after;
    tracing::trace!(%slot, roll, %before, %after, ?outcome, "cut");

    Some(outcome)
}
