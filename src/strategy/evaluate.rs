use super::types::Strategy;
use crate::constants::{
    MAX_SACRIFICE_SUCCESSES, SEVEN_SEVEN_MIN_SUCCESSES, SIXTEEN_EXCLUDED_SPLIT,
    SIXTEEN_MIN_COMBINED,
};
use crate::stone::{Board, Slot};

/// Whether a finished board reaches the strategy's target pattern.
pub fn is_target_met(board: &Board, strategy: Strategy) -> bool {
    target_met_for_counts(
        board.successes(Slot::A),
        board.successes(Slot::B),
        board.successes(Slot::C),
        strategy,
    )
}

/// Same predicate on raw success counts.
pub fn target_met_for_counts(a: u8, b: u8, c: u8, strategy: Strategy) -> bool {
    if c > MAX_SACRIFICE_SUCCESSES {
        return false;
    }
    match strategy {
        Strategy::SevenSeven => a >= SEVEN_SEVEN_MIN_SUCCESSES && b >= SEVEN_SEVEN_MIN_SUCCESSES,
        Strategy::Sixteen => {
            // An exact 8/8 split does not count even though it reaches 16
            let even_split = a == SIXTEEN_EXCLUDED_SPLIT && b == SIXTEEN_EXCLUDED_SPLIT;
            u16::from(a) + u16::from(b) >= u16::from(SIXTEEN_MIN_COMBINED) && !even_split
        }
    }
}
