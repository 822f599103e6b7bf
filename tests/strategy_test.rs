//! Strategy predicates and move heuristics through the public API.

use stonecut::stone::{Board, Outcome, Probability, Slot};
use stonecut::strategy::{is_target_met, next_move, target_met_for_counts, Strategy};

fn board_from(rows: [&str; 3]) -> Board {
    let mut board = Board::new();
    for (slot, row) in Slot::ALL.into_iter().zip(rows) {
        for c in row.chars() {
            let outcome = match c {
                'o' => Outcome::Success,
                'x' => Outcome::Fail,
                _ => continue,
            };
            board.slot_mut(slot).push(outcome);
        }
    }
    board
}

fn p(percent: u8) -> Probability {
    Probability::new(percent).unwrap()
}

// =========================================================================
// Success predicates
// =========================================================================

#[test]
fn test_documented_boundaries() {
    assert!(!target_met_for_counts(8, 8, 0, Strategy::Sixteen));
    assert!(target_met_for_counts(9, 7, 0, Strategy::Sixteen));
    assert!(target_met_for_counts(7, 7, 4, Strategy::SevenSeven));
    assert!(!target_met_for_counts(7, 7, 5, Strategy::SevenSeven));
}

#[test]
fn test_sixteen_eight_eight_only_excluded_exactly() {
    // 8/9 and 9/8 still count
    assert!(target_met_for_counts(8, 9, 0, Strategy::Sixteen));
    assert!(target_met_for_counts(9, 8, 0, Strategy::Sixteen));
    assert!(target_met_for_counts(10, 10, 4, Strategy::Sixteen));
}

#[test]
fn test_board_predicate_matches_counts() {
    let board = board_from(["ooooooooox", "oooooooxxx", "ooooxxxxxx"]);
    assert_eq!(board.successes(Slot::A), 9);
    assert_eq!(board.successes(Slot::B), 7);
    assert_eq!(board.successes(Slot::C), 4);
    assert!(is_target_met(&board, Strategy::Sixteen));
    assert!(is_target_met(&board, Strategy::SevenSeven));
}

#[test]
fn test_eight_eight_board_passes_seven_seven_only() {
    let board = board_from(["ooooooooxx", "ooooooooxx", "xxxxxxxxxx"]);
    assert!(is_target_met(&board, Strategy::SevenSeven));
    assert!(!is_target_met(&board, Strategy::Sixteen));
}

// =========================================================================
// Move heuristic
// =========================================================================

#[test]
fn test_threshold_is_inclusive_at_45() {
    let board = Board::new();
    assert_eq!(next_move(p(45), &board, Strategy::SevenSeven), Some(Slot::C));
    assert_eq!(next_move(p(55), &board, Strategy::SevenSeven), Some(Slot::A));
}

#[test]
fn test_seven_seven_picks_weaker_side() {
    let board = board_from(["oox", "ooo", ""]);
    assert_eq!(next_move(p(65), &board, Strategy::SevenSeven), Some(Slot::A));

    let board = board_from(["ooo", "oox", ""]);
    assert_eq!(next_move(p(65), &board, Strategy::SevenSeven), Some(Slot::B));
}

#[test]
fn test_seven_seven_counts_successes_not_length() {
    // A has more cuts but fewer successes, so it is still the target
    let board = board_from(["oxxxx", "oo", ""]);
    assert_eq!(next_move(p(75), &board, Strategy::SevenSeven), Some(Slot::A));
}

#[test]
fn test_sixteen_ignores_balance() {
    let board = board_from(["ooooo", "", ""]);
    assert_eq!(next_move(p(75), &board, Strategy::Sixteen), Some(Slot::A));
}

#[test]
fn test_full_c_low_probability_falls_through() {
    let board = board_from(["oooooooooo", "ooo", "xxxxxxxxxx"]);
    assert_eq!(next_move(p(25), &board, Strategy::SevenSeven), Some(Slot::B));
    assert_eq!(next_move(p(25), &board, Strategy::Sixteen), Some(Slot::B));
}

#[test]
fn test_no_move_on_complete_board() {
    let board = board_from(["oooooooooo", "xxxxxxxxxx", "oxoxoxoxox"]);
    for strategy in Strategy::ALL {
        for percent in [25, 35, 45, 55, 65, 75] {
            assert_eq!(next_move(p(percent), &board, strategy), None);
        }
    }
}

#[test]
fn test_heuristic_is_deterministic() {
    let board = board_from(["oxo", "xo", "x"]);
    for strategy in Strategy::ALL {
        let first = next_move(p(65), &board, strategy);
        for _ in 0..10 {
            assert_eq!(next_move(p(65), &board, strategy), first);
        }
    }
}
