//! Target patterns: success predicates and the automated move heuristics.

pub mod evaluate;
pub mod heuristic;
pub mod types;

pub use evaluate::*;
pub use heuristic::{next_move, Verdict};
pub use types::*;
