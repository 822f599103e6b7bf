//! Stone board: slot histories, outcome tallies and the drifting success chance.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
