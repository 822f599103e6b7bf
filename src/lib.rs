//! Stonecut - ability stone cutting simulator.
//!
//! Three slots, ten cuts each, and a success chance that drops after every
//! success and climbs after every failure. The library holds the board model,
//! the two target strategies with their move heuristics, automated runs and
//! batches, and the session state behind the terminal frontend.

pub mod build_info;
pub mod constants;
pub mod core;
pub mod error;
pub mod input;
pub mod simulator;
pub mod stone;
pub mod strategy;
pub mod ui;
