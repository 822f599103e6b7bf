// Stone layout
pub const SLOT_CAPACITY: usize = 10;
pub const SLOT_COUNT: usize = 3;

// Success probability, in whole percent
pub const PROBABILITY_START: u8 = 75;
pub const PROBABILITY_MIN: u8 = 25;
pub const PROBABILITY_MAX: u8 = 75;
pub const PROBABILITY_STEP: u8 = 10;

/// At or below this probability the heuristics dump cuts into slot C.
pub const LOW_PROBABILITY_THRESHOLD: u8 = 45;

// Automation
pub const BATCH_ATTEMPT_CAP: u32 = 2000;
pub const MAX_STEPS_PER_RUN: usize = SLOT_CAPACITY * SLOT_COUNT;

// Success predicates
pub const SEVEN_SEVEN_MIN_SUCCESSES: u8 = 7;
pub const SIXTEEN_MIN_COMBINED: u8 = 16;
pub const SIXTEEN_EXCLUDED_SPLIT: u8 = 8;
pub const MAX_SACRIFICE_SUCCESSES: u8 = 4;
