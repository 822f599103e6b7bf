use crate::constants::{
    PROBABILITY_MAX, PROBABILITY_MIN, PROBABILITY_START, PROBABILITY_STEP, SLOT_CAPACITY,
    SLOT_COUNT,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three cutting tracks on a stone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    A,
    B,
    C,
}

impl Slot {
    pub const ALL: [Slot; SLOT_COUNT] = [Slot::A, Slot::B, Slot::C];

    pub fn index(self) -> usize {
        match self {
            Slot::A => 0,
            Slot::B => 1,
            Slot::C => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Slot::A => "A",
            Slot::B => "B",
            Slot::C => "C",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result recorded at one position of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Success,
    Fail,
    /// No attempt recorded at this position yet.
    #[default]
    Unset,
}

impl Outcome {
    pub fn from_success(success: bool) -> Self {
        if success {
            Outcome::Success
        } else {
            Outcome::Fail
        }
    }

    /// Single-character cell used by the text renderings.
    pub fn glyph(self) -> char {
        match self {
            Outcome::Success => 'o',
            Outcome::Fail => 'x',
            Outcome::Unset => '.',
        }
    }
}

/// Success/fail tallies for one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct OutcomeCounts {
    pub success: u8,
    pub fail: u8,
    pub length: u8,
}

/// Append-only track of up to [`SLOT_CAPACITY`] outcomes.
///
/// Positions past `len` always hold [`Outcome::Unset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SlotHistory {
    cells: [Outcome; SLOT_CAPACITY],
    len: u8,
}

impl SlotHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len() >= SLOT_CAPACITY
    }

    /// Outcome at `position`, `Unset` for positions not yet cut or out of range.
    pub fn get(&self, position: usize) -> Outcome {
        self.cells.get(position).copied().unwrap_or_default()
    }

    /// Recorded outcomes in cut order.
    pub fn recorded(&self) -> &[Outcome] {
        &self.cells[..self.len()]
    }

    /// All ten cells, recorded ones first.
    pub fn cells(&self) -> &[Outcome; SLOT_CAPACITY] {
        &self.cells
    }

    /// Append an outcome. Returns false (and changes nothing) when the slot is
    /// full or the outcome is `Unset`.
    pub fn push(&mut self, outcome: Outcome) -> bool {
        if self.is_full() || outcome == Outcome::Unset {
            return false;
        }
        self.cells[self.len()] = outcome;
        self.len += 1;
        true
    }

    pub fn counts(&self) -> OutcomeCounts {
        count_outcomes(self.recorded())
    }

    pub fn successes(&self) -> u8 {
        self.counts().success
    }
}

/// Derive success/fail/length tallies from a sequence of outcomes.
///
/// `Unset` entries are ignored entirely, so `success + fail == length` holds
/// for any input.
pub fn count_outcomes(outcomes: &[Outcome]) -> OutcomeCounts {
    outcomes
        .iter()
        .fold(OutcomeCounts::default(), |mut counts, outcome| {
            match outcome {
                Outcome::Success => counts.success += 1,
                Outcome::Fail => counts.fail += 1,
                Outcome::Unset => return counts,
            }
            counts.length += 1;
            counts
        })
}

/// The three slot histories of one stone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    slots: [SlotHistory; SLOT_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slot(&self, slot: Slot) -> &SlotHistory {
        &self.slots[slot.index()]
    }

    pub fn slot_mut(&mut self, slot: Slot) -> &mut SlotHistory {
        &mut self.slots[slot.index()]
    }

    pub fn is_full(&self, slot: Slot) -> bool {
        self.slot(slot).is_full()
    }

    pub fn successes(&self, slot: Slot) -> u8 {
        self.slot(slot).successes()
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(SlotHistory::is_full)
    }

    pub fn total_recorded(&self) -> usize {
        self.slots.iter().map(SlotHistory::len).sum()
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

impl fmt::Display for Board {
    /// Compact form such as `A[ooxo......] B[..........] C[..........]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slot) in Slot::ALL.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{slot}[")?;
            for cell in self.slot(*slot).cells() {
                write!(f, "{}", cell.glyph())?;
            }
            f.write_str("]")?;
        }
        Ok(())
    }
}

/// Success chance of the next cut, in whole percent.
///
/// Only ever holds 25, 35, 45, 55, 65 or 75.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Probability(u8);

impl Probability {
    pub const START: Probability = Probability(PROBABILITY_START);

    /// Accepts only values on the 10-point grid inside the band.
    pub fn new(percent: u8) -> Option<Self> {
        let in_band = (PROBABILITY_MIN..=PROBABILITY_MAX).contains(&percent);
        let on_grid = (PROBABILITY_START - percent.min(PROBABILITY_START)) % PROBABILITY_STEP == 0;
        (in_band && on_grid).then_some(Self(percent))
    }

    pub fn percent(self) -> u8 {
        self.0
    }
}

impl Default for Probability {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Probability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl From<Probability> for u8 {
    fn from(p: Probability) -> u8 {
        p.0
    }
}

impl TryFrom<u8> for Probability {
    type Error = String;

    fn try_from(percent: u8) -> Result<Self, Self::Error> {
        Probability::new(percent).ok_or_else(|| format!("invalid probability {percent}"))
    }
}
