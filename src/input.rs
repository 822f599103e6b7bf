//! Key dispatch for the interactive screen.

use crate::core::{Session, Status};
use crate::stone::{Outcome, RollSource, Slot};
use crate::strategy::Strategy;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Everything the player can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Cut(Slot),
    RunInstant(Strategy),
    RunBatch(Strategy),
    Reset,
    Quit,
}

/// Controls legend shown under the board, as (key, action) pairs.
pub const CONTROLS: [(&str, &str); 7] = [
    ("[A/B/C]", "Cut"),
    ("[1]", "Auto 7/7"),
    ("[2]", "Repeat 7/7"),
    ("[3]", "Auto 16"),
    ("[4]", "Repeat 16"),
    ("[R]", "Reset"),
    ("[Q]", "Quit"),
];

pub fn map_key(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }

    match key.code {
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'a' => Some(Command::Cut(Slot::A)),
            'b' => Some(Command::Cut(Slot::B)),
            'c' => Some(Command::Cut(Slot::C)),
            '1' => Some(Command::RunInstant(Strategy::SevenSeven)),
            '2' => Some(Command::RunBatch(Strategy::SevenSeven)),
            '3' => Some(Command::RunInstant(Strategy::Sixteen)),
            '4' => Some(Command::RunBatch(Strategy::Sixteen)),
            'r' => Some(Command::Reset),
            'q' => Some(Command::Quit),
            _ => None,
        },
        KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

/// What applying a command did, for the caller's event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Cut(Option<Outcome>),
    Ran(Status),
    Reset,
    Quit,
}

pub fn apply_command<R: RollSource + ?Sized>(
    session: &mut Session,
    command: Command,
    rng: &mut R,
) -> Applied {
    match command {
        Command::Cut(slot) => Applied::Cut(session.cut(slot, rng)),
        Command::RunInstant(strategy) => Applied::Ran(session.run_instant(strategy, rng)),
        Command::RunBatch(strategy) => Applied::Ran(session.run_batch(strategy, rng)),
        Command::Reset => {
            session.reset();
            Applied::Reset
        }
        Command::Quit => Applied::Quit,
    }
}
