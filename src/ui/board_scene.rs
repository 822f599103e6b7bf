//! Stone board rendering: one row of ten cells per slot.

use crate::constants::SLOT_CAPACITY;
use crate::stone::{Board, Outcome, Slot};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const CELL_FILLED: &str = "\u{25c6}"; // ◆
const CELL_EMPTY: &str = "\u{25c7}"; // ◇

/// Cell colour. C is the sacrificial slot, so its successes are shown as bad.
fn cell_style(slot: Slot, outcome: Outcome) -> Style {
    match (slot, outcome) {
        (Slot::C, Outcome::Success) => Style::default().fg(Color::Red),
        (_, Outcome::Success) => Style::default().fg(Color::Cyan),
        (_, Outcome::Fail) => Style::default().fg(Color::DarkGray),
        (_, Outcome::Unset) => Style::default().fg(Color::Gray),
    }
}

pub fn slot_line(board: &Board, slot: Slot) -> Line<'static> {
    let history = board.slot(slot);
    let full = history.is_full();

    let mut spans = vec![
        Span::styled(
            format!(" Option {slot} "),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{:>2} ", history.successes()),
            Style::default().fg(Color::Yellow),
        ),
    ];

    for position in 0..SLOT_CAPACITY {
        let outcome = history.get(position);
        let glyph = if outcome == Outcome::Unset {
            CELL_EMPTY
        } else {
            CELL_FILLED
        };
        spans.push(Span::styled(format!("{glyph} "), cell_style(slot, outcome)));
    }

    if full {
        spans.push(Span::styled(" full", Style::default().fg(Color::DarkGray)));
    }
    Line::from(spans)
}

pub fn render_board(frame: &mut Frame, area: Rect, board: &Board) {
    // One blank line between rows
    let mut lines = Vec::with_capacity(Slot::ALL.len() * 2);
    for slot in Slot::ALL {
        lines.push(slot_line(board, slot));
        lines.push(Line::from(""));
    }
    frame.render_widget(Paragraph::new(lines), area);
}
