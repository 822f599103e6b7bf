pub mod board_scene;

use crate::core::{Session, Status};
use crate::input::CONTROLS;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn status_color(status: Status) -> Color {
    match status {
        Status::Success => Color::Green,
        Status::Idle => Color::White,
        _ => Color::Red,
    }
}

/// Draw the whole stone screen.
pub fn draw(frame: &mut Frame, session: &Session) {
    let area = frame.size();
    let block = Block::default()
        .title(" Stone Cutting Simulator ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Probability
            Constraint::Length(6), // Board rows
            Constraint::Length(2), // Attempts + status
            Constraint::Min(0),    // Padding
            Constraint::Length(1), // Controls
        ])
        .split(inner);

    let probability = Paragraph::new(Line::from(vec![
        Span::raw(" Success chance: "),
        Span::styled(
            session.probability.to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    frame.render_widget(probability, chunks[0]);

    board_scene::render_board(frame, chunks[1], &session.board);

    render_status(frame, chunks[2], session);
    render_controls(frame, chunks[4]);
}

fn render_status(frame: &mut Frame, area: Rect, session: &Session) {
    let lines = vec![
        Line::from(format!(" Attempts: {}", session.attempts)),
        Line::from(Span::styled(
            format!(" {}", session.status),
            Style::default().fg(status_color(session.status)),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let mut spans = Vec::new();
    for (i, (key, action)) in CONTROLS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::White)));
        spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_draw_fresh_session() {
        let mut terminal = Terminal::new(TestBackend::new(90, 16)).unwrap();
        let session = Session::new();
        terminal.draw(|f| draw(f, &session)).unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("Success chance: 75%"));
        assert!(text.contains("Option A"));
        assert!(text.contains("Option C"));
        assert!(text.contains("Attempts: 0"));
    }

    #[test]
    fn test_draw_shows_status() {
        let mut terminal = Terminal::new(TestBackend::new(90, 16)).unwrap();
        let mut session = Session::new();
        session.status = Status::CappedFailure { cap: 2000 };
        session.attempts = 2000;
        terminal.draw(|f| draw(f, &session)).unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("Failed (exceeded 2000 attempts)"));
        assert!(text.contains("Attempts: 2000"));
    }

    #[test]
    fn test_status_colors() {
        assert_eq!(status_color(Status::Success), Color::Green);
        assert_eq!(status_color(Status::Failure), Color::Red);
        assert_eq!(status_color(Status::CappedFailure { cap: 1 }), Color::Red);
    }
}
