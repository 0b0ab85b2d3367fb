//! Tic-tac-toe board rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};
use tictactoe_engine::{Cell, Coord, GameSnapshot, Player};

/// Renders the board centred in `area`.
pub fn render_board(
    f: &mut Frame,
    area: Rect,
    snapshot: &GameSnapshot,
    cursor: Coord,
    show_hints: bool,
) {
    let board_area = center_rect(area, 40, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..3 {
        render_row(f, rows[row * 2], snapshot, row, cursor, show_hints);
        if row < 2 {
            render_separator(f, rows[row * 2 + 1]);
        }
    }
}

fn render_row(
    f: &mut Frame,
    area: Rect,
    snapshot: &GameSnapshot,
    row: usize,
    cursor: Coord,
    show_hints: bool,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(34),
        ])
        .split(area);

    for (col, at) in Coord::ALL[row * 3..row * 3 + 3].iter().enumerate() {
        render_cell(f, cols[col * 2], snapshot, *at, cursor, show_hints);
        if col < 2 {
            render_vertical_sep(f, cols[col * 2 + 1]);
        }
    }
}

/// Text and style for one cell.
pub(crate) fn cell_view(
    snapshot: &GameSnapshot,
    at: Coord,
    cursor: Coord,
    show_hints: bool,
) -> (String, Style) {
    let (text, mut style) = match snapshot.board().get(at) {
        Cell::Empty if show_hints => (
            (at.index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Empty => (String::new(), Style::default()),
        Cell::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if snapshot.winning_line().is_some_and(|line| line.contains(at)) {
        style = style.fg(Color::Green).add_modifier(Modifier::UNDERLINED);
    }
    if at == cursor && !snapshot.phase().is_terminal() {
        style = style.add_modifier(Modifier::REVERSED);
    }
    (text, style)
}

fn render_cell(
    f: &mut Frame,
    area: Rect,
    snapshot: &GameSnapshot,
    at: Coord,
    cursor: Coord,
    show_hints: bool,
) {
    let (text, style) = cell_view(snapshot, at, cursor, show_hints);
    // Put the mark on the middle line of the three-line cell.
    let paragraph = Paragraph::new(format!("\n{text}"))
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│\n│\n│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::GameEngine;

    fn at(row: usize, col: usize) -> Coord {
        Coord::new(row, col).expect("in range")
    }

    #[test]
    fn test_empty_cell_hint() {
        let snapshot = GameEngine::new().snapshot();
        let (text, _) = cell_view(&snapshot, at(2, 0), at(1, 1), true);
        assert_eq!(text, "7");
        let (text, _) = cell_view(&snapshot, at(2, 0), at(1, 1), false);
        assert_eq!(text, "");
    }

    #[test]
    fn test_cursor_is_reversed() {
        let snapshot = GameEngine::new().snapshot();
        let (_, style) = cell_view(&snapshot, at(1, 1), at(1, 1), true);
        assert!(style.add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn test_winning_line_highlighted() {
        let mut engine = GameEngine::new();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            engine.play_move(row, col).expect("in range");
        }
        let snapshot = engine.snapshot();

        let (text, style) = cell_view(&snapshot, at(0, 1), at(2, 2), true);
        assert_eq!(text, "X");
        assert_eq!(style.fg, Some(Color::Green));

        let (_, style) = cell_view(&snapshot, at(1, 0), at(2, 2), true);
        assert_eq!(style.fg, Some(Color::Red));

        // No cursor highlight once the game is over.
        let (_, style) = cell_view(&snapshot, at(2, 2), at(2, 2), true);
        assert!(!style.add_modifier.contains(Modifier::REVERSED));
    }
}
