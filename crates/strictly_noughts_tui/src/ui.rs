//! Stateless UI rendering for the noughts and crosses board.

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strictly_noughts::{Cell, DisplayState, Phase, Player, Position};

const KEY_HELP: &str =
    "1-9/arrows+Enter: move  p: two players  c: computer  e/m/h: difficulty  r: restart  q: quit";

/// Renders title, board with cursor highlight, status and key help.
pub fn draw(frame: &mut Frame, app: &App) {
    let state = app.state();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Keys
        ])
        .split(frame.area());

    let title = Paragraph::new(format!("Strictly Noughts - {}", app.title()))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], &state, app.cursor());

    let status = Paragraph::new(app.status())
        .style(status_style(&state))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(KEY_HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn status_style(state: &DisplayState) -> Style {
    match state.phase() {
        Phase::Ended(_) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        Phase::AutomationPending => Style::default().fg(Color::Magenta),
        Phase::AwaitingMove => Style::default().fg(Color::Yellow),
    }
}

fn draw_board(frame: &mut Frame, area: Rect, state: &DisplayState, cursor: Position) {
    let board_area = center_rect(area, 38, 11);

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

    for (row, rect) in rows.iter().enumerate() {
        if row % 2 == 1 {
            draw_separator(frame, *rect);
        } else {
            draw_row(frame, *rect, state, cursor, row / 2);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, state: &DisplayState, cursor: Position, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (col, rect) in cols.iter().enumerate() {
        if col % 2 == 1 {
            frame.render_widget(
                Paragraph::new("│\n│\n│").style(Style::default().fg(Color::DarkGray)),
                *rect,
            );
        } else if let Some(position) = Position::from_row_col(row, col / 2) {
            draw_cell(frame, *rect, state, cursor, position);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, state: &DisplayState, cursor: Position, pos: Position) {
    let index = pos.to_index();
    let number = (index + 1).to_string();

    let (symbol, base_style) = match state.cells()[index] {
        Cell::Empty => (number.as_str(), Style::default().fg(Color::DarkGray)),
        Cell::Occupied(Player::X) => (
            "X",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Occupied(Player::O) => (
            "O",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if pos == cursor && state.is_active() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!("   {}   ", symbol), style)),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
