//! Stateless UI rendering for noughts.

use noughts::{Mark, Mode, SessionView, Square};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Renders one frame from a session snapshot.
pub fn draw(frame: &mut Frame, view: &SessionView) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    // Title carries the mode
    let title = Paragraph::new(format!("Noughts - {}", view.mode.name()))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], view);

    let status = Paragraph::new(view.message.as_str())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(help_line(view))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn help_line(view: &SessionView) -> &'static str {
    if view.mode == Mode::VsComputer {
        "1-9 move | u undo | r reset | c mode | q quit"
    } else {
        "1-9 move | r reset | c mode | q quit"
    }
}

fn draw_board(frame: &mut Frame, area: Rect, view: &SessionView) {
    // Center the board
    let board_area = center_rect(area, 41, 11);

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

    draw_row(frame, rows[0], view, 0);
    draw_separator(frame, rows[1]);
    draw_row(frame, rows[2], view, 3);
    draw_separator(frame, rows[3]);
    draw_row(frame, rows[4], view, 6);
}

fn draw_row(frame: &mut Frame, area: Rect, view: &SessionView, start: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(13),
            Constraint::Length(1),
            Constraint::Length(13),
            Constraint::Length(1),
            Constraint::Length(13),
        ])
        .split(area);

    draw_cell(frame, cols[0], view, start);
    draw_vertical_separator(frame, cols[1]);
    draw_cell(frame, cols[2], view, start + 1);
    draw_vertical_separator(frame, cols[3]);
    draw_cell(frame, cols[4], view, start + 2);
}

fn draw_cell(frame: &mut Frame, area: Rect, view: &SessionView, cell: usize) {
    let (symbol, base_style) = match view.board.get(cell) {
        Some(Square::Occupied(Mark::X)) => (
            "X".to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Some(Square::Occupied(Mark::O)) => (
            "O".to_string(),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        _ => (
            format!("{}", cell + 1),
            Style::default().fg(Color::DarkGray),
        ),
    };

    let style = if view.is_winning_cell(cell) {
        base_style.bg(Color::Green).fg(Color::Black)
    } else {
        base_style
    };

    // Blank first line seats the mark on the middle row of the cell.
    let lines = vec![Line::from(""), Line::from(Span::styled(symbol, style))];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep =
        Paragraph::new("─".repeat(area.width as usize)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_vertical_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
