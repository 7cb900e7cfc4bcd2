//! Stateless UI rendering.

use super::app::App;
use caro_tictactoe::{Board, Player, Position, Square, WinResult};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Draws the main UI.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board and move list
            Constraint::Length(3), // Status
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("CARO")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    let game = app.game();
    draw_board(frame, body[0], game.current_board(), app.cursor(), game.winner());
    draw_move_list(frame, body[1], app);

    let mut status = vec![Span::styled(
        game.status().to_string(),
        Style::default().fg(Color::Yellow),
    )];
    if let Some(message) = app.message() {
        status.push(Span::raw("  "));
        status.push(Span::styled(message.to_string(), Style::default().fg(Color::Red)));
    }
    let status = Paragraph::new(Line::from(status))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(
        "Arrows+Enter or 1-9: play | [ ]: step | g: start | s: sort | r: reset | q: quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, board: &Board, cursor: Position, win: Option<WinResult>) {
    let block = Block::default().borders(Borders::ALL).title("Board");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board_area = center_rect(inner, 23, 5);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(board_area);

    for row in 0..3 {
        draw_row(frame, rows[row * 2], board, cursor, win, row);
        if row < 2 {
            let sep = Paragraph::new("───────┼───────┼───────")
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Position,
    win: Option<WinResult>,
    row: usize,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Length(7),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(pos) = Position::from_coordinates(row, col) {
            let winning = win.is_some_and(|w| w.contains(pos));
            draw_cell(frame, cols[col * 2], board.get(pos), pos == cursor, winning);
        }
        if col < 2 {
            let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, square: Square, is_cursor: bool, winning: bool) {
    let (symbol, mut style) = match square {
        Square::Empty => ("   ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Player::X) => (" X ", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
        Square::Occupied(Player::O) => (" O ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
    };

    if winning {
        style = style.bg(Color::Green);
    }
    if is_cursor {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style))).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_move_list(frame: &mut Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = app
        .game()
        .move_list(app.order())
        .iter()
        .map(|entry| {
            let style = if *entry.is_current() {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(Span::styled(format!("{:>2}. {}", entry.step(), entry), style))
        })
        .collect();

    let list = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Moves ({})", app.order().label())),
    );
    frame.render_widget(list, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::input::Action;
    use caro_tictactoe::SortOrder;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 24)).expect("test terminal");
        terminal.draw(|f| draw(f, app)).expect("draw");
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_renders_status_and_move_list() {
        let mut app = App::new(SortOrder::Ascending);
        for pos in [0, 4, 1, 7, 2].map(|i| Position::ALL[i]) {
            app.apply(Action::PlayAt(pos));
        }
        let screen = render(&app);
        assert!(screen.contains("CARO"));
        assert!(screen.contains("Winner: X"));
        assert!(screen.contains("Moves (Ascending)"));
        assert!(screen.contains("You are at move #5 (0, 2)"));
        assert!(screen.contains("Go to game start"));
    }

    #[test]
    fn test_renders_rejection_message() {
        let mut app = App::new(SortOrder::Descending);
        app.apply(Action::PlayAt(Position::Center));
        app.apply(Action::PlayAt(Position::Center));
        let screen = render(&app);
        assert!(screen.contains("Next player: O"));
        assert!(screen.contains("Square Center is already occupied"));
        assert!(screen.contains("Moves (Descending)"));
    }
}
