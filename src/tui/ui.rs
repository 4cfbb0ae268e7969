//! Stateless UI rendering for caro.

use caro_engine::{Cell, Coord, GameState, Player};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::App;

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(10),   // Players, board, history
            Constraint::Length(3), // Status
        ])
        .split(area);

    let title = Paragraph::new("Caro - Five in a Row")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(18),
            Constraint::Min(20),
            Constraint::Length(20),
        ])
        .split(chunks[1]);

    draw_players(frame, columns[0], app.game());
    draw_board(frame, columns[1], app.game(), *app.cursor());
    draw_history(frame, columns[2], app.game());

    let status = Paragraph::new(format!(
        "{}  |  Moves: {}  |  arrows/hjkl move, Enter plays, r restarts, q quits",
        app.status_message(),
        app.game().move_count()
    ))
    .style(Style::default().fg(Color::Yellow))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::X => Color::Blue,
        Player::O => Color::Red,
    }
}

fn draw_players(frame: &mut Frame, area: Rect, game: &GameState) {
    let cards = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Length(4), Constraint::Min(0)])
        .split(area);

    for (player, card) in [Player::X, Player::O].into_iter().zip(cards.iter()) {
        let label = if game.winner() == Some(player) {
            "Winner"
        } else if !game.is_over() && game.current_player() == player {
            "To move"
        } else {
            ""
        };

        let mut border = Style::default().fg(player_color(player));
        if !label.is_empty() {
            border = border.add_modifier(Modifier::BOLD);
        }

        let paragraph = Paragraph::new(label)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .title(format!("Player {}", player))
                    .borders(Borders::ALL)
                    .border_style(border),
            );
        frame.render_widget(paragraph, *card);
    }
}

fn draw_board(frame: &mut Frame, area: Rect, game: &GameState, cursor: Coord) {
    let board = game.board();
    let line = game.winning_line();

    let mut header = vec![Span::raw("    ")];
    for col in 0..board.size() {
        header.push(Span::styled(
            format!(" {} ", Coord::column_letter(col)),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let mut lines = vec![Line::from(header)];
    for (row, cells) in board.rows().enumerate() {
        let mut spans = vec![Span::styled(
            format!("{:>3} ", row + 1),
            Style::default().fg(Color::DarkGray),
        )];

        for (col, cell) in cells.iter().enumerate() {
            let coord = Coord::new(row, col);
            let (symbol, mut style) = match cell {
                Cell::Empty => (" · ", Style::default().fg(Color::DarkGray)),
                Cell::Occupied(p) => (
                    if *p == Player::X { " X " } else { " O " },
                    Style::default()
                        .fg(player_color(*p))
                        .add_modifier(Modifier::BOLD),
                ),
            };

            if line.is_some_and(|l| l.contains(coord)) {
                style = style.bg(Color::Yellow).fg(Color::Black);
            }
            if coord == cursor {
                style = style.bg(Color::White).fg(Color::Black);
            }
            spans.push(Span::styled(symbol, style));
        }
        lines.push(Line::from(spans));
    }

    let board_widget = Paragraph::new(lines).block(
        Block::default()
            .title(format!(
                "{}x{}, {} to win",
                board.size(),
                board.size(),
                game.config().win_length()
            ))
            .borders(Borders::ALL),
    );
    frame.render_widget(board_widget, area);
}

fn draw_history(frame: &mut Frame, area: Rect, game: &GameState) {
    let lines: Vec<Line> = game
        .history()
        .iter()
        .enumerate()
        .map(|(i, m)| {
            Line::from(vec![
                Span::raw(format!("{:>3}. ", i + 1)),
                Span::styled(
                    m.player.to_string(),
                    Style::default().fg(player_color(m.player)),
                ),
                Span::raw(format!(" {}", m.coord)),
            ])
        })
        .collect();

    // Keep the latest moves in view
    let visible = usize::from(area.height.saturating_sub(2));
    let scroll = u16::try_from(lines.len().saturating_sub(visible)).unwrap_or(u16::MAX);

    let history = Paragraph::new(lines)
        .scroll((scroll, 0))
        .block(Block::default().title("Moves").borders(Borders::ALL));
    frame.render_widget(history, area);
}
