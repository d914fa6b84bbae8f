//! Stateless rendering of the app.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tictactoe_core::{Marker, Match, Position, Square};

use crate::app::{App, MenuOption, Screen};

const CELL_WIDTH: u16 = 7;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = 3 * 3 + 2;

/// Renders the current screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(BOARD_HEIGHT),
            Constraint::Length(3), // Status
            Constraint::Length(1), // Key help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    match app.screen() {
        Screen::ModeSelect { selected } => {
            draw_menu(frame, chunks[1], *selected);
            draw_status(frame, chunks[2], "Select Game Mode", None);
            draw_help(frame, chunks[3], "↑/↓ choose · Enter start · 1 PvP · 2 vs AI · q quit");
        }
        Screen::Playing {
            game,
            cursor,
            notice,
        } => {
            draw_board(frame, chunks[1], game, *cursor);
            draw_status(frame, chunks[2], &game.status(), notice.as_deref());
            draw_help(
                frame,
                chunks[3],
                "arrows move · Enter/1-9 play · r restart · m menu · q quit",
            );
        }
    }
}

fn draw_menu(frame: &mut Frame, area: Rect, selected: usize) {
    let items: Vec<ListItem> = MenuOption::all()
        .into_iter()
        .enumerate()
        .map(|(i, option)| ListItem::new(format!("{}. {}", i + 1, option.label())))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Mode"))
        .highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan))
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, center_rect(area, 30, 5), &mut state);
}

fn draw_board(frame: &mut Frame, area: Rect, game: &Match, cursor: Position) {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
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

    let winning = game.engine().winning_line();
    let show_cursor = game.engine().is_active();

    for row in 0..3 {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
            ])
            .split(rows[row * 2]);

        for col in 0..3 {
            let Some(pos) = Position::from_row_col(row, col) else {
                continue;
            };
            let highlight = winning.is_some_and(|line| line.contains(&pos));
            let focused = show_cursor && pos == cursor;
            draw_cell(frame, cols[col * 2], game.board().get(pos), highlight, focused);
            if col < 2 {
                draw_separator_vertical(frame, cols[col * 2 + 1]);
            }
        }

        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, square: Square, winning: bool, focused: bool) {
    let (symbol, base_style) = match square {
        Square::Empty => (" ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Marker::X) => (
            "X",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Marker::O) => (
            "O",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if winning {
        base_style.bg(Color::Green)
    } else if focused {
        base_style.bg(Color::White)
    } else {
        base_style
    };

    // Middle line of the three-line cell carries the marker
    let lines = vec![
        Line::from(Span::styled(" ".repeat(CELL_WIDTH as usize), style)),
        Line::from(Span::styled(format!("   {}   ", symbol), style)),
        Line::from(Span::styled(" ".repeat(CELL_WIDTH as usize), style)),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(BOARD_WIDTH as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"), Line::from("│"), Line::from("│")])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_status(frame: &mut Frame, area: Rect, status: &str, notice: Option<&str>) {
    let mut spans = vec![Span::styled(
        status.to_string(),
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    )];
    if let Some(notice) = notice {
        spans.push(Span::raw(" · "));
        spans.push(Span::styled(notice.to_string(), Style::default().fg(Color::Gray)));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn draw_help(frame: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use ratatui::{Terminal, backend::TestBackend};
    use tictactoe_core::GameMode;

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(70, 24)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_menu_lists_modes() {
        let app = App::new(None, Marker::O);
        let text = render(&app);
        assert!(text.contains("Select Game Mode"));
        assert!(text.contains("Player vs Player"));
        assert!(text.contains("Player vs AI"));
    }

    #[test]
    fn test_board_shows_status_and_markers() {
        let mut app = App::new(Some(GameMode::PlayerVsPlayer), Marker::O);
        app.handle_key(KeyCode::Char('5'));
        let text = render(&app);
        assert!(text.contains("Current Player: O"));
        assert!(text.contains('X'));
    }

    #[test]
    fn test_win_is_announced() {
        let mut app = App::new(Some(GameMode::PlayerVsPlayer), Marker::O);
        for key in ['1', '4', '2', '5', '3'] {
            app.handle_key(KeyCode::Char(key));
        }
        assert!(render(&app).contains("Player X Wins!"));
    }

    #[test]
    fn test_center_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 10, 4);
        let rect = center_rect(area, 20, 2);
        assert_eq!(rect, Rect::new(0, 1, 10, 2));
    }
}
