//! Application state and key handling.

use crate::input::{digit_cell, move_cursor};
use crossterm::event::KeyCode;
use strum::IntoEnumIterator;
use tictactoe_core::{GameMode, Marker, Match, Position};
use tracing::{debug, info, instrument, warn};

/// Entries of the mode menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter)]
pub enum MenuOption {
    /// Two players share the keyboard.
    PlayerVsPlayer,
    /// Play against the minimax AI.
    PlayerVsAi,
    /// Leave the program.
    Quit,
}

impl MenuOption {
    /// Returns the display label for this option.
    pub fn label(self) -> &'static str {
        match self {
            Self::PlayerVsPlayer => "Player vs Player",
            Self::PlayerVsAi => "Player vs AI",
            Self::Quit => "Quit",
        }
    }

    /// Menu entries in display order.
    pub fn all() -> Vec<MenuOption> {
        Self::iter().collect()
    }
}

/// Which screen is showing.
#[derive(Debug)]
pub enum Screen {
    /// Choosing between game modes.
    ModeSelect {
        /// Highlighted menu entry.
        selected: usize,
    },
    /// A game is on the board.
    Playing {
        /// The running match.
        game: Match,
        /// Cell under the keyboard cursor.
        cursor: Position,
        /// Last notice for the player (AI reply or rejected move).
        notice: Option<String>,
    },
}

/// Whether the event loop keeps running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep going.
    Continue,
    /// Exit the program.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    screen: Screen,
    ai_marker: Marker,
}

impl App {
    /// Creates the app, starting in `mode` or on the mode menu.
    #[instrument]
    pub fn new(mode: Option<GameMode>, ai_marker: Marker) -> Self {
        let mut app = Self {
            screen: Screen::ModeSelect { selected: 0 },
            ai_marker,
        };
        if let Some(mode) = mode {
            app.start(mode);
        }
        app
    }

    /// Current screen.
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        match self.screen {
            Screen::ModeSelect { .. } => self.menu_key(key),
            Screen::Playing { .. } => self.game_key(key),
        }
    }

    fn menu_key(&mut self, key: KeyCode) -> Control {
        let Screen::ModeSelect { selected } = &mut self.screen else {
            return Control::Continue;
        };
        let options = MenuOption::all();

        let chosen = match key {
            KeyCode::Up => {
                *selected = selected.checked_sub(1).unwrap_or(options.len() - 1);
                None
            }
            KeyCode::Down => {
                *selected = (*selected + 1) % options.len();
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => options.get(*selected).copied(),
            KeyCode::Char('1') => Some(MenuOption::PlayerVsPlayer),
            KeyCode::Char('2') => Some(MenuOption::PlayerVsAi),
            KeyCode::Char('q') | KeyCode::Esc => Some(MenuOption::Quit),
            _ => None,
        };

        match chosen {
            Some(MenuOption::PlayerVsPlayer) => self.start(GameMode::PlayerVsPlayer),
            Some(MenuOption::PlayerVsAi) => self.start(GameMode::PlayerVsAi { ai: self.ai_marker }),
            Some(MenuOption::Quit) => {
                info!("User quit from menu");
                return Control::Quit;
            }
            None => {}
        }
        Control::Continue
    }

    fn game_key(&mut self, key: KeyCode) -> Control {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                return Control::Quit;
            }
            KeyCode::Char('m') => {
                debug!("Back to mode menu");
                self.screen = Screen::ModeSelect { selected: 0 };
            }
            KeyCode::Char('r') => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Screen::Playing { cursor, .. } = self.screen {
                    self.play(cursor);
                }
            }
            KeyCode::Char(c) => {
                if let Some(pos) = digit_cell(c) {
                    self.play(pos);
                }
            }
            arrow => {
                if let Screen::Playing { cursor, .. } = &mut self.screen {
                    *cursor = move_cursor(*cursor, arrow);
                }
            }
        }
        Control::Continue
    }

    fn start(&mut self, mode: GameMode) {
        info!(mode = mode.label(), "Starting game");
        let game = Match::new(mode);
        let notice = game
            .engine()
            .history()
            .last()
            .map(|opening| format!("AI opened at {}", opening.position));
        self.screen = Screen::Playing {
            game,
            cursor: Position::Center,
            notice,
        };
    }

    fn restart(&mut self) {
        if let Screen::Playing { game, cursor, notice } = &mut self.screen {
            debug!("Restarting game");
            let opening = game.restart();
            *cursor = Position::Center;
            *notice = opening.map(|pos| format!("AI opened at {}", pos));
        }
    }

    fn play(&mut self, pos: Position) {
        let Screen::Playing { game, cursor, notice } = &mut self.screen else {
            return;
        };
        *cursor = pos;
        match game.play(pos.to_index()) {
            Ok(turn) => {
                *notice = turn.ai_reply.map(|reply| format!("AI played {}", reply));
            }
            Err(e) => {
                warn!(error = %e, position = %pos, "Move rejected");
                *notice = Some(e.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::Outcome;

    fn game(app: &App) -> &Match {
        match app.screen() {
            Screen::Playing { game, .. } => game,
            Screen::ModeSelect { .. } => panic!("Expected a game on screen"),
        }
    }

    fn notice(app: &App) -> Option<&str> {
        match app.screen() {
            Screen::Playing { notice, .. } => notice.as_deref(),
            Screen::ModeSelect { .. } => None,
        }
    }

    #[test]
    fn test_menu_selects_ai_mode() {
        let mut app = App::new(None, Marker::O);
        assert_eq!(app.handle_key(KeyCode::Down), Control::Continue);
        app.handle_key(KeyCode::Enter);
        assert_eq!(game(&app).mode(), GameMode::vs_ai());
    }

    #[test]
    fn test_menu_wraps_and_quits() {
        let mut app = App::new(None, Marker::O);
        app.handle_key(KeyCode::Up);
        assert!(matches!(app.screen(), Screen::ModeSelect { selected: 2 }));
        assert_eq!(app.handle_key(KeyCode::Enter), Control::Quit);
    }

    #[test]
    fn test_digit_plays_and_ai_replies() {
        let mut app = App::new(Some(GameMode::vs_ai()), Marker::O);
        app.handle_key(KeyCode::Char('5'));
        assert_eq!(game(&app).engine().history().len(), 2);
        assert_eq!(notice(&app), Some("AI played Top-left"));
    }

    #[test]
    fn test_cursor_then_enter_plays_cell() {
        let mut app = App::new(Some(GameMode::PlayerVsPlayer), Marker::O);
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Left);
        app.handle_key(KeyCode::Enter);
        assert_eq!(
            game(&app).board().get(Position::TopLeft).marker(),
            Some(Marker::X)
        );
    }

    #[test]
    fn test_occupied_cell_shows_notice() {
        let mut app = App::new(Some(GameMode::PlayerVsPlayer), Marker::O);
        app.handle_key(KeyCode::Char('5'));
        app.handle_key(KeyCode::Char('5'));
        assert_eq!(notice(&app), Some("Square Center is already occupied"));
        assert_eq!(game(&app).engine().history().len(), 1);
    }

    #[test]
    fn test_restart_and_menu_keys() {
        let mut app = App::new(Some(GameMode::PlayerVsPlayer), Marker::O);
        for key in ['1', '4', '2', '5', '3'] {
            app.handle_key(KeyCode::Char(key));
        }
        assert_eq!(game(&app).outcome(), Outcome::Win(Marker::X));

        app.handle_key(KeyCode::Char('r'));
        assert_eq!(game(&app).outcome(), Outcome::InProgress);
        assert!(game(&app).engine().history().is_empty());

        app.handle_key(KeyCode::Char('m'));
        assert!(matches!(app.screen(), Screen::ModeSelect { .. }));
    }

    #[test]
    fn test_x_playing_ai_opens() {
        let app = App::new(Some(GameMode::PlayerVsAi { ai: Marker::X }), Marker::X);
        assert_eq!(notice(&app), Some("AI opened at Top-left"));
    }
}
