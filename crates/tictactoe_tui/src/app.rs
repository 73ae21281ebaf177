//! Application state and logic.

use crate::input::{digit_position, move_cursor};
use crossterm::event::KeyCode;
use tictactoe_engine::{GameEngine, GameStatus, OpponentTurn, Position, Rejection};
use tracing::{debug, info, warn};

/// Main application state.
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    cursor: Position,
    status_message: String,
    should_quit: bool,
}

impl App {
    /// Creates a new application around an engine.
    pub fn new(engine: GameEngine) -> Self {
        let mut app = Self {
            engine,
            cursor: Position::Center,
            status_message: String::new(),
            should_quit: false,
        };
        app.status_message = app.idle_message();
        app
    }

    /// Gets the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Gets the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// True while the AI is due and the board is locked.
    pub fn ai_thinking(&self) -> bool {
        self.engine.pending_opponent_turn().is_some()
    }

    /// The AI move the UI loop should have on its timer.
    pub fn pending_opponent_turn(&self) -> Option<OpponentTurn> {
        self.engine.pending_opponent_turn()
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("Quit requested");
                self.should_quit = true;
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                self.cursor = move_cursor(self.cursor, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            KeyCode::Char('u') => self.undo(),
            KeyCode::Char('r') => self.restart(),
            KeyCode::Char('m') => self.toggle_mode(),
            KeyCode::Char(c) => {
                if let Some(position) = digit_position(c) {
                    self.cursor = position;
                    self.play(position);
                }
            }
            _ => {}
        }
    }

    /// Places the human's mark at `position`.
    pub fn play(&mut self, position: Position) {
        debug!(%position, "Making move");

        match self.engine.apply_move(position.to_index()) {
            Ok(receipt) => {
                self.status_message = if receipt.opponent_turn().is_some() {
                    "AI is thinking...".to_string()
                } else {
                    self.idle_message()
                };
            }
            Err(rejection) => {
                debug!(%rejection, "Move ignored");
                self.status_message = format!("Invalid move: {}", rejection);
            }
        }
    }

    /// Plays a fired AI ticket. Stale tickets are dropped silently.
    pub fn play_opponent(&mut self, turn: OpponentTurn) {
        match self.engine.play_opponent_turn(turn) {
            Ok(receipt) => {
                self.status_message = match receipt.status() {
                    GameStatus::InProgress(_) => {
                        format!("AI played {}. Your turn.", receipt.position().label())
                    }
                    _ => self.idle_message(),
                };
            }
            Err(Rejection::StaleOpponentTurn) => {
                debug!(epoch = turn.epoch(), ply = turn.ply(), "Dropped stale opponent turn");
            }
            Err(rejection) => warn!(%rejection, "Opponent turn refused"),
        }
    }

    /// Steps back one move.
    pub fn undo(&mut self) {
        match self.engine.undo() {
            Ok(()) => {
                self.status_message = if self.ai_thinking() {
                    "Move undone. AI is thinking...".to_string()
                } else {
                    "Move undone.".to_string()
                };
            }
            Err(rejection) => self.status_message = rejection.to_string(),
        }
    }

    /// Starts a new game in the current mode.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.engine.reset();
        self.status_message = self.idle_message();
    }

    /// Switches between two-player and AI mode. Starts a new game.
    pub fn toggle_mode(&mut self) {
        let mode = self.engine.mode().toggle();
        info!(?mode, "Switching mode");
        self.engine.set_mode(mode);
        self.status_message = format!("{} selected. {}", mode.label(), self.idle_message());
    }

    fn idle_message(&self) -> String {
        match self.engine.status() {
            GameStatus::InProgress(mark) => {
                format!("Player {}'s turn. Press 1-9 or Enter to move.", mark)
            }
            GameStatus::Won { mark, .. } => {
                format!("Player {} wins! Press 'r' to restart or 'q' to quit.", mark)
            }
            GameStatus::Draw => "Game ended in a draw! Press 'r' to restart or 'q' to quit.".to_string(),
        }
    }
}
