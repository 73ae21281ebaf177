//! The game-state engine.

use super::action::{MoveReceipt, OpponentTurn, Rejection};
use super::config::EngineConfig;
use super::history::History;
use super::rules::{self, Win};
use super::selector::{HeuristicSelector, MoveSelector};
use super::{Board, GameStatus, Mark, Mode, Position};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Owns the board history, turn state and mode of a single game.
///
/// Every operation is a plain method call on an explicitly owned value; the
/// engine never schedules anything itself. When the AI is due to move,
/// [`apply_move`](Self::apply_move) hands back an [`OpponentTurn`] ticket
/// and the caller decides when to play it.
#[derive(Debug, Clone)]
pub struct GameEngine<S = HeuristicSelector> {
    history: History,
    x_is_next: bool,
    mode: Mode,
    epoch: u64,
    opponent_delay: Duration,
    selector: S,
}

impl GameEngine<HeuristicSelector> {
    /// Creates an engine with default settings and a random seed.
    pub fn new() -> Self {
        Self::from_config(&EngineConfig::default())
    }

    /// Creates an engine from configuration.
    ///
    /// When the config carries no seed a fresh one is drawn; it is logged so
    /// the game can be reproduced.
    #[instrument(skip(config))]
    pub fn from_config(config: &EngineConfig) -> Self {
        let selector = match config.seed() {
            Some(seed) => HeuristicSelector::seeded(*seed),
            None => HeuristicSelector::from_entropy(),
        };
        info!(seed = selector.seed(), mode = ?config.mode(), "Creating game engine");
        Self::with_selector(config, selector)
    }

    /// Checks for a completed line on `board`.
    pub fn evaluate_winner(board: &Board) -> Option<Win> {
        rules::evaluate_winner(board)
    }

    /// True when `board` is full with no completed line.
    pub fn evaluate_draw(board: &Board) -> bool {
        rules::evaluate_draw(board)
    }
}

impl Default for GameEngine<HeuristicSelector> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> GameEngine<S> {
    /// Creates an engine that asks `selector` for the AI's moves.
    pub fn with_selector(config: &EngineConfig, selector: S) -> Self {
        Self {
            history: History::new(),
            x_is_next: true,
            mode: *config.mode(),
            epoch: 0,
            opponent_delay: config.opponent_delay(),
            selector,
        }
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        self.history.current()
    }

    /// All snapshots since the last reset.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// True when X moves next.
    pub fn x_is_next(&self) -> bool {
        self.x_is_next
    }

    /// Mark that moves next.
    pub fn to_move(&self) -> Mark {
        if self.x_is_next { Mark::X } else { Mark::O }
    }

    /// The winning line on the current board, if any.
    pub fn winner(&self) -> Option<Win> {
        rules::evaluate_winner(self.board())
    }

    /// Derived status of the current board.
    pub fn status(&self) -> GameStatus {
        let board = self.board();
        if let Some(win) = rules::evaluate_winner(board) {
            GameStatus::Won {
                mark: win.mark(),
                line: win.line(),
            }
        } else if rules::is_full(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress(self.to_move())
        }
    }

    /// True when at least one move can be undone.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// True when a human may place the next mark.
    ///
    /// False once the game is over, and while the AI is due to move.
    pub fn accepts_human_move(&self) -> bool {
        match self.status() {
            GameStatus::InProgress(next) => self.mode.ai_mark() != Some(next),
            _ => false,
        }
    }

    /// Issues a ticket for the AI's move if the AI is due to move now.
    pub fn pending_opponent_turn(&self) -> Option<OpponentTurn> {
        let ai = self.mode.ai_mark()?;
        match self.status() {
            GameStatus::InProgress(next) if next == ai => Some(OpponentTurn::new(
                self.epoch,
                self.history.len(),
                ai,
                self.opponent_delay,
            )),
            _ => None,
        }
    }

    /// Places the mark that is due at `index` (0-8).
    ///
    /// Rejected without changing anything if the index is out of range, the
    /// game is over, the AI is due to move, or the square is taken.
    #[instrument(skip(self), fields(mode = ?self.mode, to_move = %self.to_move()))]
    pub fn apply_move(&mut self, index: usize) -> Result<MoveReceipt, Rejection> {
        let position = Position::from_index(index).ok_or(Rejection::OutOfBounds(index))?;

        match self.status() {
            GameStatus::InProgress(next) => {
                if let Some(ai) = self.mode.ai_mark().filter(|ai| *ai == next) {
                    debug!("Rejected: AI is due to move");
                    return Err(Rejection::NotYourTurn(ai));
                }
            }
            _ => {
                debug!("Rejected: game is over");
                return Err(Rejection::GameOver);
            }
        }

        self.place(position)
    }

    /// Undoes the most recent move.
    ///
    /// Any outstanding opponent ticket becomes stale.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn undo(&mut self) -> Result<(), Rejection> {
        if self.history.pop().is_none() {
            return Err(Rejection::NoHistory);
        }
        self.x_is_next = !self.x_is_next;
        self.epoch += 1;
        debug!(to_move = %self.to_move(), "Move undone");
        self.check_invariants();
        Ok(())
    }

    /// Clears the board; X moves first.
    ///
    /// Any outstanding opponent ticket becomes stale.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.history.reset();
        self.x_is_next = true;
        self.epoch += 1;
        info!(mode = ?self.mode, "Game reset");
    }

    /// Switches mode. Always resets the game.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.reset();
    }

    /// Shared placement path for human and AI moves.
    fn place(&mut self, position: Position) -> Result<MoveReceipt, Rejection> {
        let board = self.board();
        if !board.is_empty(position) {
            debug!(%position, "Rejected: square occupied");
            return Err(Rejection::OccupiedCell(position));
        }

        let mark = self.to_move();
        let next = board.with_mark(position, mark);
        self.history.push(next);
        self.x_is_next = !self.x_is_next;

        let status = self.status();
        info!(%mark, %position, %status, "Move applied");
        self.check_invariants();

        Ok(MoveReceipt::new(
            mark,
            position,
            status,
            self.pending_opponent_turn(),
        ))
    }

    #[cfg(debug_assertions)]
    fn check_invariants(&self) {
        use super::invariants::{EngineInvariants, InvariantSet};

        if let Err(violations) = EngineInvariants::check_all(self) {
            for violation in &violations {
                tracing::warn!(description = %violation.description, "Invariant violated");
            }
            debug_assert!(violations.is_empty(), "Engine invariants violated");
        }
    }

    #[cfg(not(debug_assertions))]
    fn check_invariants(&self) {}

    #[cfg(test)]
    pub(crate) fn corrupt_turn_for_test(&mut self) {
        self.x_is_next = !self.x_is_next;
    }
}

impl<S: MoveSelector> GameEngine<S> {
    /// Plays the AI's move for a ticket issued earlier.
    ///
    /// The ticket is re-validated against the engine first: if the game was
    /// reset, the mode changed, a move was undone, or the board moved on
    /// since it was issued, the ticket is refused and nothing changes.
    #[instrument(skip(self), fields(epoch = self.epoch, len = self.history.len()))]
    pub fn play_opponent_turn(&mut self, turn: OpponentTurn) -> Result<MoveReceipt, Rejection> {
        if turn.epoch() != self.epoch
            || turn.ply() != self.history.len()
            || self.mode.ai_mark() != Some(turn.mark())
        {
            debug!(?turn, "Discarding stale opponent turn");
            return Err(Rejection::StaleOpponentTurn);
        }

        match self.status() {
            GameStatus::InProgress(next) if next == turn.mark() => {}
            GameStatus::InProgress(_) => return Err(Rejection::StaleOpponentTurn),
            _ => return Err(Rejection::GameOver),
        }

        let ai = turn.mark();
        let position = self
            .selector
            .select(self.history.current(), ai, ai.opponent())
            .ok_or(Rejection::GameOver)?;
        debug!(%position, "Opponent selected move");
        self.place(position)
    }
}
