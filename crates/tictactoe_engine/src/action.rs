//! Outcomes of engine operations.
//!
//! Invalid operations are never exceptional in tic-tac-toe: clicking an
//! occupied square or undoing an empty history simply does nothing. The
//! engine still reports *why* nothing happened through [`Rejection`].

use super::{GameStatus, Mark, Position};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Reason an operation was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::Error)]
pub enum Rejection {
    /// Index outside 0-8.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(#[error(not(source))] usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    OccupiedCell(#[error(not(source))] Position),

    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// The AI holds this mark and is due to move.
    #[display("It's not the human's turn ({} is the AI's mark)", _0)]
    NotYourTurn(#[error(not(source))] Mark),

    /// Only the initial board remains.
    #[display("No moves to undo")]
    NoHistory,

    /// The opponent ticket was issued for a game state that no longer exists.
    #[display("Opponent turn was cancelled")]
    StaleOpponentTurn,
}

/// Record of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReceipt {
    mark: Mark,
    position: Position,
    status: GameStatus,
    opponent_turn: Option<OpponentTurn>,
}

impl MoveReceipt {
    pub(crate) fn new(
        mark: Mark,
        position: Position,
        status: GameStatus,
        opponent_turn: Option<OpponentTurn>,
    ) -> Self {
        Self {
            mark,
            position,
            status,
            opponent_turn,
        }
    }

    /// Mark that was placed.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Where it was placed.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Status after the move.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Ticket for the AI's reply, present when the AI is now due to move.
    ///
    /// Hand it to a scheduler and pass it back to
    /// [`GameEngine::play_opponent_turn`](crate::GameEngine::play_opponent_turn)
    /// once the delay has elapsed.
    pub fn opponent_turn(&self) -> Option<OpponentTurn> {
        self.opponent_turn
    }
}

impl std::fmt::Display for MoveReceipt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// A pending AI move.
///
/// The ticket records the engine epoch and history length at the moment it
/// was issued. Reset, mode changes and undo advance the epoch, so a ticket
/// that outlives the position it was issued for is refused when played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OpponentTurn {
    epoch: u64,
    ply: usize,
    mark: Mark,
    delay: Duration,
}

impl OpponentTurn {
    pub(crate) fn new(epoch: u64, ply: usize, mark: Mark, delay: Duration) -> Self {
        Self {
            epoch,
            ply,
            mark,
            delay,
        }
    }

    /// Engine epoch the ticket belongs to.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// History length the ticket expects.
    pub fn ply(&self) -> usize {
        self.ply
    }

    /// Mark the AI will place.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Pacing delay before the move should be played.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}
