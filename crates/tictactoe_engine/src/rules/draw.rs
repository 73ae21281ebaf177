//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};
use super::win::evaluate_winner;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A draw is a full board with no winner.
#[instrument(skip(board))]
pub fn evaluate_draw(board: &Board) -> bool {
    is_full(board) && evaluate_winner(board).is_none()
}
