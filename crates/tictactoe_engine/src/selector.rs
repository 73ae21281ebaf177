//! Heuristic opponent.
//!
//! The policy is a fixed priority list, first match wins:
//!
//! 1. complete one of our own lines,
//! 2. block a line the opponent could complete,
//! 3. take the center,
//! 4. take a random free corner,
//! 5. take any random free square.
//!
//! Randomness is a parameter, so the same seed always yields the same game.

use super::rules::evaluate_winner;
use super::{Board, Mark, Position};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument};

/// Chooses a move for the non-human player.
pub trait MoveSelector {
    /// Returns the position to play, or `None` when the board is full.
    fn select(&mut self, board: &Board, self_mark: Mark, opponent: Mark) -> Option<Position>;
}

/// Returns the first empty square (ascending index) that completes a line
/// for `mark`.
fn winning_square(board: &Board, empty: &[Position], mark: Mark) -> Option<Position> {
    empty.iter().copied().find(|&pos| {
        evaluate_winner(&board.with_mark(pos, mark)).is_some_and(|win| win.mark() == mark)
    })
}

/// Selects a move using the win > block > center > corner > random policy.
///
/// Returns `None` only when the board has no empty square.
#[instrument(skip(board, rng), fields(board = %board.display()))]
pub fn select_move<R: Rng + ?Sized>(
    board: &Board,
    self_mark: Mark,
    opponent: Mark,
    rng: &mut R,
) -> Option<Position> {
    let empty = Position::valid_moves(board);
    if empty.is_empty() {
        return None;
    }

    if let Some(pos) = winning_square(board, &empty, self_mark) {
        debug!(position = %pos, "Taking winning square");
        return Some(pos);
    }

    if let Some(pos) = winning_square(board, &empty, opponent) {
        debug!(position = %pos, "Blocking opponent");
        return Some(pos);
    }

    if board.is_empty(Position::Center) {
        debug!("Taking center");
        return Some(Position::Center);
    }

    let corners: Vec<Position> = empty.iter().copied().filter(|p| p.is_corner()).collect();
    if let Some(&pos) = corners.choose(rng) {
        debug!(position = %pos, "Taking random corner");
        return Some(pos);
    }

    let pos = empty.choose(rng).copied();
    debug!(position = ?pos, "Taking random square");
    pos
}

/// The heuristic opponent with its own seeded random stream.
#[derive(Debug, Clone)]
pub struct HeuristicSelector {
    rng: ChaCha8Rng,
    seed: u64,
}

impl HeuristicSelector {
    /// Creates a selector whose random choices are fixed by `seed`.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a selector with a fresh random seed.
    pub fn from_entropy() -> Self {
        Self::seeded(rand::random())
    }

    /// The seed this selector was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MoveSelector for HeuristicSelector {
    fn select(&mut self, board: &Board, self_mark: Mark, opponent: Mark) -> Option<Position> {
        select_move(board, self_mark, opponent, &mut self.rng)
    }
}
