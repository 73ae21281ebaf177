//! Single outcome invariant: a game never has two results.

use super::super::rules::{LINES, evaluate_draw, evaluate_winner};
use super::super::{Board, GameEngine, Square};
use super::Invariant;

/// Invariant: at most one of {win, draw} holds, and only one mark owns
/// completed lines.
pub struct SingleOutcomeInvariant;

fn completed_by_both(board: &Board) -> bool {
    let mut owners = LINES.iter().filter_map(|line| {
        let [a, b, c] = line.positions();
        let sq = board.get(a);
        (sq != Square::Empty && sq == board.get(b) && sq == board.get(c)).then_some(sq)
    });
    match owners.next() {
        Some(first) => owners.any(|sq| sq != first),
        None => false,
    }
}

impl<S> Invariant<GameEngine<S>> for SingleOutcomeInvariant {
    fn holds(engine: &GameEngine<S>) -> bool {
        let board = engine.board();
        let won = evaluate_winner(board).is_some();
        !(won && evaluate_draw(board)) && !completed_by_both(board)
    }

    fn description() -> &'static str {
        "At most one outcome (win or draw) holds"
    }
}
