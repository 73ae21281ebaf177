//! Monotonic history invariant: each snapshot adds exactly one mark.

use super::super::{Board, GameEngine, Mark, Square};
use super::Invariant;

/// Invariant: History starts empty and grows one alternating mark at a time.
///
/// Consecutive snapshots differ in exactly one square, which goes from
/// empty to occupied by X on even steps and O on odd steps. Squares are
/// never overwritten or cleared.
pub struct MonotonicHistoryInvariant;

fn single_placement(before: &Board, after: &Board) -> Option<Mark> {
    let mut placed = None;
    for (b, a) in before.squares().iter().zip(after.squares()) {
        match (b, a) {
            (x, y) if x == y => {}
            (Square::Empty, Square::Occupied(mark)) if placed.is_none() => placed = Some(*mark),
            _ => return None,
        }
    }
    placed
}

impl<S> Invariant<GameEngine<S>> for MonotonicHistoryInvariant {
    fn holds(engine: &GameEngine<S>) -> bool {
        let snapshots: Vec<&Board> = engine.history().snapshots().collect();

        if snapshots.first().is_none_or(|root| root.occupied_count() != 0) {
            return false;
        }

        snapshots.windows(2).enumerate().all(|(step, pair)| {
            let expected = if step % 2 == 0 { Mark::X } else { Mark::O };
            single_placement(pair[0], pair[1]) == Some(expected)
        })
    }

    fn description() -> &'static str {
        "History grows one alternating mark at a time from an empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_single_placement() {
        let empty = Board::new();
        let x = empty.with_mark(Position::Center, Mark::X);
        assert_eq!(single_placement(&empty, &x), Some(Mark::X));
        assert_eq!(single_placement(&empty, &empty), None);

        let two = x.with_mark(Position::TopLeft, Mark::O);
        assert_eq!(single_placement(&empty, &two), None);

        let overwritten = empty.with_mark(Position::Center, Mark::O);
        assert_eq!(single_placement(&x, &overwritten), None);
    }

    #[test]
    fn test_holds_for_played_game() {
        let mut engine = GameEngine::new();
        engine.set_mode(crate::Mode::PlayerVsPlayer);
        for index in [0, 4, 1, 3, 2] {
            engine.apply_move(index).unwrap();
        }
        assert!(MonotonicHistoryInvariant::holds(&engine));
    }
}
