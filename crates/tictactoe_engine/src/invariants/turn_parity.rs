//! Turn parity invariant: the explicit turn flag agrees with the board.

use super::super::GameEngine;
use super::Invariant;

/// Invariant: X is next exactly when an even number of squares is occupied.
pub struct TurnParityInvariant;

impl<S> Invariant<GameEngine<S>> for TurnParityInvariant {
    fn holds(engine: &GameEngine<S>) -> bool {
        engine.x_is_next() == (engine.board().occupied_count() % 2 == 0)
    }

    fn description() -> &'static str {
        "Turn flag matches occupied-square parity"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EngineConfig, Mode};

    #[test]
    fn test_holds_through_play_and_undo() {
        let mut engine =
            GameEngine::from_config(&EngineConfig::default().with_mode(Mode::PlayerVsPlayer));
        assert!(TurnParityInvariant::holds(&engine));
        for index in [4, 0, 8] {
            engine.apply_move(index).unwrap();
            assert!(TurnParityInvariant::holds(&engine));
        }
        while engine.undo().is_ok() {
            assert!(TurnParityInvariant::holds(&engine));
        }
    }

    #[test]
    fn test_flipped_flag_violates() {
        let mut engine = GameEngine::new();
        engine.corrupt_turn_for_test();
        assert!(!TurnParityInvariant::holds(&engine));
    }
}
