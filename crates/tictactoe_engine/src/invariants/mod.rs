//! First-class invariants for the game engine.
//!
//! Invariants are logical properties that must hold after every engine
//! transition. The engine checks them in debug builds; tests check them
//! directly.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn finish(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        finish(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        finish(violations)
    }
}

pub mod monotonic_history;
pub mod single_outcome;
pub mod turn_parity;

pub use monotonic_history::MonotonicHistoryInvariant;
pub use single_outcome::SingleOutcomeInvariant;
pub use turn_parity::TurnParityInvariant;

/// All engine invariants as a composable set.
pub type EngineInvariants = (
    TurnParityInvariant,
    MonotonicHistoryInvariant,
    SingleOutcomeInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EngineConfig, GameEngine, Mode};

    fn pvp() -> GameEngine {
        GameEngine::from_config(&EngineConfig::default().with_mode(Mode::PlayerVsPlayer).with_seed(1))
    }

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(EngineInvariants::check_all(&pvp()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut engine = pvp();
        for index in [0, 4, 2, 1, 7] {
            engine.apply_move(index).unwrap();
        }
        engine.undo().unwrap();
        assert!(EngineInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut engine = pvp();
        engine.apply_move(4).unwrap();
        engine.corrupt_turn_for_test();

        let violations = EngineInvariants::check_all(&engine).unwrap_err();
        assert_eq!(
            violations,
            vec![InvariantViolation::new(
                <TurnParityInvariant as Invariant<GameEngine>>::description()
            )]
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (TurnParityInvariant, SingleOutcomeInvariant);
        assert!(TwoInvariants::check_all(&pvp()).is_ok());
    }
}
