//! Pointer invariant: the current step names an existing snapshot.

use super::super::GameState;
use super::Invariant;

/// Invariant: `current_step` is a valid index into history.
pub struct StepInRangeInvariant;

impl Invariant<GameState> for StepInRangeInvariant {
    fn holds(state: &GameState) -> bool {
        state.current_step() < state.history().len()
    }

    fn description() -> &'static str {
        "Current step points into history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Action, Position};

    #[test]
    fn test_jumps_stay_in_range() {
        let state = GameState::replay(&[Position::Center, Position::TopLeft]).expect("legal moves");
        for step in 0..=state.last_step() {
            let jumped = state.jump_to(step).expect("step in range");
            assert!(StepInRangeInvariant::holds(&jumped));
        }
    }

    #[test]
    fn test_rejected_jump_keeps_pointer() {
        let state = GameState::new().reduce(Action::Jump(3));
        assert!(StepInRangeInvariant::holds(&state));
        assert_eq!(state.current_step(), 0);
    }

    #[test]
    fn test_dangling_pointer_violates() {
        let mut state = GameState::new();
        state.current_step = 1;
        assert!(!StepInRangeInvariant::holds(&state));
    }
}
