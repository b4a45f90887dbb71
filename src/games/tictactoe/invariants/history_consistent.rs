//! History consistency invariant: one alternating placement per step.

use super::super::{Cell, GameState, Mark, Position};
use super::Invariant;

/// Invariant: Each snapshot adds exactly one mark to the one before it.
///
/// The added cell must be the recorded last move, it must have been
/// empty before, and it must hold the mark whose turn it was
/// (X after odd steps, O after even steps). Snapshot `i` therefore has
/// exactly `i` occupied cells.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history()
            .windows(2)
            .enumerate()
            .all(|(i, pair)| {
                let (before, after) = (pair[0].board(), pair[1].board());
                let Some(played) = pair[1].last_move() else {
                    return false;
                };
                let mover = Mark::for_step(i);

                let changed: Vec<Position> = Position::ALL
                    .into_iter()
                    .filter(|pos| before.get(*pos) != after.get(*pos))
                    .collect();

                changed == [played]
                    && before.get(played) == Cell::Empty
                    && after.get(played) == Cell::Occupied(mover)
                    && after.occupied() == i + 1
            })
    }

    fn description() -> &'static str {
        "Each step places exactly one mark, alternating from X"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Action, Snapshot};

    #[test]
    fn test_empty_game_holds() {
        let state = GameState::new();
        assert!(HistoryConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_multiple_moves_hold() {
        let state = GameState::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
            Position::BottomLeft,
        ])
        .expect("legal moves");

        assert!(HistoryConsistentInvariant::holds(&state));
        assert_eq!(state.len(), 5);
    }

    #[test]
    fn test_branching_history_holds() {
        let state = GameState::replay(&[Position::TopLeft, Position::Center])
            .expect("legal moves")
            .reduce(Action::Jump(1))
            .reduce(Action::Move(Position::BottomRight));

        assert!(HistoryConsistentInvariant::holds(&state));
        assert_eq!(
            state.board().get(Position::BottomRight),
            Cell::Occupied(Mark::O)
        );
    }

    #[test]
    fn test_skipped_turn_violates() {
        let mut state =
            GameState::replay(&[Position::Center, Position::TopLeft]).expect("legal moves");
        // Without the root, O's placement lands on the step where X moves
        state.history.remove(0);
        assert!(!HistoryConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_corrupted_snapshot_violates() {
        let state = GameState::replay(&[Position::Center]).expect("legal move");
        let mut bad = state.clone();
        bad.history[1] = Snapshot::initial()
            .place(Position::Center, Mark::X)
            .place(Position::TopLeft, Mark::O);

        assert!(HistoryConsistentInvariant::holds(&state));
        assert!(!HistoryConsistentInvariant::holds(&bad));
    }
}
