//! Root invariant: history starts at the empty board.

use super::super::{Board, GameState};
use super::Invariant;

/// Invariant: History is non-empty and snapshot 0 is the empty board.
pub struct HistoryRootedInvariant;

impl Invariant<GameState> for HistoryRootedInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history()
            .first()
            .is_some_and(|root| *root.board() == Board::new() && root.last_move().is_none())
    }

    fn description() -> &'static str {
        "History begins with the empty board"
    }
}
