//! First-class action types for tic-tac-toe.
//!
//! Actions are domain events, not side effects. They represent the
//! player's intent and are validated by [`GameState::try_apply`]
//! before anything changes.
//!
//! [`GameState::try_apply`]: super::GameState::try_apply

use super::Position;
use serde::{Deserialize, Serialize};

/// Something the player asks the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Place the next mark at a position.
    Move(Position),
    /// Move the current step pointer to a point in history.
    Jump(usize),
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Move(pos) => write!(f, "move to {}", pos.label()),
            Action::Jump(0) => write!(f, "jump to game start"),
            Action::Jump(step) => write!(f, "jump to move #{}", step),
        }
    }
}

/// Error that can occur when validating a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The current board already has a winner.
    #[display("Game is already over")]
    GameOver,

    /// A raw index outside 0-8.
    #[display("Position {} out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),
}

impl std::error::Error for MoveError {}

/// Error that can occur when jumping through history.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum JumpError {
    /// No snapshot exists at the requested step.
    #[display("Step {} out of range (history has {} entries)", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// History length at the time of the request.
        len: usize,
    },
}

impl std::error::Error for JumpError {}

/// Any rejection produced while applying an [`Action`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum ActionError {
    /// Rejected move.
    #[display("{}", _0)]
    Move(MoveError),

    /// Rejected jump.
    #[display("{}", _0)]
    Jump(JumpError),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    #[from(ignore)]
    InvariantViolation(String),
}

impl std::error::Error for ActionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ActionError::Move(e) => Some(e),
            ActionError::Jump(e) => Some(e),
            ActionError::InvariantViolation(_) => None,
        }
    }
}
