//! Tic-tac-toe with move history and time travel.
//!
//! - [`rules`]: pure board evaluation (winner, draw)
//! - [`GameState`]: history of [`Snapshot`]s with a current step pointer
//! - [`GameView`]: render-ready projection of a state

mod action;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod types;
mod view;

pub use action::{Action, ActionError, JumpError, MoveError};
pub use history::{GameState, Snapshot};
pub use position::{Direction, Position};
pub use rules::{Line, check_winner, winning_line};
pub use types::{Board, Cell, GameStatus, Mark};
pub use view::{GameView, MoveEntry, MoveOrder, ViewOptions, move_label, status_line};
