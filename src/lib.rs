//! Strictly Rewind - tic-tac-toe with time travel
//!
//! Every move is kept as an immutable snapshot, so any earlier position
//! can be revisited and played differently.
//!
//! # Architecture
//!
//! - **Games**: pure tic-tac-toe rules, move history and the view model
//! - **Config**: TOML settings for display options and logging
//! - **TUI**: ratatui front end (keyboard and mouse)
//! - **Replay**: headless playback of a move list
//!
//! # Example
//!
//! ```
//! use strictly_rewind::{Action, GameState, GameView, Position, ViewOptions};
//!
//! let state = GameState::new()
//!     .reduce(Action::Move(Position::TopLeft))
//!     .reduce(Action::Move(Position::Center))
//!     .reduce(Action::Jump(1));
//!
//! let view = GameView::new(&state, &ViewOptions::default());
//! assert_eq!(view.status(), "Next player: O");
//! assert_eq!(state.len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;
mod replay;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{CONFIG_ENV, ConfigError, LoggingConfig, Settings};

// Crate-level exports - Replay
pub use replay::{ReplayFormat, render, replay};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Action, ActionError, Board, Cell, Direction, GameState, GameStatus, GameView, JumpError, Line,
    Mark, MoveEntry, MoveError, MoveOrder, Position, Snapshot, ViewOptions, check_winner,
    invariants, move_label, rules, status_line, winning_line,
};
