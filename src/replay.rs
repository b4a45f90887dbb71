//! Headless replay of a move list.

use crate::games::tictactoe::{Action, GameState, GameView, ViewOptions};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Output format for a replayed game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum ReplayFormat {
    /// Board, status and move list as plain text.
    #[default]
    Text,
    /// The full [`GameView`] as JSON.
    Json,
}

/// Plays `moves` (board indices 0-8) from a fresh game, then jumps to
/// `jump` if given.
///
/// Rejected moves and jumps are skipped with a warning, the same way the
/// interactive game ignores them.
#[instrument]
pub fn replay(moves: &[usize], jump: Option<usize>) -> GameState {
    let mut state = moves
        .iter()
        .fold(GameState::new(), |state, &index| match state.apply_move_index(index) {
            Ok(next) => next,
            Err(e) => {
                warn!(index, error = %e, "Skipping rejected move");
                state
            }
        });

    if let Some(step) = jump {
        state = match state.try_apply(Action::Jump(step)) {
            Ok(next) => next,
            Err(e) => {
                warn!(step, error = %e, "Skipping rejected jump");
                state
            }
        };
    }
    state
}

/// Renders `state` in `format`.
///
/// # Errors
///
/// Fails only if JSON serialization fails.
#[instrument(skip(state))]
pub fn render(
    state: &GameState,
    options: &ViewOptions,
    format: ReplayFormat,
) -> serde_json::Result<String> {
    let view = GameView::new(state, options);
    match format {
        ReplayFormat::Text => Ok(view.to_string()),
        ReplayFormat::Json => serde_json::to_string_pretty(&view),
    }
}
