//! Render-ready view of a game.
//!
//! [`GameView`] is everything a front end needs to draw one frame: the
//! cells, the status line, and the move list. It is computed from a
//! [`GameState`] and holds no game state of its own.

use super::rules::{self, Line};
use super::{Cell, GameState, GameStatus, Position};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Order in which the move list is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl MoveOrder {
    /// Flips between ascending and descending.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

/// Presentation switches. The defaults reproduce the plain game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewOptions {
    /// Append `(col, row)` of each move to its history entry.
    pub show_coordinates: bool,
    /// Say so when the board fills up without a winner.
    pub announce_draw: bool,
    /// Expose the completed line so it can be highlighted.
    pub highlight_winning_line: bool,
    /// Display order of the move list.
    pub move_order: MoveOrder,
}

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct MoveEntry {
    /// History step this entry jumps to.
    step: usize,
    /// Button text.
    label: String,
    /// True for the step on display.
    selected: bool,
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GameView {
    cells: [Cell; 9],
    status: String,
    moves: Vec<MoveEntry>,
    winning_line: Option<Line>,
}

impl GameView {
    /// Builds the view of `state` under `options`.
    #[instrument(skip_all, fields(step = state.current_step(), len = state.len()))]
    pub fn new(state: &GameState, options: &ViewOptions) -> Self {
        let mut moves: Vec<MoveEntry> = state
            .history()
            .iter()
            .enumerate()
            .map(|(step, snapshot)| {
                MoveEntry::new(
                    step,
                    move_label(step, snapshot.last_move(), options.show_coordinates),
                    step == state.current_step(),
                )
            })
            .collect();
        if options.move_order == MoveOrder::Descending {
            moves.reverse();
        }

        let winning_line = if options.highlight_winning_line {
            rules::winning_line(state.board())
        } else {
            None
        };

        Self {
            cells: *state.board().cells(),
            status: status_line(state, options),
            moves,
            winning_line,
        }
    }

    /// Cell at `pos`.
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// True if `pos` belongs to the highlighted line.
    pub fn is_highlighted(&self, pos: Position) -> bool {
        self.winning_line.is_some_and(|line| line.contains(pos))
    }

    /// The selected move entry.
    pub fn selected(&self) -> Option<&MoveEntry> {
        self.moves.iter().find(|entry| entry.selected)
    }
}

/// Status line for the board on display.
///
/// `"Winner: X"` once a line is complete, otherwise the mark to move
/// next. A full board reads `"Draw: no winner"` only when
/// [`ViewOptions::announce_draw`] is set.
#[instrument(skip_all)]
pub fn status_line(state: &GameState, options: &ViewOptions) -> String {
    match state.status() {
        GameStatus::Won(mark) => format!("Winner: {}", mark),
        GameStatus::Draw if options.announce_draw => "Draw: no winner".to_string(),
        GameStatus::Draw | GameStatus::InProgress => {
            format!("Next player: {}", state.next_mark())
        }
    }
}

/// Label for the history entry at `step`.
pub fn move_label(step: usize, last_move: Option<Position>, show_coordinates: bool) -> String {
    if step == 0 {
        return "Go to game start".to_string();
    }
    match last_move {
        Some(pos) if show_coordinates => {
            let (col, row) = pos.coordinates();
            format!("Go to move #{} ({}, {})", step, col, row)
        }
        _ => format!("Go to move #{}", step),
    }
}

impl std::fmt::Display for GameView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            let symbols: Vec<String> = (0..3)
                .filter_map(|col| Position::from_row_col(row, col))
                .map(|pos| {
                    let symbol = self.cell(pos).symbol('.');
                    if self.is_highlighted(pos) {
                        format!("[{}]", symbol)
                    } else {
                        format!(" {} ", symbol)
                    }
                })
                .collect();
            writeln!(f, "{}", symbols.join("|"))?;
            if row < 2 {
                writeln!(f, "---+---+---")?;
            }
        }
        writeln!(f)?;
        writeln!(f, "{}", self.status)?;
        writeln!(f)?;
        for entry in &self.moves {
            let marker = if entry.selected { '>' } else { ' ' };
            writeln!(f, "{} {}", marker, entry.label)?;
        }
        Ok(())
    }
}
