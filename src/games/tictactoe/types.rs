//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// Mark placed by a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Mark {
    /// X (moves first).
    X,
    /// O (moves second).
    O,
}

impl Mark {
    /// Returns the mark that moves at the given history step.
    ///
    /// Even steps are X to move, odd steps are O to move.
    pub fn for_step(step: usize) -> Self {
        if step % 2 == 0 { Mark::X } else { Mark::O }
    }
}

/// A square's occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the occupying mark, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }

    /// Returns true if nobody has played here.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Single-character symbol, with `empty` standing in for an empty cell.
    pub fn symbol(self, empty: char) -> char {
        match self {
            Cell::Empty => empty,
            Cell::Occupied(Mark::X) => 'X',
            Cell::Occupied(Mark::O) => 'O',
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// A board is a value: placing a mark returns a new board and leaves
/// the original untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Builds a board from raw cells in row-major order.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Returns a copy of this board with `mark` placed at `pos`.
    #[must_use]
    pub fn with_mark(&self, pos: Position, mark: Mark) -> Self {
        let mut cells = self.cells;
        cells[pos.to_index()] = Cell::Occupied(mark);
        Self { cells }
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }
}

/// Current status of the game, derived from the board on display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// A mark completed a line.
    Won(Mark),
    /// The board is full with no completed line.
    Draw,
}
