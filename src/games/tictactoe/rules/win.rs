//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The 8 winning lines, in the order they are checked.
///
/// Rows top to bottom, columns left to right, then both diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line: three cells holding the same mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// Mark occupying the line.
    pub mark: Mark,
    /// The three positions of the line, in board order.
    pub positions: [Position; 3],
}

impl Line {
    /// Returns true if `pos` is one of the line's cells.
    pub fn contains(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }
}

/// Returns the first completed line on the board, if any.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<Line> {
    LINES.iter().find_map(|&[a, b, c]| match board.get(a) {
        Cell::Occupied(mark)
            if board.get(b) == Cell::Occupied(mark) && board.get(c) == Cell::Occupied(mark) =>
        {
            Some(Line {
                mark,
                positions: [a, b, c],
            })
        }
        _ => None,
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if a mark has three in a row, `None` otherwise.
/// A full board without a line also yields `None`; see
/// [`is_draw`](super::is_draw).
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|line| line.mark)
}
