//! Screen geometry shared by drawing and mouse hit testing.

use crate::games::tictactoe::Position;
use ratatui::{
    layout::{Constraint, Direction, Layout, Position as ScreenPos, Rect},
    widgets::Block,
};

/// Width of one board cell.
pub const CELL_WIDTH: u16 = 12;
/// Height of one board cell.
pub const CELL_HEIGHT: u16 = 3;
/// Board width: three cells and two separators.
pub const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
/// Board height: three cells and two separators.
pub const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// What sits under a screen coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// A board cell.
    Cell(Position),
    /// A row of the move list, by display index.
    MoveRow(usize),
}

/// Areas of one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title line.
    pub title: Rect,
    /// Area the board is centered in.
    pub board: Rect,
    /// The nine cells, indexed by board position.
    pub cells: [Rect; 9],
    /// Horizontal separators between board rows.
    pub row_separators: [Rect; 2],
    /// Status block.
    pub status: Rect,
    /// Move list block, borders included.
    pub moves: Rect,
    /// Visible move rows as `(display index, area)`.
    pub move_rows: Vec<(usize, Rect)>,
    /// Key help line.
    pub help: Rect,
}

impl ScreenLayout {
    /// Lays out a frame of `area` showing `move_count` history entries,
    /// scrolled so the entry at display index `selected` is visible.
    pub fn compute(area: Rect, move_count: usize, selected: usize) -> Self {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Min(0),    // Body
                Constraint::Length(1), // Help
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(BOARD_WIDTH + 4), Constraint::Min(20)])
            .split(outer[1]);

        let info = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(3)])
            .split(body[1]);

        let grid = center_rect(body[0], BOARD_WIDTH, BOARD_HEIGHT);
        let (cells, row_separators) = board_cells(grid);

        let inner = Block::bordered().inner(info[1]);
        let visible = usize::from(inner.height);
        let offset = if visible > 0 && selected >= visible {
            selected + 1 - visible
        } else {
            0
        };
        let move_rows = (offset..move_count)
            .take(visible)
            .enumerate()
            .map(|(row, index)| {
                let y = inner.y + row as u16;
                (index, Rect::new(inner.x, y, inner.width, 1))
            })
            .collect();

        Self {
            title: outer[0],
            board: body[0],
            cells,
            row_separators,
            status: info[0],
            moves: info[1],
            move_rows,
            help: outer[2],
        }
    }

    /// Area of the cell at `pos`.
    pub fn cell(&self, pos: Position) -> Rect {
        self.cells[pos.to_index()]
    }

    /// Finds what is under screen coordinate (`column`, `row`).
    pub fn hit(&self, column: u16, row: u16) -> Option<Hit> {
        let point = ScreenPos::new(column, row);
        if let Some(pos) = Position::ALL
            .into_iter()
            .find(|pos| self.cell(*pos).contains(point))
        {
            return Some(Hit::Cell(pos));
        }
        self.move_rows
            .iter()
            .find(|(_, area)| area.contains(point))
            .map(|(index, _)| Hit::MoveRow(*index))
    }
}

fn board_cells(grid: Rect) -> ([Rect; 9], [Rect; 2]) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(grid);

    let mut cells = [Rect::default(); 9];
    for (row, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
            ])
            .split(row_area);
        for (col, cell) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            cells[row * 3 + col] = cell;
        }
    }
    (cells, [rows[1], rows[3]])
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> Rect {
        Rect::new(0, 0, 100, 30)
    }

    #[test]
    fn test_cells_do_not_overlap() {
        let layout = ScreenLayout::compute(screen(), 1, 0);
        for (i, a) in layout.cells.iter().enumerate() {
            assert_eq!(a.width, CELL_WIDTH);
            assert_eq!(a.height, CELL_HEIGHT);
            for b in &layout.cells[i + 1..] {
                assert!(!a.intersects(*b));
            }
        }
    }

    #[test]
    fn test_hit_cell_centers() {
        let layout = ScreenLayout::compute(screen(), 1, 0);
        for pos in Position::ALL {
            let area = layout.cell(pos);
            let hit = layout.hit(area.x + area.width / 2, area.y + 1);
            assert_eq!(hit, Some(Hit::Cell(pos)));
        }
    }

    #[test]
    fn test_hit_move_rows() {
        let layout = ScreenLayout::compute(screen(), 3, 0);
        assert_eq!(layout.move_rows.len(), 3);
        let (_, second) = layout.move_rows[1];
        assert_eq!(layout.hit(second.x, second.y), Some(Hit::MoveRow(1)));
        assert_eq!(layout.hit(0, 0), None);
    }

    #[test]
    fn test_move_list_scrolls_to_selection() {
        // 30 rows: title + help leave 28, status takes 3, borders take 2
        let layout = ScreenLayout::compute(screen(), 40, 30);
        let visible = layout.move_rows.len();
        assert_eq!(visible, 23);
        assert_eq!(layout.move_rows.last().map(|(i, _)| *i), Some(30));
    }
}
