//! Stateless UI rendering for tic-tac-toe.

use super::layout::ScreenLayout;
use crate::games::tictactoe::{Cell, GameView, Mark, MoveOrder, Position};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const HELP: &str = "arrows move  enter/1-9 place  [ ] history  g/G start/latest  o order  q quit";

/// Renders a full frame.
pub fn draw(
    frame: &mut Frame,
    layout: &ScreenLayout,
    view: &GameView,
    cursor: Position,
    order: MoveOrder,
) {
    let title = Paragraph::new("Strictly Rewind - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, layout.title);

    draw_board(frame, layout, view, cursor);

    let status = Paragraph::new(view.status().as_str())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().title("Status").borders(Borders::ALL));
    frame.render_widget(status, layout.status);

    draw_moves(frame, layout, view, order);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, layout.help);
}

fn draw_board(frame: &mut Frame, layout: &ScreenLayout, view: &GameView, cursor: Position) {
    for pos in Position::ALL {
        draw_cell(frame, layout.cell(pos), view, cursor, pos);
    }
    for area in layout.row_separators {
        draw_separator(frame, area);
    }
    let screen = frame.area();
    for row in 0..3 {
        for cell in [layout.cells[row * 3], layout.cells[row * 3 + 1]] {
            let sep = Rect::new(cell.right(), cell.y, 1, cell.height).intersection(screen);
            draw_separator_vertical(frame, sep);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, view: &GameView, cursor: Position, pos: Position) {
    let cell = view.cell(pos);

    let (symbol, base_style) = match cell {
        Cell::Empty => (
            format!("{}", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Occupied(Mark::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Occupied(Mark::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    // The winning line keeps its background under the cursor
    let style = if view.is_highlighted(pos) {
        let line_style = base_style.bg(Color::Green).fg(Color::Black);
        if pos == cursor {
            line_style.add_modifier(Modifier::UNDERLINED)
        } else {
            line_style
        }
    } else if pos == cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let lines = vec![
        Line::default(),
        Line::from(Span::styled(format!(" {} ", symbol), style)),
        Line::default(),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_moves(frame: &mut Frame, layout: &ScreenLayout, view: &GameView, order: MoveOrder) {
    let block = Block::default()
        .title(format!("History ({})", order.label()))
        .borders(Borders::ALL);
    frame.render_widget(block, layout.moves);

    for (index, area) in &layout.move_rows {
        let Some(entry) = view.moves().get(*index) else {
            continue;
        };
        let (marker, style) = if *entry.selected() {
            ("> ", Style::default().add_modifier(Modifier::BOLD))
        } else {
            ("  ", Style::default())
        };
        let line = Line::from(vec![
            Span::raw(marker),
            Span::styled(entry.label().as_str(), style),
        ]);
        frame.render_widget(Paragraph::new(line), *area);
    }
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(usize::from(area.width)))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = (0..area.height).map(|_| Line::from("│")).collect();
    let sep = Paragraph::new(lines).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}
