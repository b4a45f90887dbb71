//! Tests for the terminal front end using ratatui's TestBackend.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
use strictly_rewind::tui::App;
use strictly_rewind::{Cell, GameStatus, Mark, MoveOrder, Position, ViewOptions};

fn terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(100, 30)).expect("test terminal")
}

fn screen_text(buffer: &Buffer) -> String {
    let width = usize::from(buffer.area.width);
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn draw(terminal: &mut Terminal<TestBackend>, app: &mut App) -> String {
    terminal.draw(|frame| app.draw(frame)).expect("draw");
    screen_text(terminal.backend().buffer())
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn click(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

#[test]
fn test_initial_screen() {
    let mut terminal = terminal();
    let mut app = App::new(ViewOptions::default());
    let text = draw(&mut terminal, &mut app);

    assert!(text.contains("Strictly Rewind - Tic Tac Toe"));
    assert!(text.contains("Next player: X"));
    assert!(text.contains("> Go to game start"));
    assert!(text.contains("History (ascending)"));
}

#[test]
fn test_digit_keys_play_and_redraw() {
    let mut terminal = terminal();
    let mut app = App::new(ViewOptions::default());

    for c in ['1', '5', '2', '9', '3'] {
        app.handle_event(key(KeyCode::Char(c)));
    }
    assert_eq!(app.state().status(), GameStatus::Won(Mark::X));

    let text = draw(&mut terminal, &mut app);
    assert!(text.contains("Winner: X"));
    assert!(text.contains("> Go to move #5"));
}

#[test]
fn test_cursor_and_enter() {
    let mut app = App::new(ViewOptions::default());
    assert_eq!(app.cursor(), Position::Center);

    app.handle_event(key(KeyCode::Up));
    app.handle_event(key(KeyCode::Left));
    app.handle_event(key(KeyCode::Enter));

    assert_eq!(app.cursor(), Position::TopLeft);
    assert_eq!(app.state().board().get(Position::TopLeft), Cell::Occupied(Mark::X));

    // Same square again is ignored
    app.handle_event(key(KeyCode::Enter));
    assert_eq!(app.state().len(), 2);
}

#[test]
fn test_mouse_click_places_mark() {
    let mut terminal = terminal();
    let mut app = App::new(ViewOptions::default());
    draw(&mut terminal, &mut app);

    let area = app.layout().expect("drawn").cell(Position::BottomRight);
    app.handle_event(click(area.x + 1, area.y + 1));

    assert_eq!(
        app.state().board().get(Position::BottomRight),
        Cell::Occupied(Mark::X)
    );
}

#[test]
fn test_mouse_click_on_history_jumps() {
    let mut terminal = terminal();
    let mut app = App::new(ViewOptions::default());
    for c in ['5', '1', '9'] {
        app.handle_event(key(KeyCode::Char(c)));
    }
    draw(&mut terminal, &mut app);

    let (_, row) = app.layout().expect("drawn").move_rows[1];
    app.handle_event(click(row.x, row.y));
    assert_eq!(app.state().current_step(), 1);
    assert_eq!(app.state().len(), 4);

    let text = draw(&mut terminal, &mut app);
    assert!(text.contains("> Go to move #1"));
    assert!(text.contains("Next player: O"));
}

#[test]
fn test_history_keys_step_through_time() {
    let mut app = App::new(ViewOptions::default());
    for c in ['5', '1', '9'] {
        app.handle_event(key(KeyCode::Char(c)));
    }

    app.handle_event(key(KeyCode::Char('[')));
    assert_eq!(app.state().current_step(), 2);
    app.handle_event(key(KeyCode::Home));
    assert_eq!(app.state().current_step(), 0);
    app.handle_event(key(KeyCode::Char('[')));
    assert_eq!(app.state().current_step(), 0);
    app.handle_event(key(KeyCode::Char(']')));
    assert_eq!(app.state().current_step(), 1);
    app.handle_event(key(KeyCode::End));
    assert_eq!(app.state().current_step(), 3);
    app.handle_event(key(KeyCode::Char(']')));
    assert_eq!(app.state().current_step(), 3);

    // Playing from the past discards the future
    app.handle_event(key(KeyCode::Home));
    app.handle_event(key(KeyCode::Char('7')));
    assert_eq!(app.state().len(), 2);
}

#[test]
fn test_toggle_order_and_quit() {
    let mut terminal = terminal();
    let mut app = App::new(ViewOptions::default());
    app.handle_event(key(KeyCode::Char('5')));
    app.handle_event(key(KeyCode::Char('o')));
    assert_eq!(app.options().move_order, MoveOrder::Descending);

    let text = draw(&mut terminal, &mut app);
    assert!(text.contains("History (descending)"));
    let latest = text.find("> Go to move #1").expect("latest entry shown");
    let start = text.find("  Go to game start").expect("start entry shown");
    assert!(latest < start);

    assert!(!app.should_quit());
    app.handle_event(key(KeyCode::Char('q')));
    assert!(app.should_quit());
}

#[test]
fn test_winning_line_highlight_survives_cursor() {
    let mut terminal = terminal();
    let mut app = App::new(ViewOptions {
        highlight_winning_line: true,
        ..ViewOptions::default()
    });
    for c in ['1', '5', '2', '9', '3'] {
        app.handle_event(key(KeyCode::Char(c)));
    }
    assert_eq!(app.cursor(), Position::TopRight);
    draw(&mut terminal, &mut app);

    let layout = app.layout().expect("drawn");
    let buffer = terminal.backend().buffer();
    for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
        let area = layout.cell(pos);
        let mark = (area.left()..area.right())
            .filter_map(|x| buffer.cell((x, area.y + 1)))
            .find(|cell| cell.symbol() == "X")
            .expect("mark drawn");
        assert_eq!(mark.bg, ratatui::style::Color::Green, "{pos} not highlighted");
    }
}
