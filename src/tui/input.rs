//! Keyboard and mouse mapping.

use super::layout::{Hit, ScreenLayout};
use crate::games::tictactoe::{Direction, GameView, Position};
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// What the user asked for, before it touches the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the board cursor.
    Cursor(Direction),
    /// Place the next mark under the cursor.
    PlaceAtCursor,
    /// Place the next mark at a position.
    Place(Position),
    /// Show the given history step.
    Jump(usize),
    /// Show the previous history step.
    StepBack,
    /// Show the next history step.
    StepForward,
    /// Show the empty board.
    JumpStart,
    /// Show the newest history step.
    JumpLatest,
    /// Flip the move list order.
    ToggleOrder,
    /// Leave the game.
    Quit,
}

/// Maps a key press to a command.
pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Command::Quit),
            _ => None,
        };
    }

    let command = match key.code {
        KeyCode::Up | KeyCode::Char('k') => Command::Cursor(Direction::Up),
        KeyCode::Down | KeyCode::Char('j') => Command::Cursor(Direction::Down),
        KeyCode::Left | KeyCode::Char('h') => Command::Cursor(Direction::Left),
        KeyCode::Right | KeyCode::Char('l') => Command::Cursor(Direction::Right),
        KeyCode::Enter | KeyCode::Char(' ') => Command::PlaceAtCursor,
        KeyCode::Char(c @ '1'..='9') => {
            let index = c.to_digit(10)? as usize - 1;
            Command::Place(Position::from_index(index)?)
        }
        KeyCode::Char('[') | KeyCode::PageUp => Command::StepBack,
        KeyCode::Char(']') | KeyCode::PageDown => Command::StepForward,
        KeyCode::Home | KeyCode::Char('g') => Command::JumpStart,
        KeyCode::End | KeyCode::Char('G') => Command::JumpLatest,
        KeyCode::Char('o') => Command::ToggleOrder,
        KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
        _ => return None,
    };
    Some(command)
}

/// Maps a left click to a command using the last drawn layout.
pub fn command_for_mouse(
    mouse: MouseEvent,
    layout: &ScreenLayout,
    view: &GameView,
) -> Option<Command> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    match layout.hit(mouse.column, mouse.row)? {
        Hit::Cell(pos) => Some(Command::Place(pos)),
        Hit::MoveRow(index) => view
            .moves()
            .get(index)
            .map(|entry| Command::Jump(*entry.step())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_digits_place() {
        assert_eq!(
            command_for_key(press(KeyCode::Char('1'))),
            Some(Command::Place(Position::TopLeft))
        );
        assert_eq!(
            command_for_key(press(KeyCode::Char('9'))),
            Some(Command::Place(Position::BottomRight))
        );
        assert_eq!(command_for_key(press(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_history_keys() {
        assert_eq!(command_for_key(press(KeyCode::Char('['))), Some(Command::StepBack));
        assert_eq!(command_for_key(press(KeyCode::PageDown)), Some(Command::StepForward));
        assert_eq!(command_for_key(press(KeyCode::Home)), Some(Command::JumpStart));
        assert_eq!(command_for_key(press(KeyCode::Char('G'))), Some(Command::JumpLatest));
    }

    #[test]
    fn test_ctrl_c_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(command_for_key(key), Some(Command::Quit));
        assert_eq!(command_for_key(press(KeyCode::Char('c'))), None);
    }

    #[test]
    fn test_release_ignored() {
        let mut key = press(KeyCode::Enter);
        key.kind = KeyEventKind::Release;
        assert_eq!(command_for_key(key), None);
    }
}
