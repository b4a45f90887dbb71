//! Application state and logic.

use super::input::{self, Command};
use super::layout::ScreenLayout;
use super::ui;
use crate::games::tictactoe::{Action, GameState, GameView, Position, ViewOptions};
use crossterm::event::{Event, KeyEvent, MouseEvent};
use ratatui::Frame;
use tracing::{debug, info, instrument};

/// Main application state.
///
/// Holds the current [`GameState`] value and the presentation state
/// around it. Every frame is drawn from scratch.
#[derive(Debug)]
pub struct App {
    state: GameState,
    options: ViewOptions,
    cursor: Position,
    layout: Option<ScreenLayout>,
    should_quit: bool,
}

impl App {
    /// Creates a new application at the empty board.
    #[instrument]
    pub fn new(options: ViewOptions) -> Self {
        Self {
            state: GameState::new(),
            options,
            cursor: Position::Center,
            layout: None,
            should_quit: false,
        }
    }

    /// Current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Display options in effect.
    pub fn options(&self) -> &ViewOptions {
        &self.options
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Layout of the last drawn frame.
    pub fn layout(&self) -> Option<&ScreenLayout> {
        self.layout.as_ref()
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// View of the current state.
    pub fn view(&self) -> GameView {
        GameView::new(&self.state, &self.options)
    }

    /// Handles a terminal event.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(command) = input::command_for_key(key) {
            self.handle_command(command);
        }
    }

    /// Handles a mouse event against the last drawn layout.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let Some(layout) = &self.layout else {
            return;
        };
        if let Some(command) = input::command_for_mouse(mouse, layout, &self.view()) {
            self.handle_command(command);
        }
    }

    /// Applies a command.
    #[instrument(skip(self), fields(step = self.state.current_step()))]
    pub fn handle_command(&mut self, command: Command) {
        debug!(?command, "Handling command");
        match command {
            Command::Cursor(direction) => self.cursor = self.cursor.step(direction),
            Command::PlaceAtCursor => self.apply(Action::Move(self.cursor)),
            Command::Place(pos) => {
                self.cursor = pos;
                self.apply(Action::Move(pos));
            }
            Command::Jump(step) => self.apply(Action::Jump(step)),
            Command::StepBack => {
                if let Some(step) = self.state.current_step().checked_sub(1) {
                    self.apply(Action::Jump(step));
                }
            }
            Command::StepForward => self.apply(Action::Jump(self.state.current_step() + 1)),
            Command::JumpStart => self.apply(Action::Jump(0)),
            Command::JumpLatest => self.apply(Action::Jump(self.state.last_step())),
            Command::ToggleOrder => {
                self.options.move_order = self.options.move_order.toggle();
                debug!(order = self.options.move_order.label(), "Move order toggled");
            }
            Command::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    fn apply(&mut self, action: Action) {
        self.state = std::mem::take(&mut self.state).reduce(action);
    }

    /// Draws one frame and remembers its layout for hit testing.
    pub fn draw(&mut self, frame: &mut Frame) {
        let view = self.view();
        let selected = view
            .moves()
            .iter()
            .position(|entry| *entry.selected())
            .unwrap_or(0);
        let layout = ScreenLayout::compute(frame.area(), view.moves().len(), selected);
        ui::draw(frame, &layout, &view, self.cursor, self.options.move_order);
        self.layout = Some(layout);
    }
}
