//! Move history with time travel.
//!
//! [`GameState`] owns an append-only list of [`Snapshot`]s and a pointer
//! to the step currently on display. Transitions are pure: every
//! operation returns a new state and leaves the receiver untouched.

use super::action::{Action, ActionError, JumpError, MoveError};
use super::rules;
use super::{Board, GameStatus, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Immutable record of the board after one step of the game.
///
/// Snapshot 0 is the empty board. Every later snapshot remembers the
/// position that was played to produce it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    board: Board,
    last_move: Option<Position>,
}

impl Snapshot {
    /// The empty board that starts every game.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            last_move: None,
        }
    }

    /// Board contents at this step.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Position played to reach this step (`None` for game start).
    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    /// Derives the snapshot that follows from placing `mark` at `pos`.
    pub(super) fn place(&self, pos: Position, mark: Mark) -> Self {
        Self {
            board: self.board.with_mark(pos, mark),
            last_move: Some(pos),
        }
    }
}

/// Complete game state: history plus the step on display.
///
/// The mark to move next is never stored; it follows from the parity
/// of the current step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(super) history: Vec<Snapshot>,
    pub(super) current_step: usize,
}

impl GameState {
    /// Creates a new game at the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Snapshot::initial()],
            current_step: 0,
        }
    }

    /// Applies `moves` in order from a fresh game.
    ///
    /// # Errors
    ///
    /// Returns the first [`MoveError`] encountered.
    #[instrument]
    pub fn replay(moves: &[Position]) -> Result<Self, MoveError> {
        moves
            .iter()
            .try_fold(Self::new(), |state, &pos| state.apply_move(pos))
    }

    /// All snapshots, oldest first.
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    /// Number of snapshots in history (always at least 1).
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Always false: history starts with the empty board.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Index of the snapshot on display.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Index of the newest snapshot.
    pub fn last_step(&self) -> usize {
        self.history.len() - 1
    }

    /// Snapshot on display.
    pub fn current(&self) -> &Snapshot {
        &self.history[self.current_step]
    }

    /// Board on display.
    pub fn board(&self) -> &Board {
        self.current().board()
    }

    /// Mark that moves next from the current step.
    pub fn next_mark(&self) -> Mark {
        Mark::for_step(self.current_step)
    }

    /// Status of the board on display.
    pub fn status(&self) -> GameStatus {
        let board = self.board();
        if let Some(winner) = rules::check_winner(board) {
            GameStatus::Won(winner)
        } else if rules::is_full(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// Places the next mark at `pos`.
    ///
    /// Any snapshots after the current step are discarded before the new
    /// one is appended, and the current step moves to the new end.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the current board already has a winner.
    /// - [`MoveError::SquareOccupied`] if `pos` is taken.
    #[instrument(skip(self), fields(step = self.current_step, mark = %self.next_mark()))]
    pub fn apply_move(&self, pos: Position) -> Result<Self, MoveError> {
        let current = self.current();
        if rules::check_winner(current.board()).is_some() {
            return Err(MoveError::GameOver);
        }
        if !current.board().is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let next = current.place(pos, self.next_mark());
        let mut history = self.history[..=self.current_step].to_vec();
        history.push(next);
        let current_step = history.len() - 1;

        debug!(new_step = current_step, "Move applied");
        Ok(Self {
            history,
            current_step,
        })
    }

    /// Places the next mark at a raw board index (0-8).
    ///
    /// # Errors
    ///
    /// [`MoveError::OutOfBounds`] for indices past 8, otherwise as
    /// [`apply_move`](Self::apply_move).
    #[instrument(skip(self))]
    pub fn apply_move_index(&self, index: usize) -> Result<Self, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        self.apply_move(pos)
    }

    /// Moves the current step pointer to `step`. History is untouched.
    ///
    /// # Errors
    ///
    /// [`JumpError::StepOutOfRange`] if no snapshot exists at `step`.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&self, step: usize) -> Result<Self, JumpError> {
        if step >= self.history.len() {
            return Err(JumpError::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }
        Ok(Self {
            history: self.history.clone(),
            current_step: step,
        })
    }

    /// Applies an action, reporting why it was rejected.
    ///
    /// Postconditions are verified in debug builds.
    ///
    /// # Errors
    ///
    /// Any [`ActionError`] raised by the move or jump.
    #[instrument(skip(self))]
    pub fn try_apply(&self, action: Action) -> Result<Self, ActionError> {
        let next = match action {
            Action::Move(pos) => self.apply_move(pos)?,
            Action::Jump(step) => self.jump_to(step)?,
        };

        #[cfg(debug_assertions)]
        super::invariants::check_state(&next)?;

        Ok(next)
    }

    /// Transition function: the next state after `action`.
    ///
    /// Rejected actions leave the state unchanged. Illegal moves and
    /// out-of-range jumps are ignored silently; they are logged at debug
    /// level only.
    #[instrument(skip(self))]
    pub fn reduce(self, action: Action) -> Self {
        match self.try_apply(action) {
            Ok(next) => next,
            Err(e) => {
                debug!(error = %e, %action, "Action ignored");
                self
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
