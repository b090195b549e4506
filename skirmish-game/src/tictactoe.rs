//! Match state and turn policy for two-player tic-tac-toe.

use thiserror::Error;

use crate::board::{Board, CELL_COUNT, CellIndex, Mark, PlaceError};

/// Result of one accepted move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The match continues with the other player.
    Continue,
    /// This move completed a line.
    Win(Mark),
    /// Ninth move placed with no winner.
    Draw,
}

impl MoveOutcome {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Continue)
    }
}

/// Error applying a move to the match
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PlayError {
    #[error("cell {value} is outside the valid range 1-9")]
    OutOfRange { value: u32 },
    #[error("cell {value} is already occupied")]
    Occupied { value: u32 },
    #[error("the match is already complete")]
    MatchOver,
}

/// One tic-tac-toe match: board, round counter, completion flag.
///
/// X plays on even rounds, O on odd rounds. The round counter increments
/// exactly once per accepted move, so it always equals the number of
/// occupied cells.
#[derive(Debug, Clone, Default)]
pub struct TicTacToe {
    board: Board,
    rounds: u8,
    complete: bool,
}

impl TicTacToe {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Accepted moves so far.
    #[must_use]
    pub const fn rounds(&self) -> u8 {
        self.rounds
    }

    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.complete
    }

    /// Mark whose turn it is.
    #[must_use]
    pub const fn to_move(&self) -> Mark {
        if self.rounds % 2 == 0 { Mark::X } else { Mark::O }
    }

    /// True iff the match is still open and `value` addresses an empty cell.
    #[must_use]
    pub fn is_legal(&self, value: u32) -> bool {
        !self.complete && self.board.is_legal(value)
    }

    /// Apply the current player's move to the user-addressed cell
    ///
    /// Evaluates the win condition first; the draw rule applies only once
    /// the ninth move has been placed without completing a line, so a line
    /// finished on move 9 wins rather than draws.
    ///
    /// # Errors
    ///
    /// Rejects moves after completion, out-of-range values, and occupied
    /// cells. State is unchanged on every error path.
    pub fn play(&mut self, value: u32) -> Result<MoveOutcome, PlayError> {
        if self.complete {
            return Err(PlayError::MatchOver);
        }
        let idx = CellIndex::from_user(value).ok_or(PlayError::OutOfRange { value })?;
        let mark = self.to_move();
        self.board
            .place(idx, mark)
            .map_err(|_: PlaceError| PlayError::Occupied { value })?;
        self.rounds += 1;
        if let Some(winner) = self.board.winner() {
            self.complete = true;
            return Ok(MoveOutcome::Win(winner));
        }
        if usize::from(self.rounds) == CELL_COUNT {
            self.complete = true;
            return Ok(MoveOutcome::Draw);
        }
        Ok(MoveOutcome::Continue)
    }
}
