//! Tic-tac-toe board: cell addressing, legality, win detection, rendering.

use std::fmt;
use thiserror::Error;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// The eight winning alignments, checked rows first, then columns, then
/// diagonals.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Player mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// X moves first, on even rounds.
    X,
    /// O moves on odd rounds.
    O,
}

impl Mark {
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::X => 'X',
            Self::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::X => "X",
            Self::O => "O",
        })
    }
}

/// Zero-based cell index, obtainable only through the user-facing 1-9
/// translation. This is the single point where addressing changes base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellIndex(usize);

impl CellIndex {
    /// Translate a user-facing cell number (1-9, row-major from top-left).
    #[must_use]
    pub fn from_user(value: u32) -> Option<Self> {
        if (1..=9).contains(&value) {
            Some(Self(value as usize - 1))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0
    }
}

/// Error placing a mark
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    #[error("cell is already occupied")]
    Occupied,
}

/// 3x3 board, cells in row-major order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Option<Mark>; CELL_COUNT],
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn get(&self, idx: CellIndex) -> Option<Mark> {
        self.cells[idx.as_usize()]
    }

    /// True iff `value` is in 1-9 and the addressed cell is empty.
    #[must_use]
    pub fn is_legal(&self, value: u32) -> bool {
        CellIndex::from_user(value).is_some_and(|idx| self.get(idx).is_none())
    }

    /// Write a mark into an empty cell
    ///
    /// # Errors
    ///
    /// Returns `PlaceError::Occupied` instead of overwriting; the board is
    /// unchanged on error.
    pub fn place(&mut self, idx: CellIndex, mark: Mark) -> Result<(), PlaceError> {
        let cell = &mut self.cells[idx.as_usize()];
        if cell.is_some() {
            return Err(PlaceError::Occupied);
        }
        *cell = Some(mark);
        Ok(())
    }

    /// Mark holding a completed line, if any. Pure; checks rows, then
    /// columns, then diagonals, returning on the first match.
    #[must_use]
    pub fn winner(&self) -> Option<Mark> {
        for [a, b, c] in LINES {
            if let Some(mark) = self.cells[a] {
                if self.cells[b] == Some(mark) && self.cells[c] == Some(mark) {
                    return Some(mark);
                }
            }
        }
        None
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Render the board in the exact console layout, blank cells as a single
    /// space. Pure; rendering twice without mutation yields identical output.
    #[must_use]
    pub fn render(&self) -> String {
        let cell = |i: usize| self.cells[i].map_or(' ', Mark::as_char);
        let mut out = String::new();
        out.push('\n');
        for row in 0..3 {
            let base = row * 3;
            out.push_str("     |     |    \n");
            out.push_str(&format!(
                "  {}  |  {}  |  {}\n",
                cell(base),
                cell(base + 1),
                cell(base + 2)
            ));
            if row < 2 {
                out.push_str("____ | ___ | ____\n");
            }
        }
        out.push_str("     |     |    \n");
        out.push('\n');
        out
    }
}
