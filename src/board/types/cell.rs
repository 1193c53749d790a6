//! Cell addressing for the 8x8 grid.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::CellError;

/// A cell on the board, stored as a linear index 0-63 in row-major order
/// (`index = row * 8 + col`). Row 0 is the top of the board, where Light
/// men are crowned.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell(u8);

impl Cell {
    /// Create a cell from row and column with bounds checking
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Option<Cell> {
        if row < 8 && col < 8 {
            Some(Cell((row * 8 + col) as u8))
        } else {
            None
        }
    }

    /// Create a cell from a linear index. `None` is the "no such cell"
    /// result for out-of-range input, e.g. from an external decode step.
    #[inline]
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Cell> {
        if index < 64 {
            Some(Cell(index as u8))
        } else {
            None
        }
    }

    /// Create a cell from an index already known to be in range.
    #[inline]
    #[must_use]
    pub(crate) const fn from_index_unchecked(index: usize) -> Cell {
        debug_assert!(index < 64);
        Cell(index as u8)
    }

    /// Linear index 0-63
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Row 0-7 (0 = topmost)
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        (self.0 / 8) as usize
    }

    /// Column 0-7 (0 = leftmost)
    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        (self.0 % 8) as usize
    }

    /// True when the cell sits on a dark square of the standard pattern
    /// (row + col odd). Play normally stays on dark squares, but nothing
    /// in the engine forbids pieces elsewhere.
    #[inline]
    #[must_use]
    pub const fn is_dark_square(self) -> bool {
        (self.row() + self.col()) % 2 == 1
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Algebraic notation: files a-h left to right, ranks 8-1 top to bottom
        write!(f, "{}{}", (self.col() as u8 + b'a') as char, 8 - self.row())
    }
}

impl TryFrom<usize> for Cell {
    type Error = CellError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Cell::from_index(index).ok_or(CellError::IndexOutOfBounds { index })
    }
}

impl TryFrom<(usize, usize)> for Cell {
    type Error = CellError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        if row >= 8 {
            return Err(CellError::RowOutOfBounds { row });
        }
        if col >= 8 {
            return Err(CellError::ColOutOfBounds { col });
        }
        Ok(Cell((row * 8 + col) as u8))
    }
}

impl FromStr for Cell {
    type Err = CellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (file, rank) = match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => (file, rank),
            _ => {
                return Err(CellError::InvalidNotation {
                    notation: s.to_string(),
                })
            }
        };

        let col = match file {
            'a'..='h' => file as usize - 'a' as usize,
            _ => {
                return Err(CellError::InvalidNotation {
                    notation: s.to_string(),
                })
            }
        };

        let row = match rank {
            '1'..='8' => 8 - (rank as usize - '0' as usize),
            _ => {
                return Err(CellError::InvalidNotation {
                    notation: s.to_string(),
                })
            }
        };

        Ok(Cell((row * 8 + col) as u8))
    }
}
