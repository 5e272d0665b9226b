//! Validated board positions.

use serde::{Deserialize, Serialize};

/// A cell position on the 3x3 board.
///
/// Wraps a row-major index in `0..=8` (index = row * 3 + col). The
/// constructor validates the range, so every `Position` in circulation
/// addresses a real cell and board reads are infallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Position(u8);

impl Position {
    /// All nine positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position(0),
        Position(1),
        Position(2),
        Position(3),
        Position(4),
        Position(5),
        Position(6),
        Position(7),
        Position(8),
    ];

    /// Creates a position from a row-major index.
    ///
    /// Returns `None` if the index is out of bounds.
    pub const fn new(index: usize) -> Option<Self> {
        if index < 9 {
            Some(Position(index as u8))
        } else {
            None
        }
    }

    /// Creates a position from row and column coordinates.
    pub const fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Some(Position((row * 3 + col) as u8))
        } else {
            None
        }
    }

    /// Returns the row-major index (0-8).
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the row (0-2).
    pub const fn row(self) -> usize {
        self.0 as usize / 3
    }

    /// Returns the column (0-2).
    pub const fn col(self) -> usize {
        self.0 as usize % 3
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_bounds_index() {
        assert!(Position::new(8).is_some());
        assert!(Position::new(9).is_none());
        assert!(Position::from_row_col(2, 2).is_some());
        assert!(Position::from_row_col(3, 0).is_none());
    }

    #[test]
    fn row_major_coordinates() {
        let pos = Position::new(5).unwrap();
        assert_eq!(pos.row(), 1);
        assert_eq!(pos.col(), 2);
        assert_eq!(Position::from_row_col(1, 2), Some(pos));
    }
}
