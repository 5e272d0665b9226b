//! Win detection.

use crate::position::Position;
use crate::types::{Board, Cell, Player};

/// The eight lines that decide a game: rows, columns, diagonals.
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

/// Returns the player holding a completed line, if any.
///
/// Scans lines in the fixed order above and returns on the first
/// match. Alternating play guarantees at most one player can hold a
/// line, so the scan order never changes the answer.
pub(crate) fn winner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        let first = board.get(Position::ALL[a]);
        if first != Cell::Empty
            && first == board.get(Position::ALL[b])
            && first == board.get(Position::ALL[c])
        {
            if let Cell::Marked(player) = first {
                return Some(player);
            }
        }
    }
    None
}
