//! Full-board detection.

use crate::types::{Board, Cell};

/// Returns true when every cell holds a mark.
///
/// A full board with no winner is a draw; the engine checks
/// [`winner`](super::winner) first.
pub(crate) fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|&cell| cell != Cell::Empty)
}
