//! Arrow-key cursor movement over the 3x3 grid.

use crossterm::event::KeyCode;
use tactix_engine::Position;

/// Moves the cursor one cell, clamped at the board edges.
pub fn step(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(index: usize) -> Position {
        Position::new(index).unwrap()
    }

    #[test]
    fn moves_within_grid() {
        assert_eq!(step(at(4), KeyCode::Up), at(1));
        assert_eq!(step(at(4), KeyCode::Down), at(7));
        assert_eq!(step(at(4), KeyCode::Left), at(3));
        assert_eq!(step(at(4), KeyCode::Right), at(5));
    }

    #[test]
    fn clamps_at_edges() {
        assert_eq!(step(at(0), KeyCode::Up), at(0));
        assert_eq!(step(at(0), KeyCode::Left), at(0));
        assert_eq!(step(at(8), KeyCode::Down), at(8));
        assert_eq!(step(at(8), KeyCode::Right), at(8));
    }

    #[test]
    fn other_keys_do_nothing() {
        assert_eq!(step(at(4), KeyCode::Enter), at(4));
    }
}
