//! Core domain types: players, cells, the board, game mode, and outcome.

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// A player in the game. `X` always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// The first player. In player-vs-computer mode, the human.
    X,
    /// The second player. In player-vs-computer mode, the computer.
    O,
}

impl Player {
    /// Returns the other player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// Contents of one board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No mark placed yet.
    Empty,
    /// Marked by a player.
    Marked(Player),
}

/// Who plays `O`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Mode {
    /// Two humans share the input device.
    PlayerVsPlayer,
    /// `X` is human, `O` is the computer.
    PlayerVsComputer,
}

/// Result classification of a game.
///
/// `Win` and `Draw` are absorbing: once reached, the engine rejects
/// further moves until a new game starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The game accepts further moves.
    InProgress,
    /// A player completed a line.
    Win(Player),
    /// The board filled with no winner.
    Draw,
}

impl Outcome {
    /// Returns true once the game has ended.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(player),
            _ => None,
        }
    }
}

/// The 3x3 board, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Returns the cell at a position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    /// Returns true if the cell at a position is unmarked.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns all positions still unmarked, in index order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|&pos| self.is_empty(pos))
            .collect()
    }

    /// Counts marked cells.
    pub fn marked_count(&self) -> u8 {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count() as u8
    }

    /// Returns the raw cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Renders the board as three text rows, `.` for empty cells.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let glyph = match self.cells[row * 3 + col] {
                    Cell::Empty => '.',
                    Cell::Marked(Player::X) => 'X',
                    Cell::Marked(Player::O) => 'O',
                };
                out.push(glyph);
            }
            if row < 2 {
                out.push('\n');
            }
        }
        out
    }

    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.index()] = cell;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
