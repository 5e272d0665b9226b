//! First-class move events and their rejection reasons.

use crate::position::Position;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// A player's intent to mark a position.
///
/// Moves are plain data so callers can log them, replay them, or
/// validate them before the engine applies them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position to mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position)
    }
}

/// Why the engine rejected a move.
///
/// Rejection never mutates state; callers that discard the error get
/// silent no-op behavior at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    Occupied(Position),

    /// The game has ended; start a new game to continue.
    #[display("Game is already over")]
    Finished,

    /// The move was submitted for the player not on turn.
    #[display("It is not {}'s turn", _0)]
    NotYourTurn(Player),
}

impl std::error::Error for MoveError {}
