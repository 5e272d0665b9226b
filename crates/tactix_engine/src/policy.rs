//! Computer-move policy: uniform-random selection among empty cells.
//!
//! The random source is injectable so tests can seed it and verify
//! the selection logic exactly.

use crate::engine::GameState;
use crate::position::Position;
use crate::types::Board;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Picks a uniformly-random empty position, or `None` on a full board.
pub fn choose_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    board.empty_positions().choose(rng).copied()
}

/// The computer opponent's move policy.
///
/// Holds its own RNG; construct with [`RandomPolicy::seeded`] for
/// reproducible play.
#[derive(Debug, Clone)]
pub struct RandomPolicy {
    rng: StdRng,
}

impl RandomPolicy {
    /// Creates a policy seeded from system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a policy with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Picks the computer's move for the given state.
    ///
    /// Returns `None` unless it is the computer's turn in an
    /// unfinished player-vs-computer game. When the preconditions hold
    /// an empty cell always exists, since a full board is terminal.
    pub fn pick(&mut self, state: &GameState) -> Option<Position> {
        if !state.is_computer_turn() {
            return None;
        }
        let choice = choose_move(state.board(), &mut self.rng);
        debug!(position = ?choice, "computer move selected");
        choice
    }
}

impl Default for RandomPolicy {
    fn default() -> Self {
        Self::new()
    }
}
