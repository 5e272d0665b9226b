//! Pure tic-tac-toe game-state engine.
//!
//! The engine is a synchronous state machine: it owns a single
//! [`GameState`], accepts moves, and reports the outcome. It performs
//! no I/O and schedules nothing - frontends drive it and decide when
//! the computer opponent moves (see [`RandomPolicy`]).
//!
//! # Example
//!
//! ```
//! use tactix_engine::{Engine, Mode, Outcome, Position};
//!
//! let mut engine = Engine::new(Mode::PlayerVsPlayer);
//! engine.play(Position::new(4).unwrap())?;
//! assert_eq!(engine.state().outcome(), Outcome::InProgress);
//! # Ok::<(), tactix_engine::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod moves;
mod position;
mod rules;
mod types;

pub mod policy;

pub use engine::{Engine, GameState};
pub use moves::{Move, MoveError};
pub use position::Position;
pub use policy::RandomPolicy;
pub use types::{Board, Cell, Mode, Outcome, Player};
