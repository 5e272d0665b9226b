//! The owning game controller and its state aggregate.

use crate::moves::{Move, MoveError};
use crate::position::Position;
use crate::rules;
use crate::types::{Board, Cell, Mode, Outcome, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Complete state of one game.
///
/// Invariants maintained by [`Engine`]:
/// - `move_count` equals the number of marked cells on `board`.
/// - `outcome` is `InProgress` exactly while moves are accepted.
/// - After a terminal outcome the board never changes until a new game.
/// - `current_player` flips after every accepted move, including the
///   one that ends the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_player: Player,
    mode: Mode,
    move_count: u8,
    outcome: Outcome,
}

impl GameState {
    fn new(mode: Mode) -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            mode,
            move_count: 0,
            outcome: Outcome::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns how many moves have been applied (0-9).
    pub fn move_count(&self) -> u8 {
        self.move_count
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns true while it is the computer's turn in an unfinished
    /// player-vs-computer game.
    pub fn is_computer_turn(&self) -> bool {
        self.mode == Mode::PlayerVsComputer
            && self.current_player == Player::O
            && self.outcome == Outcome::InProgress
    }

    /// Derives the human-readable status line for this state.
    pub fn status_line(&self) -> String {
        match self.outcome {
            Outcome::Win(player) => format!("Player {player} wins"),
            Outcome::Draw => "Draw".to_string(),
            Outcome::InProgress if self.is_computer_turn() => {
                "Computer is thinking".to_string()
            }
            Outcome::InProgress => format!("Player {}'s turn", self.current_player),
        }
    }
}

/// Tic-tac-toe engine: owns one [`GameState`] and mutates it only
/// through validated moves.
#[derive(Debug, Clone)]
pub struct Engine {
    state: GameState,
}

impl Engine {
    /// Creates an engine with a fresh game in the given mode.
    #[instrument]
    pub fn new(mode: Mode) -> Self {
        Self {
            state: GameState::new(mode),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Discards the current game and starts a fresh one.
    ///
    /// `mode: None` keeps the previous mode. Always succeeds; the new
    /// state is an empty board with `X` to move.
    #[instrument(skip(self))]
    pub fn new_game(&mut self, mode: Option<Mode>) {
        let mode = mode.unwrap_or(self.state.mode);
        debug!(%mode, "starting new game");
        self.state = GameState::new(mode);
    }

    /// Applies a move for the player currently on turn.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::Finished`] after a win or draw and
    /// [`MoveError::Occupied`] for a marked cell. State is untouched
    /// on rejection.
    pub fn play(&mut self, position: Position) -> Result<Outcome, MoveError> {
        self.try_move(Move::new(self.state.current_player, position))
    }

    /// Applies a move attributed to a specific player.
    ///
    /// Like [`Engine::play`], but also rejects with
    /// [`MoveError::NotYourTurn`] when the move's player is not on
    /// turn - the guard frontends rely on while the computer opponent
    /// is "thinking".
    #[instrument(skip(self), fields(player = %mov.player, position = %mov.position))]
    pub fn try_move(&mut self, mov: Move) -> Result<Outcome, MoveError> {
        if self.state.outcome.is_terminal() {
            return Err(MoveError::Finished);
        }
        if mov.player != self.state.current_player {
            return Err(MoveError::NotYourTurn(mov.player));
        }
        if !self.state.board.is_empty(mov.position) {
            return Err(MoveError::Occupied(mov.position));
        }

        self.state.board.set(mov.position, Cell::Marked(mov.player));
        self.state.move_count += 1;

        if rules::winner(&self.state.board) == Some(mov.player) {
            self.state.outcome = Outcome::Win(mov.player);
        } else if self.state.move_count == 9 {
            debug_assert!(rules::is_full(&self.state.board));
            self.state.outcome = Outcome::Draw;
        }

        // Flip unconditionally, terminal or not, so move_count and the
        // turn marker stay consistent with the number of marks placed.
        self.state.current_player = self.state.current_player.opponent();

        debug_assert_eq!(self.state.move_count, self.state.board.marked_count());
        debug!(outcome = ?self.state.outcome, "move applied");
        Ok(self.state.outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_line_follows_outcome() {
        let mut engine = Engine::new(Mode::PlayerVsComputer);
        assert_eq!(engine.state().status_line(), "Player X's turn");

        engine.play(Position::new(0).unwrap()).unwrap();
        assert_eq!(engine.state().status_line(), "Computer is thinking");

        engine.new_game(Some(Mode::PlayerVsPlayer));
        engine.play(Position::new(0).unwrap()).unwrap();
        assert_eq!(engine.state().status_line(), "Player O's turn");
    }

    #[test]
    fn computer_turn_requires_pvc_mode() {
        let mut engine = Engine::new(Mode::PlayerVsPlayer);
        engine.play(Position::new(0).unwrap()).unwrap();
        assert!(!engine.state().is_computer_turn());

        engine.new_game(Some(Mode::PlayerVsComputer));
        engine.play(Position::new(0).unwrap()).unwrap();
        assert!(engine.state().is_computer_turn());
    }

    #[test]
    fn state_serializes() {
        let mut engine = Engine::new(Mode::PlayerVsPlayer);
        engine.play(Position::new(4).unwrap()).unwrap();
        let json = serde_json::to_string(engine.state()).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(&back, engine.state());
    }
}
