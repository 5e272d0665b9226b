//! Application state: the engine plus frontend-only concerns.

use crossterm::event::KeyCode;
use std::time::Duration;
use tactix_engine::{Engine, GameState, Mode, Position, RandomPolicy};
use tracing::debug;

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Keep running.
    Continue,
    /// Tear down the terminal and exit.
    Quit,
}

/// Frontend state wrapped around the engine.
///
/// The `generation` counter stamps every accepted mutation; the
/// computer-move timer records the generation it was armed for, and a
/// tick whose stamp no longer matches is discarded. That is the whole
/// cancellation story - no task handles to track.
pub struct App {
    engine: Engine,
    policy: RandomPolicy,
    cursor: Position,
    delay: Duration,
    generation: u64,
    armed_for: Option<u64>,
}

impl App {
    /// Creates the app with a fresh game.
    pub fn new(mode: Mode, delay: Duration, seed: Option<u64>) -> Self {
        let policy = match seed {
            Some(seed) => RandomPolicy::seeded(seed),
            None => RandomPolicy::new(),
        };
        Self {
            engine: Engine::new(mode),
            policy,
            cursor: Position::new(4).expect("center is in bounds"),
            delay,
            generation: 0,
            armed_for: None,
        }
    }

    /// Current game state, for rendering.
    pub fn state(&self) -> &GameState {
        self.engine.state()
    }

    /// Cursor position, for rendering.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Thinking delay for the timer task.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Returns the generation to arm a thinking timer for, if the
    /// computer's turn just began and no timer covers it yet.
    pub fn timer_to_arm(&mut self) -> Option<u64> {
        if self.state().is_computer_turn() && self.armed_for != Some(self.generation) {
            self.armed_for = Some(self.generation);
            Some(self.generation)
        } else {
            None
        }
    }

    /// Applies the computer's move when its thinking delay elapses.
    ///
    /// A stale `generation` means the game moved on (restart, mode
    /// switch) since the timer was armed; the tick is dropped.
    pub fn on_thinking_elapsed(&mut self, generation: u64) {
        if generation != self.generation {
            debug!(generation, current = self.generation, "stale computer tick dropped");
            return;
        }
        if let Some(position) = self.policy.pick(self.engine.state()) {
            // pick() only answers on the computer's turn, so this move
            // is always accepted.
            if self.engine.play(position).is_ok() {
                self.bump();
            }
        }
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, key: KeyCode) -> Signal {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Signal::Quit,
            KeyCode::Char('r') => self.restart(None),
            KeyCode::Char('m') => {
                let toggled = match self.state().mode() {
                    Mode::PlayerVsPlayer => Mode::PlayerVsComputer,
                    Mode::PlayerVsComputer => Mode::PlayerVsPlayer,
                };
                // Switching modes always starts a fresh game.
                self.restart(Some(toggled));
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = crate::input::step(self.cursor, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.human_move(self.cursor),
            KeyCode::Char(c) if ('1'..='9').contains(&c) => {
                if let Some(position) =
                    c.to_digit(10).and_then(|d| Position::new(d as usize - 1))
                {
                    self.human_move(position);
                }
            }
            _ => {}
        }
        Signal::Continue
    }

    fn human_move(&mut self, position: Position) {
        // Input is disabled while the computer is thinking; rejected
        // moves (occupied cell, finished game) are silent no-ops.
        if self.state().is_computer_turn() {
            return;
        }
        if self.engine.play(position).is_ok() {
            self.bump();
        }
    }

    fn restart(&mut self, mode: Option<Mode>) {
        self.engine.new_game(mode);
        self.bump();
    }

    fn bump(&mut self) {
        self.generation += 1;
        self.armed_for = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tactix_engine::{Outcome, Player};

    fn app(mode: Mode) -> App {
        App::new(mode, Duration::from_millis(0), Some(99))
    }

    fn key_digit(d: u32) -> KeyCode {
        KeyCode::Char(char::from_digit(d, 10).unwrap())
    }

    #[test]
    fn timer_arms_once_per_computer_turn() {
        let mut app = app(Mode::PlayerVsComputer);
        assert_eq!(app.timer_to_arm(), None);

        app.handle_key(key_digit(1));
        let generation = app.timer_to_arm().expect("computer turn armed");
        // Same turn, no re-arm.
        assert_eq!(app.timer_to_arm(), None);

        app.on_thinking_elapsed(generation);
        assert_eq!(app.state().current_player(), Player::X);
        assert_eq!(app.state().move_count(), 2);
    }

    #[test]
    fn restart_invalidates_pending_tick() {
        let mut app = app(Mode::PlayerVsComputer);
        app.handle_key(key_digit(1));
        let generation = app.timer_to_arm().unwrap();

        app.handle_key(KeyCode::Char('r'));
        app.on_thinking_elapsed(generation);

        // The stale tick must not land on the fresh board.
        assert_eq!(app.state().move_count(), 0);
        assert_eq!(app.state().outcome(), Outcome::InProgress);
    }

    #[test]
    fn mode_switch_restarts_and_cancels() {
        let mut app = app(Mode::PlayerVsComputer);
        app.handle_key(key_digit(5));
        let generation = app.timer_to_arm().unwrap();

        app.handle_key(KeyCode::Char('m'));
        assert_eq!(app.state().mode(), Mode::PlayerVsPlayer);
        assert_eq!(app.state().move_count(), 0);

        app.on_thinking_elapsed(generation);
        assert_eq!(app.state().move_count(), 0);
    }

    #[test]
    fn human_input_ignored_while_computer_thinks() {
        let mut app = app(Mode::PlayerVsComputer);
        app.handle_key(key_digit(1));
        assert!(app.state().is_computer_turn());

        app.handle_key(key_digit(5));
        assert_eq!(app.state().move_count(), 1);
    }

    #[test]
    fn cursor_placement_with_enter() {
        let mut app = app(Mode::PlayerVsPlayer);
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Left);
        app.handle_key(KeyCode::Enter);
        assert!(!app.state().board().is_empty(Position::new(0).unwrap()));
    }
}
