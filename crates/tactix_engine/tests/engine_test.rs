//! Engine behavior: turn order, outcomes, and rejection semantics.

use tactix_engine::{Cell, Engine, Mode, Move, MoveError, Outcome, Player, Position};

fn pos(index: usize) -> Position {
    Position::new(index).expect("index in bounds")
}

/// Plays a sequence of positions, asserting each move is accepted.
fn play_all(engine: &mut Engine, positions: &[usize]) {
    for &index in positions {
        engine.play(pos(index)).expect("legal move");
    }
}

#[test]
fn turns_alternate_starting_with_x() {
    let mut engine = Engine::new(Mode::PlayerVsPlayer);
    assert_eq!(engine.state().current_player(), Player::X);

    let mut expected = Player::X;
    for index in [0, 4, 1, 5, 8] {
        assert_eq!(engine.state().current_player(), expected);
        engine.play(pos(index)).unwrap();
        expected = expected.opponent();
    }
}

#[test]
fn move_count_matches_marked_cells() {
    let mut engine = Engine::new(Mode::PlayerVsPlayer);
    for (turn, index) in [4, 0, 8, 2, 6].into_iter().enumerate() {
        engine.play(pos(index)).unwrap();
        let state = engine.state();
        assert_eq!(state.move_count(), turn as u8 + 1);
        assert_eq!(state.move_count(), state.board().marked_count());
    }
}

#[test]
fn top_row_win_for_x() {
    let mut engine = Engine::new(Mode::PlayerVsPlayer);
    play_all(&mut engine, &[0, 3, 1, 4]);
    assert_eq!(engine.state().outcome(), Outcome::InProgress);

    let outcome = engine.play(pos(2)).unwrap();
    assert_eq!(outcome, Outcome::Win(Player::X));

    let board = engine.state().board();
    for index in 0..3 {
        assert_eq!(board.get(pos(index)), Cell::Marked(Player::X));
    }
    for index in 3..5 {
        assert_eq!(board.get(pos(index)), Cell::Marked(Player::O));
    }
    assert_eq!(engine.state().status_line(), "Player X wins");
}

#[test]
fn full_board_without_line_is_a_draw() {
    let mut engine = Engine::new(Mode::PlayerVsPlayer);
    play_all(&mut engine, &[0, 1, 2, 4, 3, 5, 7, 6]);
    assert_eq!(engine.state().outcome(), Outcome::InProgress);

    let outcome = engine.play(pos(8)).unwrap();
    assert_eq!(outcome, Outcome::Draw);
    assert_eq!(engine.state().move_count(), 9);
    assert_eq!(engine.state().status_line(), "Draw");
}

#[test]
fn occupied_cell_is_rejected_without_mutation() {
    let mut engine = Engine::new(Mode::PlayerVsPlayer);
    engine.play(pos(0)).unwrap();

    let before = engine.state().clone();
    assert_eq!(engine.play(pos(0)), Err(MoveError::Occupied(pos(0))));
    assert_eq!(engine.state(), &before);
}

#[test]
fn out_of_turn_move_is_rejected() {
    let mut engine = Engine::new(Mode::PlayerVsComputer);
    let before = engine.state().clone();

    // O tries to move on X's turn.
    let result = engine.try_move(Move::new(Player::O, pos(4)));
    assert_eq!(result, Err(MoveError::NotYourTurn(Player::O)));
    assert_eq!(engine.state(), &before);
}

#[test]
fn terminal_state_is_frozen() {
    let mut engine = Engine::new(Mode::PlayerVsPlayer);
    play_all(&mut engine, &[0, 3, 1, 4, 2]);
    assert_eq!(engine.state().outcome(), Outcome::Win(Player::X));

    let frozen = engine.state().clone();
    for index in 0..9 {
        assert_eq!(engine.play(pos(index)), Err(MoveError::Finished));
    }
    assert_eq!(engine.state(), &frozen);
}

#[test]
fn new_game_resets_everything() {
    let mut engine = Engine::new(Mode::PlayerVsComputer);
    play_all(&mut engine, &[0, 3, 1, 4, 2]);

    engine.new_game(None);
    let state = engine.state();
    assert_eq!(state.outcome(), Outcome::InProgress);
    assert_eq!(state.current_player(), Player::X);
    assert_eq!(state.move_count(), 0);
    assert_eq!(state.board().marked_count(), 0);
    // Mode carries over when unspecified.
    assert_eq!(state.mode(), Mode::PlayerVsComputer);

    engine.new_game(Some(Mode::PlayerVsPlayer));
    assert_eq!(engine.state().mode(), Mode::PlayerVsPlayer);
}

#[test]
fn winning_move_still_flips_the_turn_marker() {
    let mut engine = Engine::new(Mode::PlayerVsPlayer);
    play_all(&mut engine, &[0, 3, 1, 4, 2]);
    // X made the last move; the marker points at O even though the
    // game is over.
    assert_eq!(engine.state().current_player(), Player::O);
}
