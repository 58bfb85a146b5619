//! Tests for status derivation and move application on the game state machine.

use botmatch::{Coordinate, Game, MoveRejected, Role, Status};

fn at(row: u8, col: u8) -> Coordinate {
    Coordinate::new(row, col).unwrap()
}

#[test]
fn test_fresh_game_is_in_progress() {
    let game = Game::with_starter(Role::Human);
    assert_eq!(game.status(), Status::InProgress);
    assert!(!game.is_ended());
}

#[test]
fn test_human_top_row_wins() {
    // Human: (0,0) (0,1) (0,2); bot: (1,0) (1,1)
    let moves = [at(0, 0), at(1, 0), at(0, 1), at(1, 1), at(0, 2)];
    let game = Game::replay(Role::Human, &moves).unwrap();

    assert_eq!(game.status(), Status::HumanWon);
    assert!(game.is_ended());
    assert_eq!(game.status().to_string(), "You won");
}

#[test]
fn test_automated_middle_row_wins() {
    // Bot: (1,0) (1,1) (1,2); human: (0,0) (0,1)
    let moves = [at(1, 0), at(0, 0), at(1, 1), at(0, 1), at(1, 2)];
    let game = Game::replay(Role::Automated, &moves).unwrap();

    assert_eq!(game.status(), Status::AutomatedWon);
    assert_eq!(game.status().to_string(), "You lost");
}

#[test]
fn test_full_board_without_line_is_draw() {
    // X O X
    // X O O
    // O X X
    let moves = [
        at(0, 0),
        at(0, 1),
        at(0, 2),
        at(1, 1),
        at(1, 0),
        at(1, 2),
        at(2, 1),
        at(2, 0),
        at(2, 2),
    ];
    let game = Game::replay(Role::Automated, &moves).unwrap();

    assert_eq!(game.player(Role::Automated).claimed_count(), 5);
    assert_eq!(game.player(Role::Human).claimed_count(), 4);
    assert_eq!(game.status(), Status::Draw);
}

#[test]
fn test_claimed_cell_rejected_without_change() {
    let mut game = Game::replay(Role::Automated, &[at(1, 1)]).unwrap();
    assert_eq!(game.turn(), Role::Human);
    let before = game.clone();

    assert_eq!(
        game.apply_human_move(at(1, 1)),
        Err(MoveRejected::CellTaken(at(1, 1)))
    );
    assert_eq!(game, before);
}

#[test]
fn test_human_move_out_of_turn_rejected_without_change() {
    let mut game = Game::with_starter(Role::Automated);
    let before = game.clone();

    assert!(game.apply_human_move(at(0, 0)).is_err());
    assert_eq!(game, before);
}

#[test]
fn test_no_move_after_game_over() {
    let moves = [at(0, 0), at(1, 0), at(0, 1), at(1, 1), at(0, 2)];
    let mut game = Game::replay(Role::Human, &moves).unwrap();
    let before = game.clone();

    assert_eq!(game.apply_human_move(at(2, 2)), Err(MoveRejected::GameOver));
    assert_eq!(game, before);
}

#[test]
fn test_replay_stops_at_first_rejection() {
    let result = Game::replay(Role::Human, &[at(0, 0), at(0, 0)]);
    assert_eq!(result, Err(MoveRejected::CellTaken(at(0, 0))));
}
