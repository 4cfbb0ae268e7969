//! Tests for the caro board engine lifecycle.

use caro_engine::invariants::{CaroInvariants, InvariantSet};
use caro_engine::{
    BoardConfig, Cell, Coord, GameState, GameStatus, MoveError, Player, RejectedMove,
    evaluate_win,
};

/// Cells of a full 15x15 board with no five-in-a-row, split by owner.
///
/// Owner follows the parity of `row + col / 2`: runs never exceed two.
fn drawn_layout() -> (Vec<Coord>, Vec<Coord>) {
    let mut xs = Vec::new();
    let mut os = Vec::new();
    for row in 0..15 {
        for col in 0..15 {
            if (row + col / 2) % 2 == 0 {
                xs.push(Coord::new(row, col));
            } else {
                os.push(Coord::new(row, col));
            }
        }
    }
    (xs, os)
}

#[test]
fn test_scenario_x_wins_row_seven() {
    let mut game = GameState::new();

    for col in 7..11 {
        game.play(7, col).expect("X move");
        game.play(0, col - 7).expect("O move");
    }
    assert_eq!(game.status(), &GameStatus::InProgress);
    assert_eq!(game.current_player(), Player::X);

    let status = game.play(7, 11).expect("Winning move").clone();
    match status {
        GameStatus::Won { winner, line } => {
            assert_eq!(winner, Player::X);
            for col in 7..=11 {
                assert!(line.contains(Coord::new(7, col)));
            }
        }
        other => panic!("Expected win, got {:?}", other),
    }
    assert_eq!(game.move_count(), 9);
    assert_eq!(game.current_player(), Player::X);
}

#[test]
fn test_moves_after_win_rejected() {
    let moves: Vec<Coord> = [(7, 7), (0, 0), (7, 8), (0, 1), (7, 9), (0, 2), (7, 10), (0, 3), (7, 11)]
        .into_iter()
        .map(|(r, c)| Coord::new(r, c))
        .collect();
    let mut game = GameState::replay(BoardConfig::default(), &moves).expect("Valid replay");
    let before = game.clone();

    assert_eq!(game.play(10, 10), Err(MoveError::GameOver));
    assert_eq!(game, before);
}

#[test]
fn test_full_board_without_line_is_draw() {
    let (xs, os) = drawn_layout();
    assert_eq!(xs.len(), 113);
    assert_eq!(os.len(), 112);

    let mut game = GameState::new();
    for (i, x) in xs.iter().enumerate() {
        game.apply_move(*x).expect("X move");
        if let Some(o) = os.get(i) {
            game.apply_move(*o).expect("O move");
        }
    }

    assert_eq!(game.status(), &GameStatus::Draw);
    assert_eq!(game.winner(), None);
    assert_eq!(game.move_count(), 225);
    assert_eq!(game.play(0, 0), Err(MoveError::GameOver));
    assert!(CaroInvariants::check_all(&game).is_ok());
}

#[test]
fn test_win_on_last_cell_is_win_not_draw() {
    // 3x3, three to win: X fills the last cell with a completed diagonal.
    let config = BoardConfig::new(3, 3).expect("Valid config");
    let moves = [
        Coord::new(0, 0),
        Coord::new(0, 1),
        Coord::new(0, 2),
        Coord::new(1, 0),
        Coord::new(1, 1),
        Coord::new(1, 2),
        Coord::new(2, 1),
        Coord::new(2, 0),
    ];
    let mut game = GameState::replay(config, &moves).expect("Valid replay");
    assert_eq!(game.status(), &GameStatus::InProgress);

    game.play(2, 2).expect("Last cell");
    assert_eq!(game.winner(), Some(Player::X));
    assert_eq!(game.move_count(), 9);
}

#[test]
fn test_reset_after_moves() {
    let mut game = GameState::new();
    for (row, col) in [(7, 7), (7, 8), (8, 8)] {
        game.play(row, col).expect("Valid move");
    }

    game.reset();

    assert!(game.board().cells().iter().all(|c| *c == Cell::Empty));
    assert_eq!(game.current_player(), Player::X);
    assert_eq!(game.move_count(), 0);
    assert_eq!(game.status(), &GameStatus::InProgress);
    assert!(game.history().is_empty());
}

#[test]
fn test_reset_after_win() {
    let moves: Vec<Coord> = (0..5)
        .flat_map(|i| [Coord::new(3, i), Coord::new(9, i)])
        .take(9)
        .collect();
    let mut game = GameState::replay(BoardConfig::default(), &moves).expect("Valid replay");
    assert!(game.is_over());

    game.reset();
    assert_eq!(game, GameState::new());
    game.play(3, 0).expect("Play after reset");
}

#[test]
fn test_replay_stops_at_illegal_move() {
    let moves = [Coord::new(7, 7), Coord::new(8, 8), Coord::new(7, 7), Coord::new(9, 9)];
    let result = GameState::replay(BoardConfig::default(), &moves);
    assert_eq!(
        result,
        Err(RejectedMove {
            index: 3,
            coord: Coord::new(7, 7),
            reason: MoveError::CellOccupied(Coord::new(7, 7)),
        })
    );
}

#[test]
fn test_evaluate_win_on_engine_board() {
    let mut game = GameState::new();
    for (row, col) in [(7, 3), (0, 0), (7, 4), (0, 1), (7, 6), (0, 2), (7, 7)] {
        game.play(row, col).expect("Valid move");
    }
    // Gap at (7, 5): no line yet.
    assert_eq!(evaluate_win(game.board(), Coord::new(7, 6), Player::X, 5), None);

    game.play(0, 4).expect("O move");
    game.play(7, 5).expect("Filling the gap");
    let line = game.winning_line().expect("Line completed");
    assert_eq!(line.len(), 5);
    assert_eq!(line.cells()[0], Coord::new(7, 5));
}

#[test]
fn test_invalid_config_rejected_on_deserialize() {
    let parsed: Result<BoardConfig, _> = serde_json::from_str(r#"{"size": 0, "win_length": 5}"#);
    assert!(parsed.is_err());

    let parsed: BoardConfig =
        serde_json::from_str(r#"{"size": 19}"#).expect("Defaults fill win length");
    assert_eq!(parsed, BoardConfig::new(19, 5).expect("Valid config"));
}

#[test]
fn test_deserialize_round_trip_of_played_game() {
    let mut game = GameState::new();
    for (row, col) in [(7, 7), (7, 8), (8, 8)] {
        game.play(row, col).expect("Valid move");
    }
    let json = serde_json::to_value(&game).expect("Serializable");
    let restored: GameState = serde_json::from_value(json).expect("Consistent state");
    assert_eq!(restored, game);
}

#[test]
fn test_deserialize_rejects_inconsistent_state() {
    let mut game = GameState::new();
    game.play(7, 7).expect("Valid move");
    let valid = serde_json::to_value(&game).expect("Serializable");

    // Cell list shorter than size²
    let mut truncated = valid.clone();
    truncated["board"]["cells"] = serde_json::json!(["Empty"]);
    assert!(serde_json::from_value::<GameState>(truncated).is_err());

    // Board does not match the configured size
    let mut resized = valid.clone();
    resized["config"]["size"] = serde_json::json!(9);
    assert!(serde_json::from_value::<GameState>(resized).is_err());

    // Turn out of step with the history
    let mut wrong_turn = valid.clone();
    wrong_turn["current_player"] = serde_json::json!("X");
    assert!(serde_json::from_value::<GameState>(wrong_turn).is_err());

    // Count out of step with the board
    let mut wrong_count = valid;
    wrong_count["move_count"] = serde_json::json!(2);
    assert!(serde_json::from_value::<GameState>(wrong_count).is_err());
}
