//! Tests for non-interactive replay.

use caro_engine::{BoardConfig, Coord, MoveError, Player, RejectedMove};
use caro_hub::{OutputFormat, ReplayError, ReplaySummary, parse_moves, render, run_replay};

const X_WINS: &str = "H8, A1, I8, A2, J8, A3, K8, A4, L8";

#[test]
fn test_parse_moves_separators() {
    let moves = parse_moves(" h8,I9  j10\n,,A1 ").unwrap();
    assert_eq!(
        moves,
        vec![
            Coord::new(7, 7),
            Coord::new(8, 8),
            Coord::new(9, 9),
            Coord::new(0, 0)
        ]
    );
    assert_eq!(parse_moves("").unwrap(), Vec::<Coord>::new());
}

#[test]
fn test_parse_moves_rejects_garbage() {
    assert!(parse_moves("H8 8H").is_err());
    assert!(parse_moves("H0").is_err());
}

#[test]
fn test_replay_win_summary() {
    let game = run_replay(BoardConfig::default(), X_WINS).unwrap();
    let summary = ReplaySummary::from_game(&game);

    assert_eq!(summary.status, "won");
    assert_eq!(summary.winner, Some(Player::X));
    assert_eq!(summary.move_count, 9);
    assert_eq!(summary.next_player, None);
    assert_eq!(summary.winning_line.len(), 5);
    assert!(summary.winning_line.contains(&"L8".to_string()));
    assert_eq!(summary.rows.len(), 15);
    assert_eq!(summary.rows[7], ".......XXXXX...");
    // O filled column A from A1 down to A4
    assert_eq!(summary.rows[0], "O..............");
    for row in &summary.rows[1..4] {
        assert!(row.starts_with("O."), "row {:?}", row);
    }
    assert!(summary.rows[4].starts_with('.'));
}

#[test]
fn test_replay_in_progress_summary() {
    let game = run_replay(BoardConfig::default(), "H8 I9").unwrap();
    let summary = ReplaySummary::from_game(&game);
    assert_eq!(summary.status, "in_progress");
    assert_eq!(summary.winner, None);
    assert_eq!(summary.next_player, Some(Player::X));
    assert_eq!(summary.moves, vec!["H8".to_string(), "I9".to_string()]);
    assert!(summary.winning_line.is_empty());
}

#[test]
fn test_replay_reports_illegal_move_position() {
    let err = run_replay(BoardConfig::default(), "H8 I9 H8").unwrap_err();
    match err {
        ReplayError::IllegalMove(RejectedMove {
            index,
            coord,
            reason,
        }) => {
            assert_eq!(index, 3);
            assert_eq!(coord, Coord::new(7, 7));
            assert_eq!(reason, MoveError::CellOccupied(Coord::new(7, 7)));
        }
        other => panic!("Expected illegal move, got {:?}", other),
    }
}

#[test]
fn test_replay_rejects_moves_after_win() {
    let err = run_replay(BoardConfig::default(), &format!("{X_WINS} M9")).unwrap_err();
    assert!(matches!(
        err,
        ReplayError::IllegalMove(RejectedMove {
            index: 10,
            reason: MoveError::GameOver,
            ..
        })
    ));
}

#[test]
fn test_replay_off_board_for_small_config() {
    let config = BoardConfig::new(9, 5).unwrap();
    let err = run_replay(config, "J1").unwrap_err();
    assert!(err.to_string().contains("off the board"));
}

#[test]
fn test_text_render() {
    let game = run_replay(BoardConfig::default(), X_WINS).unwrap();
    let text = render(&game, OutputFormat::Text).unwrap();
    assert!(text.contains("Player X wins"));
    assert!(text.ends_with("Moves: 9"));
}

#[test]
fn test_json_render() {
    let game = run_replay(BoardConfig::default(), "H8").unwrap();
    let json = render(&game, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["status"], "in_progress");
    assert_eq!(value["next_player"], "O");
    assert_eq!(value["move_count"], 1);
    assert!(value["winner"].is_null());
}
