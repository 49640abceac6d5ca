//! Snapshot tests - serialization and validated restore

use tetris_rules::core::{Board, BoardConfig, BoardSnapshot, EngineError, NoopHandler, PieceState};
use tetris_rules::types::{Move, PieceKind, Position};

fn mid_session() -> Board {
    let mut board = Board::default();
    board.spawn(PieceKind::J).unwrap();
    board.apply_move(Move::Fall);
    board.spawn(PieceKind::T).unwrap();
    board.apply_move(Move::RotateRight);
    board.apply_move(Move::Left);
    board.apply_move(Move::Down);
    board
}

#[test]
fn test_snapshot_survives_json() {
    let board = mid_session();
    let snapshot = board.snapshot();

    let json = serde_json::to_string(&snapshot).unwrap();
    let decoded: BoardSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, snapshot);

    let restored = Board::from_snapshot(decoded, NoopHandler).unwrap();
    assert_eq!(restored.snapshot(), snapshot);
    assert_eq!(restored.active(), board.active());
    assert_eq!(restored.render_text(), board.render_text());
    assert!(restored.previous().is_none());
}

#[test]
fn test_snapshot_contents() {
    let board = mid_session();
    let snapshot = board.snapshot();

    assert_eq!(snapshot.rows, 20);
    assert_eq!(snapshot.columns, 10);
    assert_eq!(snapshot.grid.len(), 200);
    assert_eq!(snapshot.occupied_count(), 4);
    assert_eq!(snapshot.stats.blocks_spawned(), 2);

    let active = snapshot.active.unwrap();
    assert_eq!(active.kind, PieceKind::T);
    assert_eq!(active.rotation, 1);
    assert_eq!(active.anchor, Position::new(16, 2));
}

#[test]
fn test_restored_board_keeps_playing() {
    let mut restored = Board::from_snapshot(mid_session().snapshot(), NoopHandler).unwrap();
    assert!(restored.apply_move(Move::Fall));
    assert!(restored.active().is_none());
    assert_eq!(restored.grid().iter().filter(|&&cell| cell).count(), 8);
}

#[test]
fn test_restore_rejects_bad_dimensions() {
    let mut snapshot = Board::default().snapshot();
    snapshot.columns = 3;
    snapshot.grid = vec![false; 60];

    let err = Board::from_snapshot(snapshot, NoopHandler).unwrap_err();
    assert!(matches!(err, EngineError::InvalidDimensions { columns: 3, .. }));
}

#[test]
fn test_restore_rejects_overflowing_dimensions() {
    let mut snapshot = Board::default().snapshot();
    snapshot.rows = usize::MAX / 2 + 1;
    snapshot.columns = usize::MAX / 2 + 1;
    snapshot.grid = Vec::new();

    let err = Board::from_snapshot(snapshot.clone(), NoopHandler).unwrap_err();
    assert!(matches!(err, EngineError::InvalidDimensions { .. }));

    // Each side alone fits a usize but not a board coordinate
    snapshot.rows = 20;
    snapshot.columns = i32::MAX as usize + 1;
    let err = Board::from_snapshot(snapshot, NoopHandler).unwrap_err();
    assert!(matches!(err, EngineError::InvalidDimensions { rows: 20, .. }));
}

#[test]
fn test_restore_rejects_short_grid() {
    let mut snapshot = Board::default().snapshot();
    snapshot.grid.truncate(150);

    let err = Board::from_snapshot(snapshot, NoopHandler).unwrap_err();
    assert_eq!(
        err,
        EngineError::GridSizeMismatch {
            expected: 200,
            actual: 150
        }
    );
    assert_eq!(err.to_string(), "grid has 150 cells, expected 200");
}

#[test]
fn test_restore_rejects_obstructed_piece() {
    let mut board = Board::default();
    board.set_cell(Position::new(0, 4), true);
    let mut snapshot = board.snapshot();
    snapshot.active = Some(PieceState {
        kind: PieceKind::O,
        anchor: Position::new(0, 4),
        rotation: 0,
    });

    let err = Board::from_snapshot(snapshot.clone(), NoopHandler).unwrap_err();
    assert!(matches!(err, EngineError::ActivePieceObstructed { kind: PieceKind::O, .. }));

    snapshot.active = Some(PieceState {
        kind: PieceKind::O,
        anchor: Position::new(-1, 4),
        rotation: 0,
    });
    assert!(Board::from_snapshot(snapshot, NoopHandler).is_err());
}

#[test]
fn test_restore_custom_dimensions() {
    let board = Board::new(BoardConfig::new(8, 6).unwrap());
    let restored = Board::from_snapshot(board.snapshot(), NoopHandler).unwrap();
    assert_eq!(restored.config(), board.config());
}
