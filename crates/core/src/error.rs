//! Engine error type
//!
//! Illegal moves are not errors: they are reported as `false` plus an
//! invalid-move notification. This type covers construction and parsing
//! failures at the edges of the engine.

use thiserror::Error;

use crate::types::{Move, PieceKind, Position};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error(
        "unsupported board size {columns}x{rows} (columns x rows); \
         minimum is {min_columns}x{min_rows}"
    )]
    InvalidDimensions {
        rows: usize,
        columns: usize,
        min_rows: usize,
        min_columns: usize,
    },

    #[error("grid has {actual} cells, expected {expected}")]
    GridSizeMismatch { expected: usize, actual: usize },

    #[error(
        "active {kind:?} piece at row {}, column {} is out of bounds or overlaps the grid",
        .anchor.row,
        .anchor.column
    )]
    ActivePieceObstructed { kind: PieceKind, anchor: Position },

    #[error("unknown piece kind `{0}`")]
    UnknownPieceKind(String),

    #[error("unknown move `{0}`")]
    UnknownMove(String),

    #[error("unknown piece source `{0}` (expected bag, uniform or script:<kinds>)")]
    UnknownSource(String),

    #[error("scripted piece sequence is empty")]
    EmptySequence,
}

/// Parse a piece kind name, reporting the offending text on failure
pub fn parse_piece_kind(s: &str) -> Result<PieceKind, EngineError> {
    PieceKind::from_str(s).ok_or_else(|| EngineError::UnknownPieceKind(s.to_string()))
}

/// Parse a move name, reporting the offending text on failure
pub fn parse_move(s: &str) -> Result<Move, EngineError> {
    Move::from_str(s).ok_or_else(|| EngineError::UnknownMove(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_helpers() {
        assert_eq!(parse_piece_kind("L"), Ok(PieceKind::L));
        assert_eq!(parse_move("down"), Ok(Move::Down));
        assert_eq!(
            parse_piece_kind("x"),
            Err(EngineError::UnknownPieceKind("x".to_string()))
        );
        assert_eq!(
            parse_move("hold"),
            Err(EngineError::UnknownMove("hold".to_string()))
        );
    }

    #[test]
    fn test_messages() {
        let err = EngineError::GridSizeMismatch {
            expected: 200,
            actual: 10,
        };
        assert_eq!(err.to_string(), "grid has 10 cells, expected 200");

        let err = EngineError::ActivePieceObstructed {
            kind: PieceKind::T,
            anchor: Position::new(-1, 3),
        };
        assert!(err.to_string().contains("row -1, column 3"));
    }
}
