use serde::{Deserialize, Serialize};

use crate::piece::Piece;
use crate::stats::GameStats;
use crate::types::{PieceKind, Position};

/// Minimal description of a piece: the matrix is derived from kind and rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceState {
    pub kind: PieceKind,
    pub anchor: Position,
    pub rotation: i32,
}

impl From<Piece> for PieceState {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind(),
            anchor: value.anchor(),
            rotation: value.rotation(),
        }
    }
}

impl From<PieceState> for Piece {
    fn from(value: PieceState) -> Self {
        Piece::with_rotation(value.kind, value.anchor, value.rotation)
    }
}

/// Sufficient state to rebuild a board mid-session
///
/// `grid` is row-major with row 0 at the floor, `rows * columns` long.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub rows: usize,
    pub columns: usize,
    pub grid: Vec<bool>,
    pub active: Option<PieceState>,
    pub stats: GameStats,
}

impl BoardSnapshot {
    pub fn occupied_count(&self) -> usize {
        self.grid.iter().filter(|&&cell| cell).count()
    }
}
