//! Piece module - a movable piece instance
//!
//! A piece is a value: trial moves work on a copy and the board commits by
//! replacing its active slot, so a rejected move never touches committed state.

use arrayvec::ArrayVec;

use crate::geometry::{self, Orientation, MAX_BOX};
use crate::types::{Move, PieceKind, Position};

/// Board cells covered by one piece
pub type Cells = ArrayVec<Position, { MAX_BOX * MAX_BOX }>;

/// Active or locked piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    /// Bottom-left cell of the bounding box in board coordinates
    anchor: Position,
    rotation: i32,
    matrix: &'static Orientation,
}

impl Piece {
    /// Create a piece in its spawn orientation
    pub fn new(kind: PieceKind, anchor: Position) -> Self {
        Self::with_rotation(kind, anchor, 0)
    }

    pub fn with_rotation(kind: PieceKind, anchor: Position, rotation: i32) -> Self {
        Self {
            kind,
            anchor,
            rotation,
            matrix: geometry::orientation(kind, rotation),
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn anchor(&self) -> Position {
        self.anchor
    }

    /// Raw rotation index, unbounded and signed
    pub fn rotation(&self) -> i32 {
        self.rotation
    }

    pub fn matrix(&self) -> &'static Orientation {
        self.matrix
    }

    pub fn bounding_box(&self) -> usize {
        self.matrix.size()
    }

    /// Apply a move to this piece alone, without any legality check
    ///
    /// `Fall` and `None` leave the piece untouched; the board resolves a fall
    /// into a single downward translation itself.
    pub fn apply(&mut self, mv: Move) {
        match mv {
            Move::Left => self.anchor = self.anchor.offset(0, -1),
            Move::Right => self.anchor = self.anchor.offset(0, 1),
            Move::Down => self.anchor = self.anchor.offset(-1, 0),
            Move::Up => self.anchor = self.anchor.offset(1, 0),
            Move::RotateRight => self.set_rotation(self.rotation.wrapping_add(1)),
            Move::RotateLeft => self.set_rotation(self.rotation.wrapping_sub(1)),
            Move::Fall | Move::None => {}
        }
    }

    /// Copy of this piece with one move applied
    pub fn moved(mut self, mv: Move) -> Self {
        self.apply(mv);
        self
    }

    /// Copy of this piece shifted by whole rows and columns
    pub fn shifted(mut self, rows: i32, columns: i32) -> Self {
        self.anchor = self.anchor.offset(rows, columns);
        self
    }

    fn set_rotation(&mut self, rotation: i32) {
        self.rotation = rotation;
        self.matrix = geometry::orientation(self.kind, rotation);
    }

    /// Absolute board cells covered by the current orientation
    pub fn occupied_cells(&self) -> Cells {
        self.matrix
            .filled()
            .map(|(row, column)| self.anchor.offset(row as i32, column as i32))
            .collect()
    }
}
