//! Shared vocabulary types for the rules engine.
//!
//! Everything here is plain data with closed sets of values, usable from the
//! core rules, the game loop, and any presentation or agent layer built on top.
//!
//! # Coordinates
//!
//! Board coordinates are `(row, column)` pairs:
//!
//! - **Row** increases upward, row 0 is the floor
//! - **Column** increases rightward, column 0 is the left wall
//!
//! A [`Position`] carries no bounds invariant; the board decides what is in
//! range.
//!
//! # Board Dimensions
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_COLUMNS` | 10 | Standard playfield width |
//! | `DEFAULT_ROWS` | 20 | Standard playfield height |
//! | `SPAWN_GUARD_ROWS` | 2 | Top rows that must stay empty for a spawn |
//!
//! # Examples
//!
//! ```
//! use tetris_rules_types::{Move, PieceKind, Position};
//!
//! let kind = PieceKind::from_str("t").unwrap();
//! assert_eq!(kind, PieceKind::T);
//!
//! let mv = Move::from_str("rotateRight").unwrap();
//! assert!(mv.is_rotation());
//!
//! let p = Position::new(3, 4).offset(-1, 1);
//! assert_eq!(p, Position::new(2, 5));
//! ```

use serde::{Deserialize, Serialize};

/// Standard board width in cells
pub const DEFAULT_COLUMNS: usize = 10;

/// Standard board height in cells
pub const DEFAULT_ROWS: usize = 20;

/// Number of rows at the top of the grid that must be empty before a piece can spawn
pub const SPAWN_GUARD_ROWS: usize = 2;

/// The seven tetromino piece kinds
///
/// Used only as a key into the geometry table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    O,
    I,
    J,
    L,
    S,
    Z,
    T,
}

impl PieceKind {
    /// All kinds in declaration order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::O,
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::T,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_rules_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("Z"), Some(PieceKind::Z));
    /// assert_eq!(PieceKind::from_str("q"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "o" => Some(PieceKind::O),
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "t" => Some(PieceKind::T),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::O => "o",
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::T => "t",
        }
    }
}

/// A move request applied to the active piece
///
/// `Up` and `None` are part of the vocabulary but never mutate the board
/// during normal play: `None` is a harmless probe and `Up` is only meaningful
/// on a detached piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// No-op sentinel, always legal
    None,
    /// Shift one column left
    Left,
    /// Shift one column right
    Right,
    /// Shift one row down; locks the piece when blocked
    Down,
    /// Shift one row up
    Up,
    /// Hard drop to the lowest reachable row, then lock
    Fall,
    /// Step the rotation index down by one
    RotateLeft,
    /// Step the rotation index up by one
    RotateRight,
}

impl Move {
    /// All moves in declaration order
    pub const ALL: [Move; 8] = [
        Move::None,
        Move::Left,
        Move::Right,
        Move::Down,
        Move::Up,
        Move::Fall,
        Move::RotateLeft,
        Move::RotateRight,
    ];

    /// True for the two rotation moves
    pub fn is_rotation(&self) -> bool {
        matches!(self, Move::RotateLeft | Move::RotateRight)
    }

    /// Parse move from string (case-insensitive camelCase names)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_rules_types::Move;
    ///
    /// assert_eq!(Move::from_str("fall"), Some(Move::Fall));
    /// assert_eq!(Move::from_str("RotateLeft"), Some(Move::RotateLeft));
    /// assert_eq!(Move::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "none" => Some(Move::None),
            "left" => Some(Move::Left),
            "right" => Some(Move::Right),
            "down" => Some(Move::Down),
            "up" => Some(Move::Up),
            "fall" => Some(Move::Fall),
            "rotateleft" => Some(Move::RotateLeft),
            "rotateright" => Some(Move::RotateRight),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Move::None => "none",
            Move::Left => "left",
            Move::Right => "right",
            Move::Down => "down",
            Move::Up => "up",
            Move::Fall => "fall",
            Move::RotateLeft => "rotateLeft",
            Move::RotateRight => "rotateRight",
        }
    }
}

/// A board coordinate, row 0 at the floor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub column: i32,
}

impl Position {
    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    /// Return this position shifted by the given row and column deltas
    pub const fn offset(self, rows: i32, columns: i32) -> Self {
        Self {
            row: self.row + rows,
            column: self.column + columns,
        }
    }
}
