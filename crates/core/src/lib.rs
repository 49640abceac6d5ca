//! Core rules - pure, deterministic, and synchronous
//!
//! This crate owns everything with an invariant: piece geometry, the board
//! grid, move legality, locking, row clearing and per-session statistics.
//! It has no dependency on rendering, input timing, networking or I/O.
//!
//! # Module Structure
//!
//! - [`geometry`]: static orientation matrices for the seven piece kinds
//! - [`piece`]: a movable piece value (kind, anchor, rotation index)
//! - [`board`]: the grid, the active piece, legality checks, lock and collapse
//! - [`stats`]: additive per-session counters
//! - [`events`]: the synchronous notification interface
//! - [`snapshot`]: serializable board state
//! - [`rng`]: seeded LCG and 7-bag randomizer
//!
//! # Rules
//!
//! - **Spawn**: centered at `((columns - box) / 2, rows - box)`, refused while
//!   a piece is active or either of the top two rows holds a locked cell
//! - **Down**: moves one row, or locks the piece when the row below is blocked
//! - **Fall**: drops to the collision height in one step and locks
//! - **Rotation**: in place, then one column left or right (I piece also
//!   tries two columns); no vertical kicks
//! - **Row clear**: full rows are removed after every lock and everything
//!   above shifts down
//!
//! # Example
//!
//! ```
//! use tetris_rules_core::{Board, BoardConfig};
//! use tetris_rules_core::types::{Move, PieceKind};
//!
//! let mut board = Board::new(BoardConfig::default());
//! board.spawn(PieceKind::T).unwrap();
//!
//! assert!(board.apply_move(Move::Left));
//! assert!(board.apply_move(Move::Fall));
//! assert!(board.active().is_none());
//! assert_eq!(board.stats().blocks_spawned(), 1);
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod events;
pub mod geometry;
pub mod piece;
pub mod rng;
pub mod snapshot;
pub mod stats;

pub use tetris_rules_types as types;

pub use board::Board;
pub use config::BoardConfig;
pub use error::{parse_move, parse_piece_kind, EngineError};
pub use events::{BoardEvent, EventHandler, EventLog, NoopHandler};
pub use geometry::{
    bounding_box_size, geometry, orientation, orientation_count, Geometry, Orientation,
};
pub use piece::Piece;
pub use rng::{SevenBag, SimpleRng};
pub use snapshot::{BoardSnapshot, PieceState};
pub use stats::GameStats;
