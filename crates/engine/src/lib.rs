//! Game loop - drives the core rules tick by tick
//!
//! The engine crate owns session orchestration and nothing else:
//!
//! - [`controller`]: [`GameLoop`], spawning on empty ticks, gravity on the rest,
//!   a sticky game-over flag, and forwarding of player moves
//! - [`source`]: the piece-source collaborator and stock implementations
//! - [`config`]: environment-driven session configuration
//!
//! Timing is the caller's business: call [`GameLoop::on_tick`] at whatever
//! gravity interval the presentation layer picks, using
//! [`GameLoop::is_soft_drop`] to scale it if desired.
//!
//! # Example
//!
//! ```
//! use tetris_rules_engine::{BagSource, GameLoop, TickOutcome};
//! use tetris_rules_engine::core::BoardConfig;
//! use tetris_rules_engine::types::Move;
//!
//! let mut game = GameLoop::new(BoardConfig::default(), BagSource::new(12345));
//! assert!(matches!(game.on_tick(), TickOutcome::Spawned(_)));
//!
//! game.issue_move(Move::Fall);
//! assert_eq!(game.stats().player_actions(), 1);
//! assert!(game.board().active().is_none());
//! ```

pub mod config;
pub mod controller;
pub mod source;

pub use tetris_rules_core as core;
pub use tetris_rules_types as types;

pub use config::{SessionConfig, SourceKind};
pub use controller::{GameLoop, TickOutcome};
pub use source::{BagSource, FromFn, PieceSource, ScriptedSource, UniformSource};
