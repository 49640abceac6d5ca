//! Falling-block rules engine (workspace facade crate).
//!
//! Re-exports the member crates under one roof so callers can depend on a
//! single package: `tetris_rules::{types, core, engine}`.

pub use tetris_rules_core as core;
pub use tetris_rules_engine as engine;
pub use tetris_rules_types as types;
