//! Session configuration
//!
//! Read from environment variables with per-key fallbacks:
//!
//! - `TETRIS_RULES_ROWS`: board height (default 20)
//! - `TETRIS_RULES_COLUMNS`: board width (default 10)
//! - `TETRIS_RULES_SEED`: RNG seed (default 1)
//! - `TETRIS_RULES_SOURCE`: `bag`, `uniform` or `script:<kinds>` (default `bag`)
//! - `TETRIS_RULES_MAX_TICKS`: tick limit for headless runs (default 10000)
//!
//! Missing, unparsable or out-of-range numbers fall back to their default. Dimensions too
//! small for the piece set and unknown source names are reported as errors.

use std::str::FromStr;

use tetris_rules_core::{BoardConfig, EngineError};

use crate::source::{BagSource, PieceSource, ScriptedSource, UniformSource};
use crate::types::{DEFAULT_COLUMNS, DEFAULT_ROWS};

pub const DEFAULT_SEED: u32 = 1;
pub const DEFAULT_MAX_TICKS: u64 = 10_000;

/// Which piece source a session draws from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceKind {
    Bag,
    Uniform,
    Scripted(ScriptedSource),
}

impl SourceKind {
    pub fn parse(s: &str) -> Result<Self, EngineError> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "bag" | "7bag" => Ok(SourceKind::Bag),
            "uniform" | "random" => Ok(SourceKind::Uniform),
            _ => match trimmed.split_once(':') {
                Some((prefix, script)) if prefix.eq_ignore_ascii_case("script") => {
                    ScriptedSource::parse(script).map(SourceKind::Scripted)
                }
                _ => Err(EngineError::UnknownSource(trimmed.to_string())),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub board: BoardConfig,
    pub seed: u32,
    pub source: SourceKind,
    pub max_ticks: u64,
}

impl SessionConfig {
    pub fn from_env() -> Result<Self, EngineError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup, so tests don't touch the process environment
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, EngineError> {
        let rows = parse_key(&lookup, "TETRIS_RULES_ROWS").unwrap_or(DEFAULT_ROWS);
        let columns = parse_key(&lookup, "TETRIS_RULES_COLUMNS").unwrap_or(DEFAULT_COLUMNS);
        let seed = parse_key(&lookup, "TETRIS_RULES_SEED").unwrap_or(DEFAULT_SEED);
        let max_ticks = parse_key(&lookup, "TETRIS_RULES_MAX_TICKS").unwrap_or(DEFAULT_MAX_TICKS);

        let source = match lookup("TETRIS_RULES_SOURCE") {
            Some(s) if !s.trim().is_empty() => SourceKind::parse(&s)?,
            _ => SourceKind::Bag,
        };

        Ok(Self {
            board: BoardConfig::new(rows, columns)?,
            seed,
            source,
            max_ticks,
        })
    }

    /// Instantiate the configured piece source
    pub fn build_source(&self) -> Box<dyn PieceSource> {
        match &self.source {
            SourceKind::Bag => Box::new(BagSource::new(self.seed)),
            SourceKind::Uniform => Box::new(UniformSource::new(self.seed)),
            SourceKind::Scripted(script) => Box::new(script.clone()),
        }
    }
}

fn parse_key<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|s| s.trim().parse().ok())
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            board: BoardConfig::default(),
            seed: DEFAULT_SEED,
            source: SourceKind::Bag,
            max_ticks: DEFAULT_MAX_TICKS,
        }
    }
}
