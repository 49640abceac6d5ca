//! Statistics module - per-session counters
//!
//! Purely additive bookkeeping. The board records spawns and row clears, the
//! game loop records gravity ticks and player actions.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameStats {
    one_row_clears: u32,
    two_row_clears: u32,
    three_row_clears: u32,
    four_row_clears: u32,
    total_line_clears: u32,
    blocks_spawned: u32,
    gravity_ticks: u32,
    player_actions: u32,
}

impl GameStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one collapse pass that removed `rows` rows
    ///
    /// Passes larger than four rows only reach the total.
    pub fn record_clear(&mut self, rows: usize) {
        match rows {
            0 => return,
            1 => self.one_row_clears += 1,
            2 => self.two_row_clears += 1,
            3 => self.three_row_clears += 1,
            4 => self.four_row_clears += 1,
            _ => {}
        }
        self.total_line_clears += rows as u32;
    }

    pub fn record_spawn(&mut self) {
        self.blocks_spawned += 1;
    }

    pub fn record_gravity_tick(&mut self) {
        self.gravity_ticks += 1;
    }

    pub fn record_player_action(&mut self) {
        self.player_actions += 1;
    }

    pub fn one_row_clears(&self) -> u32 {
        self.one_row_clears
    }

    pub fn two_row_clears(&self) -> u32 {
        self.two_row_clears
    }

    pub fn three_row_clears(&self) -> u32 {
        self.three_row_clears
    }

    pub fn four_row_clears(&self) -> u32 {
        self.four_row_clears
    }

    pub fn total_line_clears(&self) -> u32 {
        self.total_line_clears
    }

    pub fn blocks_spawned(&self) -> u32 {
        self.blocks_spawned
    }

    pub fn gravity_ticks(&self) -> u32 {
        self.gravity_ticks
    }

    pub fn player_actions(&self) -> u32 {
        self.player_actions
    }

    /// Fitness used by automated players: total rows cleared
    pub fn fitness(&self) -> u32 {
        self.total_line_clears
    }
}
