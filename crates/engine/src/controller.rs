//! Game loop controller
//!
//! Drives a [`Board`] one gravity tick at a time. It spawns from its piece
//! source when the board is empty-handed, applies a `Down` move otherwise, and
//! forwards player or agent moves. All legality lives in the board.

use tetris_rules_core::{Board, BoardConfig, EventHandler, GameStats, NoopHandler};
use tracing::info;

use crate::source::PieceSource;
use crate::types::{Move, PieceKind};

/// What one gravity tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// A new piece entered the board
    Spawned(PieceKind),
    /// The active piece moved down one row
    Advanced,
    /// The active piece could not move down and was locked
    Locked,
    /// The spawn was refused; the session just ended
    GameOver,
    /// The session had already ended; nothing happened
    AlreadyOver,
}

#[derive(Debug)]
pub struct GameLoop<S: PieceSource, H: EventHandler = NoopHandler> {
    board: Board<H>,
    source: S,
    game_over: bool,
}

impl<S: PieceSource> GameLoop<S> {
    pub fn new(config: BoardConfig, source: S) -> Self {
        Self::with_board(Board::new(config), source)
    }
}

impl<S: PieceSource, H: EventHandler> GameLoop<S, H> {
    pub fn with_board(board: Board<H>, source: S) -> Self {
        Self {
            board,
            source,
            game_over: false,
        }
    }

    /// Advance one gravity tick
    pub fn on_tick(&mut self) -> TickOutcome {
        if self.game_over {
            return TickOutcome::AlreadyOver;
        }

        if self.board.active().is_none() {
            let kind = self.source.next_piece_kind();
            if self.board.spawn(kind).is_some() {
                return TickOutcome::Spawned(kind);
            }

            self.game_over = true;
            let stats = self.board.stats();
            info!(
                spawned = stats.blocks_spawned(),
                lines = stats.total_line_clears(),
                ticks = stats.gravity_ticks(),
                "game over"
            );
            self.board.notify_game_over();
            return TickOutcome::GameOver;
        }

        self.board.apply_move(Move::Down);
        self.board.stats_mut().record_gravity_tick();
        if self.board.active().is_some() {
            TickOutcome::Advanced
        } else {
            TickOutcome::Locked
        }
    }

    /// Forward a player or agent move; successful moves count as actions
    pub fn issue_move(&mut self, mv: Move) -> bool {
        if self.game_over {
            return false;
        }
        let applied = self.board.apply_move(mv);
        if applied {
            self.board.stats_mut().record_player_action();
        }
        applied
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Whether gravity should run at soft-drop pace (the active piece is resting)
    pub fn is_soft_drop(&self) -> bool {
        self.board.is_soft_drop()
    }

    pub fn board(&self) -> &Board<H> {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board<H> {
        &mut self.board
    }

    pub fn stats(&self) -> &GameStats {
        self.board.stats()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn into_parts(self) -> (Board<H>, S) {
        (self.board, self.source)
    }
}
