//! Headless session runner (default binary).
//!
//! Plays one session with a random-move driver standing in for a player, then
//! prints the final grid and the session statistics. Configuration comes from
//! `TETRIS_RULES_*` environment variables; log verbosity from `RUST_LOG`.

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tetris_rules::core::{Board, EventHandler, Piece, SimpleRng};
use tetris_rules::engine::{GameLoop, SessionConfig, TickOutcome};
use tetris_rules::types::Move;

/// Moves the driver picks from, weighted by repetition
const DRIVER_MOVES: [Move; 8] = [
    Move::Left,
    Move::Left,
    Move::Right,
    Move::Right,
    Move::RotateLeft,
    Move::RotateRight,
    Move::None,
    Move::Fall,
];

/// Logs the notifications a presentation layer would react to
#[derive(Debug, Default)]
struct Reporter {
    locks: u32,
    rejected: u32,
}

impl EventHandler for Reporter {
    fn on_lock(&mut self, _piece: &Piece) {
        self.locks += 1;
    }

    fn on_invalid_move(&mut self, _mv: Move) {
        self.rejected += 1;
    }

    fn on_rows_collapsing(&mut self, rows: &[usize]) {
        info!(?rows, "rows cleared");
    }

    fn on_game_over(&mut self) {
        info!(locks = self.locks, "board topped out");
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = SessionConfig::from_env().context("invalid TETRIS_RULES_* configuration")?;
    info!(
        rows = config.board.rows(),
        columns = config.board.columns(),
        seed = config.seed,
        source = ?config.source,
        max_ticks = config.max_ticks,
        "starting session"
    );

    let board = Board::with_handler(config.board, Reporter::default());
    let mut game = GameLoop::with_board(board, config.build_source());
    let mut driver = SimpleRng::new(config.seed.rotate_left(16));

    let mut ticks = 0;
    while ticks < config.max_ticks {
        if game.on_tick() == TickOutcome::GameOver {
            break;
        }
        if game.board().active().is_some() {
            let mv = DRIVER_MOVES[driver.next_range(DRIVER_MOVES.len() as u32) as usize];
            game.issue_move(mv);
        }
        ticks += 1;
    }

    print!("{}", game.board().render_text());

    let stats = game.stats();
    let reporter = game.board().handler();
    println!("ticks:          {}", ticks);
    println!("game over:      {}", game.is_game_over());
    println!("pieces spawned: {}", stats.blocks_spawned());
    println!("pieces locked:  {}", reporter.locks);
    println!("gravity ticks:  {}", stats.gravity_ticks());
    println!("player actions: {}", stats.player_actions());
    println!("rejected moves: {}", reporter.rejected);
    println!(
        "line clears:    {} (1x{} 2x{} 3x{} 4x{})",
        stats.total_line_clears(),
        stats.one_row_clears(),
        stats.two_row_clears(),
        stats.three_row_clears(),
        stats.four_row_clears()
    );
    println!("fitness:        {}", stats.fitness());

    Ok(())
}
