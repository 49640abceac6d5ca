//! Board module - grid, active piece and move legality
//!
//! The grid is a flat row-major `Vec<bool>` with row 0 at the floor. `true`
//! marks a cell permanently filled by a locked piece.
//!
//! The board is either empty-handed (no active piece) or holds exactly one
//! active piece. Transitions:
//!
//! - `spawn` moves from no piece to an active piece, gated by [`Board::can_spawn`]
//! - `apply_move` replaces the active piece with a legal trial copy
//! - `Down` into an obstruction and `Fall` lock the piece, clear full rows and
//!   return to the no-piece state
//!
//! Every notification is forwarded to the owned [`EventHandler`] before the
//! call returns.

use tracing::{debug, trace};

use crate::config::BoardConfig;
use crate::error::EngineError;
use crate::events::{EventHandler, NoopHandler};
use crate::geometry;
use crate::piece::Piece;
use crate::snapshot::BoardSnapshot;
use crate::stats::GameStats;
use crate::types::{Move, PieceKind, Position, SPAWN_GUARD_ROWS};

#[derive(Debug, Clone)]
pub struct Board<H: EventHandler = NoopHandler> {
    config: BoardConfig,
    /// Row-major cells, `row * columns + column`
    grid: Vec<bool>,
    active: Option<Piece>,
    /// Last locked piece, kept for effect hooks only
    previous: Option<Piece>,
    soft_drop: bool,
    stats: GameStats,
    handler: H,
}

impl Board {
    /// Create an empty board that discards notifications
    pub fn new(config: BoardConfig) -> Self {
        Self::with_handler(config, NoopHandler)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}

impl<H: EventHandler> Board<H> {
    pub fn with_handler(config: BoardConfig, handler: H) -> Self {
        Self {
            config,
            grid: vec![false; config.cell_count()],
            active: None,
            previous: None,
            soft_drop: false,
            stats: GameStats::new(),
            handler,
        }
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn rows(&self) -> usize {
        self.config.rows()
    }

    pub fn columns(&self) -> usize {
        self.config.columns()
    }

    /// Flat row-major grid, row 0 first
    pub fn grid(&self) -> &[bool] {
        &self.grid
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    pub fn previous(&self) -> Option<&Piece> {
        self.previous.as_ref()
    }

    /// Whether the active piece rests on the floor or the stack
    pub fn is_soft_drop(&self) -> bool {
        self.soft_drop
    }

    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut GameStats {
        &mut self.stats
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    pub fn into_handler(self) -> H {
        self.handler
    }

    #[inline]
    fn index(&self, position: Position) -> Option<usize> {
        let (rows, columns) = (self.rows() as i32, self.columns() as i32);
        if position.row < 0 || position.row >= rows {
            return None;
        }
        if position.column < 0 || position.column >= columns {
            return None;
        }
        Some(position.row as usize * self.columns() + position.column as usize)
    }

    /// Cell occupancy, `None` when out of bounds
    pub fn cell(&self, position: Position) -> Option<bool> {
        self.index(position).map(|idx| self.grid[idx])
    }

    /// Set a grid cell directly, bypassing lock and collapse; returns false
    /// when out of bounds
    ///
    /// Setup helper for tests, benches and puzzle positions. Normal play only
    /// changes the grid through locking and row collapse.
    #[doc(hidden)]
    pub fn set_cell(&mut self, position: Position, occupied: bool) -> bool {
        match self.index(position) {
            Some(idx) => {
                self.grid[idx] = occupied;
                true
            }
            None => false,
        }
    }

    fn row_cells(&self, row: usize) -> &[bool] {
        let start = row * self.columns();
        &self.grid[start..start + self.columns()]
    }

    pub fn is_row_full(&self, row: usize) -> bool {
        row < self.rows() && self.row_cells(row).iter().all(|&cell| cell)
    }

    pub fn is_row_empty(&self, row: usize) -> bool {
        row < self.rows() && self.row_cells(row).iter().all(|&cell| !cell)
    }

    /// True iff the top row holds no locked cell
    pub fn is_clear(&self) -> bool {
        self.is_row_empty(self.rows() - 1)
    }

    /// No active piece and the spawn guard rows at the top are empty
    pub fn can_spawn(&self) -> bool {
        self.active.is_none()
            && (self.rows() - SPAWN_GUARD_ROWS..self.rows()).all(|row| self.is_row_empty(row))
    }

    /// Centered spawn anchor: `((columns - box) / 2, rows - box)`
    pub fn spawn_position(&self, kind: PieceKind) -> Position {
        let size = geometry::bounding_box_size(kind);
        Position::new(
            (self.rows() - size) as i32,
            ((self.columns() - size) / 2) as i32,
        )
    }

    /// Spawn a new active piece, or `None` when [`Board::can_spawn`] is false
    pub fn spawn(&mut self, kind: PieceKind) -> Option<Piece> {
        if !self.can_spawn() {
            debug!(kind = kind.as_str(), "spawn refused");
            return None;
        }

        let piece = Piece::new(kind, self.spawn_position(kind));
        self.active = Some(piece);
        self.soft_drop = self.rests_on_stack(&piece);
        self.stats.record_spawn();
        debug!(
            kind = kind.as_str(),
            row = piece.anchor().row,
            column = piece.anchor().column,
            "spawned"
        );
        self.handler.on_spawn(&piece);
        Some(piece)
    }

    /// Every filled cell of the piece lies inside the board on an empty grid cell
    pub fn is_occupiable(&self, piece: &Piece) -> bool {
        piece
            .occupied_cells()
            .iter()
            .all(|&cell| self.cell(cell) == Some(false))
    }

    /// Apply a move request to the active piece
    ///
    /// Returns true when the move was applied, or when `Down`/`Fall` locked the
    /// piece. Illegal translations and rotations return false, emit one
    /// invalid-move notification and leave the active piece untouched. Any move
    /// other than `None` fails silently when no piece is active.
    pub fn apply_move(&mut self, mv: Move) -> bool {
        if mv == Move::None {
            return true;
        }
        let Some(active) = self.active else {
            return false;
        };

        if mv == Move::Fall {
            self.fall(active);
            return true;
        }

        let trial = active.moved(mv);
        let resolved = if self.is_occupiable(&trial) {
            Some(trial)
        } else if mv.is_rotation() {
            self.try_solve_rotation(&trial)
        } else {
            None
        };

        match resolved {
            Some(piece) => {
                self.active = Some(piece);
                self.soft_drop = self.rests_on_stack(&piece);
                let anchor = piece.anchor();
                trace!(mv = mv.as_str(), row = anchor.row, column = anchor.column, "moved");
                self.handler.on_move(&piece, mv);
                true
            }
            None if mv == Move::Down => {
                self.settle();
                true
            }
            None => {
                trace!(mv = mv.as_str(), "invalid move");
                self.handler.on_invalid_move(mv);
                false
            }
        }
    }

    /// Horizontal kicks for a rotation that failed in place
    ///
    /// Tries one column left, then one right; the I piece also tries two left
    /// and two right. No row offsets are attempted.
    fn try_solve_rotation(&self, rotated: &Piece) -> Option<Piece> {
        const KICKS: [i32; 2] = [-1, 1];
        const I_KICKS: [i32; 4] = [-1, 1, -2, 2];

        let kicks: &[i32] = if rotated.kind() == PieceKind::I {
            &I_KICKS
        } else {
            &KICKS
        };

        kicks
            .iter()
            .map(|&columns| rotated.shifted(0, columns))
            .find(|candidate| self.is_occupiable(candidate))
    }

    /// Some filled cell sits directly above the floor or a locked cell
    fn rests_on_stack(&self, piece: &Piece) -> bool {
        piece.occupied_cells().iter().any(|cell| {
            let below = cell.offset(-1, 0);
            below.row < 0 || self.cell(below) == Some(true)
        })
    }

    fn fall(&mut self, active: Piece) {
        let distance = self.collision_height(&active);
        let dropped = active.shifted(-distance, 0);
        self.active = Some(dropped);
        trace!(distance, "fall");
        self.handler.on_move(&dropped, Move::Fall);
        self.settle();
    }

    /// Lock the active piece, clear completed rows, reset soft-drop state
    fn settle(&mut self) {
        self.lock_block();
        self.check_board();
        self.soft_drop = false;
    }

    /// Merge the active piece into the grid
    ///
    /// Cells outside the board are dropped, so a piece poking above the top
    /// only contributes its in-bounds cells. Returns false when no piece is active.
    pub fn lock_block(&mut self) -> bool {
        let Some(piece) = self.active.take() else {
            return false;
        };

        for cell in piece.occupied_cells() {
            if let Some(idx) = self.index(cell) {
                self.grid[idx] = true;
            }
        }

        self.previous = Some(piece);
        debug!(
            kind = piece.kind().as_str(),
            row = piece.anchor().row,
            column = piece.anchor().column,
            "locked"
        );
        self.handler.on_lock(&piece);
        true
    }

    /// Collapse every full row; returns the cleared indices, bottom row first
    pub fn check_board(&mut self) -> Vec<usize> {
        let full: Vec<usize> = (0..self.rows()).filter(|&row| self.is_row_full(row)).collect();
        self.collapse_rows(&full);
        full
    }

    /// Remove the given rows and shift everything above them down
    ///
    /// Indices are processed in the order supplied; the n-th index (from 0) is
    /// removed at `index - n`, compensating for rows already removed beneath
    /// it, so indices must be given bottom row first. Out-of-range indices are
    /// skipped and left out of the collapse notification. Returns the number
    /// of rows removed.
    pub fn collapse_rows(&mut self, rows: &[usize]) -> usize {
        let width = self.columns();
        let height = self.rows();
        let mut collapsed = Vec::with_capacity(rows.len());

        for (n, &index) in rows.iter().enumerate() {
            let Some(row) = index.checked_sub(n).filter(|&row| row < height) else {
                debug!(index, "skipping out-of-range collapse index");
                continue;
            };

            let start = row * width;
            self.grid.copy_within(start + width.., start);
            let top = (height - 1) * width;
            self.grid[top..].fill(false);
            collapsed.push(index);
        }

        let removed = collapsed.len();
        if removed > 0 {
            self.stats.record_clear(removed);
            debug!(rows = ?collapsed, "rows collapsed");
            self.handler.on_rows_collapsing(&collapsed);
        }
        removed
    }

    /// Rows the piece could fall before landing, without mutating anything
    ///
    /// For each filled cell inside the board's columns, counts empty cells
    /// strictly below it down to the first locked cell or the floor, and
    /// returns the minimum. Rows above the top of the grid count as empty.
    pub fn collision_height(&self, piece: &Piece) -> i32 {
        let rows = self.rows() as i32;
        let columns = self.columns() as i32;

        piece
            .occupied_cells()
            .iter()
            .filter(|cell| cell.column >= 0 && cell.column < columns)
            .map(|cell| {
                let mut distance = 0;
                let mut row = cell.row - 1;
                while row >= 0 {
                    if row < rows && self.cell(Position::new(row, cell.column)) == Some(true) {
                        break;
                    }
                    distance += 1;
                    row -= 1;
                }
                distance
            })
            .min()
            .unwrap_or(0)
    }

    /// Emit the terminal game-over notification
    pub fn notify_game_over(&mut self) {
        debug!(
            spawned = self.stats.blocks_spawned(),
            lines = self.stats.total_line_clears(),
            "game over"
        );
        self.handler.on_game_over();
    }

    /// Plain-text grid, top row first: `#` locked, `@` active, `.` empty
    pub fn render_text(&self) -> String {
        let active = self
            .active
            .map(|piece| piece.occupied_cells())
            .unwrap_or_default();

        let mut out = String::with_capacity((self.columns() + 1) * self.rows());
        for row in (0..self.rows()).rev() {
            for column in 0..self.columns() {
                let position = Position::new(row as i32, column as i32);
                let ch = if active.contains(&position) {
                    '@'
                } else if self.cell(position) == Some(true) {
                    '#'
                } else {
                    '.'
                };
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            rows: self.rows(),
            columns: self.columns(),
            grid: self.grid.clone(),
            active: self.active.map(Into::into),
            stats: self.stats,
        }
    }

    /// Rebuild a board from a snapshot
    ///
    /// The previous piece is presentation history and starts out empty.
    pub fn from_snapshot(snapshot: BoardSnapshot, handler: H) -> Result<Self, EngineError> {
        let config = BoardConfig::new(snapshot.rows, snapshot.columns)?;
        if snapshot.grid.len() != config.cell_count() {
            return Err(EngineError::GridSizeMismatch {
                expected: config.cell_count(),
                actual: snapshot.grid.len(),
            });
        }

        let mut board = Self::with_handler(config, handler);
        board.grid = snapshot.grid;
        board.stats = snapshot.stats;

        if let Some(state) = snapshot.active {
            let piece = Piece::from(state);
            if !board.is_occupiable(&piece) {
                return Err(EngineError::ActivePieceObstructed {
                    kind: state.kind,
                    anchor: state.anchor,
                });
            }
            board.active = Some(piece);
            board.soft_drop = board.rests_on_stack(&piece);
        }

        Ok(board)
    }

    /// Install an active piece directly, bypassing spawn rules (test setup)
    #[cfg(test)]
    pub(crate) fn set_active(&mut self, piece: Option<Piece>) {
        self.active = piece;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{BoardEvent, EventLog};

    fn fill_row(board: &mut Board<impl EventHandler>, row: i32) {
        for column in 0..board.columns() as i32 {
            board.set_cell(Position::new(row, column), true);
        }
    }

    fn logged() -> Board<EventLog> {
        Board::with_handler(BoardConfig::default(), EventLog::new())
    }

    #[test]
    fn test_index_calculation() {
        let board = Board::default();
        assert_eq!(board.index(Position::new(0, 0)), Some(0));
        assert_eq!(board.index(Position::new(0, 9)), Some(9));
        assert_eq!(board.index(Position::new(1, 0)), Some(10));
        assert_eq!(board.index(Position::new(19, 9)), Some(199));
        assert_eq!(board.index(Position::new(-1, 0)), None);
        assert_eq!(board.index(Position::new(0, 10)), None);
        assert_eq!(board.index(Position::new(20, 0)), None);
    }

    #[test]
    fn test_spawn_position_is_centered() {
        let board = Board::default();
        assert_eq!(board.spawn_position(PieceKind::T), Position::new(17, 3));
        assert_eq!(board.spawn_position(PieceKind::I), Position::new(16, 3));
        assert_eq!(board.spawn_position(PieceKind::O), Position::new(18, 4));
    }

    #[test]
    fn test_spawn_refused_with_active_piece() {
        let mut board = Board::default();
        assert!(board.spawn(PieceKind::T).is_some());
        assert!(!board.can_spawn());
        assert!(board.spawn(PieceKind::J).is_none());
        assert_eq!(board.stats().blocks_spawned(), 1);
    }

    #[test]
    fn test_spawn_refused_when_guard_rows_dirty() {
        let mut board = Board::default();
        board.set_cell(Position::new(18, 0), true);
        assert!(!board.can_spawn());
        assert!(board.spawn(PieceKind::O).is_none());

        board.set_cell(Position::new(18, 0), false);
        board.set_cell(Position::new(17, 0), true);
        assert!(board.can_spawn());
    }

    #[test]
    fn test_none_is_always_legal() {
        let mut board = logged();
        assert!(board.apply_move(Move::None));
        assert!(board.handler().is_empty());
    }

    #[test]
    fn test_move_without_active_piece_fails_silently() {
        let mut board = logged();
        for mv in [Move::Left, Move::Down, Move::Fall, Move::RotateRight] {
            assert!(!board.apply_move(mv));
        }
        assert!(board.handler().is_empty());
    }

    #[test]
    fn test_invalid_move_leaves_piece_and_notifies_once() {
        let mut board = logged();
        let piece = Piece::new(PieceKind::O, Position::new(5, 0));
        board.set_active(Some(piece));

        assert!(!board.apply_move(Move::Left));
        assert_eq!(board.active(), Some(&piece));
        assert_eq!(board.handler_mut().take_events(), vec![BoardEvent::InvalidMove(Move::Left)]);
    }

    #[test]
    fn test_soft_drop_tracks_support() {
        let mut board = Board::default();
        board.set_active(Some(Piece::new(PieceKind::O, Position::new(2, 4))));

        assert!(board.apply_move(Move::Down));
        assert!(!board.is_soft_drop());
        assert!(board.apply_move(Move::Down));
        assert!(board.is_soft_drop());
        assert!(board.apply_move(Move::Left));
        assert!(board.is_soft_drop());
    }

    #[test]
    fn test_lock_drops_cells_above_top() {
        let mut board = Board::default();
        // Vertical I spanning rows 18..=21
        board.set_active(Some(Piece::with_rotation(PieceKind::I, Position::new(18, 0), 1)));

        assert!(board.lock_block());
        assert!(board.active().is_none());
        assert_eq!(board.cell(Position::new(18, 2)), Some(true));
        assert_eq!(board.cell(Position::new(19, 2)), Some(true));
        assert_eq!(board.grid().iter().filter(|&&cell| cell).count(), 2);
        assert!(!board.can_spawn());
        assert!(!board.lock_block());
    }

    #[test]
    fn test_collapse_single_row() {
        let mut board = Board::default();
        fill_row(&mut board, 0);
        board.set_cell(Position::new(1, 3), true);

        assert_eq!(board.collapse_rows(&[0]), 1);
        assert_eq!(board.cell(Position::new(0, 3)), Some(true));
        assert!(board.is_row_empty(1));
        assert_eq!(board.stats().one_row_clears(), 1);
    }

    #[test]
    fn test_collapse_skips_out_of_range_indices() {
        let mut board = Board::default();
        assert_eq!(board.collapse_rows(&[25]), 0);
        assert_eq!(board.stats().total_line_clears(), 0);
    }

    #[test]
    fn test_collapse_reports_only_removed_rows() {
        let mut board = logged();
        fill_row(&mut board, 0);

        assert_eq!(board.collapse_rows(&[0, 25]), 1);
        assert_eq!(board.stats().one_row_clears(), 1);
        assert_eq!(
            board.handler_mut().take_events(),
            vec![BoardEvent::RowsCollapsing(vec![0])]
        );

        assert_eq!(board.collapse_rows(&[30]), 0);
        assert!(board.handler().is_empty());
    }

    #[test]
    fn test_collision_height_ignores_off_board_columns() {
        let mut board = Board::default();
        board.set_cell(Position::new(2, 0), true);

        // Right-facing T from column -2: three cells in column -1, one in column 0
        let piece = Piece::with_rotation(PieceKind::T, Position::new(5, -2), 1);
        assert_eq!(board.collision_height(&piece), 3);

        let outside = Piece::new(PieceKind::O, Position::new(5, -4));
        assert_eq!(board.collision_height(&outside), 0);
    }

    #[test]
    fn test_collision_height_ignores_rows_above_top() {
        let board = Board::default();
        let piece = Piece::new(PieceKind::I, Position::new(21, 0));
        // I spawn state fills local row 2
        assert_eq!(board.collision_height(&piece), 23);
    }

    #[test]
    fn test_render_text() {
        let mut board = Board::new(BoardConfig::new(6, 4).unwrap());
        board.set_cell(Position::new(0, 0), true);
        board.set_active(Some(Piece::new(PieceKind::O, Position::new(4, 1))));

        assert_eq!(board.render_text(), ".@@.\n.@@.\n....\n....\n....\n#...\n");
    }
}
