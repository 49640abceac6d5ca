//! Event notifications emitted by the board
//!
//! Every notification is a synchronous call made before the triggering
//! operation returns. Presentation, audio or agent layers implement
//! [`EventHandler`] and decide for themselves whether to defer their reaction.

use crate::piece::Piece;
use crate::types::Move;

/// Receiver for board notifications; every method defaults to a no-op
pub trait EventHandler {
    fn on_spawn(&mut self, _piece: &Piece) {}

    /// Rows removed by one collapse pass, in the order they were supplied
    fn on_rows_collapsing(&mut self, _rows: &[usize]) {}

    fn on_lock(&mut self, _piece: &Piece) {}

    fn on_move(&mut self, _piece: &Piece, _mv: Move) {}

    fn on_invalid_move(&mut self, _mv: Move) {}

    fn on_game_over(&mut self) {}
}

/// Handler that ignores every notification
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoopHandler;

impl EventHandler for NoopHandler {}

/// A recorded notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEvent {
    Spawned(Piece),
    RowsCollapsing(Vec<usize>),
    Locked(Piece),
    Moved(Piece, Move),
    InvalidMove(Move),
    GameOver,
}

/// Handler that records notifications in order until drained
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<BoardEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[BoardEvent] {
        &self.events
    }

    /// Take and clear all recorded events
    pub fn take_events(&mut self) -> Vec<BoardEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventHandler for EventLog {
    fn on_spawn(&mut self, piece: &Piece) {
        self.events.push(BoardEvent::Spawned(*piece));
    }

    fn on_rows_collapsing(&mut self, rows: &[usize]) {
        self.events.push(BoardEvent::RowsCollapsing(rows.to_vec()));
    }

    fn on_lock(&mut self, piece: &Piece) {
        self.events.push(BoardEvent::Locked(*piece));
    }

    fn on_move(&mut self, piece: &Piece, mv: Move) {
        self.events.push(BoardEvent::Moved(*piece, mv));
    }

    fn on_invalid_move(&mut self, mv: Move) {
        self.events.push(BoardEvent::InvalidMove(mv));
    }

    fn on_game_over(&mut self) {
        self.events.push(BoardEvent::GameOver);
    }
}

impl<H: EventHandler + ?Sized> EventHandler for &mut H {
    fn on_spawn(&mut self, piece: &Piece) {
        (**self).on_spawn(piece)
    }

    fn on_rows_collapsing(&mut self, rows: &[usize]) {
        (**self).on_rows_collapsing(rows)
    }

    fn on_lock(&mut self, piece: &Piece) {
        (**self).on_lock(piece)
    }

    fn on_move(&mut self, piece: &Piece, mv: Move) {
        (**self).on_move(piece, mv)
    }

    fn on_invalid_move(&mut self, mv: Move) {
        (**self).on_invalid_move(mv)
    }

    fn on_game_over(&mut self) {
        (**self).on_game_over()
    }
}
