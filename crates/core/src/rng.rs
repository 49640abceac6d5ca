//! RNG module - deterministic piece randomization
//!
//! A small LCG drives two draw policies:
//!
//! - [`SevenBag`]: each bag holds one of every kind, shuffled, drawn until empty
//! - [`SimpleRng::next_kind`]: independent uniform draws
//!
//! Same seed, same sequence; sessions are reproducible for agents and tests.

use crate::types::PieceKind;

/// Linear congruential generator (Numerical Recipes constants)
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    pub fn new(seed: u32) -> Self {
        // A zero seed is remapped so the stream is never degenerate
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Value in `[0, max)`
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Fisher-Yates shuffle
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// Uniformly random piece kind
    pub fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.next_range(PieceKind::ALL.len() as u32) as usize]
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// 7-bag piece generator
#[derive(Debug, Clone)]
pub struct SevenBag {
    bag: [PieceKind; 7],
    index: usize,
    rng: SimpleRng,
}

impl SevenBag {
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let bag = Self::shuffled(&mut rng);
        Self { bag, index: 0, rng }
    }

    fn shuffled(rng: &mut SimpleRng) -> [PieceKind; 7] {
        let mut bag = PieceKind::ALL;
        rng.shuffle(&mut bag);
        bag
    }

    /// Next piece without consuming it, previewing the following bag if needed
    pub fn peek(&self) -> PieceKind {
        if self.index < self.bag.len() {
            self.bag[self.index]
        } else {
            Self::shuffled(&mut self.rng.clone())[0]
        }
    }

    pub fn draw(&mut self) -> PieceKind {
        if self.index >= self.bag.len() {
            self.bag = Self::shuffled(&mut self.rng);
            self.index = 0;
        }
        let kind = self.bag[self.index];
        self.index += 1;
        kind
    }

    /// Pieces left in the current bag
    pub fn remaining(&self) -> &[PieceKind] {
        &self.bag[self.index..]
    }
}

impl Default for SevenBag {
    fn default() -> Self {
        Self::new(1)
    }
}
