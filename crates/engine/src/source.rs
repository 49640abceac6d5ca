//! Piece sources - where the next piece kind comes from
//!
//! The game loop asks its source for a kind only when the board has no active
//! piece. Distribution policy is entirely up to the source.

use tetris_rules_core::{parse_piece_kind, EngineError, SevenBag, SimpleRng};

use crate::types::PieceKind;

pub trait PieceSource {
    fn next_piece_kind(&mut self) -> PieceKind;
}

impl<S: PieceSource + ?Sized> PieceSource for Box<S> {
    fn next_piece_kind(&mut self) -> PieceKind {
        (**self).next_piece_kind()
    }
}

/// Adapter turning a closure into a source
pub struct FromFn<F>(pub F);

impl<F: FnMut() -> PieceKind> PieceSource for FromFn<F> {
    fn next_piece_kind(&mut self) -> PieceKind {
        (self.0)()
    }
}

/// 7-bag randomizer
#[derive(Debug, Clone)]
pub struct BagSource {
    bag: SevenBag,
}

impl BagSource {
    pub fn new(seed: u32) -> Self {
        Self {
            bag: SevenBag::new(seed),
        }
    }

    pub fn peek(&self) -> PieceKind {
        self.bag.peek()
    }
}

impl PieceSource for BagSource {
    fn next_piece_kind(&mut self) -> PieceKind {
        self.bag.draw()
    }
}

/// Independent uniform draws
#[derive(Debug, Clone)]
pub struct UniformSource {
    rng: SimpleRng,
}

impl UniformSource {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }
}

impl PieceSource for UniformSource {
    fn next_piece_kind(&mut self) -> PieceKind {
        self.rng.next_kind()
    }
}

/// Fixed sequence, repeated forever
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedSource {
    sequence: Vec<PieceKind>,
    index: usize,
}

impl ScriptedSource {
    pub fn new(sequence: Vec<PieceKind>) -> Result<Self, EngineError> {
        if sequence.is_empty() {
            return Err(EngineError::EmptySequence);
        }
        Ok(Self { sequence, index: 0 })
    }

    /// Parse one letter per kind, e.g. `"tiosz"`; whitespace and commas are ignored
    pub fn parse(script: &str) -> Result<Self, EngineError> {
        let sequence = script
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .map(|c| parse_piece_kind(c.encode_utf8(&mut [0; 4])))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(sequence)
    }

    pub fn sequence(&self) -> &[PieceKind] {
        &self.sequence
    }
}

impl PieceSource for ScriptedSource {
    fn next_piece_kind(&mut self) -> PieceKind {
        let kind = self.sequence[self.index];
        self.index = (self.index + 1) % self.sequence.len();
        kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_cycles() {
        let mut source = ScriptedSource::parse("t, i o").unwrap();
        let drawn: Vec<PieceKind> = (0..5).map(|_| source.next_piece_kind()).collect();
        assert_eq!(
            drawn,
            vec![PieceKind::T, PieceKind::I, PieceKind::O, PieceKind::T, PieceKind::I]
        );
    }

    #[test]
    fn test_scripted_rejects_bad_input() {
        assert_eq!(ScriptedSource::parse(""), Err(EngineError::EmptySequence));
        assert_eq!(
            ScriptedSource::parse("tx"),
            Err(EngineError::UnknownPieceKind("x".to_string()))
        );
    }

    #[test]
    fn test_bag_source_peek_matches_draw() {
        let mut source = BagSource::new(4);
        for _ in 0..14 {
            let next = source.peek();
            assert_eq!(source.next_piece_kind(), next);
        }
    }

    #[test]
    fn test_uniform_source_is_seeded() {
        let mut a = UniformSource::new(42);
        let mut b = UniformSource::new(42);
        for _ in 0..50 {
            assert_eq!(a.next_piece_kind(), b.next_piece_kind());
        }
    }

    #[test]
    fn test_closure_and_boxed_sources() {
        let mut flip = false;
        let mut closure = FromFn(move || {
            flip = !flip;
            if flip {
                PieceKind::S
            } else {
                PieceKind::Z
            }
        });
        assert_eq!(closure.next_piece_kind(), PieceKind::S);
        assert_eq!(closure.next_piece_kind(), PieceKind::Z);

        let mut boxed: Box<dyn PieceSource> =
            Box::new(ScriptedSource::new(vec![PieceKind::L]).unwrap());
        assert_eq!(boxed.next_piece_kind(), PieceKind::L);
    }
}
