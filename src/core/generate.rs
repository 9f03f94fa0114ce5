//! Tile generation: the refill source for new tiles.
//!
//! `TileGenerator` is the seam between the engine and its randomness. The
//! board asks the generator for one tile at a time while refilling vacated
//! cells; the generator never sees the board. Production code uses
//! [`RngTileGenerator`] (seeded, uniform); tests and replays can substitute
//! [`SequenceGenerator`] to script every refill exactly.

use serde::{Deserialize, Serialize};

use super::rng::{TileRng, TileRngState};
use super::tile::TileKind;

/// A source of freshly generated tiles.
///
/// Implementations must return a kind in `0..kind_count`. The engine calls
/// this once per refilled cell, in a deterministic cell order, so a
/// deterministic generator yields a fully deterministic cascade.
pub trait TileGenerator {
    /// Produce the next tile from a palette of `kind_count` kinds.
    fn next_tile(&mut self, kind_count: u8) -> TileKind;
}

/// The default generator: uniformly random kinds from a seeded RNG.
///
/// ```
/// use tilefall::{RngTileGenerator, TileGenerator};
///
/// let mut gen1 = RngTileGenerator::new(7);
/// let mut gen2 = RngTileGenerator::new(7);
/// assert_eq!(gen1.next_tile(4), gen2.next_tile(4));
/// ```
#[derive(Clone, Debug)]
pub struct RngTileGenerator {
    rng: TileRng,
}

impl RngTileGenerator {
    /// Create a generator from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: TileRng::new(seed),
        }
    }

    /// Create a generator from an existing RNG.
    #[must_use]
    pub fn from_rng(rng: TileRng) -> Self {
        Self { rng }
    }

    /// Capture the RNG state for replay.
    #[must_use]
    pub fn rng_state(&self) -> TileRngState {
        self.rng.state()
    }

    /// Restore a generator from a captured RNG state.
    #[must_use]
    pub fn from_rng_state(state: &TileRngState) -> Self {
        Self {
            rng: TileRng::from_state(state),
        }
    }
}

impl TileGenerator for RngTileGenerator {
    fn next_tile(&mut self, kind_count: u8) -> TileKind {
        let raw = self.rng.gen_range_usize(0..kind_count as usize);
        TileKind::new(raw as u8)
    }
}

/// A scripted generator that cycles through a fixed sequence of kinds.
///
/// Deterministic by construction, independent of any RNG. Useful for tests
/// that need exact control over refills (e.g. forcing or forbidding a
/// cascade) and for replaying recorded sessions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceGenerator {
    sequence: Vec<TileKind>,
    cursor: usize,
}

impl SequenceGenerator {
    /// Create a generator that cycles through `sequence`.
    #[must_use]
    pub fn new(sequence: Vec<TileKind>) -> Self {
        assert!(!sequence.is_empty(), "Sequence must not be empty");
        Self {
            sequence,
            cursor: 0,
        }
    }

    /// Create a generator from raw palette indices.
    #[must_use]
    pub fn from_raw(sequence: &[u8]) -> Self {
        Self::new(sequence.iter().copied().map(TileKind::new).collect())
    }

    /// How many tiles have been handed out so far.
    #[must_use]
    pub fn emitted(&self) -> usize {
        self.cursor
    }
}

impl TileGenerator for SequenceGenerator {
    fn next_tile(&mut self, kind_count: u8) -> TileKind {
        let kind = self.sequence[self.cursor % self.sequence.len()];
        self.cursor += 1;
        debug_assert!(
            kind.raw() < kind_count,
            "Scripted kind {kind} outside palette of {kind_count}"
        );
        kind
    }
}
