//! Scoring: a flat rate per cleared cell.
//!
//! No chain-length bonuses, no cascade-depth multipliers - the score is the
//! count of cleared cells times a constant, summed for the session. A cell
//! sitting at the crossing of a horizontal and a vertical chain is cleared
//! once and awarded once.

use serde::{Deserialize, Serialize};

/// Session score accumulator.
///
/// ```
/// use tilefall::Scorer;
///
/// let mut scorer = Scorer::new(10);
/// assert_eq!(scorer.award(3), 30);
/// assert_eq!(scorer.award(5), 50);
/// assert_eq!(scorer.total(), 80);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scorer {
    points_per_tile: u32,
    total: u64,
}

impl Scorer {
    /// Create a scorer with the given per-cell rate.
    #[must_use]
    pub fn new(points_per_tile: u32) -> Self {
        Self {
            points_per_tile,
            total: 0,
        }
    }

    /// Award points for `cell_count` distinct cleared cells.
    ///
    /// Returns the points awarded by this call; the session total advances
    /// by the same amount.
    pub fn award(&mut self, cell_count: usize) -> u64 {
        let points = cell_count as u64 * u64::from(self.points_per_tile);
        self.total += points;
        points
    }

    /// The per-cell rate.
    #[must_use]
    pub fn points_per_tile(&self) -> u32 {
        self.points_per_tile
    }

    /// Total points awarded this session.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.total
    }
}
