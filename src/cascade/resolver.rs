//! Cascade resolution: clear, drop, refill, repeat to fixpoint.
//!
//! One pass clears every detected chain, compacts each column, and refills
//! the vacated cells. Refills can line up new chains, so the loop runs until
//! a pass finds nothing - the cascade. Termination is bounded by a safety
//! cap shared with initial-board cleanup; hitting it is a recoverable
//! degraded condition reported to the caller, not a crash.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::board::{Board, TileMovement};
use crate::core::{Cell, Position, TileGenerator};
use crate::matching::{find_matches, MatchChain};
use crate::score::Scorer;

use super::events::ResolutionEvent;

/// The result of resolving one board to fixpoint (or to the cap).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// Points awarded across all passes.
    pub points: u64,
    /// Number of clear-and-drop passes performed.
    pub passes: u32,
    /// True when the safety cap stopped the loop with chains still
    /// standing. The event log then ends with `TilesDropped`, not
    /// `BoardSettled`.
    pub limit_reached: bool,
    /// The ordered event log for the presentation layer.
    pub events: Vec<ResolutionEvent>,
}

/// Empty every cell named by any chain, counting each cell once.
///
/// Returns the number of distinct cells cleared. Chains from the two scan
/// directions may overlap; the dedup keeps a crossing cell from being
/// scored twice.
pub(crate) fn clear_chains(board: &mut Board, chains: &[MatchChain]) -> usize {
    let mut cleared: FxHashSet<Position> = FxHashSet::default();
    for chain in chains {
        cleared.extend(chain.positions.iter().copied());
    }
    for &pos in &cleared {
        board.set_at(pos.row, pos.col, Cell::Empty);
    }
    cleared.len()
}

/// Compact and refill every column, left to right.
pub(crate) fn drop_tiles(
    board: &mut Board,
    generator: &mut dyn TileGenerator,
) -> Vec<TileMovement> {
    let mut movements = Vec::new();
    for col in 0..board.width() {
        movements.extend(board.compact_column(col));
        movements.extend(board.fill_empties(col, generator));
    }
    movements
}

/// Resolve a board to fixpoint, accumulating score and the event log.
///
/// Each pass: find chains; clear their distinct cells and award points;
/// compact and refill every column. The loop ends when a pass finds no
/// chains (`BoardSettled` is emitted) or when `max_passes` passes have run
/// with chains still standing (`limit_reached` is set and a warning logged).
///
/// On a settled return the board is at rest: full, with no standing chains.
pub fn resolve(
    board: &mut Board,
    generator: &mut dyn TileGenerator,
    scorer: &mut Scorer,
    max_passes: u32,
) -> Resolution {
    let mut events = Vec::new();
    let mut points = 0u64;
    let mut passes = 0u32;

    loop {
        let chains = find_matches(board);
        if chains.is_empty() {
            events.push(ResolutionEvent::BoardSettled);
            return Resolution {
                points,
                passes,
                limit_reached: false,
                events,
            };
        }
        if passes >= max_passes {
            log::warn!(
                "cascade stopped at the {max_passes}-pass safety cap with {} chains standing",
                chains.len()
            );
            return Resolution {
                points,
                passes,
                limit_reached: true,
                events,
            };
        }
        passes += 1;

        let cleared = clear_chains(board, &chains);
        let pass_points = scorer.award(cleared);
        points += pass_points;
        events.push(ResolutionEvent::MatchesCleared {
            chains,
            points: pass_points,
        });

        let movements = drop_tiles(board, generator);
        events.push(ResolutionEvent::TilesDropped { movements });
    }
}
