//! Initial board generation.
//!
//! A fresh board is dealt uniformly at random, then scrubbed: every cleanup
//! pass clears standing chains, compacts, and refills, until the board is
//! at rest or the iteration cap runs out. Exhausting the cap is accepted and
//! reported, not raised - the session starts anyway, on a board that may
//! hold residual matches.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::cascade::{clear_chains, drop_tiles};
use crate::core::{Cell, EngineConfig, TileGenerator};
use crate::matching::find_matches;

/// How initial-board cleanup went.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanupReport {
    /// Cleanup passes performed.
    pub iterations: u32,
    /// Chains still standing when cleanup stopped. Zero for a clean board;
    /// non-zero only when the iteration cap was exhausted.
    pub residual_matches: usize,
}

impl CleanupReport {
    /// True when cleanup reached a board with no standing chains.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.residual_matches == 0
    }
}

/// Deal and scrub a new board.
///
/// The grid is filled row-major from the generator, then cleanup passes run
/// until no chains stand or `max_cleanup_iterations` passes have been spent.
/// Every cell of the returned board is `Filled` either way.
pub fn create_board(
    config: &EngineConfig,
    generator: &mut dyn TileGenerator,
) -> (Board, CleanupReport) {
    let mut board = Board::empty(config);
    for row in 0..config.height {
        for col in 0..config.width {
            let kind = generator.next_tile(config.tile_kind_count);
            board.set_at(row, col, Cell::Filled(kind));
        }
    }

    let mut iterations = 0u32;
    let residual_matches = loop {
        let chains = find_matches(&board);
        if chains.is_empty() {
            break 0;
        }
        if iterations >= config.max_cleanup_iterations {
            log::warn!(
                "initial-board cleanup stopped at the {}-iteration cap with {} chains standing",
                config.max_cleanup_iterations,
                chains.len()
            );
            break chains.len();
        }
        iterations += 1;
        clear_chains(&mut board, &chains);
        drop_tiles(&mut board, generator);
    };

    (
        board,
        CleanupReport {
            iterations,
            residual_matches,
        },
    )
}
