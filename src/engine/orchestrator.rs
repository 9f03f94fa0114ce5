//! The engine: swap validation, transaction commit/revert, and the
//! selection state machine.
//!
//! Every state change goes through one path: validate the swap, apply it,
//! look for chains, and either run the cascade to fixpoint (commit) or swap
//! straight back (revert). Callers never observe a board between those two
//! endpoints.

use crate::board::Board;
use crate::cascade::resolve;
use crate::core::{
    EngineConfig, EngineError, Position, RngTileGenerator, TileGenerator,
};
use crate::matching::{find_matches, MatchChain};
use crate::score::Scorer;

use super::setup::{create_board, CleanupReport};
use super::state::{EngineState, RejectReason, SelectOutcome, SwapOutcome};

/// A running puzzle session: one board, one generator, one score.
///
/// Generic over the tile generator so tests and replays can script refills;
/// `Engine::new` uses the seeded uniform generator.
///
/// ```
/// use tilefall::{Engine, EngineConfig};
///
/// let engine = Engine::new(EngineConfig::new(), 42);
/// assert!(engine.find_matches().is_empty());
/// assert_eq!(engine.score(), 0);
/// ```
#[derive(Clone, Debug)]
pub struct Engine<G: TileGenerator = RngTileGenerator> {
    config: EngineConfig,
    board: Board,
    generator: G,
    scorer: Scorer,
    state: EngineState,
    cleanup: CleanupReport,
}

impl Engine<RngTileGenerator> {
    /// Create a session with a freshly dealt board from a seed.
    #[must_use]
    pub fn new(config: EngineConfig, seed: u64) -> Self {
        Self::with_generator(config, RngTileGenerator::new(seed))
    }
}

impl<G: TileGenerator> Engine<G> {
    /// Create a session with a freshly dealt board from any generator.
    #[must_use]
    pub fn with_generator(config: EngineConfig, mut generator: G) -> Self {
        let (board, cleanup) = create_board(&config, &mut generator);
        Self {
            config,
            board,
            generator,
            scorer: Scorer::new(config.points_per_tile),
            state: EngineState::Idle,
            cleanup,
        }
    }

    /// Resume a session from an existing board (a saved game, a replay, a
    /// test fixture). The board must match the configured dimensions and
    /// palette.
    #[must_use]
    pub fn from_board(config: EngineConfig, board: Board, generator: G) -> Self {
        assert_eq!(board.width(), config.width, "Board width must match config");
        assert_eq!(board.height(), config.height, "Board height must match config");
        assert_eq!(
            board.tile_kind_count(),
            config.tile_kind_count,
            "Board palette must match config"
        );

        Self {
            config,
            board,
            generator,
            scorer: Scorer::new(config.points_per_tile),
            state: EngineState::Idle,
            cleanup: CleanupReport {
                iterations: 0,
                residual_matches: 0,
            },
        }
    }

    /// The current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The session configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Total points awarded this session.
    #[must_use]
    pub fn score(&self) -> u64 {
        self.scorer.total()
    }

    /// Where the engine is in its selection/resolution cycle.
    #[must_use]
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// How initial-board cleanup went. `is_clean()` is false only when the
    /// iteration cap was exhausted at deal time.
    #[must_use]
    pub fn cleanup_report(&self) -> CleanupReport {
        self.cleanup
    }

    /// Read-only chain query on the current board.
    ///
    /// Empty for a board at rest - which the board is between any two engine
    /// operations unless the deal-time cap was exhausted.
    #[must_use]
    pub fn find_matches(&self) -> Vec<MatchChain> {
        find_matches(&self.board)
    }

    /// Select a tile; on the second selection, attempt the swap.
    ///
    /// The first in-bounds selection is recorded. The second always clears
    /// the selection and runs `attempt_swap` with the pair, adjacent or not,
    /// mirroring how a click-driven frontend consumes its pending selection.
    pub fn select_tile(&mut self, pos: Position) -> SelectOutcome {
        if self.state == EngineState::Resolving {
            return SelectOutcome::Rejected(RejectReason::ResolverBusy);
        }
        if !self.board.contains(pos) {
            return SelectOutcome::Rejected(RejectReason::OutOfBounds);
        }

        match self.state {
            EngineState::Idle => {
                self.state = EngineState::AwaitingSecondTile(pos);
                SelectOutcome::Selected(pos)
            }
            EngineState::AwaitingSecondTile(first) => {
                // Selection is consumed unconditionally; the attempt decides
                // whether anything comes of it.
                self.state = EngineState::Idle;
                SelectOutcome::Swapped(Box::new(self.attempt_swap(first, pos)))
            }
            EngineState::Resolving => SelectOutcome::Rejected(RejectReason::ResolverBusy),
        }
    }

    /// Attempt a swap: validate, apply, then commit the cascade or revert.
    ///
    /// Rejections (off-board, non-adjacent, busy resolver, no resulting
    /// match) return `accepted = false` with the board exactly as it was.
    /// An accepted swap runs the full cascade and adds its points to the
    /// session score.
    pub fn attempt_swap(&mut self, a: Position, b: Position) -> SwapOutcome {
        if self.state == EngineState::Resolving {
            return SwapOutcome::rejected(RejectReason::ResolverBusy, self.board.clone());
        }

        match self.board.swap(a, b) {
            Err(EngineError::InvalidPosition { .. }) => {
                return SwapOutcome::rejected(RejectReason::OutOfBounds, self.board.clone());
            }
            Err(EngineError::InvalidSwap { .. }) => {
                return SwapOutcome::rejected(RejectReason::NotAdjacent, self.board.clone());
            }
            Ok(()) => {}
        }

        if find_matches(&self.board).is_empty() {
            // Revert: the same validated pair cannot fail to swap back.
            let reverted = self.board.swap(a, b);
            debug_assert!(reverted.is_ok(), "revert swaps a validated pair");
            return SwapOutcome::rejected(RejectReason::NoMatch, self.board.clone());
        }

        self.state = EngineState::Resolving;
        let resolution = resolve(
            &mut self.board,
            &mut self.generator,
            &mut self.scorer,
            self.config.max_cleanup_iterations,
        );
        self.state = EngineState::Idle;

        SwapOutcome::accepted(self.board.clone(), resolution)
    }
}

/// Enumerate every adjacent pair whose swap would produce at least one
/// chain, each unordered pair reported once.
///
/// A hint/bot-level query over a board at rest; the engine never calls it
/// and makes no promise that any swap exists.
#[must_use]
pub fn legal_swaps(board: &Board) -> Vec<(Position, Position)> {
    let mut swaps = Vec::new();
    let mut scratch = board.clone();

    for pos in board.positions() {
        let right = Position::new(pos.row, pos.col + 1);
        let below = Position::new(pos.row + 1, pos.col);
        for neighbor in [right, below] {
            if !scratch.contains(neighbor) {
                continue;
            }
            // Swapping equal tiles changes nothing; skip the scan.
            if scratch.at(pos.row, pos.col) == scratch.at(neighbor.row, neighbor.col) {
                continue;
            }
            let swapped = scratch.swap(pos, neighbor);
            debug_assert!(swapped.is_ok(), "neighbors are adjacent by construction");
            if !find_matches(&scratch).is_empty() {
                swaps.push((pos, neighbor));
            }
            let reverted = scratch.swap(pos, neighbor);
            debug_assert!(reverted.is_ok(), "revert swaps a validated pair");
        }
    }

    swaps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Cell, SequenceGenerator, TileKind};

    fn f(kind: u8) -> Cell {
        Cell::Filled(TileKind::new(kind))
    }

    /// 4x4 at-rest board where swapping (1,1) and (2,1) completes a
    /// horizontal run of 2s on row 2.
    ///
    ///   0 1 0 1
    ///   1 2 1 3
    ///   2 0 2 2
    ///   3 1 3 0
    fn poised_board() -> Board {
        Board::from_rows(
            4,
            &[
                vec![f(0), f(1), f(0), f(1)],
                vec![f(1), f(2), f(1), f(3)],
                vec![f(2), f(0), f(2), f(2)],
                vec![f(3), f(1), f(3), f(0)],
            ],
        )
    }

    fn fixture_config() -> EngineConfig {
        EngineConfig::new().with_dimensions(4, 4)
    }

    #[test]
    fn test_poised_board_is_at_rest() {
        assert!(find_matches(&poised_board()).is_empty());
    }

    #[test]
    fn test_legal_swaps_finds_the_poised_move() {
        let swaps = legal_swaps(&poised_board());
        assert!(swaps.contains(&(Position::new(1, 1), Position::new(2, 1))));
    }

    #[test]
    fn test_legal_swaps_leaves_board_untouched() {
        let board = poised_board();
        let before = board.clone();
        let _ = legal_swaps(&board);
        assert_eq!(board, before);
    }

    #[test]
    fn test_selection_state_machine() {
        let generator = SequenceGenerator::from_raw(&[0, 1, 2, 3, 1, 0, 3, 2]);
        let mut engine =
            Engine::from_board(fixture_config(), poised_board(), generator);

        assert_eq!(engine.state(), EngineState::Idle);

        let first = engine.select_tile(Position::new(1, 1));
        assert_eq!(first, SelectOutcome::Selected(Position::new(1, 1)));
        assert_eq!(
            engine.state(),
            EngineState::AwaitingSecondTile(Position::new(1, 1))
        );

        let second = engine.select_tile(Position::new(2, 1));
        assert!(matches!(second, SelectOutcome::Swapped(_)));
        assert_eq!(engine.state(), EngineState::Idle);
    }

    #[test]
    fn test_second_selection_clears_even_when_rejected() {
        let generator = SequenceGenerator::from_raw(&[0]);
        let mut engine =
            Engine::from_board(fixture_config(), poised_board(), generator);

        engine.select_tile(Position::new(0, 0));
        // Distant second tile: the attempt is made (and rejected), and the
        // selection is gone either way.
        let outcome = engine.select_tile(Position::new(3, 3));
        match outcome {
            SelectOutcome::Swapped(swap) => {
                assert!(!swap.accepted);
                assert_eq!(swap.reject, Some(RejectReason::NotAdjacent));
            }
            other => panic!("expected a swap attempt, got {other:?}"),
        }
        assert_eq!(engine.state(), EngineState::Idle);
    }

    #[test]
    fn test_select_out_of_bounds_rejected() {
        let generator = SequenceGenerator::from_raw(&[0]);
        let mut engine =
            Engine::from_board(fixture_config(), poised_board(), generator);

        let outcome = engine.select_tile(Position::new(9, 9));
        assert_eq!(outcome, SelectOutcome::Rejected(RejectReason::OutOfBounds));
        assert_eq!(engine.state(), EngineState::Idle);
    }
}
