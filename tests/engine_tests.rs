//! Engine integration tests.
//!
//! These tests exercise the full swap transaction through the public API:
//! validation, commit-with-cascade, revert, scoring, and the guarantees the
//! engine makes about board state around each call.

use tilefall::{
    find_matches, legal_swaps, Board, Cell, Engine, EngineConfig, Position,
    RejectReason, ResolutionEvent, SequenceGenerator, TileKind,
};

fn f(kind: u8) -> Cell {
    Cell::Filled(TileKind::new(kind))
}

fn config_4x4() -> EngineConfig {
    EngineConfig::new().with_dimensions(4, 4)
}

/// At-rest 4x4 board where swapping (1,1) and (2,1) completes a horizontal
/// run of four 2s on row 2.
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

/// At-rest 4x4 board where swapping (3,2) and (3,3) makes exactly one
/// 3-cell run of 2s on row 3.
fn three_run_board() -> Board {
    Board::from_rows(
        4,
        &[
            vec![f(0), f(1), f(0), f(1)],
            vec![f(1), f(3), f(1), f(3)],
            vec![f(3), f(0), f(3), f(0)],
            vec![f(2), f(2), f(3), f(2)],
        ],
    )
}

// =============================================================================
// Rejection paths
// =============================================================================

/// A non-adjacent attempt is rejected and the board is byte-identical.
#[test]
fn test_non_adjacent_swap_rejected() {
    let board = poised_board();
    let before = serde_json::to_string(&board).unwrap();
    let mut engine = Engine::from_board(
        config_4x4(),
        board,
        SequenceGenerator::from_raw(&[0]),
    );

    let outcome = engine.attempt_swap(Position::new(0, 0), Position::new(2, 2));

    assert!(!outcome.accepted);
    assert_eq!(outcome.reject, Some(RejectReason::NotAdjacent));
    assert_eq!(outcome.score_delta, 0);
    assert!(outcome.events.is_empty());

    let after = serde_json::to_string(engine.board()).unwrap();
    assert_eq!(before, after);
    assert_eq!(engine.score(), 0);
}

/// Diagonal neighbors are not adjacent.
#[test]
fn test_diagonal_swap_rejected() {
    let mut engine = Engine::from_board(
        config_4x4(),
        poised_board(),
        SequenceGenerator::from_raw(&[0]),
    );

    let outcome = engine.attempt_swap(Position::new(0, 0), Position::new(1, 1));
    assert_eq!(outcome.reject, Some(RejectReason::NotAdjacent));
}

/// An off-board coordinate through the public API is a rejection, not a
/// panic or an error.
#[test]
fn test_out_of_bounds_swap_rejected() {
    let mut engine = Engine::from_board(
        config_4x4(),
        poised_board(),
        SequenceGenerator::from_raw(&[0]),
    );

    let outcome = engine.attempt_swap(Position::new(0, 3), Position::new(0, 4));

    assert!(!outcome.accepted);
    assert_eq!(outcome.reject, Some(RejectReason::OutOfBounds));
}

/// An adjacent swap that makes no chain is applied, found wanting, and
/// fully reverted.
#[test]
fn test_no_match_swap_reverted() {
    let board = poised_board();
    let before = board.clone();
    let mut engine = Engine::from_board(
        config_4x4(),
        board,
        SequenceGenerator::from_raw(&[0]),
    );

    // Swapping (0,0) and (0,1) lines nothing up.
    let outcome = engine.attempt_swap(Position::new(0, 0), Position::new(0, 1));

    assert!(!outcome.accepted);
    assert_eq!(outcome.reject, Some(RejectReason::NoMatch));
    assert_eq!(*engine.board(), before);
    assert_eq!(outcome.board, before);
    assert_eq!(engine.score(), 0);
}

// =============================================================================
// Commit paths
// =============================================================================

/// One 3-cell match awards exactly 3 x points_per_tile, and the event log
/// ends settled.
#[test]
fn test_three_cell_match_scores_thirty() {
    // Refill [2, 2, 3] leaves the board at rest after the single clear.
    let mut engine = Engine::from_board(
        config_4x4(),
        three_run_board(),
        SequenceGenerator::from_raw(&[2, 2, 3]),
    );

    let outcome = engine.attempt_swap(Position::new(3, 2), Position::new(3, 3));

    assert!(outcome.accepted);
    assert_eq!(outcome.score_delta, 30);
    assert_eq!(engine.score(), 30);

    assert_eq!(outcome.events.len(), 3);
    assert!(matches!(
        outcome.events[0],
        ResolutionEvent::MatchesCleared { points: 30, .. }
    ));
    assert!(matches!(
        outcome.events[1],
        ResolutionEvent::TilesDropped { .. }
    ));
    assert_eq!(outcome.events.last(), Some(&ResolutionEvent::BoardSettled));

    // Settled means settled: full board, no chains left.
    assert!(engine.board().is_full());
    assert!(engine.find_matches().is_empty());
}

/// A longer run scores per cell at the same flat rate.
#[test]
fn test_four_cell_match_scores_forty() {
    let mut engine = Engine::from_board(
        config_4x4(),
        poised_board(),
        SequenceGenerator::from_raw(&[0, 1, 2, 3]),
    );

    let outcome = engine.attempt_swap(Position::new(1, 1), Position::new(2, 1));

    assert!(outcome.accepted);
    assert_eq!(outcome.score_delta, 40);
    assert!(engine.find_matches().is_empty());
}

/// Score accumulates across accepted swaps; the outcome snapshot matches
/// the engine's own board.
#[test]
fn test_session_score_accumulates() {
    let mut engine = Engine::from_board(
        config_4x4(),
        poised_board(),
        SequenceGenerator::from_raw(&[0, 1, 2, 3, 1, 2, 0, 0, 3, 0, 2]),
    );

    let first = engine.attempt_swap(Position::new(1, 1), Position::new(2, 1));
    assert!(first.accepted);
    assert_eq!(first.score_delta, 40);
    assert_eq!(first.board, *engine.board());

    // The refilled board leaves a second move: swapping (2,0) and (2,1)
    // lines up three 0s in column 0 and four 1s in column 1 at once.
    let second = engine.attempt_swap(Position::new(2, 0), Position::new(2, 1));
    assert!(second.accepted);
    assert_eq!(second.score_delta, 70);

    assert_eq!(engine.score(), 110);
}

// =============================================================================
// Determinism and queries
// =============================================================================

/// Same seed, same config: identical deal and identical play.
#[test]
fn test_same_seed_same_session() {
    let config = EngineConfig::new();
    let mut engine1 = Engine::new(config, 42);
    let mut engine2 = Engine::new(config, 42);

    assert_eq!(engine1.board(), engine2.board());
    assert_eq!(engine1.cleanup_report(), engine2.cleanup_report());

    if let Some(&(a, b)) = legal_swaps(engine1.board()).first() {
        let outcome1 = engine1.attempt_swap(a, b);
        let outcome2 = engine2.attempt_swap(a, b);
        assert_eq!(outcome1, outcome2);
        assert_eq!(engine1.board(), engine2.board());
        assert_eq!(engine1.score(), engine2.score());
    }
}

/// Freshly dealt boards start at rest.
#[test]
fn test_new_sessions_start_at_rest() {
    for seed in 0..20 {
        let engine = Engine::new(EngineConfig::new(), seed);
        assert!(engine.cleanup_report().is_clean(), "seed {seed}");
        assert!(engine.find_matches().is_empty(), "seed {seed}");
        assert!(engine.board().is_full(), "seed {seed}");
    }
}

/// `legal_swaps` and `attempt_swap` agree on every adjacent pair of an
/// at-rest board.
#[test]
fn test_legal_swaps_agree_with_attempt_swap() {
    let board = poised_board();
    let legal = legal_swaps(&board);

    for row in 0..4 {
        for col in 0..4 {
            let pos = Position::new(row, col);
            let right = Position::new(row, col + 1);
            let below = Position::new(row + 1, col);
            for neighbor in [right, below] {
                if neighbor.row >= 4 || neighbor.col >= 4 {
                    continue;
                }
                let mut engine = Engine::from_board(
                    config_4x4(),
                    board.clone(),
                    SequenceGenerator::from_raw(&[0, 1, 2, 3]),
                );
                let accepted = engine.attempt_swap(pos, neighbor).accepted;
                assert_eq!(
                    accepted,
                    legal.contains(&(pos, neighbor)),
                    "disagreement at {pos} <-> {neighbor}"
                );
            }
        }
    }
}

/// The read-only chain query sees what a direct scan sees, and the session
/// exposes the configuration it was built from.
#[test]
fn test_find_matches_query_matches_free_function() {
    let engine = Engine::new(EngineConfig::new(), 7);
    assert_eq!(engine.find_matches(), find_matches(engine.board()));
    assert_eq!(engine.config().points_per_tile, 10);
    assert_eq!(engine.board().width(), engine.config().width);
}
