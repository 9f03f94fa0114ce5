//! Engine state machine and operation outcomes.
//!
//! The engine is single-threaded by contract; `Resolving` is an explicit
//! mutual-exclusion state rather than a lock. A cascade runs to completion
//! inside `attempt_swap`, so callers only ever observe `Idle` or
//! `AwaitingSecondTile` between operations - but the state is checked on
//! every entry point, so re-entrant calls (say, from a presentation callback
//! fired mid-resolution) are rejected instead of racing.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::cascade::{Resolution, ResolutionEvent};
use crate::core::Position;

/// Where the engine is in its selection/resolution cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    /// No pending selection.
    Idle,
    /// One tile selected; the next selection triggers a swap attempt.
    AwaitingSecondTile(Position),
    /// A cascade is running. All operations are rejected.
    Resolving,
}

/// Why a structurally valid request was turned down.
///
/// Rejections are normal outcomes, not errors: the board is untouched (or
/// fully reverted) and the caller may simply try another move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    /// A named position is off the board.
    OutOfBounds,
    /// The two positions are not orthogonally adjacent.
    NotAdjacent,
    /// A cascade is already running; the request was dropped.
    ResolverBusy,
    /// The swap was applied but produced no chain, and was reverted.
    NoMatch,
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            RejectReason::OutOfBounds => "position off the board",
            RejectReason::NotAdjacent => "tiles not adjacent",
            RejectReason::ResolverBusy => "resolution in progress",
            RejectReason::NoMatch => "swap produces no match",
        };
        f.write_str(reason)
    }
}

/// The result of one swap attempt: either a full cascade transaction or a
/// rejection that left the board as it was.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapOutcome {
    /// True when the swap stood and a cascade ran.
    pub accepted: bool,
    /// The rejection, when `accepted` is false.
    pub reject: Option<RejectReason>,
    /// Snapshot of the board after the call. Identical to the pre-call
    /// board on any rejection.
    pub board: Board,
    /// Points this attempt added to the session score.
    pub score_delta: u64,
    /// Ordered event log of the cascade; empty on rejection.
    pub events: Vec<ResolutionEvent>,
    /// True when the cascade stopped at the safety cap instead of settling.
    pub limit_reached: bool,
}

impl SwapOutcome {
    pub(crate) fn rejected(reason: RejectReason, board: Board) -> Self {
        Self {
            accepted: false,
            reject: Some(reason),
            board,
            score_delta: 0,
            events: Vec::new(),
            limit_reached: false,
        }
    }

    pub(crate) fn accepted(board: Board, resolution: Resolution) -> Self {
        Self {
            accepted: true,
            reject: None,
            board,
            score_delta: resolution.points,
            events: resolution.events,
            limit_reached: resolution.limit_reached,
        }
    }
}

/// The result of one `select_tile` call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectOutcome {
    /// First selection recorded; awaiting a second tile.
    Selected(Position),
    /// Second selection consumed: a swap was attempted and the selection
    /// cleared, whatever the attempt's outcome.
    Swapped(Box<SwapOutcome>),
    /// Selection refused (off the board, or the resolver is busy).
    Rejected(RejectReason),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reject_reason_display() {
        assert_eq!(
            format!("{}", RejectReason::NoMatch),
            "swap produces no match"
        );
        assert_eq!(
            format!("{}", RejectReason::ResolverBusy),
            "resolution in progress"
        );
    }

    #[test]
    fn test_engine_state_serde() {
        let state = EngineState::AwaitingSecondTile(Position::new(2, 3));
        let json = serde_json::to_string(&state).unwrap();
        let back: EngineState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }
}
