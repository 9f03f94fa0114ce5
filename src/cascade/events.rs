//! Resolution events: the ordered log a cascade leaves behind.
//!
//! The engine computes a whole cascade synchronously; the presentation layer
//! replays the event log at its own pace to drive animation and audio. Each
//! pass contributes a `MatchesCleared` and a `TilesDropped`; a settled
//! resolution is terminated by `BoardSettled`. The engine itself never reads
//! events back.

use serde::{Deserialize, Serialize};

use crate::board::TileMovement;
use crate::matching::MatchChain;

/// One step of a cascade, in emission order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolutionEvent {
    /// A pass found chains and cleared their cells.
    MatchesCleared {
        /// The chains cleared this pass, in detection order. Chains may
        /// share cells across scan directions; each shared cell was
        /// cleared and scored once.
        chains: Vec<MatchChain>,
        /// Points awarded for this pass's distinct cleared cells.
        points: u64,
    },
    /// Columns compacted and refilled after a clear.
    TilesDropped {
        /// Every tile that fell, column by column left-to-right; within a
        /// column the compacted survivors precede the spawned refills.
        movements: Vec<TileMovement>,
    },
    /// The fixpoint: a pass found no chains. Absent when resolution
    /// stopped at the safety cap instead of settling.
    BoardSettled,
}
