//! Error taxonomy.
//!
//! Only programming errors surface as `Err`: coordinates that are off the
//! board, or a direct `Board::swap` of non-adjacent cells. Game-rule
//! rejections (non-adjacent swap requests through the engine, a busy
//! resolver, a swap that matches nothing) are normal outcomes, reported as
//! values with `accepted = false` - see `engine::RejectReason`.

use thiserror::Error;

use super::tile::Position;

/// Errors raised by bounds- and adjacency-checked board operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// A coordinate outside the grid was handed to the board directly.
    #[error("position {pos} is outside the {width}x{height} board")]
    InvalidPosition {
        /// The offending coordinate.
        pos: Position,
        /// Board width at the time of the call.
        width: usize,
        /// Board height at the time of the call.
        height: usize,
    },

    /// Two non-adjacent positions were handed to `Board::swap` directly.
    #[error("cells {a} and {b} are not adjacent")]
    InvalidSwap {
        /// First position of the rejected pair.
        a: Position,
        /// Second position of the rejected pair.
        b: Position,
    },
}
