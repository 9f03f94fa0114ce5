//! # tilefall
//!
//! A match-three tile puzzle engine with deterministic cascade resolution.
//!
//! ## Design Principles
//!
//! 1. **Engine only**: Match detection, swap validation, gravity/refill,
//!    scoring, and the stabilization loop. Rendering, animation timing,
//!    input capture, and audio are the host's business.
//!
//! 2. **Synchronous transactions**: A swap either commits with its entire
//!    cascade or reverts completely. Callers never see a half-resolved
//!    board.
//!
//! 3. **Replayable**: Seeded RNG with O(1) state capture. Same seed, same
//!    swaps - same boards, same scores, same event log.
//!
//! ## Architecture
//!
//! - **Event log over callbacks**: Resolution produces an ordered
//!   `ResolutionEvent` sequence the presentation layer replays at its own
//!   pace, decoupling animation timing from game-state correctness.
//!
//! - **Explicit state machine**: Selection and the `Resolving`
//!   mutual-exclusion state are modeled as states, not flags.
//!
//! ## Modules
//!
//! - `core`: Tiles, positions, configuration, RNG, generators, errors
//! - `board`: The grid, swaps, column compaction and refill
//! - `matching`: Run-length chain detection
//! - `cascade`: Clear/drop/refill to fixpoint, the event log
//! - `score`: Flat-rate score accounting
//! - `engine`: The session orchestrator and board setup

pub mod core;
pub mod board;
pub mod matching;
pub mod cascade;
pub mod score;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    Cell, EngineConfig, EngineError, Position, RngTileGenerator, SequenceGenerator,
    TileGenerator, TileKind, TileRng, TileRngState,
};

pub use crate::board::{Board, FallOrigin, TileMovement};

pub use crate::matching::{find_matches, ChainDirection, MatchChain};

pub use crate::cascade::{resolve, Resolution, ResolutionEvent};

pub use crate::score::Scorer;

pub use crate::engine::{
    create_board, legal_swaps, CleanupReport, Engine, EngineState, RejectReason,
    SelectOutcome, SwapOutcome,
};
