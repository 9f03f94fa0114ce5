//! Session orchestration: the selection state machine, swap transactions,
//! board setup, and rules-level queries.

pub mod orchestrator;
pub mod setup;
pub mod state;

pub use orchestrator::{legal_swaps, Engine};
pub use setup::{create_board, CleanupReport};
pub use state::{EngineState, RejectReason, SelectOutcome, SwapOutcome};
