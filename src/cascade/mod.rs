//! Cascade resolution and its event log.

pub mod events;
pub mod resolver;

pub use events::ResolutionEvent;
pub use resolver::{resolve, Resolution};

pub(crate) use resolver::{clear_chains, drop_tiles};
