//! Match detection over board snapshots.

pub mod finder;

pub use finder::{find_matches, ChainDirection, MatchChain};
