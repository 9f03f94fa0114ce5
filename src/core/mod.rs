//! Core engine types: tiles, positions, configuration, RNG, errors.
//!
//! This module contains the fundamental building blocks shared by every
//! other part of the engine. Hosts configure them via `EngineConfig` rather
//! than modifying the core.

pub mod tile;
pub mod config;
pub mod rng;
pub mod generate;
pub mod error;

pub use tile::{Cell, Position, TileKind};
pub use config::EngineConfig;
pub use rng::{TileRng, TileRngState};
pub use generate::{RngTileGenerator, SequenceGenerator, TileGenerator};
pub use error::EngineError;
