//! Board storage and the column primitives resolution is built from.

pub mod grid;
pub mod movement;

pub use grid::Board;
pub use movement::{FallOrigin, TileMovement};
