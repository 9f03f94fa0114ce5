//! Score accounting.

pub mod scorer;

pub use scorer::Scorer;
