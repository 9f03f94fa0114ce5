//! Engine configuration.
//!
//! Hosts configure the engine at startup: grid dimensions, palette size,
//! scoring rate, and the safety cap shared by initial-board cleanup and
//! cascade resolution. Everything has a playable default - `EngineConfig::new()`
//! is the classic 8x8 board with 4 tile kinds at 10 points per tile.

use serde::{Deserialize, Serialize};

/// Complete engine configuration.
///
/// Built with chained setters in the usual way:
///
/// ```
/// use tilefall::EngineConfig;
///
/// let config = EngineConfig::new()
///     .with_dimensions(6, 6)
///     .with_tile_kind_count(5)
///     .with_points_per_tile(25);
///
/// assert_eq!(config.width, 6);
/// assert_eq!(config.tile_kind_count, 5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Grid width in columns.
    pub width: usize,

    /// Grid height in rows.
    pub height: usize,

    /// Number of tile kinds in the palette (1-255).
    pub tile_kind_count: u8,

    /// Points awarded per cleared cell. Flat rate, no multipliers.
    pub points_per_tile: u32,

    /// Iteration cap for initial-board cleanup and for cascade resolution.
    ///
    /// Reaching the cap is a recoverable degraded condition, not an error:
    /// the operation completes and the exhaustion is reported to the caller.
    pub max_cleanup_iterations: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: 8,
            height: 8,
            tile_kind_count: 4,
            points_per_tile: 10,
            max_cleanup_iterations: 100,
        }
    }
}

impl EngineConfig {
    /// Create a configuration with the default 8x8 grid, 4 kinds,
    /// 10 points per tile, and a cleanup cap of 100 iterations.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the grid dimensions.
    #[must_use]
    pub fn with_dimensions(mut self, width: usize, height: usize) -> Self {
        assert!(width > 0, "Board width must be at least 1");
        assert!(height > 0, "Board height must be at least 1");
        self.width = width;
        self.height = height;
        self
    }

    /// Set the number of tile kinds in the palette.
    #[must_use]
    pub fn with_tile_kind_count(mut self, count: u8) -> Self {
        assert!(count > 0, "Palette must have at least 1 tile kind");
        self.tile_kind_count = count;
        self
    }

    /// Set the points awarded per cleared cell.
    #[must_use]
    pub fn with_points_per_tile(mut self, points: u32) -> Self {
        self.points_per_tile = points;
        self
    }

    /// Set the cleanup/cascade iteration cap.
    #[must_use]
    pub fn with_max_cleanup_iterations(mut self, cap: u32) -> Self {
        assert!(cap > 0, "Iteration cap must be at least 1");
        self.max_cleanup_iterations = cap;
        self
    }

    /// Total number of cells on the board.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::new();
        assert_eq!(config.width, 8);
        assert_eq!(config.height, 8);
        assert_eq!(config.tile_kind_count, 4);
        assert_eq!(config.points_per_tile, 10);
        assert_eq!(config.max_cleanup_iterations, 100);
        assert_eq!(config.cell_count(), 64);
    }

    #[test]
    fn test_builder() {
        let config = EngineConfig::new()
            .with_dimensions(5, 7)
            .with_tile_kind_count(6)
            .with_points_per_tile(50)
            .with_max_cleanup_iterations(10);

        assert_eq!(config.width, 5);
        assert_eq!(config.height, 7);
        assert_eq!(config.cell_count(), 35);
        assert_eq!(config.tile_kind_count, 6);
        assert_eq!(config.points_per_tile, 50);
        assert_eq!(config.max_cleanup_iterations, 10);
    }

    #[test]
    #[should_panic(expected = "Board width must be at least 1")]
    fn test_zero_width_rejected() {
        EngineConfig::new().with_dimensions(0, 8);
    }

    #[test]
    #[should_panic(expected = "Palette must have at least 1 tile kind")]
    fn test_zero_kinds_rejected() {
        EngineConfig::new().with_tile_kind_count(0);
    }

    #[test]
    fn test_config_serde() {
        let config = EngineConfig::new().with_dimensions(6, 6);
        let json = serde_json::to_string(&config).unwrap();
        let back: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
