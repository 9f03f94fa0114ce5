//! Tile, cell, and position primitives.
//!
//! ## TileKind
//!
//! Type-safe tile identifier drawn from a fixed palette. Kinds are opaque:
//! the engine only compares them for equality, never orders them. A board
//! configured with `tile_kind_count = 4` uses kinds `0..4`.
//!
//! ## Cell
//!
//! A grid cell is either `Empty` or `Filled(TileKind)`. `Empty` is a
//! transient state while matches are being cleared and refilled; a board at
//! rest has no `Empty` cells.
//!
//! ## Position
//!
//! A (row, column) coordinate pair. Row 0 is the top of the grid, matching
//! the direction freshly generated tiles fall from.

use serde::{Deserialize, Serialize};

/// Identifier for one of the palette's tile kinds.
///
/// Kinds are 0-based: a palette of 4 uses `TileKind(0)..TileKind(3)`.
///
/// ```
/// use tilefall::TileKind;
///
/// let red = TileKind::new(0);
/// let blue = TileKind::new(1);
/// assert_ne!(red, blue);
/// assert_eq!(red.raw(), 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileKind(pub u8);

impl TileKind {
    /// Create a new tile kind.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw palette index.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for TileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// A single grid cell: empty, or holding one tile.
///
/// `Empty` only appears mid-resolution, in place of cleared tiles or above
/// tiles that have yet to fall. Every resolution pass refills the column, so
/// callers observing a board between engine operations never see `Empty`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No tile. Transient during clearing and refill.
    #[default]
    Empty,
    /// A tile of the given kind.
    Filled(TileKind),
}

impl Cell {
    /// Check whether the cell is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Check whether the cell holds a tile.
    #[must_use]
    pub const fn is_filled(self) -> bool {
        matches!(self, Cell::Filled(_))
    }

    /// Get the tile kind, if the cell holds one.
    #[must_use]
    pub const fn kind(self) -> Option<TileKind> {
        match self {
            Cell::Empty => None,
            Cell::Filled(kind) => Some(kind),
        }
    }
}

/// A (row, column) board coordinate.
///
/// Row 0 is the top row; column 0 is the leftmost column.
///
/// ```
/// use tilefall::Position;
///
/// let a = Position::new(2, 3);
/// let b = Position::new(2, 4);
/// assert!(a.is_adjacent_to(b));
/// assert!(!a.is_adjacent_to(Position::new(3, 4)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Row index, 0 at the top.
    pub row: usize,
    /// Column index, 0 at the left.
    pub col: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Check whether two positions are orthogonally adjacent.
    ///
    /// Adjacency is Manhattan distance exactly 1 - the only pairs a swap
    /// request may name. Diagonals and identical positions are not adjacent.
    #[must_use]
    pub fn is_adjacent_to(self, other: Position) -> bool {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        dr + dc == 1
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
