//! Tile fall records.
//!
//! Compaction and refill report every tile that moved so the presentation
//! layer can animate falls without diffing board snapshots. A movement names
//! the column, where the tile came from, where it landed, and its kind.

use serde::{Deserialize, Serialize};

use crate::core::TileKind;

/// Where a falling tile started.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FallOrigin {
    /// An existing board row, vacated by compaction.
    Row(usize),
    /// Above the grid: a freshly generated tile. `offset` is the distance
    /// above row 0 (1 = just above the top edge).
    Above {
        /// Distance above row 0, at least 1.
        offset: usize,
    },
}

impl FallOrigin {
    /// The starting row as a signed index, with rows above the grid
    /// negative. Convenient for animation math.
    #[must_use]
    pub fn start_row(self) -> isize {
        match self {
            FallOrigin::Row(row) => row as isize,
            FallOrigin::Above { offset } => -(offset as isize),
        }
    }
}

/// One tile falling within a column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileMovement {
    /// The column the tile falls in.
    pub col: usize,
    /// Where the tile started.
    pub origin: FallOrigin,
    /// The row the tile landed on.
    pub to_row: usize,
    /// The kind of the moving tile.
    pub kind: TileKind,
}

impl TileMovement {
    /// How many rows the tile fell.
    #[must_use]
    pub fn fall_distance(&self) -> usize {
        (self.to_row as isize - self.origin.start_row()) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_row() {
        assert_eq!(FallOrigin::Row(3).start_row(), 3);
        assert_eq!(FallOrigin::Above { offset: 2 }.start_row(), -2);
    }

    #[test]
    fn test_fall_distance() {
        let from_board = TileMovement {
            col: 0,
            origin: FallOrigin::Row(1),
            to_row: 4,
            kind: TileKind::new(0),
        };
        assert_eq!(from_board.fall_distance(), 3);

        let spawned = TileMovement {
            col: 0,
            origin: FallOrigin::Above { offset: 2 },
            to_row: 0,
            kind: TileKind::new(1),
        };
        assert_eq!(spawned.fall_distance(), 2);
    }

    #[test]
    fn test_movement_serde() {
        let movement = TileMovement {
            col: 5,
            origin: FallOrigin::Above { offset: 1 },
            to_row: 2,
            kind: TileKind::new(3),
        };
        let json = serde_json::to_string(&movement).unwrap();
        let back: TileMovement = serde_json::from_str(&json).unwrap();
        assert_eq!(movement, back);
    }
}
