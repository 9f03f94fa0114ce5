//! The board: a fixed-size rectangular grid of cells.
//!
//! Cells are stored row-major in a flat `Vec` with row 0 at the top. The
//! board offers bounds-checked access, adjacency-validated swap, and the two
//! column primitives resolution is built from: downward compaction and
//! top-down refill.
//!
//! The board does not know the game rules. `swap` exchanges any two adjacent
//! cells unconditionally; deciding whether the swap stands or must be
//! reverted is the engine's job.

use serde::{Deserialize, Serialize};

use crate::core::{Cell, EngineConfig, EngineError, Position, TileGenerator};

use super::movement::{FallOrigin, TileMovement};

/// A fixed-size grid of cells plus the palette size used for refills.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    width: usize,
    height: usize,
    tile_kind_count: u8,
    /// Row-major cells, `row * width + col`.
    cells: Vec<Cell>,
}

impl Board {
    /// Create an all-empty board from a configuration.
    ///
    /// Construction intermediate: callers get at-rest boards from
    /// `engine::create_board`.
    #[must_use]
    pub(crate) fn empty(config: &EngineConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            tile_kind_count: config.tile_kind_count,
            cells: vec![Cell::Empty; config.cell_count()],
        }
    }

    /// Build a board from explicit rows.
    ///
    /// Intended for tests, saved-game loading, and board editors. Panics if
    /// `rows` is empty, ragged, or `tile_kind_count` is zero.
    ///
    /// ```
    /// use tilefall::{Board, Cell, TileKind};
    ///
    /// let a = Cell::Filled(TileKind::new(0));
    /// let b = Cell::Filled(TileKind::new(1));
    /// let board = Board::from_rows(4, &[vec![a, b], vec![b, a]]);
    /// assert_eq!(board.width(), 2);
    /// assert_eq!(board.height(), 2);
    /// ```
    #[must_use]
    pub fn from_rows(tile_kind_count: u8, rows: &[Vec<Cell>]) -> Self {
        assert!(tile_kind_count > 0, "Palette must have at least 1 tile kind");
        assert!(!rows.is_empty(), "Board must have at least 1 row");
        let width = rows[0].len();
        assert!(width > 0, "Board must have at least 1 column");
        assert!(
            rows.iter().all(|row| row.len() == width),
            "All rows must have the same length"
        );

        Self {
            width,
            height: rows.len(),
            tile_kind_count,
            cells: rows.iter().flatten().copied().collect(),
        }
    }

    /// Grid width in columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of tile kinds in the palette used for refills.
    #[must_use]
    pub fn tile_kind_count(&self) -> u8 {
        self.tile_kind_count
    }

    /// Check whether a position is on the board.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    fn index(&self, pos: Position) -> Option<usize> {
        if self.contains(pos) {
            Some(pos.row * self.width + pos.col)
        } else {
            None
        }
    }

    fn out_of_bounds(&self, pos: Position) -> EngineError {
        EngineError::InvalidPosition {
            pos,
            width: self.width,
            height: self.height,
        }
    }

    /// Unchecked cell read. Callers guarantee `row < height, col < width`.
    #[inline]
    pub(crate) fn at(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.width + col]
    }

    #[inline]
    pub(crate) fn set_at(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * self.width + col] = cell;
    }

    /// Get the cell at a position.
    ///
    /// Fails with `InvalidPosition` when the coordinate is off the board.
    pub fn get(&self, pos: Position) -> Result<Cell, EngineError> {
        self.index(pos)
            .map(|idx| self.cells[idx])
            .ok_or_else(|| self.out_of_bounds(pos))
    }

    /// Set the cell at a position.
    ///
    /// Low-level primitive for construction and editors; the engine never
    /// hands out its board mutably, so sessions cannot reach this.
    pub fn set(&mut self, pos: Position, cell: Cell) -> Result<(), EngineError> {
        let idx = self.index(pos).ok_or_else(|| self.out_of_bounds(pos))?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Exchange the contents of two adjacent cells, unconditionally.
    ///
    /// Fails with `InvalidPosition` for off-board coordinates and
    /// `InvalidSwap` for non-adjacent pairs. Whether the swap should stand
    /// is not the board's concern: the engine swaps back when no match
    /// results.
    pub fn swap(&mut self, a: Position, b: Position) -> Result<(), EngineError> {
        let ia = self.index(a).ok_or_else(|| self.out_of_bounds(a))?;
        let ib = self.index(b).ok_or_else(|| self.out_of_bounds(b))?;
        if !a.is_adjacent_to(b) {
            return Err(EngineError::InvalidSwap { a, b });
        }
        self.cells.swap(ia, ib);
        Ok(())
    }

    /// Iterate all positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let width = self.width;
        (0..self.height).flat_map(move |row| (0..width).map(move |col| Position::new(row, col)))
    }

    /// Iterate the rows as cell slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    /// Check whether every cell holds a tile.
    ///
    /// True for any board at rest; transiently false mid-resolution.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_filled())
    }

    /// Slide every tile in a column down over the empty cells below it,
    /// preserving relative order, leaving the empties at the top.
    ///
    /// Returns one movement per tile that fell, ordered top-to-bottom by
    /// source row. Panics if `col` is off the board.
    pub fn compact_column(&mut self, col: usize) -> Vec<TileMovement> {
        assert!(col < self.width, "Column {col} out of range");

        let mut movements = Vec::new();
        let mut empties = 0usize;
        // Scan bottom-up, the direction tiles fall toward.
        for row in (0..self.height).rev() {
            match self.at(row, col) {
                Cell::Empty => empties += 1,
                Cell::Filled(kind) => {
                    if empties > 0 {
                        self.set_at(row + empties, col, Cell::Filled(kind));
                        self.set_at(row, col, Cell::Empty);
                        movements.push(TileMovement {
                            col,
                            origin: FallOrigin::Row(row),
                            to_row: row + empties,
                            kind,
                        });
                    }
                }
            }
        }
        // Report in top-to-bottom source order.
        movements.reverse();
        movements
    }

    /// Fill every remaining empty cell in a column, top down, with freshly
    /// generated tiles.
    ///
    /// Movement origins are above the grid: the i-th empty from the top of a
    /// column with n empties spawns `n - i` rows above the edge, so a column
    /// of new tiles falls in as one block. Panics if `col` is off the board.
    pub fn fill_empties(
        &mut self,
        col: usize,
        generator: &mut dyn TileGenerator,
    ) -> Vec<TileMovement> {
        assert!(col < self.width, "Column {col} out of range");

        let empties = (0..self.height)
            .filter(|&row| self.at(row, col).is_empty())
            .count();

        let mut movements = Vec::new();
        let mut filled = 0usize;
        for row in 0..self.height {
            if self.at(row, col).is_empty() {
                let kind = generator.next_tile(self.tile_kind_count);
                self.set_at(row, col, Cell::Filled(kind));
                movements.push(TileMovement {
                    col,
                    origin: FallOrigin::Above {
                        offset: empties - filled,
                    },
                    to_row: row,
                    kind,
                });
                filled += 1;
            }
        }
        movements
    }
}
