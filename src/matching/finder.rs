//! Match detection: maximal straight-line runs of three or more.
//!
//! Rows and columns are scanned as independent passes with greedy run-length
//! detection. Within one scan direction runs never overlap; across the two
//! directions a cell may belong to both a horizontal and a vertical chain
//! (the classic L and T shapes).
//!
//! The output order is deterministic for a given board: row chains first,
//! rows top-to-bottom and runs left-to-right, then column chains, columns
//! left-to-right and runs top-to-bottom.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::Board;
use crate::core::{Cell, Position, TileKind};

/// The scan direction a chain was detected in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChainDirection {
    /// A run within a single row.
    Horizontal,
    /// A run within a single column.
    Vertical,
}

/// A maximal run of three or more same-kind tiles in one scan direction.
///
/// Positions are contiguous and ordered in scan direction: left-to-right for
/// horizontal chains, top-to-bottom for vertical ones.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchChain {
    /// The kind every cell of the run held at detection time.
    pub kind: TileKind,
    /// Which scan pass found the run.
    pub direction: ChainDirection,
    /// The run's cells in scan order. Runs are short: 3 is the norm, the
    /// grid edge is the ceiling.
    pub positions: SmallVec<[Position; 8]>,
}

impl MatchChain {
    /// Number of cells in the run. Always at least 3.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Chains are never empty; mirrors the usual is_empty/len pairing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Check whether a position belongs to the run.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }
}

/// Minimum run length that qualifies as a match.
const MIN_RUN: usize = 3;

/// Find every maximal run of three or more same-kind tiles.
///
/// Returns an empty list for a board at rest. Empty cells never participate
/// in a run, so the scan is safe on mid-resolution boards too.
#[must_use]
pub fn find_matches(board: &Board) -> Vec<MatchChain> {
    let mut chains = Vec::new();

    // Row pass: top to bottom, runs left to right.
    for row in 0..board.height() {
        scan_line(
            board.width(),
            |i| board.at(row, i),
            |i| Position::new(row, i),
            ChainDirection::Horizontal,
            &mut chains,
        );
    }

    // Column pass: left to right, runs top to bottom.
    for col in 0..board.width() {
        scan_line(
            board.height(),
            |i| board.at(i, col),
            |i| Position::new(i, col),
            ChainDirection::Vertical,
            &mut chains,
        );
    }

    chains
}

/// Greedy run-length scan of one line.
///
/// At each index not yet consumed by a run: if this cell and the next two
/// hold the same kind, extend while equal and emit the maximal run, then
/// resume after it; otherwise advance one cell.
fn scan_line(
    len: usize,
    cell_at: impl Fn(usize) -> Cell,
    pos_at: impl Fn(usize) -> Position,
    direction: ChainDirection,
    out: &mut Vec<MatchChain>,
) {
    let mut i = 0;
    while i + MIN_RUN <= len {
        let kind = match cell_at(i) {
            Cell::Filled(kind) => kind,
            Cell::Empty => {
                i += 1;
                continue;
            }
        };

        let mut end = i + 1;
        while end < len && cell_at(end) == Cell::Filled(kind) {
            end += 1;
        }

        if end - i >= MIN_RUN {
            out.push(MatchChain {
                kind,
                direction,
                positions: (i..end).map(&pos_at).collect(),
            });
            i = end;
        } else {
            i += 1;
        }
    }
}
