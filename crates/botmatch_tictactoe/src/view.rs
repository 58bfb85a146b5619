//! Read-only snapshot of the board handed to renderers.

use crate::coord::{Coordinate, CELL_COUNT};
use crate::symbol::Symbol;

/// Display state of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    /// Where the cell is.
    pub coordinate: Coordinate,
    /// Symbol drawn in the cell, if claimed.
    pub owner: Option<Symbol>,
    /// True iff the cell is unclaimed, the game is open and the human is
    /// due to move.
    pub accepts_input: bool,
}

/// All 9 cells, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardView {
    cells: [CellView; CELL_COUNT],
}

impl BoardView {
    pub(crate) fn new(cells: [CellView; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// An unclaimed board where no cell accepts input.
    pub fn blank() -> Self {
        Self {
            cells: Coordinate::ALL.map(|coordinate| CellView {
                coordinate,
                owner: None,
                accepts_input: false,
            }),
        }
    }

    /// The cell at `coord`.
    pub fn cell(&self, coord: Coordinate) -> CellView {
        self.cells[coord.index()]
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> &[CellView; CELL_COUNT] {
        &self.cells
    }

    /// Cells grouped by row.
    pub fn rows(&self) -> impl Iterator<Item = &[CellView]> {
        self.cells.chunks(3)
    }

    /// Coordinates the human may currently pick.
    pub fn open_cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells
            .iter()
            .filter(|cell| cell.accepts_input)
            .map(|cell| cell.coordinate)
    }
}

impl Default for BoardView {
    fn default() -> Self {
        Self::blank()
    }
}
