//! Board coordinates and the fixed table of winning triples.

use tracing::instrument;

/// Number of rows (and columns) on the board.
pub const BOARD_SIZE: u8 = 3;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// A (row, column) position on the 3x3 board.
///
/// Both components are always in `0..3`; the only way to build a
/// coordinate from untrusted numbers is [`Coordinate::new`], which
/// rejects anything off the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    row: u8,
    col: u8,
}

impl Coordinate {
    /// All 9 coordinates in row-major order.
    pub const ALL: [Coordinate; CELL_COUNT] = [
        Coordinate::at(0, 0),
        Coordinate::at(0, 1),
        Coordinate::at(0, 2),
        Coordinate::at(1, 0),
        Coordinate::at(1, 1),
        Coordinate::at(1, 2),
        Coordinate::at(2, 0),
        Coordinate::at(2, 1),
        Coordinate::at(2, 2),
    ];

    pub(crate) const fn at(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Creates a coordinate, or `None` if it falls outside the board.
    pub fn new(row: u8, col: u8) -> Option<Self> {
        (row < BOARD_SIZE && col < BOARD_SIZE).then_some(Self::at(row, col))
    }

    /// Row component (0 is the top row).
    pub fn row(self) -> u8 {
        self.row
    }

    /// Column component (0 is the left column).
    pub fn col(self) -> u8 {
        self.col
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        usize::from(self.row * BOARD_SIZE + self.col)
    }

    /// Creates a coordinate from a row-major index.
    #[instrument]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Human-readable name of the cell.
    pub fn label(self) -> &'static str {
        match (self.row, self.col) {
            (0, 0) => "Top-left",
            (0, 1) => "Top-center",
            (0, 2) => "Top-right",
            (1, 0) => "Middle-left",
            (1, 1) => "Center",
            (1, 2) => "Middle-right",
            (2, 0) => "Bottom-left",
            (2, 1) => "Bottom-center",
            _ => "Bottom-right",
        }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The 8 triples whose full ownership wins the game.
pub const WINNING_TRIPLES: [[Coordinate; 3]; 8] = [
    // Rows
    [Coordinate::at(0, 0), Coordinate::at(0, 1), Coordinate::at(0, 2)],
    [Coordinate::at(1, 0), Coordinate::at(1, 1), Coordinate::at(1, 2)],
    [Coordinate::at(2, 0), Coordinate::at(2, 1), Coordinate::at(2, 2)],
    // Columns
    [Coordinate::at(0, 0), Coordinate::at(1, 0), Coordinate::at(2, 0)],
    [Coordinate::at(0, 1), Coordinate::at(1, 1), Coordinate::at(2, 1)],
    [Coordinate::at(0, 2), Coordinate::at(1, 2), Coordinate::at(2, 2)],
    // Diagonals
    [Coordinate::at(0, 0), Coordinate::at(1, 1), Coordinate::at(2, 2)],
    [Coordinate::at(0, 2), Coordinate::at(1, 1), Coordinate::at(2, 0)],
];
