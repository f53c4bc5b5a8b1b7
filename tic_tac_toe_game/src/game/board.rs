use serde::{Deserialize, Serialize};

pub const CELL_COUNT: usize = 9;

/// The 8 winning triples: rows, columns, diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// 3x3 grid of symbols addressed by flat index (`row = index / 3`,
/// `col = index % 3`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<char>; 3]; 3],
}

impl Board {
    pub fn new() -> Self {
        Board::default()
    }

    pub fn position(index: usize) -> (usize, usize) {
        (index / 3, index % 3)
    }

    /// `None` for an empty cell or an index off the board.
    pub fn get(&self, index: usize) -> Option<char> {
        if index >= CELL_COUNT {
            return None;
        }
        let (row, col) = Board::position(index);
        self.cells[row][col]
    }

    pub fn is_empty(&self, index: usize) -> bool {
        index < CELL_COUNT && self.get(index).is_none()
    }

    pub(crate) fn set(&mut self, index: usize, symbol: char) {
        let (row, col) = Board::position(index);
        self.cells[row][col] = Some(symbol);
    }

    pub(crate) fn clear(&mut self, index: usize) {
        let (row, col) = Board::position(index);
        self.cells[row][col] = None;
    }

    pub fn cells(&self) -> impl Iterator<Item = Option<char>> + '_ {
        self.cells.iter().flat_map(|row| row.iter().copied())
    }

    pub fn empty_cells(&self) -> Vec<usize> {
        (0..CELL_COUNT).filter(|&i| self.is_empty(i)).collect()
    }

    pub fn occupied(&self) -> usize {
        self.cells().filter(Option::is_some).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell.is_some()))
    }

    /// True iff some line is held entirely by `symbol`.
    pub fn has_line(&self, symbol: char) -> bool {
        LINES
            .iter()
            .any(|line| line.iter().all(|&i| self.get(i) == Some(symbol)))
    }
}
