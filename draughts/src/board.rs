use itertools::iproduct;

use super::Piece;

pub const ROWS: usize = 8;
pub const COLUMNS: usize = 8;
pub const CELLS_PER_ROW: usize = COLUMNS / 2;

/// The 32 playable cells, row 0 nearest the side to move. Even rows hold columns 0, 2, 4 and 6;
/// odd rows are indented by one and hold columns 1, 3, 5 and 7.
pub type Board = [[Piece; CELLS_PER_ROW]; ROWS];

/// Every square of the board. Squares that are never playable stay `Empty`.
pub(crate) type Grid = [[Piece; COLUMNS]; ROWS];

pub(crate) fn unpack(board: &Board) -> Grid {
    let mut grid = [[Piece::Empty; COLUMNS]; ROWS];

    for (row, cell) in iproduct!(0..ROWS, 0..CELLS_PER_ROW) {
        grid[row][column_of(row, cell)] = board[row][cell];
    }

    grid
}

pub(crate) fn pack(grid: &Grid) -> Board {
    let mut board = [[Piece::Empty; CELLS_PER_ROW]; ROWS];

    for (row, cell) in iproduct!(0..ROWS, 0..CELLS_PER_ROW) {
        board[row][cell] = grid[row][column_of(row, cell)];
    }

    board
}

fn column_of(row: usize, cell: usize) -> usize {
    2 * cell + row % 2
}

/// Builds a board from eight rows of four playable cells, row 0 first, using the characters
/// `Piece` displays as.
pub fn board_from_rows(rows: [&str; ROWS]) -> Board {
    let mut board = [[Piece::Empty; CELLS_PER_ROW]; ROWS];

    for (cells, pattern) in board.iter_mut().zip(rows) {
        for (cell, c) in cells.iter_mut().zip(pattern.chars()) {
            *cell = Piece::from_char(c);
        }
    }

    board
}
