use engine::{Game, Outcome, StateOf};
use itertools::iproduct;

use super::board::{pack, unpack, Grid};
use super::{Board, Piece, CELLS_PER_ROW, COLUMNS, ROWS};

/// Games still undecided after this many plies are drawn.
pub const DEFAULT_MAX_PLY: usize = 100;

type Direction = (isize, isize);

const MAN_DIRECTIONS: [Direction; 2] = [(1, -1), (1, 1)];
const KING_DIRECTIONS: [Direction; 4] = [(1, -1), (1, 1), (-1, -1), (-1, 1)];

/// English draughts on an 8x8 board. Men move diagonally toward row 7 and are crowned there,
/// kings also move backward. Taking is mandatory and a taking move continues until the piece
/// has nothing left to take.
pub struct Engine {
    max_ply: usize,
}

impl Engine {
    pub fn new(max_ply: usize) -> Self {
        Self { max_ply }
    }

    pub fn max_ply(&self) -> usize {
        self.max_ply
    }

    fn normal_moves(&self, state: &StateOf<Self>, grid: &Grid) -> Vec<StateOf<Self>> {
        let mut moves = Vec::new();

        for (row, column) in iproduct!(0..ROWS, 0..COLUMNS) {
            let piece = grid[row][column];

            for &direction in directions(piece) {
                if let Some((to_row, to_column)) = step(row, column, direction, 1) {
                    if grid[to_row][to_column] == Piece::Empty {
                        let mut next = *grid;
                        next[to_row][to_column] = land(piece, to_row);
                        next[row][column] = Piece::Empty;
                        moves.push(state.successor(pack(&next)));
                    }
                }
            }
        }

        moves
    }

    fn take_moves(&self, state: &StateOf<Self>, grid: &Grid) -> Vec<StateOf<Self>> {
        let mut moves = Vec::new();

        for (row, column) in iproduct!(0..ROWS, 0..COLUMNS) {
            let piece = grid[row][column];
            let mut chains = takes_from(grid, piece, row, column);

            while !chains.is_empty() {
                let mut longer_chains = Vec::new();

                for (taken, to_row, to_column) in chains {
                    let next_takes = takes_from(&taken, piece, to_row, to_column);

                    if next_takes.is_empty() {
                        moves.push(state.successor(pack(&taken)));
                    } else {
                        longer_chains.extend(next_takes);
                    }
                }

                chains = longer_chains;
            }
        }

        moves
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_PLY)
    }
}

impl Game for Engine {
    type Board = Board;

    fn initial_board(&self) -> Self::Board {
        let mut board = [[Piece::Empty; CELLS_PER_ROW]; ROWS];

        for row in &mut board[..3] {
            *row = [Piece::Ally; CELLS_PER_ROW];
        }

        for row in &mut board[ROWS - 3..] {
            *row = [Piece::Enemy; CELLS_PER_ROW];
        }

        board
    }

    fn get_moves(&self, state: &StateOf<Self>) -> Vec<StateOf<Self>> {
        let grid = unpack(state.board());
        let take_moves = self.take_moves(state, &grid);

        if !take_moves.is_empty() {
            return take_moves;
        }

        self.normal_moves(state, &grid)
    }

    /// Turns the board around and swaps the teams.
    fn perspective_change(&self, state: &StateOf<Self>) -> StateOf<Self> {
        let board = state.board();
        let mut rotated = [[Piece::Empty; CELLS_PER_ROW]; ROWS];

        for (row, cell) in iproduct!(0..ROWS, 0..CELLS_PER_ROW) {
            rotated[ROWS - 1 - row][CELLS_PER_ROW - 1 - cell] = board[row][cell].flip();
        }

        state.with_board(rotated)
    }

    fn evaluate(&self, state: &StateOf<Self>) -> Outcome {
        if self.get_moves(state).is_empty() {
            return Outcome::Loss;
        }

        let (allies, enemies) = count_pieces(state.board());

        if enemies == 0 {
            Outcome::Win
        } else if allies == 0 {
            Outcome::Loss
        } else if state.ply() == self.max_ply {
            Outcome::Draw
        } else {
            Outcome::Ongoing
        }
    }

    /// Row 7 is printed first so the ally side sits at the bottom.
    fn display(&self, state: &StateOf<Self>) -> String {
        let line = format!("{}\n", "-".repeat(2 * COLUMNS + 1));
        let mut output = line.clone();

        for row in unpack(state.board()).iter().rev() {
            for piece in row {
                output.push('|');
                output.push_str(&piece.to_string());
            }
            output.push_str("|\n");
            output.push_str(&line);
        }

        output
    }
}

/// Number of ally and enemy pieces, kings included.
pub fn count_pieces(board: &Board) -> (usize, usize) {
    board
        .iter()
        .flatten()
        .fold((0, 0), |(allies, enemies), piece| {
            if piece.is_ally() {
                (allies + 1, enemies)
            } else if piece.is_enemy() {
                (allies, enemies + 1)
            } else {
                (allies, enemies)
            }
        })
}

/// Only ally pieces move. Enemies and empty squares have no directions.
fn directions(piece: Piece) -> &'static [Direction] {
    match piece {
        Piece::AllyKing => &KING_DIRECTIONS,
        Piece::Ally => &MAN_DIRECTIONS,
        _ => &[],
    }
}

fn step(row: usize, column: usize, (row_diff, column_diff): Direction, distance: isize) -> Option<(usize, usize)> {
    let row = row as isize + row_diff * distance;
    let column = column as isize + column_diff * distance;

    if (0..ROWS as isize).contains(&row) && (0..COLUMNS as isize).contains(&column) {
        Some((row as usize, column as usize))
    } else {
        None
    }
}

fn land(piece: Piece, row: usize) -> Piece {
    if row == ROWS - 1 {
        piece.king()
    } else {
        piece
    }
}

/// Every single jump `piece` at `row`, `column` can make, with the resulting grid and landing square.
fn takes_from(grid: &Grid, piece: Piece, row: usize, column: usize) -> Vec<(Grid, usize, usize)> {
    directions(piece)
        .iter()
        .filter_map(|&direction| {
            let (over_row, over_column) = step(row, column, direction, 1)?;
            let (to_row, to_column) = step(row, column, direction, 2)?;

            if !grid[over_row][over_column].is_enemy() || grid[to_row][to_column] != Piece::Empty {
                return None;
            }

            let mut next = *grid;
            next[to_row][to_column] = land(piece, to_row);
            next[over_row][over_column] = Piece::Empty;
            next[row][column] = Piece::Empty;

            Some((next, to_row, to_column))
        })
        .collect()
}
