use engine::{Game, Outcome, StateOf};

use super::Piece;

pub type Board = [Piece; 9];

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Tic-tac-toe on a 3x3 board indexed row by row from the top left.
#[derive(Default)]
pub struct Engine {}

impl Engine {
    pub fn new() -> Self {
        Self {}
    }
}

impl Game for Engine {
    type Board = Board;

    fn initial_board(&self) -> Self::Board {
        [Piece::Empty; 9]
    }

    fn get_moves(&self, state: &StateOf<Self>) -> Vec<StateOf<Self>> {
        let board = state.board();

        board
            .iter()
            .enumerate()
            .filter(|(_, piece)| **piece == Piece::Empty)
            .map(|(i, _)| {
                let mut new_board = *board;
                new_board[i] = Piece::Ally;
                state.successor(new_board)
            })
            .collect()
    }

    fn perspective_change(&self, state: &StateOf<Self>) -> StateOf<Self> {
        state.with_board(state.board().map(|piece| piece.flip()))
    }

    fn evaluate(&self, state: &StateOf<Self>) -> Outcome {
        let board = state.board();

        for [a, b, c] in LINES {
            let piece = board[a];
            if piece != Piece::Empty && piece == board[b] && piece == board[c] {
                return if piece == Piece::Ally {
                    Outcome::Win
                } else {
                    Outcome::Loss
                };
            }
        }

        if board.contains(&Piece::Empty) {
            Outcome::Ongoing
        } else {
            Outcome::Draw
        }
    }

    fn display(&self, state: &StateOf<Self>) -> String {
        let line = format!("{}\n", "-".repeat(2 * 3 + 1));
        let mut output = line.clone();

        for row in state.board().chunks(3) {
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

/// Builds a board from a 9 character pattern of `A`, `E` and anything else for empty.
pub fn board_from_str(pattern: &str) -> Board {
    let mut board = [Piece::Empty; 9];

    for (cell, c) in board.iter_mut().zip(pattern.chars()) {
        *cell = match c {
            'A' => Piece::Ally,
            'E' => Piece::Enemy,
            _ => Piece::Empty,
        };
    }

    board
}
