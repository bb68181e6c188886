use std::sync::Arc;

/// A position of a two player game. States are never modified; each move produces a new one.
///
/// The board is game specific and is kept normalized so that the "ally" pieces belong to a single
/// canonical side, which lets one evaluation routine serve both players.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GameState<B> {
    players: Arc<[String]>,
    turn: usize,
    board: B,
    ply: usize,
}

impl<B> GameState<B> {
    pub fn new(players: Arc<[String]>, board: B) -> Self {
        Self {
            players,
            turn: 0,
            board,
            ply: 0,
        }
    }

    pub fn players(&self) -> &Arc<[String]> {
        &self.players
    }

    /// Index into `players` of the side whose turn it is.
    pub fn turn(&self) -> usize {
        self.turn
    }

    pub fn player_to_move(&self) -> &str {
        &self.players[self.turn]
    }

    pub fn board(&self) -> &B {
        &self.board
    }

    /// Number of half moves played since the start of the game.
    pub fn ply(&self) -> usize {
        self.ply
    }

    /// The state after the side to move has played, reaching `board`.
    pub fn successor(&self, board: B) -> Self {
        Self {
            players: self.players.clone(),
            turn: 1 - self.turn,
            board,
            ply: self.ply + 1,
        }
    }

    /// Same turn and ply with a relabeled board.
    pub fn with_board(&self, board: B) -> Self {
        Self {
            players: self.players.clone(),
            turn: self.turn,
            board,
            ply: self.ply,
        }
    }
}

pub fn players<I, S>(names: I) -> Arc<[String]>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names.into_iter().map(Into::into).collect()
}
