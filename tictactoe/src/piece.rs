use std::fmt::{self, Display, Formatter};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Piece {
    Ally,
    Enemy,
    Empty,
}

impl Piece {
    /// The same piece owned by the other side.
    pub fn flip(&self) -> Self {
        match self {
            Piece::Ally => Piece::Enemy,
            Piece::Enemy => Piece::Ally,
            Piece::Empty => Piece::Empty,
        }
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let piece = match self {
            Piece::Ally => "A",
            Piece::Enemy => "E",
            Piece::Empty => " ",
        };

        write!(f, "{}", piece)
    }
}
