use std::fmt::{self, Display, Formatter};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Piece {
    AllyKing,
    Ally,
    Enemy,
    EnemyKing,
    Empty,
}

impl Piece {
    /// The same piece owned by the other side. Kings stay kings.
    pub fn flip(&self) -> Self {
        match self {
            Piece::AllyKing => Piece::EnemyKing,
            Piece::Ally => Piece::Enemy,
            Piece::Enemy => Piece::Ally,
            Piece::EnemyKing => Piece::AllyKing,
            Piece::Empty => Piece::Empty,
        }
    }

    pub fn is_ally(&self) -> bool {
        matches!(self, Piece::Ally | Piece::AllyKing)
    }

    pub fn is_enemy(&self) -> bool {
        matches!(self, Piece::Enemy | Piece::EnemyKing)
    }

    pub fn is_king(&self) -> bool {
        matches!(self, Piece::AllyKing | Piece::EnemyKing)
    }

    /// Promotes a man. Kings and empty cells are unchanged.
    pub fn king(&self) -> Self {
        match self {
            Piece::Ally => Piece::AllyKing,
            Piece::Enemy => Piece::EnemyKing,
            piece => *piece,
        }
    }

    pub fn from_char(c: char) -> Self {
        match c {
            'A' => Piece::AllyKing,
            'a' => Piece::Ally,
            'e' => Piece::Enemy,
            'E' => Piece::EnemyKing,
            _ => Piece::Empty,
        }
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let piece = match self {
            Piece::AllyKing => "A",
            Piece::Ally => "a",
            Piece::Enemy => "e",
            Piece::EnemyKing => "E",
            Piece::Empty => " ",
        };

        write!(f, "{}", piece)
    }
}
