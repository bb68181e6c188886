/// Result of a position, always relative to the side to move in that position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    Ongoing,
    Win,
    Draw,
    Loss,
}

impl Outcome {
    /// Numeric value of a decided position. `Ongoing` has no value and returns `None`.
    pub fn score(&self) -> Option<f32> {
        match self {
            Outcome::Win => Some(1.0),
            Outcome::Draw => Some(0.0),
            Outcome::Loss => Some(-1.0),
            Outcome::Ongoing => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    /// The same result seen from the other side.
    pub fn flip(&self) -> Self {
        match self {
            Outcome::Win => Outcome::Loss,
            Outcome::Loss => Outcome::Win,
            outcome => *outcome,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let outcome = match self {
            Outcome::Ongoing => "ongoing",
            Outcome::Win => "win",
            Outcome::Draw => "draw",
            Outcome::Loss => "loss",
        };

        write!(f, "{}", outcome)
    }
}
