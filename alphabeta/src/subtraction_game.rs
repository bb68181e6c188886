use engine::{Game, GameState, Outcome, StateOf};

/// Players alternately take one or two counters from a pile; whoever takes the last counter
/// wins. Piles that are a multiple of three are lost for the side to move.
pub struct SubtractionGame {
    pile: u32,
}

impl SubtractionGame {
    pub fn new(pile: u32) -> Self {
        Self { pile }
    }

    pub fn state(&self, pile: u32) -> StateOf<Self> {
        GameState::new(engine::players(["p1", "p2"]), pile)
    }
}

impl Game for SubtractionGame {
    type Board = u32;

    fn initial_board(&self) -> Self::Board {
        self.pile
    }

    fn get_moves(&self, state: &StateOf<Self>) -> Vec<StateOf<Self>> {
        let pile = *state.board();

        (1..=2)
            .filter(|take| *take <= pile)
            .map(|take| state.successor(pile - take))
            .collect()
    }

    fn perspective_change(&self, state: &StateOf<Self>) -> StateOf<Self> {
        state.clone()
    }

    fn evaluate(&self, state: &StateOf<Self>) -> Outcome {
        if *state.board() == 0 {
            Outcome::Loss
        } else {
            Outcome::Ongoing
        }
    }

    fn display(&self, state: &StateOf<Self>) -> String {
        format!("pile: {}", state.board())
    }
}

/// A game whose rules claim the position is undecided but offer no moves.
pub struct StuckGame;

impl Game for StuckGame {
    type Board = u8;

    fn initial_board(&self) -> Self::Board {
        0
    }

    fn get_moves(&self, _state: &StateOf<Self>) -> Vec<StateOf<Self>> {
        Vec::new()
    }

    fn perspective_change(&self, state: &StateOf<Self>) -> StateOf<Self> {
        state.clone()
    }

    fn evaluate(&self, _state: &StateOf<Self>) -> Outcome {
        Outcome::Ongoing
    }

    fn display(&self, _state: &StateOf<Self>) -> String {
        String::new()
    }
}
