use anyhow::{anyhow, Result};
use rand::Rng;

use crate::{Game, Player, StateOf};

/// Picks uniformly among the legal moves.
pub struct RandomPlayer<R> {
    name: String,
    rng: R,
}

impl<R: Rng> RandomPlayer<R> {
    pub fn new(rng: R) -> Self {
        Self::with_name("random", rng)
    }

    pub fn with_name(name: impl Into<String>, rng: R) -> Self {
        Self {
            name: name.into(),
            rng,
        }
    }
}

impl<G: Game, R: Rng> Player<G> for RandomPlayer<R> {
    fn name(&self) -> &str {
        &self.name
    }

    fn select_move(&mut self, _game: &G, _state: &StateOf<G>, moves: &[StateOf<G>]) -> Result<usize> {
        if moves.is_empty() {
            return Err(anyhow!("{} was asked to move without any legal moves", self.name));
        }

        Ok(self.rng.gen_range(0..moves.len()))
    }
}
