use anyhow::Result;

use crate::{Game, StateOf};

/// Anything that can pick a move: a search engine, a random mover or a person at a terminal.
pub trait Player<G: Game> {
    fn name(&self) -> &str;

    /// Returns an index into `moves`, which the caller produced with `game.get_moves(state)`.
    /// The index must be less than `moves.len()`.
    fn select_move(&mut self, game: &G, state: &StateOf<G>, moves: &[StateOf<G>]) -> Result<usize>;
}
