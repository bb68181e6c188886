use std::sync::Arc;

use crate::{GameState, Outcome};

pub type StateOf<G> = GameState<<G as Game>::Board>;

/// Rules of a two player, alternating turn, zero sum game.
///
/// Every position is judged from the point of view of the canonical "ally" side of its board.
/// `perspective_change` swaps which side that is. Search engines flip each successor before
/// looking at it, so evaluation is always done for the side about to move and a single
/// `evaluate` serves both players.
pub trait Game: Sized {
    type Board: Clone + std::fmt::Debug;

    fn initial_board(&self) -> Self::Board;

    fn new_game(&self, players: Arc<[String]>) -> StateOf<Self> {
        GameState::new(players, self.initial_board())
    }

    /// All states reachable by one legal move of the ally side. The order must be the same every
    /// time the same state is passed in. Successor boards are still labeled from the mover's
    /// point of view.
    fn get_moves(&self, state: &StateOf<Self>) -> Vec<StateOf<Self>>;

    /// Relabels the board so the other side is the ally. Applying it twice is the identity.
    fn perspective_change(&self, state: &StateOf<Self>) -> StateOf<Self>;

    /// `Outcome::Ongoing` unless the game is decided, otherwise the result for the ally side.
    fn evaluate(&self, state: &StateOf<Self>) -> Outcome;

    fn display(&self, state: &StateOf<Self>) -> String;
}
