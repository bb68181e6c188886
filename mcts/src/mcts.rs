use anyhow::{anyhow, Result};
use engine::{Game, StateOf};
use generational_arena::{Arena, Index};
use rand::seq::SliceRandom;
use rand::Rng;
use std::time::{Duration, Instant};

use super::node::MctsNode;
use super::node_metrics::{ChildMetrics, NodeMetrics};
use super::options::MctsOptions;
use super::uct::{select_best, Selection};

/// Value of a playout that reached the depth cap before the game was decided.
const UNDECIDED_VALUE: f32 = 0.5;

/// A single search tree rooted at the position being decided.
///
/// Every node stores its state perspective-changed so that the side to move is the canonical
/// ally. The children of the root therefore line up index for index with `get_moves(root)`.
pub struct Mcts<'a, G: Game, R> {
    game: &'a G,
    options: &'a MctsOptions,
    rng: &'a mut R,
    arena: Arena<MctsNode<StateOf<G>>>,
    root: Index,
    capped_playouts: usize,
}

impl<'a, G, R> Mcts<'a, G, R>
where
    G: Game,
    R: Rng,
{
    /// Creates the tree and expands the root, so every root child has been played at least once.
    pub fn new(game: &'a G, state: StateOf<G>, options: &'a MctsOptions, rng: &'a mut R) -> Result<Self> {
        let mut arena = Arena::new();
        let root = arena.insert(MctsNode::new_root(state));

        let mut mcts = Self {
            game,
            options,
            rng,
            arena,
            root,
            capped_playouts: 0,
        };

        mcts.expand(root)?;

        Ok(mcts)
    }

    /// Runs selection and expansion until `duration` has elapsed. The check happens between
    /// iterations so the last one may run over. Returns the number of iterations performed.
    pub fn search_time(&mut self, duration: Duration) -> Result<usize> {
        let start = Instant::now();
        let mut iterations = 0;

        while start.elapsed() < duration {
            self.iterate()?;
            iterations += 1;
        }

        Ok(iterations)
    }

    pub fn search_iterations(&mut self, iterations: usize) -> Result<()> {
        for _ in 0..iterations {
            self.iterate()?;
        }

        Ok(())
    }

    /// Position of the root child with the best win ratio. Ties go to the earliest move.
    pub fn best_child(&self) -> Result<usize> {
        let root = &self.arena[self.root];
        let children = root
            .children()
            .iter()
            .map(|&index| (self.arena[index].wins(), self.arena[index].plays()));

        select_best(children, root.plays(), self.options.exploration(), Selection::Exploit)
            .ok_or_else(|| anyhow!("Root has no children to choose from"))
    }

    pub fn root_metrics(&self) -> NodeMetrics {
        let root = &self.arena[self.root];

        NodeMetrics {
            plays: root.plays(),
            wins: root.wins(),
            children: root
                .children()
                .iter()
                .map(|&index| ChildMetrics {
                    plays: self.arena[index].plays(),
                    wins: self.arena[index].wins(),
                })
                .collect(),
        }
    }

    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Number of playouts that were stopped by `max_playout_depth` before the game was decided.
    pub fn capped_playouts(&self) -> usize {
        self.capped_playouts
    }

    fn iterate(&mut self) -> Result<()> {
        let leaf = self.select_leaf();
        self.expand(leaf)
    }

    fn select_leaf(&self) -> Index {
        let exploration = self.options.exploration();
        let mut index = self.root;

        loop {
            let node = &self.arena[index];
            let children = node
                .children()
                .iter()
                .map(|&child| (self.arena[child].wins(), self.arena[child].plays()));

            match select_best(children, node.plays(), exploration, Selection::Explore) {
                Some(position) => index = node.children()[position],
                None => return index,
            }
        }
    }

    /// Adds a child per legal move of `index` and plays each one out once. A decided position
    /// has no moves, so it is played out again instead.
    fn expand(&mut self, index: Index) -> Result<()> {
        let state = self.arena[index].state().clone();

        if self.game.evaluate(&state).is_terminal() {
            let value = self.playout(&state)?;
            self.backpropagate(index, value);
            return Ok(());
        }

        let moves = self.game.get_moves(&state);
        if moves.is_empty() {
            return Err(anyhow!(
                "Ongoing position has no legal moves: {:?}",
                state.board()
            ));
        }

        let children = moves
            .iter()
            .map(|successor| {
                let state = self.game.perspective_change(successor);
                self.arena.insert(MctsNode::new_child(state, index))
            })
            .collect::<Vec<_>>();

        self.arena[index].set_children(children.clone());

        for child in children {
            let state = self.arena[child].state().clone();
            let value = self.playout(&state)?;
            self.backpropagate(child, value);
        }

        Ok(())
    }

    /// Plays uniformly random moves from `state` and returns the result in `[0, 1]` for the side
    /// that moved into `state`.
    fn playout(&mut self, state: &StateOf<G>) -> Result<f32> {
        let max_depth = self.options.max_playout_depth();
        let mut state = state.clone();
        let mut mover_to_move = false;
        let mut depth = 0;

        let value = loop {
            if let Some(score) = self.game.evaluate(&state).score() {
                break (score + 1.0) / 2.0;
            }

            if max_depth.map_or(false, |max_depth| depth >= max_depth) {
                self.capped_playouts += 1;
                break UNDECIDED_VALUE;
            }

            let moves = self.game.get_moves(&state);
            let next = moves.choose(&mut *self.rng).ok_or_else(|| {
                anyhow!(
                    "Ongoing position has no legal moves: {:?}",
                    state.board()
                )
            })?;

            state = self.game.perspective_change(next);
            mover_to_move = !mover_to_move;
            depth += 1;
        };

        Ok(if mover_to_move { value } else { 1.0 - value })
    }

    fn backpropagate(&mut self, index: Index, value: f32) {
        let mut value = value;
        let mut index = Some(index);

        while let Some(current) = index {
            let node = &mut self.arena[current];
            node.record_playout(value);
            value = 1.0 - value;
            index = node.parent();
        }
    }
}
