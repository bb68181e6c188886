use anyhow::{anyhow, Result};
use log::{debug, warn};
use rand::Rng;
use std::time::Instant;

use engine::{Game, Player, StateOf};

use super::mcts::Mcts;
use super::options::MctsOptions;

/// Builds a fresh tree for every decision and spends the configured time limit searching it.
pub struct MctsPlayer<R> {
    name: String,
    options: MctsOptions,
    rng: R,
}

impl<R: Rng> MctsPlayer<R> {
    pub fn new(options: MctsOptions, rng: R) -> Self {
        Self::with_name("mcts", options, rng)
    }

    pub fn with_name(name: impl Into<String>, options: MctsOptions, rng: R) -> Self {
        Self {
            name: name.into(),
            options,
            rng,
        }
    }

    pub fn options(&self) -> &MctsOptions {
        &self.options
    }
}

impl<G: Game, R: Rng> Player<G> for MctsPlayer<R> {
    fn name(&self) -> &str {
        &self.name
    }

    fn select_move(&mut self, game: &G, state: &StateOf<G>, moves: &[StateOf<G>]) -> Result<usize> {
        if moves.is_empty() {
            return Err(anyhow!("{} was asked to move without any legal moves", self.name));
        }

        if moves.len() == 1 {
            return Ok(0);
        }

        let start = Instant::now();
        let mut mcts = Mcts::new(game, state.clone(), &self.options, &mut self.rng)?;

        let root_children = mcts.root_metrics().children.len();
        if root_children != moves.len() {
            return Err(anyhow!(
                "Search found {} moves but {} were offered",
                root_children,
                moves.len()
            ));
        }

        let remaining = self.options.time_limit().saturating_sub(start.elapsed());
        let iterations = mcts.search_time(remaining)?;
        let choice = mcts.best_child()?;
        let metrics = mcts.root_metrics();

        debug!(
            "{} chose move {} of {}: iterations: {}, root plays: {}, nodes: {}, win ratio: {:.3}, elapsed: {:?}",
            self.name,
            choice,
            moves.len(),
            iterations,
            metrics.plays,
            mcts.node_count(),
            metrics.children[choice].win_ratio(),
            start.elapsed()
        );

        if mcts.capped_playouts() > 0 {
            warn!(
                "{}: {} playouts reached the depth limit undecided and were scored as draws",
                self.name,
                mcts.capped_playouts()
            );
        }

        Ok(choice)
    }
}
