use anyhow::{anyhow, Result};
use log::debug;

use engine::{Game, Player, StateOf};

/// Lower than any score or heuristic value, used to open the search window.
pub const WORST_VALUE: f32 = -2.0;

/// Fixed depth negamax search with alpha-beta pruning.
///
/// Every position is looked at from the side to move, so each level maximizes the negated value
/// of the perspective-changed successor. Terminal positions are scored by the game; positions at
/// the depth limit are scored by the heuristic, which must return a value in `[-1, 1]` for the
/// side to move.
pub struct AlphaBetaPlayer<H> {
    name: String,
    depth: usize,
    heuristic: H,
}

impl<H> AlphaBetaPlayer<H> {
    pub fn new(depth: usize, heuristic: H) -> Self {
        Self::with_name("alphabeta", depth, heuristic)
    }

    pub fn with_name(name: impl Into<String>, depth: usize, heuristic: H) -> Self {
        Self {
            name: name.into(),
            depth,
            heuristic,
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Value of `state` for the side to move, searched with the full window.
    pub fn evaluate_position<G>(&self, game: &G, state: &StateOf<G>) -> Result<f32>
    where
        G: Game,
        H: Fn(&StateOf<G>) -> f32,
    {
        let mut search = Search::new(game, &self.heuristic, self.depth);
        search.negamax(state, 0, WORST_VALUE, -WORST_VALUE)
    }
}

impl<G, H> Player<G> for AlphaBetaPlayer<H>
where
    G: Game,
    H: Fn(&StateOf<G>) -> f32,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn select_move(&mut self, game: &G, _state: &StateOf<G>, moves: &[StateOf<G>]) -> Result<usize> {
        if moves.is_empty() {
            return Err(anyhow!("{} was asked to move without any legal moves", self.name));
        }

        if moves.len() == 1 {
            return Ok(0);
        }

        let mut search = Search::new(game, &self.heuristic, self.depth);
        let mut best_value = WORST_VALUE;
        let mut choice = 0;

        for (i, next_state) in moves.iter().enumerate() {
            let child = game.perspective_change(next_state);
            let value = -search.negamax(&child, 0, WORST_VALUE, -best_value)?;

            if value > best_value {
                best_value = value;
                choice = i;
            }
        }

        debug!(
            "{} chose move {} of {} with value {:.3} after visiting {} nodes",
            self.name,
            choice,
            moves.len(),
            best_value,
            search.nodes_visited
        );

        Ok(choice)
    }
}

struct Search<'a, G, H> {
    game: &'a G,
    heuristic: &'a H,
    max_depth: usize,
    nodes_visited: usize,
}

impl<'a, G, H> Search<'a, G, H>
where
    G: Game,
    H: Fn(&StateOf<G>) -> f32,
{
    fn new(game: &'a G, heuristic: &'a H, max_depth: usize) -> Self {
        Self {
            game,
            heuristic,
            max_depth,
            nodes_visited: 0,
        }
    }

    /// Value of `state` for its side to move. Stops at the first value of at least `beta`.
    fn negamax(&mut self, state: &StateOf<G>, depth: usize, alpha: f32, beta: f32) -> Result<f32> {
        let game = self.game;
        self.nodes_visited += 1;

        if let Some(score) = game.evaluate(state).score() {
            return Ok(score);
        }

        let moves = game.get_moves(state);

        match moves.as_slice() {
            [] => Err(anyhow!(
                "Position is ongoing but has no legal moves: {:?}",
                state.board()
            )),
            // Forced replies do not use up depth.
            [forced] => {
                let child = game.perspective_change(forced);
                Ok(-self.negamax(&child, depth, -beta, -alpha)?)
            }
            _ if depth == self.max_depth => Ok((self.heuristic)(state)),
            _ => {
                let mut alpha = alpha;
                let mut best_value = WORST_VALUE;

                for next_state in &moves {
                    let child = game.perspective_change(next_state);
                    let value = -self.negamax(&child, depth + 1, -beta, -alpha)?;

                    best_value = best_value.max(value);
                    alpha = alpha.max(value);

                    if best_value >= beta {
                        break;
                    }
                }

                Ok(best_value)
            }
        }
    }
}
