use alphabeta::AlphaBetaPlayer;
use common::create_rng;
use engine::{Game, Player, RandomPlayer, StateOf};
use mcts::{MctsOptions, MctsPlayer};

use super::human::HumanPlayer;
use super::options::{PlayerKind, PlayerOptions};

pub fn create_player<G>(options: &PlayerOptions, heuristic: fn(&StateOf<G>) -> f32) -> Box<dyn Player<G>>
where
    G: Game + 'static,
{
    let name = options.name.clone();

    match options.kind {
        PlayerKind::Random => Box::new(RandomPlayer::with_name(name, create_rng(options.seed))),
        PlayerKind::AlphaBeta => Box::new(AlphaBetaPlayer::with_name(name, options.depth, heuristic)),
        PlayerKind::Mcts => {
            let mcts_options = MctsOptions::new(options.time_limit, options.max_playout_depth)
                .with_exploration(options.exploration);

            Box::new(MctsPlayer::with_name(name, mcts_options, create_rng(options.seed)))
        }
        PlayerKind::Human => Box::new(HumanPlayer::stdio(name)),
    }
}
