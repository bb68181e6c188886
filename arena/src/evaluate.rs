use anyhow::{anyhow, Result};
use log::info;
use serde::Serialize;
use std::time::Instant;

use engine::{Game, Player};

use super::{play_game, ArenaOptions};

#[derive(Clone, Debug, Serialize)]
pub struct MatchResult {
    pub player_names: Vec<String>,
    pub player_scores: Vec<f32>,
    pub num_of_games_played: usize,
}

/// Plays `options.num_games` games between the two players, alternating who moves first. A win
/// scores 1, a draw 0.5 and a loss 0.
pub fn play_matches<G: Game>(
    game: &G,
    player_one: &mut dyn Player<G>,
    player_two: &mut dyn Player<G>,
    options: &ArenaOptions,
) -> Result<MatchResult> {
    let starting_time = Instant::now();
    let player_names = vec![player_one.name().to_string(), player_two.name().to_string()];
    let mut player_scores = vec![0.0; 2];
    let mut num_of_games_played = 0;

    for game_num in 0..options.num_games {
        let swapped = game_num % 2 == 1;
        let seats: [&mut dyn Player<G>; 2] = if swapped {
            [&mut *player_two, &mut *player_one]
        } else {
            [&mut *player_one, &mut *player_two]
        };

        let (state, outcome) = play_game(game, seats, options.view)?;
        let score = outcome
            .score()
            .map(|score| (score + 1.0) / 2.0)
            .ok_or_else(|| anyhow!("Game ended without a result"))?;

        let player_to_move = if swapped { 1 - state.turn() } else { state.turn() };
        player_scores[player_to_move] += score;
        player_scores[1 - player_to_move] += 1.0 - score;
        num_of_games_played += 1;

        if options.view {
            info!("\n{}", game.display(&state));
        }

        info!(
            "Game {}: {} to move after {} plies, {}. Scores: {} {} - {} {}",
            num_of_games_played,
            state.player_to_move(),
            state.ply(),
            outcome,
            player_names[0],
            player_scores[0],
            player_scores[1],
            player_names[1]
        );
    }

    info!(
        "Played {} games in {:.2}s",
        num_of_games_played,
        starting_time.elapsed().as_secs_f32()
    );

    Ok(MatchResult {
        player_names,
        player_scores,
        num_of_games_played,
    })
}
