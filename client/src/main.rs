mod cli;
mod human;
mod options;
mod players;

use anyhow::Result;
use arena::{play_matches, ArenaOptions};
use clap::Parser;
use cli::{Cli, Commands};
use common::{ConfigLoader, FsExt};
use dotenv::dotenv;
use engine::{Game, StateOf};
use env_logger::Env;
use log::info;
use options::{DraughtsOptions, PlayerOptions};
use players::create_player;

fn main() -> Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Tictactoe(tictactoe_args) => {
            let config_path = tictactoe_args.config.relative_to_cwd()?;
            let config = ConfigLoader::new(config_path, "arena".to_string())?;

            let engine = tictactoe::Engine::new();

            run_matches(&engine, &config, no_heuristic::<tictactoe::Engine>)?
        }
        Commands::Draughts(draughts_args) => {
            let config_path = draughts_args.config.relative_to_cwd()?;
            let config = ConfigLoader::new(config_path, "arena".to_string())?;

            let draughts_options: DraughtsOptions = config.with_scope("draughts").load()?;
            let engine = draughts::Engine::new(draughts_options.max_ply);

            run_matches(&engine, &config, draughts::piece_count_heuristic)?
        }
    }

    Ok(())
}

fn run_matches<G: Game + 'static>(game: &G, config: &ConfigLoader, heuristic: fn(&StateOf<G>) -> f32) -> Result<()> {
    let arena_options: ArenaOptions = config.load()?;
    let player_one_options: PlayerOptions = config.with_scope("player_one").load()?;
    let player_two_options: PlayerOptions = config.with_scope("player_two").load()?;

    info!("Arena: {:?}", arena_options);
    info!("Player one: {:?}", player_one_options);
    info!("Player two: {:?}", player_two_options);

    let mut player_one = create_player::<G>(&player_one_options, heuristic);
    let mut player_two = create_player::<G>(&player_two_options, heuristic);

    let result = play_matches(game, &mut *player_one, &mut *player_two, &arena_options)?;

    info!(
        "Final scores: {} {} - {} {}",
        result.player_names[0], result.player_scores[0], result.player_scores[1], result.player_names[1]
    );

    info!("Match result: {}", serde_json::to_string(&result)?);

    Ok(())
}

/// Tic-tac-toe is small enough to search to the end, so positions at the depth limit are
/// treated as even.
fn no_heuristic<G: Game>(_: &StateOf<G>) -> f32 {
    0.0
}
