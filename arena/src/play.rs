use anyhow::{anyhow, Result};
use log::info;

use engine::{players, Game, Outcome, Player, StateOf};

/// Asks `player` for a move and returns the resulting state, perspective-changed so the next
/// side to move is the ally.
pub fn play_turn<G: Game>(game: &G, state: &StateOf<G>, player: &mut dyn Player<G>) -> Result<StateOf<G>> {
    let moves = game.get_moves(state);
    let index = player.select_move(game, state, &moves)?;

    let next = moves.get(index).ok_or_else(|| {
        anyhow!(
            "{} chose move {} but only {} moves were available",
            player.name(),
            index,
            moves.len()
        )
    })?;

    Ok(game.perspective_change(next))
}

/// Plays a new game to the end. `seats[0]` moves first. Returns the final state and its
/// outcome for the side to move in it.
pub fn play_game<G: Game>(game: &G, mut seats: [&mut dyn Player<G>; 2], view: bool) -> Result<(StateOf<G>, Outcome)> {
    let mut state = game.new_game(players([seats[0].name(), seats[1].name()]));

    loop {
        let outcome = game.evaluate(&state);
        if outcome.is_terminal() {
            return Ok((state, outcome));
        }

        if view {
            info!(
                "{} to move, ply {}\n{}",
                state.player_to_move(),
                state.ply(),
                game.display(&state)
            );
        }

        let player = &mut seats[state.turn()];
        state = play_turn(game, &state, &mut **player)?;
    }
}
