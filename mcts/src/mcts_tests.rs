use super::mcts::Mcts;
use super::options::MctsOptions;
use super::player::MctsPlayer;
use assert_approx_eq::assert_approx_eq;
use engine::{players, Game, GameState, Outcome, Player, StateOf};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;
use tictactoe::{board_from_str, Engine};

/// Never decided and never able to move.
struct StuckGame;

impl Game for StuckGame {
    type Board = u8;

    fn initial_board(&self) -> u8 {
        0
    }

    fn get_moves(&self, _state: &StateOf<Self>) -> Vec<StateOf<Self>> {
        vec![]
    }

    fn perspective_change(&self, state: &StateOf<Self>) -> StateOf<Self> {
        state.clone()
    }

    fn evaluate(&self, _state: &StateOf<Self>) -> Outcome {
        Outcome::Ongoing
    }

    fn display(&self, state: &StateOf<Self>) -> String {
        state.board().to_string()
    }
}

/// One counter is taken per move. The side left facing an empty pile has lost.
struct TakeOneGame;

impl Game for TakeOneGame {
    type Board = u32;

    fn initial_board(&self) -> u32 {
        0
    }

    fn get_moves(&self, state: &StateOf<Self>) -> Vec<StateOf<Self>> {
        match *state.board() {
            0 => vec![],
            pile => vec![state.successor(pile - 1)],
        }
    }

    fn perspective_change(&self, state: &StateOf<Self>) -> StateOf<Self> {
        state.clone()
    }

    fn evaluate(&self, state: &StateOf<Self>) -> Outcome {
        if *state.board() == 0 {
            Outcome::Loss
        } else {
            Outcome::Ongoing
        }
    }

    fn display(&self, state: &StateOf<Self>) -> String {
        state.board().to_string()
    }
}

fn options() -> MctsOptions {
    MctsOptions::new(Duration::from_millis(50), None)
}

fn state(pattern: &str) -> StateOf<Engine> {
    GameState::new(players(["p1", "p2"]), board_from_str(pattern))
}

#[test]
fn test_root_children_are_seeded_with_one_playout() {
    let game = Engine::new();
    let options = options();
    let mut rng = StdRng::seed_from_u64(1);
    let mcts = Mcts::new(&game, state("........."), &options, &mut rng).unwrap();

    let metrics = mcts.root_metrics();

    assert_eq!(metrics.children.len(), 9);
    assert!(metrics.children.iter().all(|c| c.plays == 1));
    assert_eq!(metrics.plays, 9);
    assert_eq!(mcts.node_count(), 10);
}

#[test]
fn test_root_wins_mirror_children() {
    let game = Engine::new();
    let options = options();
    let mut rng = StdRng::seed_from_u64(2);
    let mcts = Mcts::new(&game, state("........."), &options, &mut rng).unwrap();

    let metrics = mcts.root_metrics();
    let child_losses: f32 = metrics.children.iter().map(|c| c.plays as f32 - c.wins).sum();

    assert_approx_eq!(metrics.wins, child_losses);
}

#[test]
fn test_win_and_draw_children_after_seeding() {
    // Empty cells are 2 and 5. Taking 5 completes the middle row, taking 2 lets the
    // opponent fill 5 for a draw.
    let game = Engine::new();
    let options = options();
    let mut rng = StdRng::seed_from_u64(3);
    let mcts = Mcts::new(&game, state("EE.AA.EAE"), &options, &mut rng).unwrap();

    let metrics = mcts.root_metrics();

    assert_eq!(metrics.plays, 2);
    assert_approx_eq!(metrics.wins, 0.5);
    assert_approx_eq!(metrics.children[0].wins, 0.5);
    assert_approx_eq!(metrics.children[1].wins, 1.0);
    assert_eq!(mcts.best_child().unwrap(), 1);
}

#[test]
fn test_terminal_child_keeps_accumulating() {
    let game = Engine::new();
    let options = options();
    let mut rng = StdRng::seed_from_u64(4);
    let mut mcts = Mcts::new(&game, state("EE.AA.EAE"), &options, &mut rng).unwrap();

    mcts.search_iterations(50).unwrap();

    let metrics = mcts.root_metrics();
    let winning = &metrics.children[1];
    let drawing = &metrics.children[0];

    assert_eq!(metrics.plays, 52);
    assert_eq!(winning.plays + drawing.plays, 52);
    assert!(winning.plays > drawing.plays);
    assert_approx_eq!(winning.wins, winning.plays as f32);
    assert_approx_eq!(drawing.wins, drawing.plays as f32 * 0.5);
}

#[test]
fn test_playout_value_is_for_side_that_moved_into_node() {
    // The side moving from an odd pile takes the last counter.
    let game = TakeOneGame;
    let options = options();

    for pile in 1..8u32 {
        let mut rng = StdRng::seed_from_u64(u64::from(pile));
        let state = GameState::new(players(["a", "b"]), pile);
        let mcts = Mcts::new(&game, state, &options, &mut rng).unwrap();

        let metrics = mcts.root_metrics();
        let expected = if pile % 2 == 1 { 1.0 } else { 0.0 };

        assert_eq!(metrics.children.len(), 1);
        assert_eq!(metrics.children[0].plays, 1);
        assert_approx_eq!(metrics.children[0].wins, expected);
        assert_approx_eq!(metrics.wins, 1.0 - expected);
    }
}

#[test]
fn test_capped_playouts_are_valued_as_draws() {
    let game = Engine::new();
    let options = MctsOptions::new(Duration::from_millis(50), Some(0));
    let mut rng = StdRng::seed_from_u64(5);
    let mcts = Mcts::new(&game, state("........."), &options, &mut rng).unwrap();

    let metrics = mcts.root_metrics();

    assert!(metrics.children.iter().all(|c| (c.wins - 0.5).abs() < f32::EPSILON));
    assert_eq!(mcts.capped_playouts(), 9);
}

#[test]
fn test_decided_playouts_are_not_capped() {
    let game = Engine::new();
    let options = MctsOptions::new(Duration::from_millis(50), Some(0));
    let mut rng = StdRng::seed_from_u64(6);
    let mcts = Mcts::new(&game, state("EE.AA.EAE"), &options, &mut rng).unwrap();

    let metrics = mcts.root_metrics();

    assert_approx_eq!(metrics.children[1].wins, 1.0);
    assert_eq!(mcts.capped_playouts(), 1);
}

#[test]
fn test_search_is_reproducible_with_seed() {
    let game = Engine::new();
    let options = options();
    let mut rng1 = StdRng::seed_from_u64(7);
    let mut rng2 = StdRng::seed_from_u64(7);
    let mut mcts1 = Mcts::new(&game, state("........."), &options, &mut rng1).unwrap();
    let mut mcts2 = Mcts::new(&game, state("........."), &options, &mut rng2).unwrap();

    mcts1.search_iterations(200).unwrap();
    mcts2.search_iterations(200).unwrap();

    assert_eq!(mcts1.root_metrics(), mcts2.root_metrics());
    assert_eq!(mcts1.best_child().unwrap(), mcts2.best_child().unwrap());
}

#[test]
fn test_search_iterations_add_root_plays() {
    let game = Engine::new();
    let options = options();
    let mut rng = StdRng::seed_from_u64(8);
    let mut mcts = Mcts::new(&game, state("........."), &options, &mut rng).unwrap();

    mcts.search_iterations(1).unwrap();
    let first = mcts.root_metrics().plays;

    mcts.search_iterations(1).unwrap();
    let second = mcts.root_metrics().plays;

    // The first selection expands one of the nine children into eight grandchildren.
    assert_eq!(first, 17);
    assert!(second > first);
}

#[test]
fn test_search_errors_on_ongoing_position_without_moves() {
    let game = StuckGame;
    let options = options();
    let mut rng = StdRng::seed_from_u64(9);

    let result = Mcts::new(&game, game.new_game(players(["a", "b"])), &options, &mut rng);

    assert!(result.is_err());
}

#[test]
fn test_player_picks_immediate_win() {
    let game = Engine::new();
    let state = state("AA.EE.E..");
    let moves = game.get_moves(&state);
    let mut player = MctsPlayer::new(
        MctsOptions::new(Duration::from_millis(100), None),
        StdRng::seed_from_u64(10),
    );

    let choice = player.select_move(&game, &state, &moves).unwrap();

    assert_eq!(choice, 0);
    assert_eq!(game.evaluate(&moves[choice]), Outcome::Win);
}

#[test]
fn test_player_with_zero_budget_returns_valid_index() {
    let game = Engine::new();
    let state = state(".........");
    let moves = game.get_moves(&state);
    let mut player = MctsPlayer::new(MctsOptions::new(Duration::ZERO, None), StdRng::seed_from_u64(12));

    let choice = player.select_move(&game, &state, &moves).unwrap();

    assert!(choice < moves.len());
}

#[test]
fn test_player_single_move_skips_search() {
    let game = StuckGame;
    let state = game.new_game(players(["a", "b"]));
    let moves = vec![state.successor(1)];
    let mut player = MctsPlayer::new(options(), StdRng::seed_from_u64(13));

    assert_eq!(player.select_move(&game, &state, &moves).unwrap(), 0);
}

#[test]
fn test_player_errors_without_moves() {
    let game = Engine::new();
    let state = state(".........");
    let mut player = MctsPlayer::new(options(), StdRng::seed_from_u64(14));

    assert!(player.select_move(&game, &state, &[]).is_err());
}

#[test]
fn test_player_errors_when_moves_do_not_match_state() {
    let game = Engine::new();
    let current = state("EE.AA.EAE");
    let moves = game.get_moves(&state("........."));
    let mut player = MctsPlayer::new(options(), StdRng::seed_from_u64(15));

    assert!(player.select_move(&game, &current, &moves).is_err());
}
