pub mod game;
pub mod game_state;
pub mod outcome;
pub mod player;
pub mod random_player;

pub use crate::game::*;
pub use crate::game_state::*;
pub use crate::outcome::*;
pub use crate::player::*;
pub use crate::random_player::*;
