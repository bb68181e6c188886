pub mod alphabeta;
#[cfg(test)]
mod subtraction_game;

pub use crate::alphabeta::*;
