mod board;
pub mod engine;
pub mod heuristic;
pub mod piece;

pub use board::*;
pub use crate::engine::*;
pub use heuristic::*;
pub use piece::*;
