pub mod engine;
pub mod piece;

pub use crate::engine::*;
pub use piece::*;
