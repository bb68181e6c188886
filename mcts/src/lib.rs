pub mod mcts;
#[cfg(test)]
mod mcts_tests;
mod node;
pub mod node_metrics;
pub mod options;
pub mod player;
pub mod uct;

pub use mcts::*;
pub use node::*;
pub use node_metrics::*;
pub use options::*;
pub use player::*;
pub use uct::*;
