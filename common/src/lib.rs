pub mod config;
pub mod fs;
pub mod rng;

pub use config::*;
pub use fs::*;
pub use rng::*;
