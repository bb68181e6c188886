pub mod evaluate;

mod options;
mod play;

pub use evaluate::*;
pub use options::*;
pub use play::*;
