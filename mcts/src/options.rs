use std::time::Duration;

/// Exploration constant of the UCT formula.
pub const DEFAULT_EXPLORATION: f32 = 1.5;

#[derive(Clone, Debug)]
pub struct MctsOptions {
    pub(crate) time_limit: Duration,
    pub(crate) max_playout_depth: Option<usize>,
    pub(crate) exploration: f32,
}

impl MctsOptions {
    /// `time_limit` is the wall clock budget of one move decision. Playouts stop after
    /// `max_playout_depth` moves when set, otherwise they run until the game is decided.
    pub fn new(time_limit: Duration, max_playout_depth: Option<usize>) -> Self {
        MctsOptions {
            time_limit,
            max_playout_depth,
            exploration: DEFAULT_EXPLORATION,
        }
    }

    pub fn with_exploration(mut self, exploration: f32) -> Self {
        self.exploration = exploration;
        self
    }

    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }

    pub fn max_playout_depth(&self) -> Option<usize> {
        self.max_playout_depth
    }

    pub fn exploration(&self) -> f32 {
        self.exploration
    }
}
