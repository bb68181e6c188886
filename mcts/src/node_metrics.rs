use super::node::win_ratio;

#[derive(Clone, Debug, PartialEq)]
pub struct NodeMetrics {
    pub plays: usize,
    pub wins: f32,
    pub children: Vec<ChildMetrics>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChildMetrics {
    pub plays: usize,
    pub wins: f32,
}

impl ChildMetrics {
    pub fn win_ratio(&self) -> f32 {
        win_ratio(self.wins, self.plays)
    }
}
