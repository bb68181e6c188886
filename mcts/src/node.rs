use generational_arena::Index;

/// A position in the search tree.
///
/// `wins` is accumulated from the point of view of the side that moved into this node, so a
/// parent picks the child with the best ratio for itself. Draws add half a win.
#[derive(Debug)]
pub struct MctsNode<S> {
    state: S,
    plays: usize,
    wins: f32,
    children: Vec<Index>,
    parent: Option<Index>,
}

impl<S> MctsNode<S> {
    pub fn new_root(state: S) -> Self {
        Self::new(state, None)
    }

    pub fn new_child(state: S, parent: Index) -> Self {
        Self::new(state, Some(parent))
    }

    fn new(state: S, parent: Option<Index>) -> Self {
        Self {
            state,
            plays: 0,
            wins: 0.0,
            children: Vec::new(),
            parent,
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn plays(&self) -> usize {
        self.plays
    }

    pub fn wins(&self) -> f32 {
        self.wins
    }

    pub fn win_ratio(&self) -> f32 {
        win_ratio(self.wins, self.plays)
    }

    pub fn children(&self) -> &[Index] {
        &self.children
    }

    pub fn parent(&self) -> Option<Index> {
        self.parent
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Children are added once, a whole generation at a time.
    pub fn set_children(&mut self, children: Vec<Index>) {
        assert!(self.children.is_empty(), "Node has already been expanded");
        self.children = children;
    }

    pub fn record_playout(&mut self, value: f32) {
        self.plays += 1;
        self.wins += value;
    }
}

/// Average value per play, zero for an unvisited node.
pub(crate) fn win_ratio(wins: f32, plays: usize) -> f32 {
    if plays == 0 {
        0.0
    } else {
        wins / plays as f32
    }
}
