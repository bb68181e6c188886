/// How a child is scored when descending the tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    /// Win ratio plus an exploration bonus, used while searching.
    Explore,
    /// Win ratio only, used to pick the move to play.
    Exploit,
}

/// Upper Confidence Bound applied to trees. `plays` must be at least one, which holds for every
/// child since children are seeded with a playout when created.
pub fn uct(wins: f32, plays: usize, total_plays: usize, exploration: f32, selection: Selection) -> f32 {
    let plays = plays as f32;
    let win_ratio = wins / plays;

    match selection {
        Selection::Explore => win_ratio + (exploration * (total_plays as f32).ln() / plays).sqrt(),
        Selection::Exploit => win_ratio,
    }
}

/// Position of the child with the highest score. Ties go to the earliest child.
pub fn select_best<I>(children: I, total_plays: usize, exploration: f32, selection: Selection) -> Option<usize>
where
    I: IntoIterator<Item = (f32, usize)>,
{
    let mut best: Option<(usize, f32)> = None;

    for (position, (wins, plays)) in children.into_iter().enumerate() {
        let score = uct(wins, plays, total_plays, exploration, selection);

        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((position, score)),
        }
    }

    best.map(|(position, _)| position)
}
