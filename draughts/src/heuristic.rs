use engine::StateOf;

use super::{count_pieces, Engine};

/// Material balance for the side to move, in `[-1, 1]`. Kings count the same as men.
pub fn piece_count_heuristic(state: &StateOf<Engine>) -> f32 {
    let (allies, enemies) = count_pieces(state.board());
    let total = allies + enemies;

    if total == 0 {
        return 0.0;
    }

    (allies as f32 - enemies as f32) / total as f32
}
