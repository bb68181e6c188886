use log::debug;
use rand::prelude::{SeedableRng, StdRng};

/// Creates the generator handed to randomized players. A fixed seed gives reproducible games;
/// without one the generator is seeded from the operating system.
pub fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            debug!("Using seeded rng: {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    }
}
