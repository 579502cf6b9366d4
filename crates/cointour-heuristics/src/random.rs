use cointour_core::{CostMatrix, PathStrategy, Tour};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

/// Baseline strategy: a uniformly random visiting order.
///
/// Always valid, never inspects the costs. Successive calls on the same
/// value draw from the owned generator, so every call may return a
/// different tour.
pub struct RandomShuffle {
    rng: Xoshiro256PlusPlus,
}

impl RandomShuffle {
    /// Seed the generator from OS entropy.
    pub fn new() -> Self {
        RandomShuffle {
            rng: Xoshiro256PlusPlus::from_entropy(),
        }
    }

    /// Fixed seed, for reproducible tours in tests and sweeps.
    pub fn with_seed(seed: u64) -> Self {
        RandomShuffle {
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
        }
    }
}

impl Default for RandomShuffle {
    fn default() -> Self {
        Self::new()
    }
}

impl PathStrategy for RandomShuffle {
    fn name(&self) -> &'static str {
        "random"
    }

    fn plan(&mut self, matrix: &CostMatrix) -> Tour {
        let n = matrix.node_count();
        let mut interior: Vec<usize> = (1..n).collect();
        interior.shuffle(&mut self.rng);

        let mut stops = Vec::with_capacity(n + 1);
        stops.push(0);
        stops.extend(interior);
        stops.push(0);
        Tour::from_stops(stops)
    }
}
