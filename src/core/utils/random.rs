//! Seeded random number generation shared by every stochastic hook.
//!
//! A single [`Random`] is owned by each processing run. Hooks never create
//! their own generators, so a run is reproducible from its seed alone.

use rand::rngs::StdRng;
use rand::seq::{index, SliceRandom};
use rand::{Rng, SeedableRng};

/// A wrapper for the random generator owned by a processing run
#[derive(Debug, Clone)]
pub struct Random {
    rng: StdRng,
}

impl Random {
    /// Constructor, with specific seed
    pub fn with_seed(seed: u64) -> Self {
        Random {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Sample `k` distinct indices from `[0, n)`, in random order.
    ///
    /// Returns all of `[0, n)` shuffled when `k >= n`.
    pub fn sample(&mut self, n: usize, k: usize) -> Vec<usize> {
        if k >= n {
            return self.permutation(n);
        }
        index::sample(&mut self.rng, n, k).into_vec()
    }

    /// Uniformly random permutation of `[0, n)`.
    pub fn permutation(&mut self, n: usize) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..n).collect();
        indices.shuffle(&mut self.rng);
        indices
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, values: &mut [T]) {
        values.shuffle(&mut self.rng);
    }

    /// Draw `count` seeds for independent child runs.
    pub fn derive_seeds(&mut self, count: usize) -> Vec<u64> {
        (0..count).map(|_| self.rng.gen::<u64>()).collect()
    }

    /// Generate a random u64
    pub fn next_u64(&mut self) -> u64 {
        self.rng.gen()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_random_with_seed() {
        let mut rng1 = Random::with_seed(123456789);
        let mut rng2 = Random::with_seed(123456789);

        assert_eq!(rng1.next_u64(), rng2.next_u64());
        assert_eq!(rng1.permutation(20), rng2.permutation(20));
        assert_eq!(rng1.sample(50, 7), rng2.sample(50, 7));
    }

    #[test]
    fn test_sample_edge_cases() {
        let mut rng = Random::with_seed(42);

        assert!(rng.sample(5, 0).is_empty());
        assert!(rng.sample(0, 3).is_empty());

        let mut all = rng.sample(5, 10);
        all.sort_unstable();
        assert_eq!(all, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_sample_normal_case() {
        let mut rng = Random::with_seed(42);
        let result = rng.sample(10, 3);

        assert_eq!(result.len(), 3);
        let mut unique_check = HashSet::new();
        for &val in &result {
            assert!(unique_check.insert(val));
            assert!(val < 10);
        }
    }

    #[test]
    fn test_permutation_is_complete() {
        let mut rng = Random::with_seed(7);
        let mut perm = rng.permutation(100);
        perm.sort_unstable();
        assert_eq!(perm, (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn test_derive_seeds_differ() {
        let mut rng = Random::with_seed(1);
        let seeds = rng.derive_seeds(8);
        let unique: HashSet<_> = seeds.iter().collect();
        assert_eq!(unique.len(), 8);
    }
}
