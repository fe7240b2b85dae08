use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the illustrative randomness behind scores and placeholder lines.
#[cfg_attr(test, mockall::automock)]
pub trait RandomSource {
    /// Uniform integer in `low..=high`.
    fn next_in_range(&mut self, low: u32, high: u32) -> u32;
}

pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        rand::thread_rng().gen_range(low..=high)
    }
}

/// Reproducible generator for demos and tests.
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        self.rng.gen_range(low..=high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_random_is_reproducible() {
        let mut a = SeededRandom::new(7);
        let mut b = SeededRandom::new(7);
        let left: Vec<u32> = (0..20).map(|_| a.next_in_range(1, 100)).collect();
        let right: Vec<u32> = (0..20).map(|_| b.next_in_range(1, 100)).collect();
        assert_eq!(left, right);
        assert!(left.iter().all(|v| (1..=100).contains(v)));
    }

    #[test]
    fn test_degenerate_range() {
        assert_eq!(ThreadRandom.next_in_range(5, 5), 5);
    }
}
