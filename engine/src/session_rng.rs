use rand::distr::uniform::{SampleRange, SampleUniform};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seedable RNG used by one session. A fixed seed reproduces the exact
/// same board, which the fuzz tests and the CLI `--seed` flag rely on.
#[derive(Clone, Debug)]
pub struct SessionRng {
    rng: SmallRng,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn from_random() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: SampleUniform,
        R: SampleRange<T>,
    {
        self.rng.random_range(range)
    }

    /// Unbiased Fisher-Yates shuffle.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.random_range(0..=i);
            slice.swap(i, j);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_rng_is_deterministic() {
        let mut rng1 = SessionRng::new(42);
        let mut rng2 = SessionRng::new(42);
        for _ in 0..100 {
            assert_eq!(
                rng1.random_range(0..1000usize),
                rng2.random_range(0..1000usize)
            );
        }
    }

    #[test]
    fn test_shuffle_preserves_elements() {
        let mut rng = SessionRng::new(7);
        let mut values: Vec<u32> = (0..50).collect();
        rng.shuffle(&mut values);

        let mut sorted = values.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<u32>>());
    }

    #[test]
    fn test_shuffle_changes_order() {
        let mut rng = SessionRng::new(7);
        let original: Vec<u32> = (0..50).collect();
        let mut values = original.clone();
        rng.shuffle(&mut values);
        assert_ne!(values, original);
    }
}
