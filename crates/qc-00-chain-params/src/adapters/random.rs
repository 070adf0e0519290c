//! Random Source Adapters

use rand::Rng;

use crate::ports::RandomSource;

/// Random source backed by the thread-local CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandomSource;

impl ThreadRandomSource {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for ThreadRandomSource {
    fn random_below(&self, bound: u64) -> u64 {
        if bound == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_stay_below_bound() {
        let rng = ThreadRandomSource::new();
        for _ in 0..1000 {
            assert!(rng.random_below(7) < 7);
        }
    }

    #[test]
    fn test_zero_and_one_bounds() {
        let rng = ThreadRandomSource::new();
        assert_eq!(rng.random_below(0), 0);
        assert_eq!(rng.random_below(1), 0);
    }
}
