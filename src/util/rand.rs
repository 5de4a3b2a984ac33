// RustPixel - Worm
// copyright zipxing@hotmail.com 2022～2025

use rand::Rng;
use rand_xoshiro::{rand_core::SeedableRng, Xoshiro256StarStar};
use std::time::{SystemTime, UNIX_EPOCH};

/// Xoshiro256** wrapper, seedable so games can be replayed in tests
pub struct Rand {
    rng: Xoshiro256StarStar,
}

impl Default for Rand {
    fn default() -> Self {
        Rand::new()
    }
}

impl Rand {
    pub fn new() -> Self {
        Self {
            rng: Xoshiro256StarStar::seed_from_u64(0),
        }
    }

    pub fn srand(&mut self, seed: u64) {
        self.rng = Xoshiro256StarStar::seed_from_u64(seed);
    }

    pub fn srand_now(&mut self) {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default();
        self.srand(seed);
    }

    /// uniform in [0, n), n must be non-zero
    pub fn below(&mut self, n: u32) -> u32 {
        self.rng.random_range(0..n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = Rand::new();
        let mut b = Rand::new();
        a.srand(2024);
        b.srand(2024);
        for _ in 0..32 {
            assert_eq!(a.below(1000), b.below(1000));
        }
    }

    #[test]
    fn test_below_in_range() {
        let mut r = Rand::new();
        r.srand(7);
        let mut seen = [false; 40];
        for _ in 0..4000 {
            let v = r.below(40) as usize;
            assert!(v < 40);
            seen[v] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
