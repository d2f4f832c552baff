//! Seeded random numbers for respawns and timer bonuses

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Owned, seedable generator; same seed, same run
#[derive(Debug, Clone)]
pub struct GameRng {
    seed: u64,
    rng: Pcg32,
}

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed this generator was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform float in [0, 1)
    pub fn unit(&mut self) -> f32 {
        self.rng.random::<f32>()
    }

    /// Uniform point strictly inside the disk of `radius` around the origin
    ///
    /// Rejection sampling over the bounding square keeps the density uniform
    /// over the area (no clustering at the center).
    pub fn disk(&mut self, radius: f32) -> Vec2 {
        loop {
            let p = Vec2::new(
                self.rng.random_range(-1.0..1.0),
                self.rng.random_range(-1.0..1.0),
            );
            if p.length_squared() < 1.0 {
                return p * radius;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);
        for _ in 0..100 {
            assert_eq!(a.unit(), b.unit());
            assert_eq!(a.disk(2.0), b.disk(2.0));
        }
        assert_eq!(a.seed(), 42);
    }

    #[test]
    fn test_unit_range() {
        let mut rng = GameRng::new(7);
        for _ in 0..10_000 {
            let u = rng.unit();
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn test_disk_uniform_area() {
        // For area-uniform points r²/R² is uniform in [0, 1)
        const DRAWS: usize = 10_000;
        const BINS: usize = 10;
        let radius = 2.0;
        let mut rng = GameRng::new(0xC4EE5E);
        let mut counts = [0usize; BINS];

        for _ in 0..DRAWS {
            let p = rng.disk(radius);
            let r2 = p.length_squared();
            assert!(r2 < radius * radius, "point {p} outside disk");
            let bin = ((r2 / (radius * radius)) * BINS as f32) as usize;
            counts[bin.min(BINS - 1)] += 1;
        }

        // Expected 1000 per bin, sd ~30; allow 5 sd
        for (bin, &count) in counts.iter().enumerate() {
            assert!(
                (850..=1150).contains(&count),
                "bin {bin} has {count} samples: {counts:?}"
            );
        }
    }

    proptest! {
        #[test]
        fn prop_disk_inside(seed in any::<u64>(), radius in 0.1f32..100.0) {
            let mut rng = GameRng::new(seed);
            for _ in 0..32 {
                let p = rng.disk(radius);
                prop_assert!(p.length_squared() < radius * radius * (1.0 + 1e-6));
            }
        }
    }
}
