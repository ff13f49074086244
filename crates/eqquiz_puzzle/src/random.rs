//! Random Draws for Puzzle Generation
//!
//! Every generator takes its randomness through [`RandomSource`] instead of a
//! process-wide generator, so a seeded RNG (or a [`ScriptedSource`]) makes a
//! round fully reproducible.

use rand::Rng;

use crate::equalization::GAIN_LEVELS;

/// Source of uniform draws consumed by the generators
pub trait RandomSource {
    /// Uniform integer in `[0, bound)`. `bound` is never zero.
    fn below(&mut self, bound: usize) -> usize;

    /// Uniform pick from [`GAIN_LEVELS`]
    fn gain_level(&mut self) -> i32 {
        GAIN_LEVELS[self.below(GAIN_LEVELS.len())]
    }

    /// True with probability `1/n`
    fn one_in(&mut self, n: usize) -> bool {
        self.below(n) == 0
    }

    /// Uniform random permutation (Fisher-Yates)
    fn shuffle<T>(&mut self, items: &mut [T])
    where
        Self: Sized,
    {
        for i in (1..items.len()).rev() {
            let j = self.below(i + 1);
            items.swap(i, j);
        }
    }
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn below(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }
}

/// Replays a fixed, cyclic sequence of draws
///
/// Each draw is reduced modulo the requested bound, so any script is valid.
/// An empty script always draws zero.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    draws: Vec<usize>,
    cursor: usize,
}

impl ScriptedSource {
    pub fn new(draws: &[usize]) -> Self {
        Self {
            draws: draws.to_vec(),
            cursor: 0,
        }
    }

    /// Number of draws consumed so far
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedSource {
    fn below(&mut self, bound: usize) -> usize {
        let draw = if self.draws.is_empty() {
            0
        } else {
            self.draws[self.cursor % self.draws.len()]
        };
        self.cursor += 1;
        draw % bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_scripted_source_cycles() {
        let mut source = ScriptedSource::new(&[3, 2, 1]);
        assert_eq!(source.below(10), 3);
        assert_eq!(source.below(10), 2);
        assert_eq!(source.below(10), 1);
        assert_eq!(source.below(10), 3);
        assert_eq!(source.consumed(), 4);
    }

    #[test]
    fn test_scripted_source_wraps_to_bound() {
        let mut source = ScriptedSource::new(&[7]);
        assert_eq!(source.below(3), 1);
        assert_eq!(source.gain_level(), GAIN_LEVELS[1]);
    }

    #[test]
    fn test_empty_script_draws_zero() {
        let mut source = ScriptedSource::default();
        assert_eq!(source.below(5), 0);
        assert!(source.one_in(16));
    }

    #[test]
    fn test_rng_draws_stay_in_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..1000 {
            assert!(rng.below(10) < 10);
            assert!(GAIN_LEVELS.contains(&rng.gain_level()));
        }
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut items = [0, 1, 2, 3];
        rng.shuffle(&mut items);

        let mut sorted = items;
        sorted.sort_unstable();
        assert_eq!(sorted, [0, 1, 2, 3]);
    }

    #[test]
    fn test_shuffle_reaches_every_position() {
        // The last element must be able to land in any slot
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut seen = [0usize; 4];
        for _ in 0..4000 {
            let mut items = [0, 0, 0, 1];
            rng.shuffle(&mut items);
            let slot = items.iter().position(|&x| x == 1).unwrap();
            seen[slot] += 1;
        }
        for count in seen {
            assert!(count > 800, "shuffle looks biased: {seen:?}");
        }
    }

    #[test]
    fn test_scripted_shuffle_is_deterministic() {
        // Draws 0,0,0: swap(3,0), swap(2,0), swap(1,0)
        let mut source = ScriptedSource::new(&[0]);
        let mut items = ['a', 'b', 'c', 'd'];
        source.shuffle(&mut items);
        assert_eq!(items, ['b', 'c', 'd', 'a']);
    }
}
