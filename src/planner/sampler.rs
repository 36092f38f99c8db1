//! Randomness seam for candidate selection
//!
//! Planning picks rows uniformly at random. The source of randomness is
//! injected so callers can choose the thread RNG, a seeded RNG for
//! reproducible plans, or a scripted sequence in tests.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Uniform random selection over candidate indices
pub trait Sampler {
    /// Pick the index of one element out of `len` candidates.
    /// Returns `None` when there are no candidates.
    fn pick_index(&mut self, len: usize) -> Option<usize>;

    /// Pick distinct indices out of `len` candidates without replacement,
    /// in selection order. Yields `count.min(len)` indices.
    fn pick_distinct(&mut self, len: usize, count: usize) -> Vec<usize>;
}

/// Thread-RNG backed sampler used in production
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomSampler;

impl Sampler for RandomSampler {
    fn pick_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            None
        } else {
            Some(rand::rng().random_range(0..len))
        }
    }

    fn pick_distinct(&mut self, len: usize, count: usize) -> Vec<usize> {
        sample_indices(&mut rand::rng(), len, count)
    }
}

/// Seeded sampler for reproducible plans
#[derive(Debug, Clone)]
pub struct SeededSampler {
    rng: StdRng,
}

impl SeededSampler {
    /// Create a sampler whose picks are fully determined by `seed`
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Sampler for SeededSampler {
    fn pick_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            None
        } else {
            Some(self.rng.random_range(0..len))
        }
    }

    fn pick_distinct(&mut self, len: usize, count: usize) -> Vec<usize> {
        sample_indices(&mut self.rng, len, count)
    }
}

// Partial Fisher-Yates over an index vector. Only the first
// `count.min(len)` positions are shuffled before truncation.
fn sample_indices<R: Rng>(rng: &mut R, len: usize, count: usize) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..len).collect();
    let take = count.min(len);
    for i in 0..take {
        let j = rng.random_range(i..len);
        indices.swap(i, j);
    }
    indices.truncate(take);
    indices
}
