//! Pluggable randomness for tips and greetings.
//!
//! Every operation that picks something at random takes a `&dyn RandomSource`
//! so tests can pin the choice.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

pub trait RandomSource: Send + Sync {
    /// Uniform index in `0..len`. `len` is always non-zero at call sites.
    fn pick_index(&self, len: usize) -> usize;

    /// Uniform value in `[0, 1)`.
    fn unit(&self) -> f64;
}

/// Picks one element of a non-empty slice.
pub fn pick<'a, T>(rng: &dyn RandomSource, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.pick_index(items.len()).min(items.len() - 1))
}

/// Thread-local OS-seeded generator. Default for production use.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick_index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }

    fn unit(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Reproducible generator for demos and property-style tests.
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn pick_index(&self, len: usize) -> usize {
        match self.rng.lock() {
            Ok(mut rng) => rng.gen_range(0..len),
            Err(poisoned) => poisoned.into_inner().gen_range(0..len),
        }
    }

    fn unit(&self) -> f64 {
        match self.rng.lock() {
            Ok(mut rng) => rng.gen::<f64>(),
            Err(poisoned) => poisoned.into_inner().gen::<f64>(),
        }
    }
}

/// Always returns the same index (clamped) and the same unit value.
#[derive(Debug, Clone, Copy)]
pub struct FixedRandom {
    pub index: usize,
    pub unit: f64,
}

impl FixedRandom {
    pub fn new(index: usize, unit: f64) -> Self {
        Self { index, unit }
    }

    pub fn first() -> Self {
        Self::new(0, 0.0)
    }
}

impl RandomSource for FixedRandom {
    fn pick_index(&self, len: usize) -> usize {
        self.index.min(len.saturating_sub(1))
    }

    fn unit(&self) -> f64 {
        self.unit
    }
}
