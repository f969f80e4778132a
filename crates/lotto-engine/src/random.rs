use rand::rngs::StdRng;
use rand::{Rng as _, RngCore, SeedableRng as _};

use crate::{PICK_COUNT, PickSet, Rules};

/// Supplier of uniformly distributed integers.
///
/// Sources are infallible: they never run dry and never block.
pub trait RandomSource {
    /// Uniform integer in `lo..=hi`
    fn next_in_range(&mut self, lo: u32, hi: u32) -> u32;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn next_in_range(&mut self, lo: u32, hi: u32) -> u32 {
        (**self).next_in_range(lo, hi)
    }
}

impl<S: RandomSource + ?Sized> RandomSource for Box<S> {
    fn next_in_range(&mut self, lo: u32, hi: u32) -> u32 {
        (**self).next_in_range(lo, hi)
    }
}

/// Adapts any `rand` generator into a [`RandomSource`]
#[derive(Debug, Clone)]
pub struct RngSource<R>(R);

impl<R: RngCore> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl RngSource<StdRng> {
    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }

    /// Repeatable source, two sources with the same seed yield the same stream
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> RandomSource for RngSource<R> {
    fn next_in_range(&mut self, lo: u32, hi: u32) -> u32 {
        self.0.gen_range(lo..=hi)
    }
}

/// Draw until [`PICK_COUNT`] distinct numbers are collected
pub fn sample_rejection<S: RandomSource + ?Sized>(source: &mut S, rules: &Rules) -> PickSet {
    let mut numbers = Vec::with_capacity(PICK_COUNT);
    while numbers.len() < PICK_COUNT {
        let candidate = source.next_in_range(rules.min_number, rules.max_number);
        if !numbers.contains(&candidate) {
            numbers.push(candidate);
        }
    }
    PickSet::from(numbers)
}

/// Partial Fisher-Yates over the whole range, only the first [`PICK_COUNT`] slots are shuffled
pub fn sample_shuffle<S: RandomSource + ?Sized>(source: &mut S, rules: &Rules) -> PickSet {
    let mut pool: Vec<u32> = (rules.min_number..=rules.max_number).collect();
    let last = pool.len().saturating_sub(1) as u32;
    for i in 0..PICK_COUNT.min(pool.len()) {
        let j = source.next_in_range(i as u32, last) as usize;
        pool.swap(i, j);
    }
    pool.truncate(PICK_COUNT);
    PickSet::from(pool)
}
