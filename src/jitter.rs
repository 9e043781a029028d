//! Bounded random perturbation of scalar values.
//!
//! The random source is passed in explicitly so a run can be replayed from a
//! seed, and so tests can feed a fixed sequence of draws.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Calibrates the `[0, 10]` strength scale to the `[0, 1]` channel range.
pub const JITTER_SCALE: f64 = 0.1;

/// A source of uniformly distributed numbers in `[0, 1)`.
pub trait UniformSource {
    fn next_uniform(&mut self) -> f64;
}

impl<S: UniformSource + ?Sized> UniformSource for &mut S {
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}

/// Uniform source backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R = StdRng> {
    rng: R,
}

impl RngSource<StdRng> {
    /// Reproducible source: the same seed always yields the same draws.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Source seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> UniformSource for RngSource<R> {
    fn next_uniform(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Replays a fixed list of draws, then repeats the last one.
///
/// An empty sequence yields `0.5` forever, which makes every jitter a no-op.
#[derive(Debug, Clone, Default)]
pub struct SequenceSource {
    values: VecDeque<f64>,
    last: Option<f64>,
    drawn: usize,
}

impl SequenceSource {
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            values: values.into_iter().collect(),
            last: None,
            drawn: 0,
        }
    }

    /// Number of values handed out so far.
    pub fn drawn(&self) -> usize {
        self.drawn
    }
}

impl UniformSource for SequenceSource {
    fn next_uniform(&mut self) -> f64 {
        self.drawn += 1;
        if let Some(v) = self.values.pop_front() {
            self.last = Some(v);
        }
        self.last.unwrap_or(0.5)
    }
}

/// Randomly move `value` by an amount governed by `strength`, then clamp
/// the result into `[min, max]`.
///
/// Always consumes exactly two draws from `source`. With `strength == 0.0`
/// the value comes back unchanged. The lower bound is applied first, so
/// inverted bounds resolve to `max` instead of panicking.
pub fn jitter<S: UniformSource + ?Sized>(
    source: &mut S,
    value: f64,
    strength: f64,
    min: f64,
    max: f64,
) -> f64 {
    let direction = source.next_uniform() - 0.5;
    let magnitude = source.next_uniform() * strength * JITTER_SCALE;
    (value + direction * magnitude).max(min).min(max)
}
