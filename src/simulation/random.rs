// src/simulation/random.rs

//! Sources of the fair coin flips consumed by random-outcome measurements.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Supplies one bit per random-outcome measurement.
///
/// The engine calls `next_bit` exactly once for each measurement whose
/// outcome is not fixed by the stabilizer group, and never otherwise.
pub trait BitSource {
    fn next_bit(&mut self) -> bool;
}

impl<B: BitSource + ?Sized> BitSource for &mut B {
    fn next_bit(&mut self) -> bool {
        (**self).next_bit()
    }
}

/// Fair bits drawn from a `rand` generator.
#[derive(Debug, Clone)]
pub struct RngBits<R = StdRng> {
    rng: R,
}

impl<R: Rng> RngBits<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngBits<StdRng> {
    /// Deterministic stream: the same seed always yields the same bits.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Stream seeded from operating-system entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> BitSource for RngBits<R> {
    fn next_bit(&mut self) -> bool {
        self.rng.random::<bool>()
    }
}

/// Always returns the same bit. Useful for forcing every random outcome to
/// a known branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedBits(pub bool);

impl BitSource for FixedBits {
    fn next_bit(&mut self) -> bool {
        self.0
    }
}

/// Replays a recorded list of bits, starting over once it runs out. An empty
/// list yields `false` forever.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitSequence {
    bits: Vec<bool>,
    cursor: usize,
}

impl BitSequence {
    pub fn new(bits: impl Into<Vec<bool>>) -> Self {
        Self { bits: bits.into(), cursor: 0 }
    }

    /// How many bits have been handed out so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl BitSource for BitSequence {
    fn next_bit(&mut self) -> bool {
        if self.bits.is_empty() {
            return false;
        }
        let bit = self.bits[self.cursor % self.bits.len()];
        self.cursor += 1;
        bit
    }
}
