//! Randomness used by enemy steering and spawn placement.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of the integer offsets the simulation jitters positions by.
pub trait RandomSource {
    /// Returns an integer in `[-half_span, half_span)`.
    fn jitter(&mut self, half_span: i32) -> i32;
}

/// PCG-backed source used during play
pub struct SeededSource {
    rng: Pcg32,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: Pcg32::from_os_rng(),
        }
    }
}

impl RandomSource for SeededSource {
    fn jitter(&mut self, half_span: i32) -> i32 {
        if half_span <= 0 {
            return 0;
        }
        self.rng.random_range(-half_span..half_span)
    }
}

/// Replays a fixed list of offsets, then yields zero forever.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    values: VecDeque<i32>,
}

impl ScriptedSource {
    pub fn new(values: impl IntoIterator<Item = i32>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomSource for ScriptedSource {
    fn jitter(&mut self, _half_span: i32) -> i32 {
        self.values.pop_front().unwrap_or(0)
    }
}
