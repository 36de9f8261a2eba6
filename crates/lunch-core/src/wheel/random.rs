use std::collections::VecDeque;

use rand::Rng;
use rand::rngs::ThreadRng;

/// Source of uniformly distributed integers for spins.
///
/// Spins draw twice per call: the chosen index, then the extra turns.
pub trait RandomSource {
    /// Returns a uniformly distributed integer in `[low, high]` (inclusive).
    fn next_in_range(&mut self, low: u32, high: u32) -> u32;
}

/// Production randomness backed by the thread-local RNG.
#[derive(Debug, Clone)]
pub struct ThreadRandom {
    rng: ThreadRng,
}

impl ThreadRandom {
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for ThreadRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for ThreadRandom {
    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        if high <= low {
            return low;
        }
        self.rng.random_range(low..=high)
    }
}

/// Deterministic source that replays queued values in order.
///
/// Values outside the requested range are clamped into it; once the queue
/// is drained every draw returns `low`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    values: VecDeque<u32>,
}

impl ScriptedRandom {
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Queues one spin: the chosen index followed by the extra turns.
    #[must_use]
    pub fn with_spin(mut self, index: u32, extra_turns: u32) -> Self {
        self.values.push_back(index);
        self.values.push_back(extra_turns);
        self
    }

    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        match self.values.pop_front() {
            Some(value) => value.clamp(low, high.max(low)),
            None => low,
        }
    }
}
