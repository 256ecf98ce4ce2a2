//! Test RNG: deterministic `DeterministicRng` implementations for tests.

use qiyao_core::rng::DeterministicRng;

/// A no-op RNG that always returns `min` for `next_u32_range` and `0.0` for
/// `next_f64`.
///
/// Because `0.0 < 0.70`, every non-collision turn driven by this RNG opens
/// an opportunity.
#[derive(Debug)]
pub struct MockRng;

impl DeterministicRng for MockRng {
    fn next_u32_range(&mut self, min: u32, _max: u32) -> u32 {
        min
    }

    fn next_f64(&mut self) -> f64 {
        0.0
    }
}

/// An RNG that replays scripted values: integers for `next_u32_range` and
/// rolls for `next_f64`, each from its own queue. Panics if a queue is
/// exhausted.
#[derive(Debug, Default)]
pub struct SequenceRng {
    values: Vec<u32>,
    index: usize,
    rolls: Vec<f64>,
    roll_index: usize,
}

impl SequenceRng {
    /// Create a new `SequenceRng` with the given integer values.
    #[must_use]
    pub fn new(values: Vec<u32>) -> Self {
        Self {
            values,
            ..Self::default()
        }
    }

    /// Adds the `f64` rolls returned by `next_f64`, in order.
    #[must_use]
    pub fn with_rolls(mut self, rolls: Vec<f64>) -> Self {
        self.rolls = rolls;
        self
    }

    /// Number of `next_f64` calls made so far.
    #[must_use]
    pub fn rolls_taken(&self) -> usize {
        self.roll_index
    }
}

impl DeterministicRng for SequenceRng {
    fn next_u32_range(&mut self, _min: u32, _max: u32) -> u32 {
        let val = self.values[self.index];
        self.index += 1;
        val
    }

    fn next_f64(&mut self) -> f64 {
        let roll = self.rolls[self.roll_index];
        self.roll_index += 1;
        roll
    }
}
