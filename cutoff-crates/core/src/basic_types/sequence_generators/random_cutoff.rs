use log::debug;
use log::trace;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::Cutoff;
use crate::asserts::cutoff_assert_advanced;
use crate::asserts::cutoff_assert_simple;
use crate::basic_types::CutoffError;
use crate::basic_types::Random;

/// A sequence of cutoffs which are drawn at random from a window that grows over time.
///
/// The window consists of the values `min + step * j` for `j ∈ [0, reach]`, where
/// `step = max(1, (max - min) / n)` and initially `reach = min(n, (max - min) / step)`, so that the
/// first window never exceeds `max`; when `n` is 0 it is taken to be `max - min`. Every draw picks one of the values in the window uniformly at random. After
/// `max(n, 1)` draws the window is exhausted and it is advanced by increasing `reach` by one,
/// moving the ceiling of the window up by `step`. The floor `min` never moves, so no cutoff is
/// ever smaller than `min`.
///
/// The default source of randomness is [`ChaCha8Rng`], which produces the same stream for the same
/// seed on every platform.
#[derive(Debug)]
pub struct RandomCutoff<R: Random = ChaCha8Rng> {
    rng: R,
    min: u64,
    step: u64,
    reach: u64,
    draws_per_window: u64,
    draws_left_in_window: u64,
}

impl RandomCutoff<ChaCha8Rng> {
    pub fn new(seed: u64, min: u64, max: u64, n: u64) -> Result<Self, CutoffError> {
        RandomCutoff::with_random(ChaCha8Rng::seed_from_u64(seed), min, max, n)
    }
}

impl<R: Random> RandomCutoff<R> {
    /// Creates a random cutoff sequence which draws its values from the provided source of
    /// randomness rather than from a seeded [`ChaCha8Rng`].
    pub fn with_random(rng: R, min: u64, max: u64, n: u64) -> Result<Self, CutoffError> {
        if min > max {
            return Err(CutoffError::EmptyRange { min, max });
        }

        let n = if n == 0 { max - min } else { n };
        let step = if n == 0 { 1 } else { ((max - min) / n).max(1) };
        let reach = n.min((max - min) / step);
        let draws_per_window = n.max(1);

        debug!(
            "Creating random cutoff sequence with minimum {min}, maximum {max}, {n} values per window and step {step}"
        );
        Ok(RandomCutoff {
            rng,
            min,
            step,
            reach,
            draws_per_window,
            draws_left_in_window: draws_per_window,
        })
    }

    fn advance_window(&mut self) {
        let previous_ceiling = self.ceiling();
        self.reach = self.reach.saturating_add(1);
        cutoff_assert_advanced!(self.ceiling() >= previous_ceiling);

        self.draws_left_in_window = self.draws_per_window;
        trace!(
            "Advancing random cutoff window to [{}, {}]",
            self.min,
            self.ceiling()
        );
    }

    fn ceiling(&self) -> u64 {
        self.min.saturating_add(self.step.saturating_mul(self.reach))
    }
}

impl<R: Random> Cutoff for RandomCutoff<R> {
    fn next(&mut self) -> u64 {
        let offset = self.rng.generate_u64_in_range(0..=self.reach);
        let cutoff = self.min.saturating_add(self.step.saturating_mul(offset));
        cutoff_assert_simple!(
            cutoff >= self.min,
            "A random cutoff ({cutoff}) was generated below the minimum ({})",
            self.min
        );

        self.draws_left_in_window -= 1;
        if self.draws_left_in_window == 0 {
            self.advance_window();
        }

        cutoff
    }
}
