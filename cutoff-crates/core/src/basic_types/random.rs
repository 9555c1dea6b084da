use std::fmt::Debug;
use std::ops::RangeInclusive;

use rand::Rng;
use rand::SeedableRng;

#[cfg(doc)]
use crate::RandomCutoff;

/// Abstraction for randomness, in order to swap out different sources of randomness.
///
/// The [`RandomCutoff`] draws its values through this trait, which allows tests to control
/// exactly which values are generated.
///
/// # Testing
/// There is an implementation of this trait which takes as input a list of `u64`s and returns
/// them in that order, while checking that each of them lies in the requested range.
pub trait Random: Debug {
    /// Generates a random `u64` in the provided range with equal probability; this can be seen
    /// as sampling from a uniform distribution over `[range.start(), range.end()]`.
    ///
    /// # Example
    /// ```rust
    /// # use cutoff_core::rand::SeedableRng;
    /// # use cutoff_core::rand_chacha::ChaCha8Rng;
    /// # use cutoff_core::Random;
    /// let mut rng = ChaCha8Rng::seed_from_u64(42);
    /// let value = rng.generate_u64_in_range(10..=20);
    /// assert!((10..=20).contains(&value));
    /// ```
    fn generate_u64_in_range(&mut self, range: RangeInclusive<u64>) -> u64;
}

// Any "regular" seedable generator can be used where an implementation of `Random` is expected.
// Sampling is only ever done over `u64` ranges so that the drawn values do not depend on the
// pointer width of the platform.
impl<T> Random for T
where
    T: SeedableRng + Rng + Debug,
{
    fn generate_u64_in_range(&mut self, range: RangeInclusive<u64>) -> u64 {
        self.gen_range(range)
    }
}
