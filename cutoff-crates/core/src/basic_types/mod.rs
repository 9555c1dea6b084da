mod cutoff_error;
mod random;
pub(crate) mod sequence_generators;

pub use cutoff_error::CutoffError;
pub use random::Random;
#[cfg(test)]
pub(crate) use random::tests::TestRandom;
