use thiserror::Error;

/// The errors which can occur when constructing a [`Cutoff`](crate::Cutoff).
///
/// Only construction can fail; a generator which has been created successfully produces a value
/// on every call to [`Cutoff::next`](crate::Cutoff::next).
#[derive(Error, Debug, Copy, Clone, PartialEq)]
pub enum CutoffError {
    #[error("The scale of the cutoff sequence should be positive, but it was 0")]
    ZeroScale,
    #[error("The growth factor of the geometric sequence should be finite and positive, but it was {0}")]
    InvalidGrowthFactor(f64),
    #[error("The minimum cutoff ({min}) is larger than the maximum cutoff ({max})")]
    EmptyRange { min: u64, max: u64 },
    #[error("Every cutoff value should be repeated at least once, but 0 repetitions were requested")]
    ZeroRepetitions,
}
