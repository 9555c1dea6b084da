//! Construction entry points for every cutoff strategy.
//!
//! Each function returns an opaque [`Box<dyn Cutoff>`] which is owned by the search engine for the
//! duration of a single search run. Parameters are validated here; an invalid combination is
//! reported as a [`CutoffError`] rather than being corrected silently.
use crate::AppendCutoff;
use crate::ConstantCutoff;
use crate::Cutoff;
use crate::CutoffError;
use crate::GeometricCutoff;
use crate::LinearCutoff;
use crate::LubyCutoff;
use crate::MergeCutoff;
use crate::RandomCutoff;
use crate::RepeatCutoff;

/// Creates a sequence which always returns `value`.
pub fn constant(value: u64) -> Box<dyn Cutoff> {
    Box::new(ConstantCutoff::new(value))
}

/// Creates the sequence `scale, 2 * scale, 3 * scale, ...`.
pub fn linear(scale: u64) -> Result<Box<dyn Cutoff>, CutoffError> {
    Ok(Box::new(LinearCutoff::new(scale)?))
}

/// Creates the sequence `base, base * scale, base * scale^2, ...`, see [`GeometricCutoff`].
pub fn geometric(base: u64, scale: f64) -> Result<Box<dyn Cutoff>, CutoffError> {
    Ok(Box::new(GeometricCutoff::new(base, scale)?))
}

/// Creates the Luby sequence multiplied by `scale`, see [`LubyCutoff`].
pub fn luby(scale: u64) -> Result<Box<dyn Cutoff>, CutoffError> {
    Ok(Box::new(LubyCutoff::new(scale)?))
}

/// Creates a random sequence with the floor `min`, see [`RandomCutoff`].
pub fn random(seed: u64, min: u64, max: u64, n: u64) -> Result<Box<dyn Cutoff>, CutoffError> {
    Ok(Box::new(RandomCutoff::new(seed, min, max, n)?))
}

/// Creates a sequence which takes `n` values from `first` and then continues with `second`.
pub fn append(first: Box<dyn Cutoff>, n: u64, second: Box<dyn Cutoff>) -> Box<dyn Cutoff> {
    Box::new(AppendCutoff::new(first, n, second))
}

/// Creates a sequence which alternates between `first` and `second`.
pub fn merge(first: Box<dyn Cutoff>, second: Box<dyn Cutoff>) -> Box<dyn Cutoff> {
    Box::new(MergeCutoff::new(first, second))
}

/// Creates a sequence which repeats every value of `cutoff` `n` times.
pub fn repeat(cutoff: Box<dyn Cutoff>, n: u64) -> Result<Box<dyn Cutoff>, CutoffError> {
    Ok(Box::new(RepeatCutoff::new(cutoff, n)?))
}
