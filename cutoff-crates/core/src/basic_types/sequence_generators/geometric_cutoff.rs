use log::debug;
use log::warn;

use super::Cutoff;
use crate::basic_types::CutoffError;

/// `2^64`, the smallest value which can no longer be represented as a `u64`.
const UNREPRESENTABLE: f64 = 18_446_744_073_709_551_616.0;

/// Given constants `base` and `scale`, the `k`-th element of a geometric sequence is
/// `base * scale^(k - 1)`, rounded to the nearest integer (halves are rounded up).
///
/// The unrounded running product is kept between calls and only the emitted value is rounded.
/// Rounding every intermediate value instead would make the sequence drift away from the
/// exponential curve whenever `scale` is not an integer.
///
/// The running product is an `f64`, so cutoffs above `2^53` are only as precise as the
/// floating point representation allows. Once the exact value reaches `2^64` the sequence
/// saturates: [`u64::MAX`] is returned from then on.
#[allow(
    missing_copy_implementations,
    reason = "a copied generator would share its position with the original"
)]
#[derive(Debug)]
pub struct GeometricCutoff {
    /// The base is emitted as is, since it may not be representable as an `f64`.
    base: Option<u64>,
    current_value: f64,
    scale: f64,
    has_saturated: bool,
}

impl GeometricCutoff {
    pub fn new(base: u64, scale: f64) -> Result<GeometricCutoff, CutoffError> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(CutoffError::InvalidGrowthFactor(scale));
        }

        debug!("Creating geometric cutoff sequence with base {base} and scale {scale}");
        Ok(GeometricCutoff {
            base: Some(base),
            current_value: base as f64,
            scale,
            has_saturated: false,
        })
    }
}

impl Cutoff for GeometricCutoff {
    fn next(&mut self) -> u64 {
        if let Some(base) = self.base.take() {
            self.current_value *= self.scale;
            return base;
        }

        if !self.has_saturated && self.current_value.round() >= UNREPRESENTABLE {
            warn!(
                "The geometric cutoff exceeds the representable range, saturating at {}",
                u64::MAX
            );
            self.has_saturated = true;
        }
        if self.has_saturated {
            return u64::MAX;
        }

        // `f64::round` rounds halves away from zero, which for non-negative values is rounding
        // halves up.
        let next_value = self.current_value.round() as u64;
        self.current_value *= self.scale;
        next_value
    }
}
