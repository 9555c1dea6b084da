use log::debug;
use log::warn;

use super::Cutoff;
use crate::basic_types::CutoffError;

/// A sequence which grows by the same amount every step: `scale, 2 * scale, 3 * scale, ...`.
///
/// Saturates at [`u64::MAX`].
#[allow(
    missing_copy_implementations,
    reason = "a copied generator would share its position with the original"
)]
#[derive(Debug)]
pub struct LinearCutoff {
    current_value: u64,
    scale: u64,
}

impl LinearCutoff {
    pub fn new(scale: u64) -> Result<LinearCutoff, CutoffError> {
        if scale == 0 {
            return Err(CutoffError::ZeroScale);
        }

        debug!("Creating linear cutoff sequence with scale {scale}");
        Ok(LinearCutoff {
            current_value: 0,
            scale,
        })
    }
}

impl Cutoff for LinearCutoff {
    fn next(&mut self) -> u64 {
        if self.current_value == u64::MAX {
            return u64::MAX;
        }

        self.current_value = match self.current_value.checked_add(self.scale) {
            Some(next_value) => next_value,
            None => {
                warn!(
                    "The linear cutoff exceeds the representable range, saturating at {}",
                    u64::MAX
                );
                u64::MAX
            }
        };
        self.current_value
    }
}

#[cfg(test)]
mod tests {
    use super::LinearCutoff;
    use crate::Cutoff;
    use crate::CutoffError;

    #[test]
    fn grows_by_scale() {
        let mut linear_cutoff = LinearCutoff::new(25).unwrap();
        for i in 1..=1000 {
            assert_eq!(linear_cutoff.next(), 25 * i);
        }
    }

    #[test]
    fn saturates_instead_of_wrapping() {
        let mut linear_cutoff = LinearCutoff::new(u64::MAX / 3 + 1).unwrap();
        assert_eq!(linear_cutoff.next(), u64::MAX / 3 + 1);
        assert_eq!(linear_cutoff.next(), 2 * (u64::MAX / 3 + 1));
        for _ in 0..10 {
            assert_eq!(linear_cutoff.next(), u64::MAX);
        }
    }

    #[test]
    fn zero_scale_is_rejected() {
        assert_eq!(LinearCutoff::new(0).unwrap_err(), CutoffError::ZeroScale);
    }
}
