use log::debug;
use log::warn;

use super::Cutoff;
use crate::asserts::cutoff_assert_moderate;
use crate::asserts::cutoff_assert_simple;
use crate::basic_types::CutoffError;
use crate::math::binary_log;

/// The number of Luby values stored in [`LUBY_PREFIX`].
const NUM_PRECOMPUTED: u64 = 63;

/// The values `luby(1), ..., luby(63)`.
static LUBY_PREFIX: [u64; NUM_PRECOMPUTED as usize] = [
    1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4, 8, 1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4, 8, 16,
    1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4, 8, 1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4, 8, 16,
    32,
];

/// Computes the Luby value of `step` (which starts at 1).
///
/// For `step = 2^k - 1` the value is `2^(k - 1)`; any other step is mapped onto the
/// corresponding position in the previous, shorter, copy of the sequence:
/// `luby(step) = luby(step - 2^k + 1)` where `k = floor(log2(step))`. Since every such
/// reduction removes the highest set bit, at most 64 iterations are performed before the
/// precomputed prefix is reached.
pub(crate) fn luby(mut step: u64) -> u64 {
    cutoff_assert_simple!(step > 0, "The Luby sequence starts at step 1");

    loop {
        if step <= NUM_PRECOMPUTED {
            return LUBY_PREFIX[(step - 1) as usize];
        }

        let k = binary_log(step);
        // All bits up to and including the highest one are set, i.e. step = 2^(k + 1) - 1.
        if step.trailing_ones() == k + 1 {
            return 1 << k;
        }
        step -= (1 << k) - 1;
    }
}

/// The Luby sequence is a recursive sequence of the form:
/// 1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4, 8, 1, 1, 2....
/// The above sequence is multiplied with a given constant `scale`.
///
/// The first 63 values are read from a table, later ones are reduced onto the table by
/// [`luby`]. When `scale * luby(i)` does not fit in a `u64` the cutoff saturates at
/// [`u64::MAX`]; the step counter itself saturates at [`u64::MAX`] as well, after which the last
/// value is repeated.
#[allow(
    missing_copy_implementations,
    reason = "a copied generator would share its position with the original"
)]
#[derive(Debug)]
pub struct LubyCutoff {
    step: u64,
    scale: u64,
    has_saturated: bool,
}

impl LubyCutoff {
    pub fn new(scale: u64) -> Result<LubyCutoff, CutoffError> {
        if scale == 0 {
            return Err(CutoffError::ZeroScale);
        }

        debug!("Creating Luby cutoff sequence with scale {scale}");
        Ok(LubyCutoff {
            step: 1,
            scale,
            has_saturated: false,
        })
    }

    #[cfg(test)]
    fn starting_at(scale: u64, step: u64) -> LubyCutoff {
        LubyCutoff {
            step,
            ..LubyCutoff::new(scale).expect("valid scale")
        }
    }
}

impl Cutoff for LubyCutoff {
    fn next(&mut self) -> u64 {
        let luby_value = luby(self.step);
        cutoff_assert_moderate!(luby_value.is_power_of_two());

        let cutoff = match self.scale.checked_mul(luby_value) {
            Some(cutoff) => cutoff,
            None => {
                if !self.has_saturated {
                    warn!(
                        "The Luby cutoff at step {} exceeds the representable range, saturating at {}",
                        self.step,
                        u64::MAX
                    );
                    self.has_saturated = true;
                }
                u64::MAX
            }
        };

        self.step = self.step.saturating_add(1);
        cutoff
    }
}
