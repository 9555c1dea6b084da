use crate::asserts::cutoff_assert_simple;

/// Returns the position of the most significant set bit of `value`, which is the same as
/// `floor(log2(value))`.
///
/// The value should be positive; there is no binary logarithm of 0.
pub(crate) fn binary_log(value: u64) -> u32 {
    cutoff_assert_simple!(value > 0, "The binary logarithm of 0 is undefined");
    u64::BITS - 1 - value.leading_zeros()
}
