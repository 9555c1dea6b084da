use log::debug;

use super::Cutoff;

/// A sequence which hands every search attempt the same cutoff.
#[allow(
    missing_copy_implementations,
    reason = "a copied generator would share its position with the original"
)]
#[derive(Debug)]
pub struct ConstantCutoff {
    value: u64,
}

impl ConstantCutoff {
    pub fn new(value: u64) -> ConstantCutoff {
        debug!("Creating constant cutoff sequence with value {value}");
        ConstantCutoff { value }
    }
}

impl Cutoff for ConstantCutoff {
    fn next(&mut self) -> u64 {
        self.value
    }
}
