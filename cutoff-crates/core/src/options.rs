use crate::cutoffs;
use crate::Cutoff;
use crate::CutoffError;
use crate::CutoffStrategy;

/// The options which are used to create the cutoff sequence of a search run.
///
/// These are typically filled in from the command line or a configuration file by the caller;
/// [`CutoffOptions::create`] validates them.
#[derive(Debug, Clone, Copy)]
pub struct CutoffOptions {
    /// Decides the sequence based on which the cutoffs are generated.
    /// To be used in combination with [`CutoffOptions::base`].
    pub strategy: CutoffStrategy,
    /// The base value of the sequence:
    /// - for [`CutoffStrategy::Constant`] it is the cutoff of every attempt
    /// - for [`CutoffStrategy::Linear`] it is the amount by which the cutoff grows
    /// - for [`CutoffStrategy::Geometric`] it is the first cutoff
    /// - for [`CutoffStrategy::Luby`] it is the multiplier of the sequence
    ///
    /// It is ignored for [`CutoffStrategy::Random`].
    pub base: u64,
    /// The coefficient in the geometric sequence `x_i = x_{i-1} * geometric_factor`. Used only if
    /// [`CutoffOptions::strategy`] is [`CutoffStrategy::Geometric`].
    pub geometric_factor: f64,
    /// The seed of the random sequence.
    pub seed: u64,
    /// The smallest cutoff of the random sequence.
    pub random_min: u64,
    /// The initial largest cutoff of the random sequence.
    pub random_max: u64,
    /// The number of distinct values in the window of the random sequence, which is also the
    /// number of draws before the window advances.
    pub random_window: u64,
}

impl Default for CutoffOptions {
    fn default() -> Self {
        Self {
            strategy: CutoffStrategy::Luby,
            base: 100,
            geometric_factor: 1.5,
            seed: 42,
            random_min: 100,
            random_max: 1000,
            random_window: 10,
        }
    }
}

impl CutoffOptions {
    /// Creates the cutoff sequence described by these options.
    pub fn create(&self) -> Result<Box<dyn Cutoff>, CutoffError> {
        match self.strategy {
            CutoffStrategy::Constant => Ok(cutoffs::constant(self.base)),
            CutoffStrategy::Linear => cutoffs::linear(self.base),
            CutoffStrategy::Geometric => cutoffs::geometric(self.base, self.geometric_factor),
            CutoffStrategy::Luby => cutoffs::luby(self.base),
            CutoffStrategy::Random => cutoffs::random(
                self.seed,
                self.random_min,
                self.random_max,
                self.random_window,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CutoffOptions;
    use crate::Cutoff;
    use crate::CutoffError;
    use crate::CutoffStrategy;

    #[test]
    fn default_is_luby_with_base_100() {
        let mut cutoff = CutoffOptions::default().create().unwrap();
        let values = (0..7).map(|_| cutoff.next()).collect::<Vec<_>>();
        assert_eq!(values, vec![100, 100, 200, 100, 100, 200, 400]);
    }

    #[test]
    fn geometric_uses_factor() {
        let options = CutoffOptions {
            strategy: CutoffStrategy::Geometric,
            base: 5,
            geometric_factor: 2.0,
            ..Default::default()
        };
        let mut cutoff = options.create().unwrap();
        let values = (0..5).map(|_| cutoff.next()).collect::<Vec<_>>();
        assert_eq!(values, vec![5, 10, 20, 40, 80]);
    }

    #[test]
    fn random_respects_minimum() {
        let options = CutoffOptions {
            strategy: CutoffStrategy::Random,
            ..Default::default()
        };
        let mut cutoff = options.create().unwrap();
        for _ in 0..1000 {
            assert!(cutoff.next() >= options.random_min);
        }
    }

    #[test]
    fn invalid_options_are_rejected() {
        let options = CutoffOptions {
            strategy: CutoffStrategy::Random,
            random_min: 10,
            random_max: 1,
            ..Default::default()
        };
        assert_eq!(
            options.create().unwrap_err(),
            CutoffError::EmptyRange { min: 10, max: 1 }
        );
    }

    #[test]
    fn strategies_display_lowercase() {
        assert_eq!(CutoffStrategy::Geometric.to_string(), "geometric");
        assert_eq!(CutoffStrategy::Luby.to_string(), "luby");
    }
}
