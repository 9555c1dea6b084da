/// Specifies the type of sequence which is used to generate the cutoffs of the search attempts.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum CutoffStrategy {
    /// Every search attempt receives the same cutoff.
    Constant,
    /// The cutoffs grow linearly: `base, 2 * base, 3 * base, ...`.
    Linear,
    /// Indicates that geometric restarts should be used.
    ///
    /// Given two constants `base` and `factor`, the `i`-th cutoff is `base * factor^(i - 1)`
    /// rounded to the nearest integer.
    Geometric,
    /// Indicates that Luby restarts \[1\] should be used.
    ///
    /// The Luby sequence is a recursive sequence of the form:
    /// 1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4, 8, 1, 1, 2....
    ///
    /// # Bibliography
    /// \[1\] M. Luby, A. Sinclair, and D. Zuckerman, ‘Optimal speedup of Las Vegas algorithms’,
    /// Information Processing Letters, vol. 47, no. 4, pp. 173–180, 1993.
    #[default]
    Luby,
    /// The cutoffs are drawn at random from a window which grows over time.
    Random,
}

impl std::fmt::Display for CutoffStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CutoffStrategy::Constant => write!(f, "constant"),
            CutoffStrategy::Linear => write!(f, "linear"),
            CutoffStrategy::Geometric => write!(f, "geometric"),
            CutoffStrategy::Luby => write!(f, "luby"),
            CutoffStrategy::Random => write!(f, "random"),
        }
    }
}
