use std::fmt::Debug;

/// A stream of cutoffs, the budgets which a search engine hands to successive search attempts
/// before it abandons an attempt and restarts from the root.
///
/// Every call to [`Cutoff::next`] advances the position in the sequence by exactly one step;
/// there is no way to revisit a value which has been consumed. A fresh sequence requires a fresh
/// generator, which is why none of the implementations are [`Clone`].
pub trait Cutoff: Debug {
    /// Returns the next cutoff and advances the sequence.
    fn next(&mut self) -> u64;
}

impl<C: Cutoff + ?Sized> Cutoff for Box<C> {
    fn next(&mut self) -> u64 {
        (**self).next()
    }
}
