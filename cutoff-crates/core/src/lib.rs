//! Generators for the cutoffs of a restarting search.
//!
//! A search engine which restarts periodically hands every search attempt a budget (for
//! example the number of failures it may encounter) before the attempt is abandoned and the
//! search restarts from the root. The sequence of these budgets is produced by a [`Cutoff`]:
//! - [`LubyCutoff`], the Luby sequence multiplied by a constant,
//! - [`GeometricCutoff`], a geometrically growing sequence,
//! - [`RandomCutoff`], random values from a window which grows over time,
//! - [`ConstantCutoff`] and [`LinearCutoff`], together with the combinators [`AppendCutoff`],
//!   [`MergeCutoff`] and [`RepeatCutoff`].
//!
//! The generators are created through the functions in [`cutoffs`], or from [`CutoffOptions`].
//!
//! ```rust
//! use cutoff_core::cutoffs;
//! use cutoff_core::Cutoff;
//!
//! let mut cutoff = cutoffs::luby(1).unwrap();
//! let values = (0..7).map(|_| cutoff.next()).collect::<Vec<_>>();
//! assert_eq!(values, vec![1, 1, 2, 1, 1, 2, 4]);
//! ```
pub(crate) mod basic_types;
pub(crate) mod math;

pub mod asserts;
pub mod cutoffs;
mod options;

pub use rand;
pub use rand_chacha;

pub use crate::basic_types::sequence_generators::*;
pub use crate::basic_types::CutoffError;
pub use crate::basic_types::Random;
pub use crate::options::CutoffOptions;
