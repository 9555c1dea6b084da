mod append_cutoff;
mod constant_cutoff;
mod cutoff;
mod cutoff_strategy;
mod geometric_cutoff;
mod linear_cutoff;
mod luby_cutoff;
mod merge_cutoff;
mod random_cutoff;
mod repeat_cutoff;

pub use append_cutoff::AppendCutoff;
pub use constant_cutoff::ConstantCutoff;
pub use cutoff::Cutoff;
pub use cutoff_strategy::CutoffStrategy;
pub use geometric_cutoff::GeometricCutoff;
pub use linear_cutoff::LinearCutoff;
pub use luby_cutoff::LubyCutoff;
pub use merge_cutoff::MergeCutoff;
pub use random_cutoff::RandomCutoff;
pub use repeat_cutoff::RepeatCutoff;
