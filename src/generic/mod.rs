//! Generic structures, independent of belief revision.

pub mod minimal_pcg;
pub use minimal_pcg::MinimalPCG32;
