//! Pattern-driven weighted shuffle engine
//!
//! pattern nodes -> [`pattern::expand`] -> flat keys -> [`Interleaver`] -> items

pub mod document;
pub mod interleaver;
pub mod pattern;
pub mod registry;

pub use interleaver::{Interleaver, ShuffleOptions};
pub use pattern::{PatternNode, expand};
pub use registry::{SourceRegistry, conjoin_lists};
