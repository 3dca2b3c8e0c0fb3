//! Traits shared by counting collections.

mod multiset;

pub use multiset::*;
