//! Collection types which count their elements.
//!
//! # Purpose
//! The types here are concerned with multiplicity: how many times an element is held, not just
//! whether it is held.
//!
//! # Method
//! Shared multiset behaviour lives in [`traits::Multiset`], so the algebra on counts is written
//! once and every counting collection gets it for free.

#[cfg(feature = "counted")]
pub mod counted;
#[cfg(feature = "traits")]
pub mod traits;

#[cfg(feature = "counted")]
#[doc(inline)]
pub use counted::CountedSet;
#[cfg(feature = "traits")]
#[doc(inline)]
pub use traits::Multiset;
