//! This crate provides a counted set: a hash-based multiset which remembers how many times each
//! element has been inserted.
//!
//! # Purpose
//! A plain set answers "is this element here?". A counted set answers "how many of this element
//! are here?", while still storing each distinct element only once. Think of a quiver holding four
//! iron arrows, one magic arrow and one silver arrow: three kinds of arrow, six arrows in total.
//!
//! ```
//! use counted_set::collections::counted::CountedSet;
//!
//! let mut quiver = CountedSet::<&str>::from(["iron", "magic", "iron", "silver", "iron", "iron"]);
//! assert_eq!(quiver.count("iron"), 4);
//! assert_eq!(quiver.unique_count(), 3);
//! assert_eq!(quiver.total_count(), 6);
//!
//! quiver.remove("dwarvish");
//! assert_eq!(quiver.count("dwarvish"), 0);
//! ```
//!
//! # Method
//! [`CountedSet`](collections::counted::CountedSet) is backed by a map from element to a
//! [`NonZeroUsize`](std::num::NonZeroUsize) count, so an element with no occurrences left can't be
//! represented at all and is always removed from the map.
//!
//! Multiset algebra (sum, union, intersection and difference) is described once by the
//! [`Multiset`](collections::traits::Multiset) trait and exposed on the counted set as operators.
//!
//! # Error Handling
//! None of the basic operations can fail: removing an element that isn't present is a no-op rather
//! than an error. The checked bulk operations (such as
//! [`remove_many`](collections::counted::CountedSet::remove_many)) return strongly typed errors,
//! with structs that implement [`Error`](std::error::Error) combined in an enum for static
//! dispatch.
//!
//! # Dependencies
//! This crate depends on some derive macros for its error types, and on the `log` facade. Nothing
//! is logged unless the final binary installs a logger; the `demo` binary uses `env_logger`.
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;
