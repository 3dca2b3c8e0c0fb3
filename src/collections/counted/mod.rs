//! A module containing [`CountedSet`] and associated types.
//!
//! The other types here provide owned and borrowed iteration over a counted set's entries,
//! distinct elements or individual occurrences, and the errors returned by its checked bulk
//! operations.
//!
//! As a note, there is no mutable iterator over entries because mutating an element in place
//! could change its hash, and handing out a mutable count could break the non-zero invariant.
//!
//! [`CountedSet`] is also re-exported under the parent module.

mod counted_set;
mod error;
mod iter;
mod tests;

pub use counted_set::*;
pub use error::*;
pub use iter::*;
