#![warn(missing_docs)]

#[cfg(feature = "counted")]
pub mod fmt;
#[cfg(test)]
pub mod hash;
