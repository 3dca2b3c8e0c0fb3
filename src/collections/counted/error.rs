use std::error;
use std::fmt::{self, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// Adding occurrences would push an element's count past [`usize::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountOverflow {
    pub count: usize,
    pub additional: usize,
}

impl fmt::Display for CountOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f, "Count overflow: can't add {} occurrences to an element with {}!",
            self.additional, self.count
        )
    }
}

impl error::Error for CountOverflow {}

/// More occurrences of an element were requested for removal than are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsufficientCount {
    pub requested: usize,
    pub available: usize,
}

impl fmt::Display for InsufficientCount {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f, "Unable to remove {} occurrences of an element with only {}!",
            self.requested, self.available
        )
    }
}

impl error::Error for InsufficientCount {}

/// Any failure of a checked change to an element's count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum CountError {
    CountOverflow(CountOverflow),
    InsufficientCount(InsufficientCount),
}
