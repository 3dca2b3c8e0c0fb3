use std::fmt::{self, Debug, Formatter};

/// A pre-rendered string which is written as-is by [`Debug`], without quotes or escapes.
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
