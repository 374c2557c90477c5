use std::{fmt, num::ParseIntError, str::FromStr};

/// Surrogate key of a stored record.
///
/// Identifiers are assigned by the storage backend and
/// never reused after a record has been deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Id(i64);

impl Id {
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    pub const fn to_i64(self) -> i64 {
        self.0
    }
}

impl From<i64> for Id {
    fn from(from: i64) -> Self {
        Self(from)
    }
}

impl From<Id> for i64 {
    fn from(from: Id) -> Self {
        from.0
    }
}

impl FromStr for Id {
    type Err = ParseIntError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
