//! Blocking multi producer / multi consumer queue
use std::fmt;
use std::str::FromStr;

use crate::errors::{Error, Result};

pub mod queue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Queue capacity
pub enum Capacity {
    /// Unlimited number of items
    Unbounded,
    /// Limited number of items
    Bounded(usize),
}

impl Capacity {
    /// `true` if there is no limit on the number of items
    pub fn is_unbounded(&self) -> bool {
        *self == Capacity::Unbounded
    }

    /// `true` if the number of items is limited
    pub fn is_bounded(&self) -> bool {
        !self.is_unbounded()
    }

    /// The maximum number of items, if any
    pub fn limit(&self) -> Option<usize> {
        match self {
            Capacity::Unbounded => None,
            Capacity::Bounded(cap) => Some(*cap),
        }
    }

    /// Reject a bounded capacity that can never hold an item
    pub(crate) fn validate(self) -> Result<Self> {
        match self {
            Capacity::Bounded(0) => Err(Error::ZeroCapacity),
            cap => Ok(cap),
        }
    }
}

impl From<Option<usize>> for Capacity {
    fn from(limit: Option<usize>) -> Self {
        match limit {
            Some(cap) => Capacity::Bounded(cap),
            None => Capacity::Unbounded,
        }
    }
}

// -----------------------------------------------------------------------------
// 		- Parse / display -
// -----------------------------------------------------------------------------
impl FromStr for Capacity {
    type Err = Error;

    /// Parse either "unbounded" or a positive integer
    ///
    /// ```
    /// # use syncq::sync::Capacity;
    /// let cap: Capacity = "16".parse().unwrap();
    /// assert_eq!(cap, Capacity::Bounded(16));
    ///
    /// let cap: Capacity = "unbounded".parse().unwrap();
    /// assert_eq!(cap, Capacity::Unbounded);
    /// ```
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("unbounded") {
            return Ok(Capacity::Unbounded);
        }

        let cap = s.parse::<usize>()?;
        Capacity::Bounded(cap).validate()
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Capacity::Unbounded => write!(f, "unbounded"),
            Capacity::Bounded(cap) => write!(f, "{}", cap),
        }
    }
}
