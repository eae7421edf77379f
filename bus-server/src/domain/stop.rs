//! Stop identifier type.

use std::fmt;

/// Error returned when parsing an invalid stop identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid stop id: {reason}")]
pub struct InvalidStopId {
    reason: &'static str,
}

/// A bus stop identifier.
///
/// Stop ids are positive 32-bit integers (1 ..= 2,147,483,647). This type
/// guarantees that any `StopId` value is positive by construction.
///
/// # Examples
///
/// ```
/// use bus_server::domain::StopId;
///
/// let stop = StopId::parse("42").unwrap();
/// assert_eq!(stop.get(), 42);
///
/// // Zero and negatives are rejected
/// assert!(StopId::parse("0").is_err());
/// assert!(StopId::parse("-1").is_err());
///
/// // So is anything that is not a base-10 integer
/// assert!(StopId::parse("abc").is_err());
/// assert!(StopId::parse("").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StopId(i32);

impl StopId {
    /// Construct a stop id from an integer, rejecting zero and negatives.
    pub fn new(value: i32) -> Result<Self, InvalidStopId> {
        if value < 1 {
            return Err(InvalidStopId {
                reason: "must be positive",
            });
        }
        Ok(StopId(value))
    }

    /// Parse a stop id from its decimal string form.
    ///
    /// Anything that is not a base-10 integer in 1 ..= `i32::MAX` is
    /// rejected; the integer parse overflowing doubles as the upper-bound
    /// check.
    pub fn parse(s: &str) -> Result<Self, InvalidStopId> {
        let value: i32 = s.parse().map_err(|_| InvalidStopId {
            reason: "must be a base-10 integer",
        })?;
        Self::new(value)
    }

    /// Returns the numeric value of the stop id.
    pub fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Debug for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopId({})", self.0)
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
