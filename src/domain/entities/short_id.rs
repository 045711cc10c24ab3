//! Short identifier assigned to a registered URL.

use serde::Serialize;
use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

/// Errors produced when parsing a short identifier from request text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseShortIdError {
    #[error("short id is empty")]
    Empty,

    #[error("short id must contain only decimal digits: {0:?}")]
    NotDecimal(String),

    #[error("short id must be positive")]
    Zero,

    #[error("short id is out of range: {0}")]
    OutOfRange(String),
}

/// A positive integer identifying one registered URL.
///
/// Serialized as a bare JSON integer, so `{"short_url": 1}` rather than a
/// string or object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ShortId(NonZeroU64);

impl ShortId {
    /// The first identifier a fresh registry hands out.
    pub const FIRST: ShortId = ShortId(NonZeroU64::MIN);

    /// Wraps a raw value, returning `None` for zero.
    pub fn new(value: u64) -> Option<Self> {
        NonZeroU64::new(value).map(Self)
    }

    pub fn get(self) -> u64 {
        self.0.get()
    }

    /// Returns the identifier after this one, or `None` once `u64::MAX` is reached.
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for ShortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ShortId {
    type Err = ParseShortIdError;

    /// Parses decimal text such as `"42"` or `"007"`.
    ///
    /// Signs, whitespace, fractions and exponents are rejected, as is zero.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseShortIdError::Empty);
        }

        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseShortIdError::NotDecimal(s.to_string()));
        }

        let value: u64 = s
            .parse()
            .map_err(|_| ParseShortIdError::OutOfRange(s.to_string()))?;

        Self::new(value).ok_or(ParseShortIdError::Zero)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_decimal() {
        assert_eq!("1".parse::<ShortId>().unwrap().get(), 1);
        assert_eq!("9999".parse::<ShortId>().unwrap().get(), 9999);
    }

    #[test]
    fn test_parse_leading_zeros() {
        assert_eq!("007".parse::<ShortId>().unwrap().get(), 7);
    }

    #[test]
    fn test_parse_zero_rejected() {
        assert_eq!("0".parse::<ShortId>(), Err(ParseShortIdError::Zero));
        assert_eq!("000".parse::<ShortId>(), Err(ParseShortIdError::Zero));
    }

    #[test]
    fn test_parse_empty_rejected() {
        assert_eq!("".parse::<ShortId>(), Err(ParseShortIdError::Empty));
    }

    #[test]
    fn test_parse_non_numeric_rejected() {
        for input in ["abc", "-1", "+1", "1.5", "1e3", " 1", "0x10", "١"] {
            assert!(
                matches!(
                    input.parse::<ShortId>(),
                    Err(ParseShortIdError::NotDecimal(_))
                ),
                "expected NotDecimal for {input:?}"
            );
        }
    }

    #[test]
    fn test_parse_out_of_range_rejected() {
        let too_big = "18446744073709551616"; // u64::MAX + 1
        assert!(matches!(
            too_big.parse::<ShortId>(),
            Err(ParseShortIdError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_next_is_strictly_increasing() {
        let first = ShortId::FIRST;
        let second = first.next().unwrap();
        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 2);
        assert!(second > first);
    }

    #[test]
    fn test_next_stops_at_max() {
        let last = ShortId::new(u64::MAX).unwrap();
        assert!(last.next().is_none());
    }

    #[test]
    fn test_serializes_as_integer() {
        let id = ShortId::new(42).unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
    }
}
