//! Metro station codes.

use std::fmt;

use serde::{Serialize, Serializer};

/// Error returned when parsing an invalid station code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station code: {reason}")]
pub struct InvalidStationCode {
    reason: &'static str,
}

/// A metro station code: one uppercase letter (the line segment) followed
/// by two digits, e.g. `A01` for Metro Center's upper level.
///
/// # Examples
///
/// ```
/// use transit_lookup::transit::StationCode;
///
/// let metro_center = StationCode::parse("A01").unwrap();
/// assert_eq!(metro_center.as_str(), "A01");
///
/// assert!(StationCode::parse("a01").is_err());
/// assert!(StationCode::parse("A1").is_err());
/// assert!(StationCode::parse("AB1").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationCode([u8; 3]);

impl StationCode {
    /// Parse a station code from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidStationCode> {
        let bytes = s.as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidStationCode {
                reason: "must be exactly 3 characters",
            });
        }

        if !bytes[0].is_ascii_uppercase() {
            return Err(InvalidStationCode {
                reason: "must start with an uppercase ASCII letter",
            });
        }

        if !bytes[1].is_ascii_digit() || !bytes[2].is_ascii_digit() {
            return Err(InvalidStationCode {
                reason: "must end with two ASCII digits",
            });
        }

        Ok(StationCode([bytes[0], bytes[1], bytes[2]]))
    }

    /// Parse an optional upstream field, where an empty string means "none".
    pub fn parse_optional(s: Option<&str>) -> Result<Option<Self>, InvalidStationCode> {
        match s {
            None | Some("") => Ok(None),
            Some(s) => Self::parse(s).map(Some),
        }
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII letters and digits are ever stored
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl fmt::Debug for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationCode({})", self.as_str())
    }
}

impl fmt::Display for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for StationCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Roundtrip: parse then as_str returns the original
        #[test]
        fn roundtrip(s in "[A-Z][0-9]{2}") {
            let code = StationCode::parse(&s).unwrap();
            prop_assert_eq!(code.as_str(), s.as_str());
        }

        /// Wrong-length strings are always rejected
        #[test]
        fn wrong_length_rejected(s in "[A-Z0-9]{0,2}|[A-Z0-9]{4,8}") {
            prop_assert!(StationCode::parse(&s).is_err());
        }

        /// A digit in the first position is always rejected
        #[test]
        fn leading_digit_rejected(s in "[0-9]{3}") {
            prop_assert!(StationCode::parse(&s).is_err());
        }
    }
}
