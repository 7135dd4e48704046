//! The tagged "minutes until arrival" field.

use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

const BOARDING: &str = "BRD";
const ARRIVED: &str = "ARR";

/// How soon a train is due, as reported by the upstream feed.
///
/// The feed sends a string that is either a whole number of minutes or a
/// status token. Anything else is kept verbatim in [`ArrivalMinutes::Other`]
/// so it can still be shown and ordered.
///
/// Countdowns are stored as their value, so they display in normal form:
/// `"05"` comes back as `"5"`. Countdowns too large for a `u64` saturate at
/// `u64::MAX`, which still orders them after every smaller countdown.
///
/// # Examples
///
/// ```
/// use transit_lookup::predictions::ArrivalMinutes;
///
/// assert_eq!(ArrivalMinutes::parse("BRD"), ArrivalMinutes::Boarding);
/// assert_eq!(ArrivalMinutes::parse("7"), ArrivalMinutes::Minutes(7));
/// assert_eq!(ArrivalMinutes::parse("05").to_string(), "5");
/// assert_eq!(ArrivalMinutes::parse("---").to_string(), "---");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ArrivalMinutes {
    /// `BRD`: the train is at the platform with doors open.
    Boarding,
    /// `ARR`: the train is pulling in.
    Arrived,
    /// A countdown in whole minutes.
    Minutes(u64),
    /// Any token that is neither numeric nor a known status.
    Other(String),
}

impl ArrivalMinutes {
    /// Parse an upstream token. Never fails; unknown tokens become `Other`.
    pub fn parse(s: &str) -> Self {
        match s {
            BOARDING => ArrivalMinutes::Boarding,
            ARRIVED => ArrivalMinutes::Arrived,
            // All digits, so overflow is the only way parsing can fail
            _ if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) => {
                ArrivalMinutes::Minutes(s.parse().unwrap_or(u64::MAX))
            }
            _ => ArrivalMinutes::Other(s.to_string()),
        }
    }

    /// True for everything that is not a numeric countdown.
    ///
    /// Unknown tokens count as sentinels: they are ordered ahead of every
    /// countdown, after `BRD` and `ARR`.
    pub fn is_sentinel(&self) -> bool {
        !matches!(self, ArrivalMinutes::Minutes(_))
    }

    /// Display order: `BRD`, `ARR`, unknown tokens, then countdowns ascending.
    ///
    /// Unknown tokens compare equal to one another, so this is not an `Ord`
    /// implementation (it disagrees with `Eq`).
    pub fn display_order(&self, other: &Self) -> Ordering {
        self.order_key().cmp(&other.order_key())
    }

    fn order_key(&self) -> (u8, u64) {
        match self {
            ArrivalMinutes::Boarding => (0, 0),
            ArrivalMinutes::Arrived => (1, 0),
            ArrivalMinutes::Other(_) => (2, 0),
            ArrivalMinutes::Minutes(n) => (3, *n),
        }
    }
}

impl FromStr for ArrivalMinutes {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<String> for ArrivalMinutes {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<ArrivalMinutes> for String {
    fn from(m: ArrivalMinutes) -> Self {
        m.to_string()
    }
}

impl fmt::Display for ArrivalMinutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrivalMinutes::Boarding => f.write_str(BOARDING),
            ArrivalMinutes::Arrived => f.write_str(ARRIVED),
            ArrivalMinutes::Minutes(n) => write!(f, "{n}"),
            ArrivalMinutes::Other(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_sentinels() {
        assert_eq!(ArrivalMinutes::parse("BRD"), ArrivalMinutes::Boarding);
        assert_eq!(ArrivalMinutes::parse("ARR"), ArrivalMinutes::Arrived);
    }

    #[test]
    fn parse_numbers() {
        assert_eq!(ArrivalMinutes::parse("0"), ArrivalMinutes::Minutes(0));
        assert_eq!(ArrivalMinutes::parse("12"), ArrivalMinutes::Minutes(12));
    }

    #[test]
    fn parse_unknown_tokens() {
        assert_eq!(ArrivalMinutes::parse(""), ArrivalMinutes::Other(String::new()));
        assert_eq!(
            ArrivalMinutes::parse("---"),
            ArrivalMinutes::Other("---".into())
        );
        assert_eq!(ArrivalMinutes::parse("-1"), ArrivalMinutes::Other("-1".into()));
        assert_eq!(ArrivalMinutes::parse("+3"), ArrivalMinutes::Other("+3".into()));
        assert_eq!(ArrivalMinutes::parse("brd"), ArrivalMinutes::Other("brd".into()));
    }

    #[test]
    fn parse_large_countdowns() {
        assert_eq!(
            ArrivalMinutes::parse("4294967296"),
            ArrivalMinutes::Minutes(4_294_967_296)
        );
        assert_eq!(
            ArrivalMinutes::parse("99999999999999999999999"),
            ArrivalMinutes::Minutes(u64::MAX)
        );
    }

    #[test]
    fn leading_zeros_normalized() {
        let m = ArrivalMinutes::parse("05");
        assert_eq!(m, ArrivalMinutes::Minutes(5));
        assert_eq!(m.to_string(), "5");
        assert_eq!(String::from(m), "5");
    }

    #[test]
    fn sentinel_classification() {
        assert!(ArrivalMinutes::Boarding.is_sentinel());
        assert!(ArrivalMinutes::Arrived.is_sentinel());
        assert!(ArrivalMinutes::Other("---".into()).is_sentinel());
        assert!(!ArrivalMinutes::Minutes(4).is_sentinel());
    }

    #[test]
    fn display_order_tiers() {
        let brd = ArrivalMinutes::Boarding;
        let arr = ArrivalMinutes::Arrived;
        let other = ArrivalMinutes::Other("---".into());
        let one = ArrivalMinutes::Minutes(1);
        let ten = ArrivalMinutes::Minutes(10);

        assert_eq!(brd.display_order(&arr), Ordering::Less);
        assert_eq!(arr.display_order(&brd), Ordering::Greater);
        assert_eq!(brd.display_order(&brd), Ordering::Equal);
        assert_eq!(arr.display_order(&one), Ordering::Less);
        assert_eq!(one.display_order(&arr), Ordering::Greater);
        assert_eq!(other.display_order(&one), Ordering::Less);
        assert_eq!(arr.display_order(&other), Ordering::Less);
        assert_eq!(one.display_order(&ten), Ordering::Less);
        assert_eq!(ten.display_order(&one), Ordering::Greater);

        let huge = ArrivalMinutes::parse("4294967296");
        assert_eq!(other.display_order(&huge), Ordering::Less);
        assert_eq!(ten.display_order(&huge), Ordering::Less);
    }

    #[test]
    fn unknown_tokens_rank_equal() {
        let a = ArrivalMinutes::Other("---".into());
        let b = ArrivalMinutes::Other("DLY".into());
        assert_eq!(a.display_order(&b), Ordering::Equal);
    }

    #[test]
    fn display_roundtrip() {
        for token in ["BRD", "ARR", "0", "15", "---", ""] {
            assert_eq!(ArrivalMinutes::parse(token).to_string(), token);
        }
    }

    #[test]
    fn serde_as_string() {
        let m: ArrivalMinutes = serde_json::from_str(r#""BRD""#).unwrap();
        assert_eq!(m, ArrivalMinutes::Boarding);

        let m: ArrivalMinutes = serde_json::from_str(r#""6""#).unwrap();
        assert_eq!(m, ArrivalMinutes::Minutes(6));

        assert_eq!(
            serde_json::to_string(&ArrivalMinutes::Minutes(6)).unwrap(),
            r#""6""#
        );
    }
}
