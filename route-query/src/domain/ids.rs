//! Stop and route identifier types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid stop or route identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind} id {input:?}: must be a non-negative integer")]
pub struct InvalidId {
    kind: &'static str,
    input: String,
}

fn parse_id(kind: &'static str, s: &str) -> Result<u32, InvalidId> {
    s.trim().parse::<u32>().map_err(|_| InvalidId {
        kind,
        input: s.to_string(),
    })
}

/// Identifier of a stop in the feed.
///
/// Stops carry no structure beyond identity, so this is a thin wrapper
/// around the integer id used by the feed.
///
/// # Examples
///
/// ```
/// use route_query::domain::StopId;
///
/// let stop = StopId::parse("146").unwrap();
/// assert_eq!(stop, StopId::new(146));
/// assert_eq!(stop.to_string(), "146");
///
/// assert!(StopId::parse("-1").is_err());
/// assert!(StopId::parse("abc").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StopId(u32);

impl StopId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Parse a stop id from a decimal string. Surrounding whitespace is ignored.
    pub fn parse(s: &str) -> Result<Self, InvalidId> {
        parse_id("stop", s).map(Self)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl FromStr for StopId {
    type Err = InvalidId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
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

/// Identifier of a route in the feed.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteId(u32);

impl RouteId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Parse a route id from a decimal string. Surrounding whitespace is ignored.
    pub fn parse(s: &str) -> Result<Self, InvalidId> {
        parse_id("route", s).map(Self)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl FromStr for RouteId {
    type Err = InvalidId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RouteId({})", self.0)
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_ids() {
        assert_eq!(StopId::parse("0").unwrap(), StopId::new(0));
        assert_eq!(StopId::parse("10643").unwrap(), StopId::new(10643));
        assert_eq!(RouteId::parse("2044").unwrap(), RouteId::new(2044));
    }

    #[test]
    fn parse_trims_whitespace() {
        assert_eq!(StopId::parse(" 148 ").unwrap(), StopId::new(148));
        assert_eq!(RouteId::parse("488\n").unwrap(), RouteId::new(488));
    }

    #[test]
    fn reject_malformed() {
        assert!(StopId::parse("").is_err());
        assert!(StopId::parse("-5").is_err());
        assert!(StopId::parse("1.5").is_err());
        assert!(RouteId::parse("R12").is_err());
        assert!(RouteId::parse("99999999999").is_err());
    }

    #[test]
    fn error_display() {
        let err = StopId::parse("abc").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid stop id \"abc\": must be a non-negative integer"
        );

        let err = RouteId::parse("x").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid route id \"x\": must be a non-negative integer"
        );
    }

    #[test]
    fn display_and_debug() {
        let stop = StopId::new(233);
        assert_eq!(format!("{}", stop), "233");
        assert_eq!(format!("{:?}", stop), "StopId(233)");

        let route = RouteId::new(2044);
        assert_eq!(format!("{}", route), "2044");
        assert_eq!(format!("{:?}", route), "RouteId(2044)");
    }

    #[test]
    fn from_str_matches_parse() {
        let stop: StopId = "955".parse().unwrap();
        assert_eq!(stop, StopId::new(955));
        let route: RouteId = "10486".parse().unwrap();
        assert_eq!(route, RouteId::new(10486));
    }

    #[test]
    fn serializes_as_bare_integer() {
        assert_eq!(serde_json::to_string(&StopId::new(148)).unwrap(), "148");
        let route: RouteId = serde_json::from_str("2044").unwrap();
        assert_eq!(route, RouteId::new(2044));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Display then parse returns the original id
        #[test]
        fn display_roundtrip(n in any::<u32>()) {
            let stop = StopId::new(n);
            prop_assert_eq!(StopId::parse(&stop.to_string()).unwrap(), stop);
        }

        /// Anything containing a non-digit is rejected
        #[test]
        fn non_digits_rejected(s in "[0-9]{0,3}[a-zA-Z.-][0-9a-zA-Z]{0,3}") {
            prop_assert!(RouteId::parse(&s).is_err());
        }
    }
}
