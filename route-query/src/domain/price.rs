//! Fare price type.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Add;

use serde::{Deserialize, Deserializer, Serialize};

/// Error returned when constructing a price from an invalid value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid price {value}: must be finite and non-negative")]
pub struct InvalidPrice {
    value: f64,
}

/// A fare price.
///
/// Prices are always finite and non-negative, which makes them totally
/// ordered and hashable. Derived tuples containing a price can therefore
/// be deduplicated by value. Sums saturate at `f64::MAX` so adding legs
/// never produces infinity.
///
/// # Examples
///
/// ```
/// use route_query::domain::Price;
///
/// let fare = Price::new(5.0).unwrap();
/// assert_eq!((fare + fare).value(), 10.0);
///
/// assert!(Price::new(-1.0).is_err());
/// assert!(Price::new(f64::NAN).is_err());
/// ```
#[derive(Clone, Copy, Serialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    pub const ZERO: Price = Price(0.0);

    /// Create a price, rejecting NaN, infinities and negative values.
    pub fn new(value: f64) -> Result<Self, InvalidPrice> {
        if !value.is_finite() || value < 0.0 {
            return Err(InvalidPrice { value });
        }
        // Adding zero turns -0.0 into 0.0 so equal prices share one bit pattern.
        Ok(Price(value + 0.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl PartialEq for Price {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for Price {}

impl Hash for Price {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Price {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price((self.0 + rhs.0).min(f64::MAX))
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Price::new(value).map_err(serde::de::Error::custom)
    }
}

impl fmt::Debug for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Price({:?})", self.0)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}
