//! Generic bounded integer newtype.
//!
//! A wrapper type is declared by implementing [`Bounds`] on a marker type and
//! naming `Bounded<Marker>`. Equality, ordering, hashing, display and range
//! validation all come from the wrapped value.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;

use crate::error::BoundsError;

/// Range rules for a [`Bounded`] integer.
pub trait Bounds {
    /// The wrapped integer type.
    type Value: Copy + Ord + Hash + fmt::Debug + fmt::Display + Into<i128> + TryFrom<i128>;

    /// Type name used in errors and `Debug` output.
    const NAME: &'static str;

    /// Smallest allowed value (inclusive).
    const MIN: Self::Value;

    /// Largest allowed value (inclusive).
    const MAX: Self::Value;
}

/// An integer that is known to lie within `B::MIN..=B::MAX`.
///
/// # Examples
///
/// ```
/// use value_objects::{PageNumber, PortNumber};
///
/// let port = PortNumber::new(8080).unwrap();
/// assert_eq!(port.get(), 8080);
/// assert_eq!(port.to_string(), "8080");
///
/// assert!(PortNumber::try_from(65536_i64).is_err());
/// assert!(PageNumber::new(0).is_err());
/// ```
pub struct Bounded<B: Bounds> {
    value: B::Value,
    bounds: PhantomData<B>,
}

impl<B: Bounds> Bounded<B> {
    /// Wraps a value after checking it against the range.
    ///
    /// # Errors
    ///
    /// Returns `BoundsError::OutOfRange` if the value is below `B::MIN` or above `B::MAX`.
    pub fn new(value: B::Value) -> Result<Self, BoundsError> {
        if value < B::MIN || value > B::MAX {
            return Err(Self::out_of_range(value.into()));
        }
        Ok(Self {
            value,
            bounds: PhantomData,
        })
    }

    /// Returns the wrapped value.
    #[must_use]
    pub fn get(self) -> B::Value {
        self.value
    }

    pub(crate) const fn new_unchecked(value: B::Value) -> Self {
        Self {
            value,
            bounds: PhantomData,
        }
    }

    fn from_wide(value: i128) -> Result<Self, BoundsError> {
        let narrow = B::Value::try_from(value).map_err(|_| Self::out_of_range(value))?;
        Self::new(narrow)
    }

    fn out_of_range(value: i128) -> BoundsError {
        BoundsError::OutOfRange {
            name: B::NAME,
            value,
            min: B::MIN.into(),
            max: B::MAX.into(),
        }
    }
}

impl<B: Bounds> Clone for Bounded<B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B: Bounds> Copy for Bounded<B> {}

impl<B: Bounds> PartialEq for Bounded<B> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<B: Bounds> Eq for Bounded<B> {}

impl<B: Bounds> PartialOrd for Bounded<B> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<B: Bounds> Ord for Bounded<B> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<B: Bounds> Hash for Bounded<B> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<B: Bounds> fmt::Debug for Bounded<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(B::NAME).field(&self.value).finish()
    }
}

impl<B: Bounds> fmt::Display for Bounded<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl<B: Bounds> TryFrom<i64> for Bounded<B> {
    type Error = BoundsError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_wide(value.into())
    }
}

impl<B: Bounds> FromStr for Bounded<B> {
    type Err = BoundsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wide: i128 = s.parse().map_err(|_| BoundsError::NotANumber {
            name: B::NAME,
            input: s.to_string(),
        })?;
        Self::from_wide(wide)
    }
}

#[cfg(feature = "serde")]
impl<B: Bounds> serde::Serialize for Bounded<B>
where
    B::Value: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.value.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, B: Bounds> serde::Deserialize<'de> for Bounded<B>
where
    B::Value: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = B::Value::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    enum Percent {}

    impl Bounds for Percent {
        type Value = u8;
        const NAME: &'static str = "Percent";
        const MIN: u8 = 0;
        const MAX: u8 = 100;
    }

    type Pct = Bounded<Percent>;

    #[test]
    fn new_checks_range() {
        assert_eq!(Pct::new(0).unwrap().get(), 0);
        assert_eq!(Pct::new(100).unwrap().get(), 100);
        assert_eq!(
            Pct::new(101),
            Err(BoundsError::OutOfRange {
                name: "Percent",
                value: 101,
                min: 0,
                max: 100
            })
        );
    }

    #[test]
    fn try_from_i64_outside_value_type() {
        assert!(matches!(
            Pct::try_from(-1_i64),
            Err(BoundsError::OutOfRange { value: -1, .. })
        ));
        assert!(matches!(
            Pct::try_from(i64::MAX),
            Err(BoundsError::OutOfRange { .. })
        ));
        assert_eq!(Pct::try_from(42_i64).unwrap().get(), 42);
    }

    #[test]
    fn from_str_parses_decimal() {
        assert_eq!("55".parse::<Pct>().unwrap().get(), 55);
        assert!(matches!(
            "fifty".parse::<Pct>(),
            Err(BoundsError::NotANumber { name: "Percent", .. })
        ));
        assert!(matches!(
            "1000".parse::<Pct>(),
            Err(BoundsError::OutOfRange { value: 1000, .. })
        ));
    }

    #[test]
    fn comparisons_follow_value() {
        let low = Pct::new(10).unwrap();
        let high = Pct::new(90).unwrap();
        assert!(low < high);
        assert_eq!(low, Pct::new(10).unwrap());
        assert_eq!(low.max(high), high);
    }

    #[test]
    fn debug_and_display() {
        let p = Pct::new(7).unwrap();
        assert_eq!(format!("{p:?}"), "Percent(7)");
        assert_eq!(p.to_string(), "7");
        assert_eq!(format!("{p:>3}"), "  7");
    }
}
