//! Page number type.

use crate::bounded::{Bounded, Bounds};
use crate::constants::MIN_PAGE_NUMBER;

/// Range marker for [`PageNumber`].
#[derive(Debug)]
pub enum PageRange {}

impl Bounds for PageRange {
    type Value = u64;
    const NAME: &'static str = "PageNumber";
    const MIN: u64 = MIN_PAGE_NUMBER;
    const MAX: u64 = u64::MAX;
}

/// A one-based page number.
///
/// # Examples
///
/// ```
/// use value_objects::PageNumber;
///
/// let page = PageNumber::FIRST;
/// assert_eq!(page.get(), 1);
/// assert_eq!(page.next_page().map(PageNumber::get), Some(2));
/// assert!(PageNumber::new(0).is_err());
/// ```
pub type PageNumber = Bounded<PageRange>;

impl Bounded<PageRange> {
    /// The first page.
    pub const FIRST: Self = Self::new_unchecked(MIN_PAGE_NUMBER);

    /// Returns the following page, or `None` past `u64::MAX`.
    #[must_use]
    pub fn next_page(self) -> Option<Self> {
        self.get().checked_add(1).map(Self::new_unchecked)
    }

    /// Returns the preceding page, or `None` on the first page.
    #[must_use]
    pub fn previous_page(self) -> Option<Self> {
        Self::new(self.get() - 1).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoundsError;

    #[test]
    fn zero_and_negative_fail() {
        assert!(matches!(
            PageNumber::new(0),
            Err(BoundsError::OutOfRange { name: "PageNumber", value: 0, min: 1, .. })
        ));
        for value in [i64::from(i32::MIN), -1, 0] {
            assert!(PageNumber::try_from(value).is_err(), "{value}");
        }
    }

    #[test]
    fn first_and_neighbours() {
        assert_eq!(PageNumber::FIRST, PageNumber::new(1).unwrap());
        assert_eq!(PageNumber::FIRST.previous_page(), None);

        let second = PageNumber::FIRST.next_page().unwrap();
        assert_eq!(second.get(), 2);
        assert_eq!(second.previous_page(), Some(PageNumber::FIRST));
    }

    #[test]
    fn last_page_has_no_next() {
        let last = PageNumber::new(u64::MAX).unwrap();
        assert_eq!(last.next_page(), None);
    }

    #[test]
    fn parse_from_str() {
        assert_eq!("21".parse::<PageNumber>().unwrap().get(), 21);
        assert!("0".parse::<PageNumber>().is_err());
        assert!(matches!(
            "".parse::<PageNumber>(),
            Err(BoundsError::NotANumber { .. })
        ));
    }
}
