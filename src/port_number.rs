//! Port number type.

use crate::bounded::{Bounded, Bounds};
use crate::constants::{MAX_PORT_NUMBER, MIN_PORT_NUMBER, WELL_KNOWN_PORT_LIMIT};

/// Range marker for [`PortNumber`].
#[derive(Debug)]
pub enum PortRange {}

impl Bounds for PortRange {
    type Value = u16;
    const NAME: &'static str = "PortNumber";
    const MIN: u16 = MIN_PORT_NUMBER;
    const MAX: u16 = MAX_PORT_NUMBER;
}

/// A TCP/UDP port number in `0..=65535`.
///
/// Every `u16` is a valid port, so [`PortNumber::new`] never fails in
/// practice. Out-of-range input is rejected by `TryFrom<i64>` and `FromStr`.
///
/// # Examples
///
/// ```
/// use value_objects::PortNumber;
///
/// let https: PortNumber = "443".parse().unwrap();
/// assert!(https.is_well_known());
/// assert!("-1".parse::<PortNumber>().is_err());
/// ```
pub type PortNumber = Bounded<PortRange>;

impl Bounded<PortRange> {
    /// Returns true for the IANA well-known ports (`0..1024`).
    #[must_use]
    pub fn is_well_known(self) -> bool {
        self.get() < WELL_KNOWN_PORT_LIMIT
    }
}
