//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use value_objects::prelude::*;
//!
//! let version = SemVer::parse("1.0.0").unwrap();
//! let port = PortNumber::new(8080).unwrap();
//! ```
//!
//! Range markers (`PortRange`, `PageRange`) and the `Bounds` trait are left
//! out; they are only needed to declare new bounded types.

pub use crate::{
    BoundsError, DataUri, DataUriError, DataUriErrorKind, DataUriSection, MediaTypeParameters,
    PageNumber, PortNumber, SemVer, SemVerError, SemVerErrorKind, SemVerSection, UnparsedJson,
};
