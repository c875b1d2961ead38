//! Immutable, self-validating value types.
//!
//! Every type in this crate is built either by a validating parser or by an
//! explicit trusting constructor, and never changes after construction.
//!
//! # Overview
//!
//! | Type | Grammar / range |
//! |------|-----------------|
//! | [`SemVer`] | `<major>.<minor>.<patch>[-<pre-release>][+<build>]` (semantic versioning 2.0.0) |
//! | [`DataUri`] | `data:[<media-type>][;key=value]*[;base64],<data>` (RFC 2397) |
//! | [`PortNumber`] | `0..=65535` |
//! | [`PageNumber`] | `1..=u64::MAX` |
//! | [`UnparsedJson`] | any text |
//!
//! # Quick Start
//!
//! ```rust
//! use value_objects::{DataUri, SemVer};
//!
//! let version = SemVer::parse("1.4.0-rc.1+sha.5114f85").unwrap();
//! assert_eq!(version.minor(), 4);
//! assert_eq!(version.pre_release(), Some("rc.1"));
//!
//! let uri = DataUri::parse("data:text/plain;charset=UTF-8,hello+world").unwrap();
//! assert_eq!(uri.parameters().charset(), Some("UTF-8"));
//! assert_eq!(uri.data(), "hello world");
//!
//! // Untrusted input: `try_parse` never fails loudly.
//! assert!(SemVer::try_parse("1.2").is_none());
//! assert!(DataUri::try_parse("http://example.com").is_none());
//! ```
//!
//! # Trusted construction
//!
//! `from_parts` builds a value from components the caller already knows to
//! be valid, without running the grammar again:
//!
//! ```rust
//! use value_objects::SemVer;
//!
//! let v = SemVer::from_parts(1, 0, 0, None, Some("linux".to_string()));
//! assert_eq!(v.to_string(), "1.0.0+linux");
//! ```
//!
//! # Equality
//!
//! - `SemVer` equality includes build metadata; [`SemVer::precedence_eq`]
//!   ignores it.
//! - `DataUri` parameter keys compare case-insensitively, values exactly.
//!
//! # Grammar Specification
//!
//! Both grammars are written out in ABNF in `grammar.abnf` at the crate root.
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for every value type. Parsed types use
//!   their string form and validate on deserialize.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod bounded;
mod constants;
mod data_uri;
mod error;
mod grammar;
#[cfg(kani)]
mod kani_impls;
mod media_type_parameters;
mod page_number;
mod percent;
mod port_number;
pub mod prelude;
mod semver;
mod unparsed_json;

pub use bounded::{Bounded, Bounds};
pub use constants::{
    BASE64_TOKEN, DATA_SCHEME, DEFAULT_MEDIA_TYPE, MAX_PORT_NUMBER, MIN_PAGE_NUMBER,
    MIN_PORT_NUMBER, WELL_KNOWN_PORT_LIMIT,
};
pub use data_uri::{DataUri, DataUriSection};
pub use error::{BoundsError, DataUriError, DataUriErrorKind, SemVerError, SemVerErrorKind};
pub use media_type_parameters::MediaTypeParameters;
pub use page_number::{PageNumber, PageRange};
pub use port_number::{PortNumber, PortRange};
pub use semver::{SemVer, SemVerSection};
pub use unparsed_json::UnparsedJson;
