//! Kani Arbitrary implementations and proof harnesses for property verification.
//!
//! This module provides `kani::Arbitrary` trait implementations for
//! the crate's value types, enabling bounded verification of the parsers
//! with the Kani model checker.
//!
//! # Usage
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use crate::{DataUri, MediaTypeParameters, PageNumber, PortNumber, SemVer};

/// Valid characters for pre-release and build identifiers
const IDENTIFIER_CHARS: &[u8] = b"abcxyzABZ0129-";

/// Payload characters, including ones that must be percent-encoded
const DATA_CHARS: &[u8] = b"az09 ,;:+%=";

/// Generate a valid identifier character
fn arbitrary_identifier_char() -> char {
    let idx: usize = kani::any();
    let idx = idx % IDENTIFIER_CHARS.len();
    IDENTIFIER_CHARS[idx] as char
}

/// Generate a short identifier that starts with a letter (never a leading zero)
fn arbitrary_identifier() -> String {
    let len: usize = kani::any();
    let len = 1 + (len % 3);
    let mut s = String::from("r");
    for _ in 1..len {
        s.push(arbitrary_identifier_char());
    }
    s
}

impl kani::Arbitrary for SemVer {
    fn any() -> Self {
        let major: u64 = kani::any();
        let minor: u64 = kani::any();
        let patch: u64 = kani::any();

        let pre_release = if kani::any() {
            Some(arbitrary_identifier())
        } else {
            None
        };
        let build = if kani::any() {
            Some(arbitrary_identifier())
        } else {
            None
        };

        SemVer::from_parts(major, minor, patch, pre_release, build)
    }
}

impl kani::Arbitrary for DataUri {
    fn any() -> Self {
        let len: usize = kani::any();
        let len = len % 4;
        let data: String = (0..len)
            .map(|_| {
                let idx: usize = kani::any();
                DATA_CHARS[idx % DATA_CHARS.len()] as char
            })
            .collect();

        let mut parameters = MediaTypeParameters::new();
        if kani::any() {
            parameters.insert("charset", "utf-8");
        }

        let media_type = if kani::any() {
            Some("text/plain".to_string())
        } else {
            None
        };

        DataUri::from_parts(media_type, parameters, kani::any(), data)
    }
}

// ============================================================================
// Kani Proof Harnesses
// ============================================================================

/// Proof: Display then parse gives back an equal semantic version
#[kani::proof]
#[kani::unwind(30)]
fn proof_semver_roundtrip() {
    let version: SemVer = kani::any();
    let text = version.to_string();
    let reparsed = SemVer::parse(&text).expect("displayed version should parse");
    assert_eq!(reparsed, version);
}

/// Proof: Precedence equality never distinguishes more than full equality
#[kani::proof]
#[kani::unwind(10)]
fn proof_precedence_eq_is_weaker() {
    let a: SemVer = kani::any();
    let b: SemVer = kani::any();
    if a == b {
        assert!(a.precedence_eq(&b));
    }
}

/// Proof: Display then parse gives back an equal data URI
#[kani::proof]
#[kani::unwind(20)]
fn proof_data_uri_roundtrip() {
    let uri: DataUri = kani::any();
    let text = uri.to_string();
    let reparsed = DataUri::parse(&text).expect("displayed data URI should parse");
    assert_eq!(reparsed, uri);
}

/// Proof: Every i64 either becomes a port in range or is rejected
#[kani::proof]
fn proof_port_number_in_range() {
    let value: i64 = kani::any();
    match PortNumber::try_from(value) {
        Ok(port) => assert_eq!(i64::from(port.get()), value),
        Err(_) => assert!(!(0..=65535).contains(&value)),
    }
}

/// Proof: A page number is never zero
#[kani::proof]
fn proof_page_number_positive() {
    let value: u64 = kani::any();
    if let Ok(page) = PageNumber::new(value) {
        assert!(page.get() >= 1);
    } else {
        assert_eq!(value, 0);
    }
}
