//! Error types for value object parsing and construction.

use std::fmt;

use crate::data_uri::DataUriSection;
use crate::semver::SemVerSection;

/// Errors that can occur when parsing a semantic version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemVerError {
    /// The input that failed to parse
    pub input: String,
    /// The specific error that occurred
    pub kind: SemVerErrorKind,
}

/// Specific semantic version parsing errors.
///
/// Positions are byte offsets into the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SemVerErrorKind {
    /// Input is empty
    Empty,
    /// Character not allowed in the section being scanned
    UnexpectedChar {
        /// The unexpected character
        char: char,
        /// Position in the input
        position: usize,
        /// Section being scanned
        section: SemVerSection,
    },
    /// Input ended before the patch section was reached
    UnexpectedEnd {
        /// Section being scanned when the input ended
        section: SemVerSection,
    },
    /// A numeric section has no digits
    EmptyComponent {
        /// The empty section
        section: SemVerSection,
    },
    /// A numeric identifier starts with `0` but is not `0`
    LeadingZero {
        /// Section holding the identifier
        section: SemVerSection,
        /// Position of the leading zero
        position: usize,
    },
    /// A dot at the start or end of a section, or next to another dot
    MisplacedDot {
        /// Section holding the dot
        section: SemVerSection,
        /// Position of the dot
        position: usize,
    },
    /// A numeric section does not fit in a `u64`
    NumericOverflow {
        /// The overflowing section
        section: SemVerSection,
        /// The digit run that overflowed
        digits: String,
    },
}

impl SemVerErrorKind {
    /// Returns true if a digit run was well-formed but too large.
    #[must_use]
    pub const fn is_overflow(&self) -> bool {
        matches!(self, Self::NumericOverflow { .. })
    }
}

impl fmt::Display for SemVerErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "input is empty"),
            Self::UnexpectedChar {
                char,
                position,
                section,
            } => write!(
                f,
                "unexpected character '{char}' at position {position} in {section}"
            ),
            Self::UnexpectedEnd { section } => write!(
                f,
                "input ended in {section}; expected 'major.minor.patch'"
            ),
            Self::EmptyComponent { section } => write!(f, "{section} cannot be empty"),
            Self::LeadingZero { section, position } => write!(
                f,
                "numeric identifier in {section} has a leading zero at position {position}"
            ),
            Self::MisplacedDot { section, position } => write!(
                f,
                "dot at position {position} in {section} must separate two identifiers"
            ),
            Self::NumericOverflow { section, digits } => write!(
                f,
                "{section} '{digits}' exceeds maximum {}",
                u64::MAX
            ),
        }
    }
}

impl fmt::Display for SemVerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to parse semantic version '{}': {}",
            self.input, self.kind
        )
    }
}

impl std::error::Error for SemVerError {}

/// Errors that can occur when parsing a data URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUriError {
    /// The input that failed to parse
    pub input: String,
    /// The specific error that occurred
    pub kind: DataUriErrorKind,
}

/// Specific data URI parsing errors.
///
/// Positions are byte offsets into the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataUriErrorKind {
    /// Missing or invalid scheme (expected "data:")
    SchemeMismatch {
        /// The scheme that was found, if any
        found: Option<String>,
    },
    /// Input ended before the `,` that starts the payload
    MissingDataSeparator {
        /// Section being scanned when the input ended
        section: DataUriSection,
    },
    /// A parameter has no name before its `=`
    EmptyParameterKey {
        /// Position of the `=`
        position: usize,
    },
    /// A parameter key without `=value` that is not the trailing base64 flag
    DanglingParameterKey {
        /// The key text
        key: String,
        /// Position of the character that ended the key
        position: usize,
    },
    /// The same parameter appears twice (keys compare case-insensitively)
    DuplicateParameter {
        /// The repeated key, as spelled the second time
        key: String,
    },
}

impl DataUriErrorKind {
    /// Returns true if the input does not start with the `data:` scheme.
    #[must_use]
    pub const fn is_scheme_mismatch(&self) -> bool {
        matches!(self, Self::SchemeMismatch { .. })
    }
}

impl fmt::Display for DataUriErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SchemeMismatch { found } => match found {
                Some(s) => write!(f, "expected scheme 'data:', found '{s}:'"),
                None => write!(f, "missing scheme; data URIs must start with 'data:'"),
            },
            Self::MissingDataSeparator { section } => write!(
                f,
                "input ended in {section}; expected ',' before the data"
            ),
            Self::EmptyParameterKey { position } => {
                write!(f, "parameter name missing before '=' at position {position}")
            }
            Self::DanglingParameterKey { key, position } => {
                write!(f, "parameter '{key}' has no value at position {position}")?;
                f.write_str("; only a trailing 'base64' may omit '='")
            }
            Self::DuplicateParameter { key } => write!(f, "duplicate parameter '{key}'"),
        }
    }
}

impl fmt::Display for DataUriError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse data URI '{}': {}", self.input, self.kind)
    }
}

impl std::error::Error for DataUriError {}

/// Errors for bounded integer construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundsError {
    /// Value lies outside the allowed range
    OutOfRange {
        /// Name of the bounded type
        name: &'static str,
        /// The rejected value
        value: i128,
        /// Minimum allowed value
        min: i128,
        /// Maximum allowed value
        max: i128,
    },
    /// Text is not a decimal integer
    NotANumber {
        /// Name of the bounded type
        name: &'static str,
        /// The rejected text
        input: String,
    },
}

impl fmt::Display for BoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange {
                name,
                value,
                min,
                max,
            } => write!(f, "{name} must be between {min} and {max}, got {value}"),
            Self::NotANumber { name, input } => {
                write!(f, "{name} must be a decimal integer, got '{input}'")
            }
        }
    }
}

impl std::error::Error for BoundsError {}
