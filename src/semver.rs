//! Semantic version type.

use std::fmt;
use std::str::FromStr;

use crate::error::{SemVerError, SemVerErrorKind};
use crate::grammar;

/// Sections of a semantic version, in scan order.
///
/// The parser walks these left to right and never moves backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemVerSection {
    /// Digits before the first `.`
    Major,
    /// Digits between the first and second `.`
    Minor,
    /// Digits after the second `.`
    Patch,
    /// Dotted identifiers after `-`
    PreRelease,
    /// Dotted identifiers after `+`
    Build,
}

impl SemVerSection {
    /// Returns a human-readable name for the section.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Major => "major version",
            Self::Minor => "minor version",
            Self::Patch => "patch version",
            Self::PreRelease => "pre-release",
            Self::Build => "build metadata",
        }
    }
}

impl fmt::Display for SemVerSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed and validated semantic version (semantic versioning 2.0.0).
///
/// # Structure
///
/// ```text
/// <major>.<minor>.<patch>[-<pre-release>][+<build>]
/// ```
///
/// An empty pre-release or build section (`1.0.0-`, `1.0.0+`) is kept as
/// `Some("")` and is distinct from an absent one.
///
/// # Equality
///
/// `==` and `Hash` compare all five fields, build metadata included. Version
/// precedence ignores build metadata; use [`SemVer::precedence_eq`] for that.
///
/// # Examples
///
/// ```
/// use value_objects::SemVer;
///
/// let version = SemVer::parse("0.0.1-alpha3+beta").unwrap();
/// assert_eq!(version.patch(), 1);
/// assert_eq!(version.pre_release(), Some("alpha3"));
/// assert_eq!(version.build(), Some("beta"));
/// assert_eq!(version.to_string(), "0.0.1-alpha3+beta");
///
/// assert!(SemVer::try_parse("1.2").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SemVer {
    major: u64,
    minor: u64,
    patch: u64,
    pre_release: Option<String>,
    build: Option<String>,
}

impl SemVer {
    /// Parses a semantic version from a string.
    ///
    /// # Errors
    ///
    /// Returns `SemVerError` if:
    /// - The input is empty or stops before the patch version
    /// - A character is not allowed in the section being scanned
    /// - A numeric section is empty, has a leading zero, or overflows `u64`
    /// - A dot in the pre-release or build section does not separate two identifiers
    /// - A numeric pre-release identifier has a leading zero
    pub fn parse(input: &str) -> Result<Self, SemVerError> {
        Self::parse_inner(input).map_err(|kind| {
            log::debug!("rejected semantic version {input:?}: {kind}");
            SemVerError {
                input: input.to_string(),
                kind,
            }
        })
    }

    /// Parses a semantic version, returning `None` on any grammar violation.
    #[must_use]
    pub fn try_parse(input: &str) -> Option<Self> {
        Self::parse_inner(input).ok()
    }

    /// Creates a semantic version from components that are already known to be valid.
    ///
    /// No grammar checks are performed. Use [`SemVer::parse`] for untrusted input.
    #[must_use]
    pub const fn from_parts(
        major: u64,
        minor: u64,
        patch: u64,
        pre_release: Option<String>,
        build: Option<String>,
    ) -> Self {
        Self {
            major,
            minor,
            patch,
            pre_release,
            build,
        }
    }

    /// Returns the major version.
    #[must_use]
    pub const fn major(&self) -> u64 {
        self.major
    }

    /// Returns the minor version.
    #[must_use]
    pub const fn minor(&self) -> u64 {
        self.minor
    }

    /// Returns the patch version.
    #[must_use]
    pub const fn patch(&self) -> u64 {
        self.patch
    }

    /// Returns the pre-release section, if present.
    #[must_use]
    pub fn pre_release(&self) -> Option<&str> {
        self.pre_release.as_deref()
    }

    /// Returns the build metadata, if present.
    #[must_use]
    pub fn build(&self) -> Option<&str> {
        self.build.as_deref()
    }

    /// Returns true if a pre-release section is present, even an empty one.
    #[must_use]
    pub const fn is_pre_release(&self) -> bool {
        self.pre_release.is_some()
    }

    /// Returns true if both versions have the same precedence.
    ///
    /// This is equality with build metadata ignored.
    ///
    /// ```
    /// use value_objects::SemVer;
    ///
    /// let a = SemVer::parse("1.0.0+linux").unwrap();
    /// let b = SemVer::parse("1.0.0+macos").unwrap();
    /// assert_ne!(a, b);
    /// assert!(a.precedence_eq(&b));
    /// ```
    #[must_use]
    pub fn precedence_eq(&self, other: &Self) -> bool {
        self.major == other.major
            && self.minor == other.minor
            && self.patch == other.patch
            && self.pre_release == other.pre_release
    }

    fn parse_inner(input: &str) -> Result<Self, SemVerErrorKind> {
        if input.is_empty() {
            return Err(SemVerErrorKind::Empty);
        }

        let mut section = SemVerSection::Major;
        let mut start = 0;
        let mut numbers = [0u64; 3];
        let mut pre_release = None;

        for (i, c) in input.char_indices() {
            match section {
                SemVerSection::Major | SemVerSection::Minor | SemVerSection::Patch => {
                    if c.is_ascii_digit() {
                        continue;
                    }
                    let next = match (section, c) {
                        (SemVerSection::Major, '.') => SemVerSection::Minor,
                        (SemVerSection::Minor, '.') => SemVerSection::Patch,
                        (SemVerSection::Patch, '-') => SemVerSection::PreRelease,
                        (SemVerSection::Patch, '+') => SemVerSection::Build,
                        _ => {
                            return Err(SemVerErrorKind::UnexpectedChar {
                                char: c,
                                position: i,
                                section,
                            });
                        }
                    };
                    numbers[section as usize] =
                        grammar::numeric_component(input, start, i, section)?;
                    section = next;
                    start = i + 1;
                }
                SemVerSection::PreRelease if c == '+' => {
                    grammar::dotted_identifiers(input, start, i, section, true)?;
                    pre_release = Some(input[start..i].to_string());
                    section = SemVerSection::Build;
                    start = i + 1;
                }
                SemVerSection::PreRelease | SemVerSection::Build => {
                    if !grammar::is_identifier_char(c) && c != '.' {
                        return Err(SemVerErrorKind::UnexpectedChar {
                            char: c,
                            position: i,
                            section,
                        });
                    }
                }
            }
        }

        let end = input.len();
        let mut build = None;
        match section {
            SemVerSection::Major | SemVerSection::Minor => {
                return Err(SemVerErrorKind::UnexpectedEnd { section });
            }
            SemVerSection::Patch => {
                numbers[section as usize] = grammar::numeric_component(input, start, end, section)?;
            }
            SemVerSection::PreRelease => {
                grammar::dotted_identifiers(input, start, end, section, true)?;
                pre_release = Some(input[start..].to_string());
            }
            SemVerSection::Build => {
                grammar::dotted_identifiers(input, start, end, section, false)?;
                build = Some(input[start..].to_string());
            }
        }

        let [major, minor, patch] = numbers;
        Ok(Self {
            major,
            minor,
            patch,
            pre_release,
            build,
        })
    }
}

impl fmt::Display for SemVer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre_release) = &self.pre_release {
            write!(f, "-{pre_release}")?;
        }
        if let Some(build) = &self.build {
            write!(f, "+{build}")?;
        }
        Ok(())
    }
}

impl FromStr for SemVer {
    type Err = SemVerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for SemVer {
    type Error = SemVerError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SemVer {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SemVer {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
