//! Data URI type (RFC 2397).

use std::fmt;
use std::str::FromStr;

use crate::constants::{BASE64_TOKEN, DATA_SCHEME, DEFAULT_MEDIA_TYPE};
use crate::error::{DataUriError, DataUriErrorKind};
use crate::grammar;
use crate::media_type_parameters::MediaTypeParameters;
use crate::percent;

/// Sections of a data URI, in scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataUriSection {
    /// Text before the first `:`
    Scheme,
    /// Text after `:` up to the first `;` or `,`
    MediaType,
    /// Parameter name after `;`
    ParameterKey,
    /// Parameter value after `=`
    ParameterValue,
    /// Everything after the first `,` outside the scheme
    Data,
}

impl DataUriSection {
    /// Returns a human-readable name for the section.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scheme => "scheme",
            Self::MediaType => "media type",
            Self::ParameterKey => "parameter name",
            Self::ParameterValue => "parameter value",
            Self::Data => "data",
        }
    }
}

impl fmt::Display for DataUriSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed and validated data URI.
///
/// # Structure
///
/// ```text
/// data:[<media-type>][;<key>=<value>]*[;base64],<data>
/// ```
///
/// The payload is stored percent-decoded. `base64` only records that the
/// flag was present; the payload is not checked to be valid base64.
///
/// Serializing re-encodes the payload, so `to_string()` can differ from the
/// parsed text (`%3a` becomes `%3A`, `%20` becomes `+`). Parsing the
/// serialized form always gives back an equal value.
///
/// # Examples
///
/// ```
/// use value_objects::DataUri;
///
/// let uri = DataUri::parse("data:text/plain;charset=UTF-8;page=21,the+data%3a1%2C2").unwrap();
/// assert_eq!(uri.media_type(), Some("text/plain"));
/// assert_eq!(uri.parameters().get("CHARSET"), Some("UTF-8"));
/// assert_eq!(uri.data(), "the data:1,2");
/// assert!(!uri.is_base64());
///
/// assert!(DataUri::try_parse("data:text/plain").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DataUri {
    media_type: Option<String>,
    parameters: MediaTypeParameters,
    base64: bool,
    data: String,
}

impl DataUri {
    /// Parses a data URI from a string.
    ///
    /// # Errors
    ///
    /// Returns `DataUriError` if:
    /// - The scheme is not "data:"
    /// - The `,` before the payload is missing
    /// - A parameter has an empty name, no value (other than a trailing
    ///   `base64` flag), or repeats an earlier name
    pub fn parse(input: &str) -> Result<Self, DataUriError> {
        Self::parse_inner(input).map_err(|kind| {
            log::debug!("rejected data URI {input:?}: {kind}");
            DataUriError {
                input: input.to_string(),
                kind,
            }
        })
    }

    /// Parses a data URI, returning `None` on any grammar violation.
    #[must_use]
    pub fn try_parse(input: &str) -> Option<Self> {
        Self::parse_inner(input).ok()
    }

    /// Creates a data URI from components that are already known to be valid.
    ///
    /// `data` is the decoded payload. No grammar checks are performed; an
    /// empty media type is stored as absent.
    #[must_use]
    pub fn from_parts(
        media_type: Option<String>,
        parameters: MediaTypeParameters,
        base64: bool,
        data: impl Into<String>,
    ) -> Self {
        Self {
            media_type: media_type.filter(|m| !m.is_empty()),
            parameters,
            base64,
            data: data.into(),
        }
    }

    /// Returns the media type, if present.
    #[must_use]
    pub fn media_type(&self) -> Option<&str> {
        self.media_type.as_deref()
    }

    /// Returns the media type, or `text/plain` when it is omitted.
    #[must_use]
    pub fn media_type_or_default(&self) -> &str {
        self.media_type().unwrap_or(DEFAULT_MEDIA_TYPE)
    }

    /// Returns the media type parameters.
    #[must_use]
    pub const fn parameters(&self) -> &MediaTypeParameters {
        &self.parameters
    }

    /// Returns true if the `base64` flag was present.
    #[must_use]
    pub const fn is_base64(&self) -> bool {
        self.base64
    }

    /// Returns the decoded payload.
    #[must_use]
    pub fn data(&self) -> &str {
        &self.data
    }

    fn parse_inner(input: &str) -> Result<Self, DataUriErrorKind> {
        let mut section = DataUriSection::Scheme;
        let mut start = 0;
        let mut media_type = None;
        let mut key = "";
        let mut parameters = MediaTypeParameters::new();
        let mut base64 = false;

        for (i, c) in input.char_indices() {
            match section {
                DataUriSection::Scheme => {
                    if c == ':' {
                        if &input[..i] != DATA_SCHEME {
                            return Err(Self::scheme_mismatch(input));
                        }
                        section = DataUriSection::MediaType;
                        start = i + 1;
                    } else if !grammar::could_become(&input[..i + c.len_utf8()], DATA_SCHEME) {
                        return Err(Self::scheme_mismatch(input));
                    }
                }
                DataUriSection::MediaType => {
                    if c == ';' || c == ',' {
                        media_type = Some(&input[start..i])
                            .filter(|m| !m.is_empty())
                            .map(str::to_string);
                        section = if c == ';' {
                            DataUriSection::ParameterKey
                        } else {
                            DataUriSection::Data
                        };
                        start = i + 1;
                    }
                }
                DataUriSection::ParameterKey => match c {
                    '=' => {
                        if i == start {
                            return Err(DataUriErrorKind::EmptyParameterKey { position: i });
                        }
                        key = &input[start..i];
                        section = DataUriSection::ParameterValue;
                        start = i + 1;
                    }
                    ',' if &input[start..i] == BASE64_TOKEN => {
                        base64 = true;
                        section = DataUriSection::Data;
                        start = i + 1;
                    }
                    ',' | ';' => {
                        return Err(DataUriErrorKind::DanglingParameterKey {
                            key: input[start..i].to_string(),
                            position: i,
                        });
                    }
                    _ => {}
                },
                DataUriSection::ParameterValue => {
                    if c == ';' || c == ',' {
                        if parameters.contains_key(key) {
                            return Err(DataUriErrorKind::DuplicateParameter {
                                key: key.to_string(),
                            });
                        }
                        parameters.insert(key, &input[start..i]);
                        section = if c == ';' {
                            DataUriSection::ParameterKey
                        } else {
                            DataUriSection::Data
                        };
                        start = i + 1;
                    }
                }
                // The payload is taken verbatim from `start`.
                DataUriSection::Data => break,
            }
        }

        match section {
            DataUriSection::Data => {}
            DataUriSection::Scheme => return Err(Self::scheme_mismatch(input)),
            _ => return Err(DataUriErrorKind::MissingDataSeparator { section }),
        }

        Ok(Self {
            media_type,
            parameters,
            base64,
            data: percent::decode(&input[start..]),
        })
    }

    fn scheme_mismatch(input: &str) -> DataUriErrorKind {
        DataUriErrorKind::SchemeMismatch {
            found: input.split_once(':').map(|(scheme, _)| scheme.to_string()),
        }
    }
}

impl fmt::Display for DataUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{DATA_SCHEME}:")?;
        if let Some(media_type) = &self.media_type {
            f.write_str(media_type)?;
        }
        for (key, value) in self.parameters.iter() {
            write!(f, ";{key}={value}")?;
        }
        if self.base64 {
            write!(f, ";{BASE64_TOKEN}")?;
        }
        write!(f, ",{}", percent::encode(&self.data))
    }
}

impl FromStr for DataUri {
    type Err = DataUriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for DataUri {
    type Error = DataUriError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for DataUri {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DataUri {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
