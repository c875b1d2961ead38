//! Marker type for JSON text that has not been parsed.

use std::fmt;
use std::ops::Deref;

/// JSON text that is carried around without being parsed (yet).
///
/// No validation happens on construction; the type only records intent.
/// Because the content is opaque, equality, ordering and hashing are
/// ordinal over the raw text: `{"a":1}` and `{ "a": 1 }` are different.
///
/// # Examples
///
/// ```
/// use value_objects::UnparsedJson;
///
/// let json = UnparsedJson::from(r#"{ "property": "value" }"#);
/// assert!(json.starts_with('{'));
/// assert_ne!(json, UnparsedJson::from(r#"{"property":"value"}"#));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct UnparsedJson(String);

impl UnparsedJson {
    /// Wraps JSON text without inspecting it.
    #[must_use]
    pub fn new(json: impl Into<String>) -> Self {
        Self(json.into())
    }

    /// Returns the raw text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the raw text, consuming the wrapper.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for UnparsedJson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for UnparsedJson {
    fn from(json: String) -> Self {
        Self(json)
    }
}

impl From<&str> for UnparsedJson {
    fn from(json: &str) -> Self {
        Self(json.to_string())
    }
}

impl From<UnparsedJson> for String {
    fn from(json: UnparsedJson) -> Self {
        json.0
    }
}

impl AsRef<str> for UnparsedJson {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for UnparsedJson {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for UnparsedJson {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for UnparsedJson {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comparison_is_ordinal() {
        let a = UnparsedJson::new("[1,2]");
        assert_eq!(a, UnparsedJson::from("[1,2]".to_string()));
        assert_ne!(a, UnparsedJson::new("[1, 2]"));
        assert!(UnparsedJson::new("A") < UnparsedJson::new("a"));
    }

    #[test]
    fn text_is_kept_verbatim() {
        let raw = "not json at all";
        let json = UnparsedJson::new(raw);
        assert_eq!(json.as_str(), raw);
        assert_eq!(json.to_string(), raw);
        assert_eq!(String::from(json.clone()), raw);
        assert_eq!(json.into_inner(), raw);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deferred_parse_with_serde_json() {
        #[derive(serde::Deserialize)]
        struct Probe {
            property: String,
        }

        let json = UnparsedJson::from(r#"{ "property": "value" }"#);
        let probe: Probe = serde_json::from_str(&json).unwrap();
        assert_eq!(probe.property, "value");
    }
}
