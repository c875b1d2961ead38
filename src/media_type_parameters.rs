//! Media type parameters of a data URI.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Parameters attached to a data URI media type.
///
/// Keys compare ASCII-case-insensitively; values compare exactly. Entries
/// keep the order they were inserted in, which is the order they serialize
/// in, but equality does not depend on order.
///
/// # Examples
///
/// ```
/// use value_objects::MediaTypeParameters;
///
/// let params: MediaTypeParameters = [("charset", "UTF-8"), ("page", "21")]
///     .into_iter()
///     .collect();
/// assert_eq!(params.get("CharSet"), Some("UTF-8"));
/// assert_eq!(params.to_string(), "charset=UTF-8;page=21");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MediaTypeParameters {
    entries: Vec<(String, String)>,
}

impl MediaTypeParameters {
    /// Creates an empty parameter list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value for a key, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.position(key).map(|i| self.entries[i].1.as_str())
    }

    /// Returns true if the key is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Sets a parameter, returning the previous value for the key.
    ///
    /// Replacing keeps the entry's original position and key spelling.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        if let Some(i) = self.position(&key) {
            Some(std::mem::replace(&mut self.entries[i].1, value))
        } else {
            self.entries.push((key, value));
            None
        }
    }

    /// Returns true if there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns an iterator over the parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the charset parameter, if present.
    #[must_use]
    pub fn charset(&self) -> Option<&str> {
        self.get("charset")
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|(k, _)| k.eq_ignore_ascii_case(key))
    }
}

impl PartialEq for MediaTypeParameters {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl Eq for MediaTypeParameters {}

impl Hash for MediaTypeParameters {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut folded: Vec<(String, &str)> = self
            .iter()
            .map(|(k, v)| (k.to_ascii_lowercase(), v))
            .collect();
        folded.sort_unstable();
        folded.hash(state);
    }
}

impl<K, V> FromIterator<(K, V)> for MediaTypeParameters
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

impl fmt::Display for MediaTypeParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs: Vec<String> = self.iter().map(|(k, v)| format!("{k}={v}")).collect();
        write!(f, "{}", pairs.join(";"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(params: &MediaTypeParameters) -> u64 {
        let mut hasher = DefaultHasher::new();
        params.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn lookup_ignores_key_case() {
        let params: MediaTypeParameters = [("Charset", "UTF-8")].into_iter().collect();
        assert_eq!(params.get("charset"), Some("UTF-8"));
        assert_eq!(params.get("CHARSET"), Some("UTF-8"));
        assert!(params.contains_key("cHaRsEt"));
        assert_eq!(params.charset(), Some("UTF-8"));
        assert_eq!(params.get("page"), None);
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut params = MediaTypeParameters::new();
        assert_eq!(params.insert("a", "1"), None);
        assert_eq!(params.insert("b", "2"), None);
        assert_eq!(params.insert("A", "3"), Some("1".to_string()));

        let items: Vec<_> = params.iter().collect();
        assert_eq!(items, vec![("a", "3"), ("b", "2")]);
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn equality_ignores_order_and_key_case() {
        let a: MediaTypeParameters = [("a", "1"), ("b", "2")].into_iter().collect();
        let b: MediaTypeParameters = [("B", "2"), ("A", "1")].into_iter().collect();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn equality_respects_value_case() {
        let upper: MediaTypeParameters = [("charset", "UTF-8")].into_iter().collect();
        let lower: MediaTypeParameters = [("charset", "utf-8")].into_iter().collect();
        assert_ne!(upper, lower);
    }

    #[test]
    fn different_sizes_are_unequal() {
        let one: MediaTypeParameters = [("a", "1")].into_iter().collect();
        let two: MediaTypeParameters = [("a", "1"), ("b", "2")].into_iter().collect();
        assert_ne!(one, two);
        assert_ne!(two, one);
        assert_ne!(MediaTypeParameters::new(), one);
    }

    #[test]
    fn display_in_insertion_order() {
        let params: MediaTypeParameters = [("z", "1"), ("a", "2")].into_iter().collect();
        assert_eq!(params.to_string(), "z=1;a=2");
        assert_eq!(MediaTypeParameters::new().to_string(), "");
    }
}
