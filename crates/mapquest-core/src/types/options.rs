use crate::notation::camelize;
use std::collections::BTreeMap;
use std::fmt::Display;

/// Options sent along with a geocoding request
///
/// Keys may be written in `snake_case`; they are converted to MapQuest's
/// `lowerCamelCase` when the request is built, so any option the API
/// accepts can be passed without this crate knowing about it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeocodeOptions {
    entries: BTreeMap<String, String>,
}

impl GeocodeOptions {
    /// Create an empty option set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an option, replacing any previous value for the same key
    pub fn insert(&mut self, key: impl Into<String>, value: impl Display) {
        self.entries.insert(key.into(), value.to_string());
    }

    /// Builder form of [`insert`](Self::insert)
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.insert(key, value);
        self
    }

    /// Get the value stored under a key, as written by the caller
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of options
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no options are set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over options with their keys as written by the caller
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Options keyed the way MapQuest expects them
    ///
    /// When two keys camelize to the same name, the one that sorts last wins.
    #[must_use]
    pub fn to_mapquest_notation(&self) -> BTreeMap<String, String> {
        self.entries
            .iter()
            .map(|(k, v)| (camelize(k), v.clone()))
            .collect()
    }
}

impl<K: Into<String>, V: Display> FromIterator<(K, V)> for GeocodeOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut options = Self::new();
        for (key, value) in iter {
            options.insert(key, value);
        }
        options
    }
}

impl<K: Into<String>, V: Display> Extend<(K, V)> for GeocodeOptions {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_notation() {
        assert!(GeocodeOptions::new().to_mapquest_notation().is_empty());
    }

    #[test]
    fn test_notation_transforms_keys() {
        let options = GeocodeOptions::new()
            .with("a_key", "value")
            .with("another_key", "value");
        let notation = options.to_mapquest_notation();

        assert_eq!(notation.len(), 2);
        assert_eq!(notation.get("aKey").map(String::as_str), Some("value"));
        assert_eq!(notation.get("anotherKey").map(String::as_str), Some("value"));
    }

    #[test]
    fn test_notation_keeps_empty_key() {
        let options = GeocodeOptions::new().with("", "value");
        let notation = options.to_mapquest_notation();
        assert_eq!(notation.get("").map(String::as_str), Some("value"));
    }

    #[test]
    fn test_values_are_displayed() {
        let options: GeocodeOptions = [("max_results", 2)].into_iter().collect();
        assert_eq!(options.get("max_results"), Some("2"));

        let mut options = options;
        options.extend([("thumb_maps", false)]);
        assert_eq!(options.len(), 2);
        assert_eq!(
            options.to_mapquest_notation().get("thumbMaps").map(String::as_str),
            Some("false")
        );
    }

    #[test]
    fn test_colliding_keys_last_wins() {
        let options = GeocodeOptions::new()
            .with("maxResults", 1)
            .with("max_results", 5);
        let notation = options.to_mapquest_notation();
        assert_eq!(notation.len(), 1);
        assert_eq!(notation.get("maxResults").map(String::as_str), Some("5"));
    }
}
