//! Flat key → value translation dictionaries.

use std::collections::BTreeMap;

use serde::Deserialize;

/// A flat mapping from translation key to localized text.
///
/// Deserialized directly from a JSON object of strings; there is no nesting
/// and no schema beyond "every value is a string".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Dictionary {
    entries: BTreeMap<String, String>,
}

impl Dictionary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a key. Absent keys are not an error.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Insert an entry. Mostly useful for tests and tooling.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }
}

impl FromIterator<(String, String)> for Dictionary {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_flat_json_object() {
        let dict: Dictionary =
            serde_json::from_str(r#"{"title": "Hello", "subtitle": "World"}"#).unwrap();
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.get("title"), Some("Hello"));
        assert_eq!(dict.get("missing"), None);
    }

    #[test]
    fn rejects_non_string_values() {
        let result: Result<Dictionary, _> = serde_json::from_str(r#"{"count": 3}"#);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_nested_objects() {
        let result: Result<Dictionary, _> = serde_json::from_str(r#"{"a": {"b": "c"}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn iteration_is_key_ordered() {
        let mut dict = Dictionary::new();
        dict.insert("zeta", "1");
        dict.insert("alpha", "2");
        let keys: Vec<&str> = dict.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["alpha", "zeta"]);
    }
}
