//! Query parameters for RPC-style actions
//!
//! Parameters are kept sorted by key, which is also the order the signature
//! canonicalizes them in. Overlays are merged in order and the last writer
//! of a key wins.

use std::collections::BTreeMap;
use std::fmt;

use crate::http::url::percent_encode;

/// Ordered key/value query parameters.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: BTreeMap<String, String>,
}

impl Params {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Params::set`].
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.set(key, value);
        self
    }

    /// Set `key`, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl ToString) {
        self.entries.insert(key.into(), value.to_string());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Apply `overlays` in order; for each key the last overlay setting it wins.
    #[must_use]
    pub fn merge<I>(mut self, overlays: I) -> Self
    where
        I: IntoIterator<Item = Params>,
    {
        for overlay in overlays {
            self.entries.extend(overlay.entries);
        }
        self
    }

    /// Iterate in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `k=v` pairs joined with `&`, keys sorted, both sides percent-encoded.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        self.iter()
            .map(|(k, v)| format!("{}={}", percent_encode(k), percent_encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Params {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut params = Params::new();
        for (k, v) in iter {
            params.set(k, v);
        }
        params
    }
}

impl IntoIterator for Params {
    type Item = (String, String);
    type IntoIter = std::collections::btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl fmt::Debug for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const REDACTED: [&str; 2] = ["Signature", "AccessKeyId"];
        f.debug_map()
            .entries(self.iter().map(|(k, v)| {
                if REDACTED.contains(&k) {
                    (k, "<redacted>")
                } else {
                    (k, v)
                }
            }))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_last_writer_wins() {
        let base = Params::new().with("Action", "DescribeDomains").with("PageSize", 20);
        let merged = base.merge([
            Params::new().with("PageSize", 2),
            Params::new().with("PageNumber", 1).with("PageSize", 5),
        ]);
        assert_eq!(merged.get("Action"), Some("DescribeDomains"));
        assert_eq!(merged.get("PageSize"), Some("5"));
        assert_eq!(merged.get("PageNumber"), Some("1"));
        assert_eq!(merged.len(), 3);
    }

    #[test]
    fn test_query_string_sorted_and_encoded() {
        let params: Params = [("b", "x y"), ("a", "1:2")].into_iter().collect();
        assert_eq!(params.to_query_string(), "a=1%3A2&b=x%20y");
    }

    #[test]
    fn test_debug_redacts_credentials() {
        let params = Params::new().with("AccessKeyId", "id").with("Action", "X");
        let debug = format!("{params:?}");
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("\"id\""));
    }
}
