//! Query-parameter extraction for inbound link URLs.
//!
//! Handlers match against the raw URL string, but eligibility checks and
//! action construction consume a decoded parameter map. Numeric access is
//! validated here rather than trusting the match pattern to have constrained
//! every field.

use std::collections::BTreeMap;
use url::Url;

/// Decoded query parameters of an inbound URL.
///
/// Keys map to the *first* occurrence of each parameter; insertion order is
/// irrelevant. Absence of a key is load-bearing for handler eligibility, so
/// lookups return `Option` rather than defaulting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: BTreeMap<String, String>,
}

impl QueryParams {
    /// Extract parameters from a URL string.
    ///
    /// Absolute URLs go through full parsing; anything `Url` rejects (bare
    /// paths, scheme-relative links) falls back to decoding the substring
    /// after the first `?`. A URL with no query yields an empty map.
    pub fn from_url(url: &str) -> Self {
        match Url::parse(url) {
            Ok(parsed) => Self::from_pairs(parsed.query_pairs().map(|(k, v)| (k.into_owned(), v.into_owned()))),
            Err(_) => match url.split_once('?') {
                Some((_, query)) => Self::from_pairs(
                    url::form_urlencoded::parse(query.as_bytes())
                        .map(|(k, v)| (k.into_owned(), v.into_owned())),
                ),
                None => Self::default(),
            },
        }
    }

    fn from_pairs(pairs: impl Iterator<Item = (String, String)>) -> Self {
        let mut entries = BTreeMap::new();
        for (key, value) in pairs {
            // First occurrence wins.
            entries.entry(key).or_insert(value);
        }
        Self { entries }
    }

    /// Raw string value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether `key` appeared in the query string at all.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Value for `key` parsed as a base-10 integer.
    ///
    /// Returns `None` if the key is absent or the value is not numeric.
    pub fn int(&self, key: &str) -> Option<i64> {
        self.get(key)?.parse().ok()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter.into_iter().map(|(k, v)| (k.into(), v.into())))
    }
}
