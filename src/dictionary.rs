//! Word-to-URL dictionary loaded from a YAML mapping.
//!
//! ```yaml
//! rust: https://www.rust-lang.org
//! Cargo: https://doc.rust-lang.org/cargo/
//! ```
//!
//! Keys pass through [`normalize_key`]; values are kept verbatim and are not
//! checked to be URLs. Keys that collide after normalization, or that are
//! repeated literally, keep the last value in the file. Entries whose word
//! or URL is empty (`word:`) are skipped with a warning.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;

use crate::error::Result;
use crate::normalize::{normalize_key, normalize_word};

/// Immutable mapping from normalized word to link target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlDictionary {
    entries: HashMap<String, String>,
}

impl UrlDictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a dictionary from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let source = fs::read_to_string(path)?;
        Self::from_yaml_str(&source)
    }

    /// Parse a dictionary from YAML text. A blank document is an empty dictionary.
    pub fn from_yaml_str(source: &str) -> Result<Self> {
        if source.trim().is_empty() {
            return Ok(Self::new());
        }
        Ok(serde_yaml::from_str(source)?)
    }

    /// Build a dictionary from raw pairs, normalizing every key.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut dictionary = Self::new();
        for (key, url) in pairs {
            dictionary.insert(key.as_ref(), url.into());
        }
        dictionary
    }

    fn insert(&mut self, key: &str, url: String) {
        self.entries.insert(normalize_key(key), url);
    }

    /// Look up an already-normalized key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Look up raw word text from a page, applying word normalization first.
    pub fn lookup_word(&self, text: &str) -> Option<&str> {
        self.get(&normalize_word(text))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(normalized key, url)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<'de> Deserialize<'de> for UrlDictionary {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(DictionaryVisitor)
    }
}

struct DictionaryVisitor;

impl<'de> Visitor<'de> for DictionaryVisitor {
    type Value = UrlDictionary;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a mapping of words to URLs")
    }

    // Entries are consumed one by one so repeated keys overwrite instead of
    // being rejected.
    fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut dictionary = UrlDictionary::new();
        while let Some((Scalar(key), Scalar(url))) = map.next_entry()? {
            match (key, url) {
                (Some(key), Some(url)) => dictionary.insert(&key, url),
                (key, _) => log::warn!(
                    "Dictionary entry {:?} has no word or no URL, skipped",
                    key.unwrap_or_default()
                ),
            }
        }
        Ok(dictionary)
    }
}

/// A YAML scalar rendered as text: strings, numbers and booleans.
/// `None` for an empty or null scalar.
struct Scalar(Option<String>);

impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ScalarVisitor;

        impl<'de> Visitor<'de> for ScalarVisitor {
            type Value = Scalar;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a string, number, boolean or null")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Scalar, E> {
                Ok(Scalar(Some(v.to_owned())))
            }

            fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<Scalar, E> {
                Ok(Scalar(Some(v)))
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> std::result::Result<Scalar, E> {
                Ok(Scalar(Some(v.to_string())))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Scalar, E> {
                Ok(Scalar(Some(v.to_string())))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Scalar, E> {
                Ok(Scalar(Some(v.to_string())))
            }

            // `{:?}` keeps the decimal point: 1.0 stays "1.0"
            fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Scalar, E> {
                Ok(Scalar(Some(format!("{:?}", v))))
            }

            fn visit_unit<E: de::Error>(self) -> std::result::Result<Scalar, E> {
                Ok(Scalar(None))
            }

            fn visit_none<E: de::Error>(self) -> std::result::Result<Scalar, E> {
                Ok(Scalar(None))
            }
        }

        deserializer.deserialize_any(ScalarVisitor)
    }
}
