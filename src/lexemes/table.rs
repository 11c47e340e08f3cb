// SPDX-License-Identifier: MPL-2.0
//! A single lexeme table: the strings of one namespace in one language.

use std::collections::HashMap;
use std::fmt;

/// Why a table could not be built from its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// The source is not valid TOML.
    Syntax(String),
    /// A value is not a string (nested table, array, number, ...).
    NotFlat { key: String, found: &'static str },
    /// A key is empty.
    EmptyKey,
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::Syntax(msg) => write!(f, "invalid TOML: {}", msg),
            TableError::NotFlat { key, found } => {
                write!(f, "value of '{}' is a {}, expected a string", key, found)
            }
            TableError::EmptyKey => write!(f, "empty key"),
        }
    }
}

/// Immutable mapping from lexeme key to localized text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexemeTable {
    entries: HashMap<String, String>,
}

impl LexemeTable {
    /// Builds a table from key/value pairs. Later duplicates win.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut entries = HashMap::new();
        for (key, value) in pairs {
            let key = key.into();
            if key.is_empty() {
                return Err(TableError::EmptyKey);
            }
            entries.insert(key, value.into());
        }
        Ok(Self { entries })
    }

    /// Parses a flat TOML document of `key = "text"` lines.
    pub fn parse_toml(text: &str) -> Result<Self, TableError> {
        let document: toml::Table =
            toml::from_str(text).map_err(|e| TableError::Syntax(e.message().to_string()))?;

        let mut pairs = Vec::with_capacity(document.len());
        for (key, value) in document {
            match value {
                toml::Value::String(text) => pairs.push((key, text)),
                other => {
                    return Err(TableError::NotFlat {
                        key,
                        found: other.type_str(),
                    })
                }
            }
        }
        Self::from_pairs(pairs)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
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

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Copies every entry of `other` over this table.
    pub(crate) fn overlay(&mut self, other: LexemeTable) {
        self.entries.extend(other.entries);
    }
}
