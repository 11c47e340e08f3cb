// SPDX-License-Identifier: MPL-2.0
//! The lexeme registry and its startup loader.
//!
//! [`load_registry`] consumes one source per (namespace, language) pair and
//! builds a read-only [`Registry`]. Problems with individual sources never
//! abort the build: the offending table is skipped, a [`LoadIssue`] is
//! recorded, and lookups for its keys fall through the usual fallback chain.

use super::table::{LexemeTable, TableError};
use crate::domain::{Choice, Language, Namespace};
use crate::error::{Error, Result};
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// Raw content of one table, as handed over by a loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceBody {
    /// A flat TOML document.
    Toml(String),
    /// Already-split key/value pairs.
    Pairs(Vec<(String, String)>),
}

/// One (namespace, language) table waiting to be registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSource {
    pub namespace: String,
    pub language: String,
    /// Where the table came from, for diagnostics (e.g. an asset path).
    pub origin: String,
    pub body: SourceBody,
}

impl TableSource {
    pub fn toml(
        namespace: impl Into<String>,
        language: impl Into<String>,
        origin: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            language: language.into(),
            origin: origin.into(),
            body: SourceBody::Toml(text.into()),
        }
    }

    pub fn pairs<K, V>(
        namespace: impl Into<String>,
        language: impl Into<String>,
        pairs: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let namespace = namespace.into();
        let language = language.into();
        Self {
            origin: format!("{}/{}", namespace, language),
            namespace,
            language,
            body: SourceBody::Pairs(
                pairs
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

/// A startup diagnostic produced while building the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadIssue {
    UnknownNamespace {
        origin: String,
        namespace: String,
    },
    UnknownLanguage {
        origin: String,
        language: String,
    },
    Malformed {
        origin: String,
        reason: TableError,
    },
    Unreadable {
        origin: String,
        reason: String,
    },
    /// A namespace has tables, but none in the default language.
    MissingDefaultTable {
        namespace: Namespace,
        default_language: Language,
    },
    /// A translation defines keys the default-language table lacks.
    KeysMissingFromDefault {
        namespace: Namespace,
        language: Language,
        keys: Vec<String>,
    },
}

impl fmt::Display for LoadIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadIssue::UnknownNamespace { origin, namespace } => {
                write!(f, "{}: unknown namespace '{}'", origin, namespace)
            }
            LoadIssue::UnknownLanguage { origin, language } => {
                write!(f, "{}: unknown language '{}'", origin, language)
            }
            LoadIssue::Malformed { origin, reason } => write!(f, "{}: {}", origin, reason),
            LoadIssue::Unreadable { origin, reason } => {
                write!(f, "{}: cannot read: {}", origin, reason)
            }
            LoadIssue::MissingDefaultTable {
                namespace,
                default_language,
            } => write!(
                f,
                "namespace '{}' has no table for default language '{}'",
                namespace, default_language
            ),
            LoadIssue::KeysMissingFromDefault {
                namespace,
                language,
                keys,
            } => write!(
                f,
                "{}/{} defines keys missing from the default language: {}",
                namespace,
                language,
                keys.join(", ")
            ),
        }
    }
}

/// All lexeme tables, keyed by (namespace, language). Read-only once built.
#[derive(Debug, Clone)]
pub struct Registry {
    tables: HashMap<(Namespace, Language), LexemeTable>,
    default_language: Language,
}

impl Registry {
    #[must_use]
    pub fn table(&self, namespace: Namespace, language: Language) -> Option<&LexemeTable> {
        self.tables.get(&(namespace, language))
    }

    /// The language lookups fall back to.
    ///
    /// Fails only when the registry holds no tables at all, which is a
    /// startup configuration error.
    pub fn default_language(&self) -> Result<Language> {
        if self.tables.is_empty() {
            Err(Error::EmptyRegistry)
        } else {
            Ok(self.default_language)
        }
    }

    /// Default language without the emptiness check, for the lookup path.
    pub(crate) fn fallback_language(&self) -> Language {
        self.default_language
    }

    /// Languages with at least one table.
    #[must_use]
    pub fn languages(&self) -> BTreeSet<Language> {
        self.tables.keys().map(|(_, language)| *language).collect()
    }

    /// Namespaces with at least one table.
    #[must_use]
    pub fn namespaces(&self) -> BTreeSet<Namespace> {
        self.tables.keys().map(|(namespace, _)| *namespace).collect()
    }

    #[must_use]
    pub fn has_language(&self, language: Language) -> bool {
        self.tables.keys().any(|(_, l)| *l == language)
    }

    #[must_use]
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

/// Outcome of [`load_registry`]: the registry plus every diagnostic raised.
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub registry: Registry,
    pub issues: Vec<LoadIssue>,
}

impl LoadReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Fails with the first issue, for callers that treat any issue as fatal.
    pub fn check(&self) -> Result<()> {
        match self.issues.first() {
            Some(issue) => Err(Error::from(issue.clone())),
            None => Ok(()),
        }
    }

    /// Writes every issue to the log at `warn` level.
    pub fn log_issues(&self) {
        for issue in &self.issues {
            tracing::warn!("lexeme load issue: {}", issue);
        }
    }

    #[must_use]
    pub fn into_registry(self) -> Registry {
        self.registry
    }
}

/// Builds a registry with the default member of [`Language`] as fallback.
pub fn load_registry<I>(sources: I) -> LoadReport
where
    I: IntoIterator<Item = TableSource>,
{
    load_registry_with_default(sources, Language::default_member())
}

/// Builds a registry with an explicit fallback language.
///
/// Sources are applied in order; a later source for an already registered
/// pair overlays it key by key.
pub fn load_registry_with_default<I>(sources: I, default_language: Language) -> LoadReport
where
    I: IntoIterator<Item = TableSource>,
{
    let mut tables: HashMap<(Namespace, Language), LexemeTable> = HashMap::new();
    let mut issues = Vec::new();

    for source in sources {
        match register(source) {
            Ok((pair, table)) => match tables.get_mut(&pair) {
                Some(existing) => {
                    tracing::debug!("overlaying {}/{}", pair.0, pair.1);
                    existing.overlay(table);
                }
                None => {
                    tables.insert(pair, table);
                }
            },
            Err(issue) => issues.push(issue),
        }
    }

    issues.extend(completeness_issues(&tables, default_language));

    LoadReport {
        registry: Registry {
            tables,
            default_language,
        },
        issues,
    }
}

fn register(
    source: TableSource,
) -> std::result::Result<((Namespace, Language), LexemeTable), LoadIssue> {
    let TableSource {
        namespace,
        language,
        origin,
        body,
    } = source;

    let Some(ns) = Namespace::from_name(&namespace) else {
        return Err(LoadIssue::UnknownNamespace { origin, namespace });
    };
    let Some(lang) = Language::from_code(&language) else {
        return Err(LoadIssue::UnknownLanguage { origin, language });
    };

    let table = match body {
        SourceBody::Toml(text) => LexemeTable::parse_toml(&text),
        SourceBody::Pairs(pairs) => LexemeTable::from_pairs(pairs),
    }
    .map_err(|reason| LoadIssue::Malformed {
        origin: origin.clone(),
        reason,
    })?;

    Ok(((ns, lang), table))
}

/// Checks that every namespace has a default-language table covering the
/// keys of its translations.
fn completeness_issues(
    tables: &HashMap<(Namespace, Language), LexemeTable>,
    default_language: Language,
) -> Vec<LoadIssue> {
    let mut pairs: Vec<_> = tables.keys().copied().collect();
    pairs.sort_unstable();

    let namespaces: BTreeSet<Namespace> = pairs.iter().map(|(ns, _)| *ns).collect();
    let mut issues = Vec::new();

    for namespace in namespaces {
        let Some(default_table) = tables.get(&(namespace, default_language)) else {
            issues.push(LoadIssue::MissingDefaultTable {
                namespace,
                default_language,
            });
            continue;
        };

        for &(ns, language) in &pairs {
            if ns != namespace || language == default_language {
                continue;
            }
            let Some(table) = tables.get(&(ns, language)) else {
                continue;
            };
            let mut keys: Vec<String> = table
                .keys()
                .filter(|key| !default_table.contains_key(key))
                .map(str::to_string)
                .collect();
            if !keys.is_empty() {
                keys.sort_unstable();
                issues.push(LoadIssue::KeysMissingFromDefault {
                    namespace,
                    language,
                    keys,
                });
            }
        }
    }

    issues
}
