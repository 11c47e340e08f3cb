// SPDX-License-Identifier: MPL-2.0
//! Lexeme resolution with language and shared-namespace fallback.
//!
//! Lookup order, first hit wins:
//!
//! 1. the requested namespace in the requested language;
//! 2. the requested namespace in the default language;
//! 3. for module namespaces only, `common` in the requested language and
//!    then in the default language;
//! 4. the key itself.
//!
//! Resolution never fails and never allocates.

use super::format::format_lexeme;
use super::registry::Registry;
use crate::domain::{Language, Namespace};
use std::sync::Arc;

/// Returned in place of an empty key, so callers always get visible text.
pub const MISSING_KEY_MARKER: &str = "MISSING: <empty key>";

/// Which step of the fallback chain produced a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Exact,
    DefaultLanguage,
    Shared,
    SharedDefaultLanguage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved<'a> {
    pub value: &'a str,
    pub tier: Tier,
}

impl Registry {
    /// Walks the fallback chain without the final literal-key step.
    #[must_use]
    pub fn lookup(
        &self,
        namespace: Namespace,
        key: &str,
        language: Language,
    ) -> Option<Resolved<'_>> {
        let fallback = self.fallback_language();
        let own = [
            (namespace, language, Tier::Exact),
            (namespace, fallback, Tier::DefaultLanguage),
        ];
        let shared = namespace.is_module().then_some([
            (Namespace::SHARED, language, Tier::Shared),
            (Namespace::SHARED, fallback, Tier::SharedDefaultLanguage),
        ]);

        own.into_iter()
            .chain(shared.into_iter().flatten())
            .find_map(|(ns, lang, tier)| {
                self.table(ns, lang)?
                    .get(key)
                    .map(|value| Resolved { value, tier })
            })
    }

    /// Resolves a key for a language given as an unvalidated code.
    ///
    /// Unknown or empty codes mean the registry's default language.
    #[must_use]
    pub fn resolve<'a>(&'a self, namespace: Namespace, key: &'a str, language: &str) -> &'a str {
        let language = Language::from_code(language).unwrap_or(self.fallback_language());
        self.resolve_in(namespace, key, language)
    }

    #[must_use]
    pub fn resolve_in<'a>(
        &'a self,
        namespace: Namespace,
        key: &'a str,
        language: Language,
    ) -> &'a str {
        match self.lookup(namespace, key, language) {
            Some(resolved) => resolved.value,
            None if key.is_empty() => MISSING_KEY_MARKER,
            None => key,
        }
    }
}

/// A registry bound to the language the user selected.
#[derive(Debug, Clone)]
pub struct Lexicon {
    registry: Arc<Registry>,
    language: Language,
}

impl Lexicon {
    pub fn new(registry: Arc<Registry>, language: Language) -> Self {
        Self { registry, language }
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    /// Switches the active language.
    ///
    /// Returns `false` and keeps the current language if the registry has no
    /// table for `language`.
    pub fn set_language(&mut self, language: Language) -> bool {
        if self.registry.has_language(language) {
            self.language = language;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    #[must_use]
    pub fn tr<'a>(&'a self, namespace: Namespace, key: &'a str) -> &'a str {
        self.registry.resolve_in(namespace, key, self.language)
    }

    /// Resolves a key and substitutes its `{placeholders}`.
    #[must_use]
    pub fn tr_with(&self, namespace: Namespace, key: &str, args: &[(&str, &str)]) -> String {
        format_lexeme(self.tr(namespace, key), args)
    }
}
