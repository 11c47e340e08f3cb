// SPDX-License-Identifier: MPL-2.0
//! Selection of the active interface language at startup.

use super::registry::Registry;
use crate::config::Config;
use crate::domain::{Choice, Language};

/// Picks the active language for `registry`.
///
/// Candidates are tried in order: the `--lang` argument, the settings file,
/// then the OS locale. The first one that names a supported language with
/// at least one table wins; otherwise the registry's default language (or
/// the default member, for an empty registry) is used.
pub fn select_language(cli_lang: Option<&str>, config: &Config, registry: &Registry) -> Language {
    let os_locale = sys_locale::get_locale();
    resolve_language(
        cli_lang,
        config.general.language.as_deref(),
        os_locale.as_deref(),
        registry,
    )
    .unwrap_or_else(|| {
        registry
            .default_language()
            .unwrap_or_else(|_| Language::default_member())
    })
}

fn resolve_language(
    cli_lang: Option<&str>,
    configured: Option<&str>,
    os_locale: Option<&str>,
    registry: &Registry,
) -> Option<Language> {
    [("cli", cli_lang), ("config", configured), ("os", os_locale)]
        .into_iter()
        .find_map(|(origin, candidate)| {
            let language = Language::from_code(candidate?)?;
            if registry.has_language(language) {
                tracing::debug!("using language '{}' from {}", language, origin);
                Some(language)
            } else {
                tracing::debug!("ignoring language '{}' from {}: no tables", language, origin);
                None
            }
        })
}
