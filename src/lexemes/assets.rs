// SPDX-License-Identifier: MPL-2.0
//! Loaders that feed lexeme tables into the registry.
//!
//! Tables live at `<namespace>/<language>.toml`, both in the packaged assets
//! and in the optional overlay directory the user can point the settings at.
//! Files that do not end in `.toml` are ignored.

use super::registry::{load_registry, LoadIssue, LoadReport, TableSource};
use rust_embed::RustEmbed;
use std::fs;
use std::path::Path;

#[derive(RustEmbed)]
#[folder = "assets/lexemes/"]
struct Asset;

const TABLE_EXTENSION: &str = ".toml";

/// Splits `toolbar/en.toml` into `("toolbar", "en")`.
fn split_table_path(path: &str) -> Option<(&str, &str)> {
    let (namespace, file) = path.split_once('/')?;
    let language = file.strip_suffix(TABLE_EXTENSION)?;
    if namespace.is_empty() || language.is_empty() || language.contains('/') {
        return None;
    }
    Some((namespace, language))
}

/// Every table packaged into the binary.
pub fn embedded_sources() -> Vec<TableSource> {
    let mut paths: Vec<_> = Asset::iter().collect();
    paths.sort();

    paths
        .iter()
        .filter_map(|path| {
            let (namespace, language) = split_table_path(path)?;
            let content = Asset::get(path)?;
            Some(TableSource::toml(
                namespace,
                language,
                format!("embedded:{}", path),
                String::from_utf8_lossy(content.data.as_ref()).into_owned(),
            ))
        })
        .collect()
}

/// Tables found under `dir`, plus an issue for every file that could not be
/// read. A missing directory yields nothing.
pub fn directory_sources(dir: &Path) -> (Vec<TableSource>, Vec<LoadIssue>) {
    let mut sources = Vec::new();
    let mut issues = Vec::new();

    if !dir.is_dir() {
        return (sources, issues);
    }

    let mut namespace_dirs = match sorted_entries(dir) {
        Ok(entries) => entries,
        Err(err) => {
            issues.push(unreadable(dir, &err));
            return (sources, issues);
        }
    };
    namespace_dirs.retain(|path| path.is_dir());

    for namespace_dir in namespace_dirs {
        let Some(namespace) = namespace_dir.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let files = match sorted_entries(&namespace_dir) {
            Ok(files) => files,
            Err(err) => {
                issues.push(unreadable(&namespace_dir, &err));
                continue;
            }
        };
        for file in files {
            let Some(language) = file
                .file_name()
                .and_then(|n| n.to_str())
                .and_then(|n| n.strip_suffix(TABLE_EXTENSION))
            else {
                continue;
            };
            match fs::read_to_string(&file) {
                Ok(text) => sources.push(TableSource::toml(
                    namespace,
                    language,
                    file.display().to_string(),
                    text,
                )),
                Err(err) => issues.push(unreadable(&file, &err)),
            }
        }
    }

    (sources, issues)
}

/// Loads the packaged tables, then the overlay directory on top of them.
pub fn load_default_registry(overlay_dir: Option<&Path>) -> LoadReport {
    let mut sources = embedded_sources();
    let mut io_issues = Vec::new();

    if let Some(dir) = overlay_dir {
        let (overlay, issues) = directory_sources(dir);
        tracing::debug!("{} overlay tables from {}", overlay.len(), dir.display());
        sources.extend(overlay);
        io_issues = issues;
    }

    let mut report = load_registry(sources);
    io_issues.append(&mut report.issues);
    report.issues = io_issues;
    report
}

fn sorted_entries(dir: &Path) -> std::io::Result<Vec<std::path::PathBuf>> {
    let mut paths = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()?;
    paths.sort();
    Ok(paths)
}

fn unreadable(path: &Path, err: &std::io::Error) -> LoadIssue {
    LoadIssue::Unreadable {
        origin: path.display().to_string(),
        reason: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Choice, Language, ModuleId, Namespace};
    use tempfile::tempdir;

    #[test]
    fn split_table_path_accepts_namespace_and_language() {
        assert_eq!(split_table_path("toolbar/en.toml"), Some(("toolbar", "en")));
        assert_eq!(split_table_path("README.md"), None);
        assert_eq!(split_table_path("toolbar/en.json"), None);
        assert_eq!(split_table_path("a/b/c.toml"), None);
        assert_eq!(split_table_path("/en.toml"), None);
    }

    #[test]
    fn packaged_tables_load_without_issues() {
        let report = load_default_registry(None);
        assert!(report.is_clean(), "packaged lexemes have issues: {:?}", report.issues);
    }

    #[test]
    fn every_namespace_ships_a_default_table() {
        let registry = load_default_registry(None).registry;
        let default = Language::default_member();
        for namespace in Namespace::ALL {
            let table = registry.table(*namespace, default);
            assert!(table.is_some(), "no {} table for {}", default, namespace);
        }
    }

    #[test]
    fn packaged_module_lexemes_use_shared_fallback() {
        let registry = load_default_registry(None).registry;
        let openai = Namespace::Module(ModuleId::OpenAi);
        assert_eq!(
            registry.resolve(openai, "error_generic", "en"),
            registry.resolve(Namespace::Common, "error_generic", "en")
        );
    }

    #[test]
    fn overlay_directory_overrides_packaged_text() {
        let dir = tempdir().expect("failed to create temp dir");
        let toolbar = dir.path().join("toolbar");
        fs::create_dir_all(&toolbar).expect("failed to create namespace dir");
        fs::write(toolbar.join("en.toml"), "actions_label_save = \"Keep\"\n")
            .expect("failed to write overlay");
        fs::write(toolbar.join("notes.txt"), "ignored").expect("failed to write stray file");

        let report = load_default_registry(Some(dir.path()));
        assert!(report.is_clean(), "unexpected issues: {:?}", report.issues);
        assert_eq!(
            report
                .registry
                .resolve(Namespace::Toolbar, "actions_label_save", "en"),
            "Keep"
        );
    }

    #[test]
    fn malformed_overlay_is_reported_and_packaged_text_survives() {
        let dir = tempdir().expect("failed to create temp dir");
        let toolbar = dir.path().join("toolbar");
        fs::create_dir_all(&toolbar).expect("failed to create namespace dir");
        fs::write(toolbar.join("en.toml"), "[broken]\nkey = 1\n").expect("failed to write overlay");

        let report = load_default_registry(Some(dir.path()));
        assert_eq!(report.issues.len(), 1);
        assert!(matches!(report.issues[0], LoadIssue::Malformed { .. }));
        assert_eq!(
            report
                .registry
                .resolve(Namespace::Toolbar, "actions_label_save", "en"),
            "Save"
        );
    }

    #[test]
    fn missing_overlay_directory_yields_nothing() {
        let dir = tempdir().expect("failed to create temp dir");
        let (sources, issues) = directory_sources(&dir.path().join("absent"));
        assert!(sources.is_empty());
        assert!(issues.is_empty());
    }
}
