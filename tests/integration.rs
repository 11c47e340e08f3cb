// SPDX-License-Identifier: MPL-2.0
use notemark::config::{self, Config, GeneralConfig};
use notemark::domain::{AssistantModel, Choice, Language, ModuleId, Namespace, ThemeMode};
use notemark::lexemes::{
    format_lexeme, load_default_registry, load_registry, placeholders, select_language, Lexicon,
    TableSource,
};
use std::sync::Arc;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let registry = load_default_registry(None).registry;
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en
    let initial_config = Config {
        general: GeneralConfig {
            language: Some("en".to_string()),
            theme_mode: ThemeMode::System,
        },
        ..Config::default()
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");
    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    assert_eq!(
        select_language(None, &loaded_initial_config, &registry),
        Language::English
    );

    // 2. Change config to de
    let german_config = Config {
        general: GeneralConfig {
            language: Some("de".to_string()),
            theme_mode: ThemeMode::Dark,
        },
        ..Config::default()
    };
    config::save_to_path(&german_config, &temp_config_file_path)
        .expect("Failed to write german config file");
    let loaded_german_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load german config from path");
    let language = select_language(None, &loaded_german_config, &registry);
    assert_eq!(language, Language::German);

    let lexicon = Lexicon::new(Arc::new(registry), language);
    assert_eq!(lexicon.tr(Namespace::MainMenu, "menu_file"), "Datei");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn cli_language_overrides_config() {
    let registry = load_default_registry(None).registry;
    let config = Config {
        general: GeneralConfig {
            language: Some("de".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    assert_eq!(
        select_language(Some("RU"), &config, &registry),
        Language::Russian
    );
}

#[test]
fn save_falls_back_to_default_without_french_table() {
    let registry = load_registry(vec![
        TableSource::pairs("toolbar", "en", [("actions_label_save", "Save")]),
        TableSource::pairs("toolbar", "de", [("actions_label_save", "Speichern")]),
    ])
    .registry;

    assert_eq!(
        registry.resolve(Namespace::Toolbar, "actions_label_save", "fr"),
        "Save"
    );
    assert_eq!(
        registry.resolve(Namespace::Toolbar, "actions_label_save", "de"),
        "Speichern"
    );
}

#[test]
fn cursor_label_for_chinese_is_the_english_template() {
    let registry = load_default_registry(None).registry;
    let english = registry.resolve(Namespace::StatusBar, "statusbar_cursor_label", "en");
    let chinese = registry.resolve(Namespace::StatusBar, "statusbar_cursor_label", "zh");

    assert_eq!(chinese, english);
    assert_eq!(placeholders(chinese), vec!["line", "column"]);
    assert_eq!(
        format_lexeme(chinese, &[("line", "10"), ("column", "2")]),
        "Ln 10, Col 2"
    );
}

#[test]
fn icons_resolve_in_every_language() {
    let registry = load_default_registry(None).registry;
    for language in Language::ALL {
        assert_eq!(
            registry.resolve_in(Namespace::Toolbar, "icon_save", *language),
            "\u{f0c7}"
        );
    }
}

#[test]
fn every_choice_has_a_packaged_label() {
    let registry = load_default_registry(None).registry;
    let default = Language::default_member();

    for theme in ThemeMode::ALL {
        let label = registry.lookup(Namespace::Settings, theme.lexeme_key(), default);
        assert!(label.is_some(), "no label for theme {}", theme.key());
    }
    for model in AssistantModel::ALL {
        let label = registry.lookup(model.lexeme_namespace(), model.lexeme_key(), default);
        assert!(label.is_some(), "no label for model {}", model.key());
    }
}

#[test]
fn absent_keys_never_resolve_to_empty_text() {
    let registry = load_default_registry(None).registry;
    for namespace in Namespace::ALL {
        for language in ["en", "de", "xx", ""] {
            let value = registry.resolve(*namespace, "no_such_key", language);
            assert_eq!(value, "no_such_key");
        }
        assert!(!registry.resolve(*namespace, "", "en").is_empty());
    }
}

#[test]
fn module_error_text_comes_from_common_namespace() {
    let registry = load_default_registry(None).registry;
    let onnx = Namespace::Module(ModuleId::Onnx);
    assert_eq!(
        registry.resolve(onnx, "error_generic", "de"),
        "Etwas ist schiefgelaufen"
    );
    assert_eq!(registry.resolve(onnx, "retry", "ja"), "Retry");
}

#[test]
fn registry_is_shared_read_only_across_threads() {
    let registry = Arc::new(load_default_registry(None).registry);
    let handles: Vec<_> = ["en", "de", "fr", "ru"]
        .into_iter()
        .map(|code| {
            let registry = Arc::clone(&registry);
            std::thread::spawn(move || {
                registry
                    .resolve(Namespace::Toolbar, "actions_label_save", code)
                    .to_string()
            })
        })
        .collect();

    let results: Vec<String> = handles
        .into_iter()
        .map(|h| h.join().expect("lookup thread panicked"))
        .collect();
    assert_eq!(results, vec!["Save", "Speichern", "Enregistrer", "Сохранить"]);
}
