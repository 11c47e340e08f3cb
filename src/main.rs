// SPDX-License-Identifier: MPL-2.0
use notemark::config;
use notemark::domain::{self, Choice, Language, Namespace};
use notemark::lexemes::{self, Lexicon};
use notemark::paths;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Resolve Notemark interface strings.

USAGE:
  notemark [OPTIONS] [KEY]...

OPTIONS:
  --lang CODE          Interface language (default: settings, then OS locale)
  --namespace NAME     Namespace of the keys (default: common)
  --arg NAME=VALUE     Substitute {NAME} in resolved strings; repeatable
  --config-dir DIR     Directory holding settings.toml
  --overlay DIR        Lexeme overlay directory
  --list               List languages and namespaces
  --check              Report lexeme load issues; fails if there are any
  -h, --help           Print this help
";

struct Flags {
    lang: Option<String>,
    namespace: Namespace,
    args: Vec<(String, String)>,
    config_dir: Option<PathBuf>,
    overlay: Option<PathBuf>,
    list: bool,
    check: bool,
    keys: Vec<String>,
}

fn parse_arg(text: &str) -> Result<(String, String), String> {
    text.split_once('=')
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", text))
}

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        namespace: args
            .opt_value_from_str("--namespace")?
            .unwrap_or(Namespace::SHARED),
        args: args.values_from_fn("--arg", parse_arg)?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        overlay: args.opt_value_from_str("--overlay")?,
        list: args.contains("--list"),
        check: args.contains("--check"),
        keys: args
            .finish()
            .into_iter()
            .filter_map(|s| s.into_string().ok())
            .collect(),
    };
    Ok(flags)
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_logging();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{}", HELP);
        return ExitCode::SUCCESS;
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("Error: {}", err);
            eprint!("{}", HELP);
            return ExitCode::from(2);
        }
    };

    run(flags)
}

fn run(flags: Flags) -> ExitCode {
    if let Err(err) = domain::validate_all_choices() {
        tracing::warn!("{}", err);
    }

    let (config, warning) = config::load_with_override(flags.config_dir.clone());

    let overlay = flags
        .overlay
        .clone()
        .or_else(|| config.lexemes.overlay_dir.clone())
        .or_else(|| paths::get_default_overlay_dir_with_override(flags.config_dir.clone()));

    let report = lexemes::load_default_registry(overlay.as_deref());
    report.log_issues();

    if flags.check {
        for issue in &report.issues {
            println!("{}", issue);
        }
        return match report.check() {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("Error: {}", err);
                ExitCode::FAILURE
            }
        };
    }

    let registry = Arc::new(report.into_registry());
    let language = lexemes::select_language(flags.lang.as_deref(), &config, &registry);
    let lexicon = Lexicon::new(Arc::clone(&registry), language);

    if let Some(key) = warning {
        eprintln!("{}", lexicon.tr(Namespace::SHARED, &key));
    }

    if flags.list {
        print_inventory(&lexicon);
        return ExitCode::SUCCESS;
    }

    let substitutions: Vec<(&str, &str)> = flags
        .args
        .iter()
        .map(|(name, value)| (name.as_str(), value.as_str()))
        .collect();

    for key in &flags.keys {
        println!("{}", lexicon.tr_with(flags.namespace, key, &substitutions));
    }

    ExitCode::SUCCESS
}

fn print_inventory(lexicon: &Lexicon) {
    let registry = lexicon.registry();
    let available = registry.languages();

    println!("Languages:");
    for language in Language::ALL {
        let marker = if *language == lexicon.language() {
            '*'
        } else if available.contains(language) {
            '+'
        } else {
            ' '
        };
        println!("  {} {:<3} {}", marker, language.code(), language.native_name());
    }

    println!("Namespaces:");
    for namespace in Namespace::ALL {
        let tables = available
            .iter()
            .filter(|language| registry.table(*namespace, **language).is_some())
            .count();
        println!("  {:<14} {} tables", namespace.name(), tables);
    }
}
