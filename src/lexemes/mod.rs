// SPDX-License-Identifier: MPL-2.0
//! Localized interface strings ("lexemes").
//!
//! Lexemes are grouped by [`Namespace`](crate::domain::Namespace) and
//! language. The packaged tables are loaded once at startup into a read-only
//! [`Registry`]; every piece of interface text is then obtained through
//! [`Registry::resolve`] or a [`Lexicon`] bound to the active language.
//!
//! # Features
//!
//! - Tables embedded in the binary, with an optional on-disk overlay
//! - Language fallback to the default language
//! - Shared `common` namespace for keys reused across modules
//! - Startup diagnostics for malformed or incomplete tables
//! - Caller-side `{placeholder}` substitution

pub mod assets;
pub mod format;
pub mod locale;
pub mod registry;
pub mod resolver;
pub mod table;

pub use assets::load_default_registry;
pub use format::{format_lexeme, placeholders};
pub use locale::select_language;
pub use registry::{
    load_registry, load_registry_with_default, LoadIssue, LoadReport, Registry, SourceBody,
    TableSource,
};
pub use resolver::{Lexicon, Resolved, Tier, MISSING_KEY_MARKER};
pub use table::{LexemeTable, TableError};
