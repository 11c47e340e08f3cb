// SPDX-License-Identifier: MPL-2.0
//! `notemark` holds the localization core of the Notemark Markdown note editor.
//!
//! It resolves interface strings ("lexemes") by namespace, key and language,
//! falling back to the default language and to the shared `common`
//! namespace, so that the interface always has text to display. It also
//! carries the enumerable settings (language, theme, assistant model) and
//! the `settings.toml` file that stores them.

#![doc(html_root_url = "https://docs.rs/notemark/0.3.0")]

pub mod config;
pub mod domain;
pub mod error;
pub mod lexemes;
pub mod paths;
