// SPDX-License-Identifier: MPL-2.0
//! `{placeholder}` handling for resolved lexemes.
//!
//! Resolution returns templates untouched; the interface substitutes runtime
//! values (cursor position, token counts, timestamps) with [`format_lexeme`].
//! A placeholder name is one or more ASCII letters, digits or underscores.
//! Anything else between braces is plain text.

/// Lists placeholder names in order of first appearance.
#[must_use]
pub fn placeholders(template: &str) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        match split_placeholder(after) {
            Some((name, tail)) => {
                if !names.contains(&name) {
                    names.push(name);
                }
                rest = tail;
            }
            None => rest = after,
        }
    }
    names
}

/// Substitutes `{name}` markers in a single pass.
///
/// Markers without a matching argument and unbalanced braces are copied
/// verbatim. Substituted values are not scanned again.
#[must_use]
pub fn format_lexeme(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match split_placeholder(after) {
            Some((name, tail)) => {
                match args.iter().find(|(arg, _)| *arg == name) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = tail;
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Splits `name}tail` into `(name, tail)` if `name` is a valid placeholder.
fn split_placeholder(text: &str) -> Option<(&str, &str)> {
    let close = text.find('}')?;
    let name = &text[..close];
    let valid = !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_');
    valid.then_some((name, &text[close + 1..]))
}
