// SPDX-License-Identifier: MPL-2.0
//! Domain types.
//!
//! Pure value types shared by the lexeme registry and the settings layer:
//! the selectable sets (languages, themes, assistant models) and the
//! namespaces lexemes are grouped into.

pub mod choice;
pub mod language;
pub mod model;
pub mod namespace;
pub mod theme;

pub use choice::{validate_choices, Choice};
pub use language::Language;
pub use model::AssistantModel;
pub use namespace::{ModuleId, Namespace, Scope};
pub use theme::ThemeMode;

use crate::error::Result;

/// Validates every choice set; run once at startup.
pub fn validate_all_choices() -> Result<()> {
    validate_choices::<Language>()?;
    validate_choices::<ThemeMode>()?;
    validate_choices::<AssistantModel>()?;
    Ok(())
}
