// SPDX-License-Identifier: MPL-2.0
//! Lexeme namespaces.
//!
//! A namespace groups the keys of one area of the interface. Core namespaces
//! belong to the application shell; module namespaces belong to one optional
//! assistant backend. `common` holds phrasing shared by all modules.

use std::fmt;
use std::str::FromStr;

/// Optional assistant backends that ship their own lexemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ModuleId {
    /// Local models served through llama.cpp.
    Llama,
    /// On-device ONNX models.
    Onnx,
    /// OpenAI-compatible remote APIs.
    OpenAi,
}

impl ModuleId {
    pub const ALL: &'static [ModuleId] = &[ModuleId::Llama, ModuleId::Onnx, ModuleId::OpenAi];
}

/// Whether a namespace belongs to the application core or to a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Core,
    Module(ModuleId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Namespace {
    /// Shared phrasing, searched when a module namespace lacks a key.
    Common,
    MainMenu,
    Toolbar,
    StatusBar,
    AiAssistant,
    Settings,
    Module(ModuleId),
}

impl Namespace {
    /// The namespace module lookups fall back to.
    pub const SHARED: Namespace = Namespace::Common;

    pub const ALL: &'static [Namespace] = &[
        Namespace::Common,
        Namespace::MainMenu,
        Namespace::Toolbar,
        Namespace::StatusBar,
        Namespace::AiAssistant,
        Namespace::Settings,
        Namespace::Module(ModuleId::Llama),
        Namespace::Module(ModuleId::Onnx),
        Namespace::Module(ModuleId::OpenAi),
    ];

    /// Name used for asset directories and on the command line.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Namespace::Common => "common",
            Namespace::MainMenu => "main_menu",
            Namespace::Toolbar => "toolbar",
            Namespace::StatusBar => "status_bar",
            Namespace::AiAssistant => "ai_assistant",
            Namespace::Settings => "settings",
            Namespace::Module(ModuleId::Llama) => "module_llama",
            Namespace::Module(ModuleId::Onnx) => "module_onnx",
            Namespace::Module(ModuleId::OpenAi) => "module_openai",
        }
    }

    #[must_use]
    pub fn scope(self) -> Scope {
        match self {
            Namespace::Module(module) => Scope::Module(module),
            _ => Scope::Core,
        }
    }

    #[must_use]
    pub fn is_module(self) -> bool {
        matches!(self.scope(), Scope::Module(_))
    }

    /// Finds a namespace by name, ignoring ASCII case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|ns| ns.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Namespace {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("unknown namespace: {}", s))
    }
}
