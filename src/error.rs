// SPDX-License-Identifier: MPL-2.0
use crate::lexemes::LoadIssue;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Lexeme(LoadIssue),
    /// The registry was built without a single table.
    EmptyRegistry,
    /// A choice set does not flag exactly one default member.
    InvalidDefault {
        set: &'static str,
        flagged: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Lexeme(issue) => write!(f, "Lexeme Error: {}", issue),
            Error::EmptyRegistry => write!(f, "Lexeme registry contains no tables"),
            Error::InvalidDefault { set, flagged } => write!(
                f,
                "Choice set '{}' flags {} default members, expected exactly one",
                set, flagged
            ),
        }
    }
}

impl std::error::Error for Error {}

impl From<LoadIssue> for Error {
    fn from(issue: LoadIssue) -> Self {
        Error::Lexeme(issue)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
