// SPDX-License-Identifier: MPL-2.0
//! Enumerable settings with a designated default member.
//!
//! Every selectable set in the application (languages, themes, assistant
//! models) lists its members once, gives each a stable lowercase key, and
//! flags exactly one member as the default. Key lookup is case-insensitive.

use crate::error::{Error, Result};

/// A closed set of selectable values.
pub trait Choice: Copy + Eq + 'static {
    /// Name of the set, used in diagnostics.
    const SET: &'static str;

    /// All members, in presentation order. Must not be empty.
    const ALL: &'static [Self];

    /// Stable key used in settings files and on the command line.
    fn key(self) -> &'static str;

    /// Whether this member is the set's default.
    fn is_default(self) -> bool;

    /// Finds a member by key, ignoring ASCII case and surrounding whitespace.
    fn from_key(text: &str) -> Option<Self> {
        let wanted = text.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|member| member.key().eq_ignore_ascii_case(wanted))
    }

    /// Returns the member flagged as default.
    ///
    /// A set that flags zero or several members is a configuration defect;
    /// it is logged and the first flagged member (or the first member) is
    /// returned instead.
    ///
    /// # Panics
    ///
    /// Panics if `ALL` is empty.
    fn default_member() -> Self {
        let mut flagged = Self::ALL.iter().copied().filter(|m| m.is_default());
        match (flagged.next(), flagged.next()) {
            (Some(member), None) => member,
            (Some(first), Some(_)) => {
                tracing::warn!(set = Self::SET, "several default members, using '{}'", first.key());
                first
            }
            (None, _) => {
                let first = Self::ALL[0];
                tracing::warn!(set = Self::SET, "no default member, using '{}'", first.key());
                first
            }
        }
    }
}

/// Checks that a set flags exactly one default member.
pub fn validate_choices<T: Choice>() -> Result<()> {
    let flagged = T::ALL.iter().filter(|m| m.is_default()).count();
    if flagged == 1 {
        Ok(())
    } else {
        Err(Error::InvalidDefault {
            set: T::SET,
            flagged,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Fruit {
        Apple,
        Pear,
    }

    impl Choice for Fruit {
        const SET: &'static str = "fruit";
        const ALL: &'static [Self] = &[Fruit::Apple, Fruit::Pear];

        fn key(self) -> &'static str {
            match self {
                Fruit::Apple => "apple",
                Fruit::Pear => "pear",
            }
        }

        fn is_default(self) -> bool {
            self == Fruit::Pear
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Broken {
        One,
        Two,
    }

    impl Choice for Broken {
        const SET: &'static str = "broken";
        const ALL: &'static [Self] = &[Broken::One, Broken::Two];

        fn key(self) -> &'static str {
            match self {
                Broken::One => "one",
                Broken::Two => "two",
            }
        }

        fn is_default(self) -> bool {
            true
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Unflagged {
        Only,
    }

    impl Choice for Unflagged {
        const SET: &'static str = "unflagged";
        const ALL: &'static [Self] = &[Unflagged::Only];

        fn key(self) -> &'static str {
            "only"
        }

        fn is_default(self) -> bool {
            false
        }
    }

    #[test]
    fn from_key_ignores_case_and_whitespace() {
        assert_eq!(Fruit::from_key("APPLE"), Some(Fruit::Apple));
        assert_eq!(Fruit::from_key("  pear "), Some(Fruit::Pear));
        assert_eq!(Fruit::from_key("plum"), None);
    }

    #[test]
    fn default_member_returns_flagged_member() {
        assert_eq!(Fruit::default_member(), Fruit::Pear);
        assert!(validate_choices::<Fruit>().is_ok());
    }

    #[test]
    fn several_defaults_fall_back_to_first_flagged() {
        assert_eq!(Broken::default_member(), Broken::One);
        assert_eq!(
            validate_choices::<Broken>(),
            Err(Error::InvalidDefault {
                set: "broken",
                flagged: 2
            })
        );
    }

    #[test]
    fn missing_default_falls_back_to_first_member() {
        assert_eq!(Unflagged::default_member(), Unflagged::Only);
        assert!(matches!(
            validate_choices::<Unflagged>(),
            Err(Error::InvalidDefault { flagged: 0, .. })
        ));
    }
}
