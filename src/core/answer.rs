//! Yes/no answers and the policy used to read them from free text

use std::fmt;

/// A player's answer to a yes/no question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
}

impl Answer {
    /// Answer from a known truth value (used by simulated players)
    #[must_use]
    pub const fn from_bool(value: bool) -> Self {
        if value { Self::Yes } else { Self::No }
    }

    #[must_use]
    pub const fn is_affirmative(self) -> bool {
        matches!(self, Self::Yes)
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yes => write!(f, "yes"),
            Self::No => write!(f, "no"),
        }
    }
}

/// How a line of user input is turned into an [`Answer`]
///
/// Anything that is not recognised as affirmative is a negative answer,
/// including empty and malformed input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResponsePolicy {
    /// Exact, case-sensitive match against `yes`
    Strict,
    /// Trimmed, ASCII case-insensitive match against `yes` or `y`
    #[default]
    Lenient,
}

impl ResponsePolicy {
    /// Parse a raw input line
    ///
    /// # Examples
    /// ```
    /// use trait_guesser::core::{Answer, ResponsePolicy};
    ///
    /// assert_eq!(ResponsePolicy::Lenient.parse(" YES\n"), Answer::Yes);
    /// assert_eq!(ResponsePolicy::Strict.parse("Yes"), Answer::No);
    /// assert_eq!(ResponsePolicy::Strict.parse("yes"), Answer::Yes);
    /// ```
    #[must_use]
    pub fn parse(self, input: &str) -> Answer {
        let affirmative = match self {
            Self::Strict => input == "yes",
            Self::Lenient => {
                let trimmed = input.trim();
                trimmed.eq_ignore_ascii_case("yes") || trimmed.eq_ignore_ascii_case("y")
            }
        };
        Answer::from_bool(affirmative)
    }
}
