//! Combinators
//!
//! [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
//! "A combinator is punctuation that represents a particular kind of
//! relationship between the selectors on either side."

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::SelectorError;

/// The relationship between two compound selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A descendant combinator is whitespace that separates two compound selectors."
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// "A child combinator is a greater-than sign (>) that separates two compound
    /// selectors."
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// "A next-sibling combinator is a plus sign (+) that separates two compound
    /// selectors."
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// "A subsequent-sibling combinator is a tilde (~) that separates two compound
    /// selectors."
    SubsequentSibling,
}

impl Combinator {
    /// All combinators.
    pub const ALL: [Self; 4] = [
        Self::Descendant,
        Self::Child,
        Self::NextSibling,
        Self::SubsequentSibling,
    ];

    /// The single-character token written between the two selectors.
    #[must_use]
    pub const fn token(self) -> char {
        match self {
            Self::Descendant => ' ',
            Self::Child => '>',
            Self::NextSibling => '+',
            Self::SubsequentSibling => '~',
        }
    }

    /// Spelled-out name, usable where a bare token is awkward (e.g. a shell).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Descendant => "descendant",
            Self::Child => "child",
            Self::NextSibling => "next-sibling",
            Self::SubsequentSibling => "subsequent-sibling",
        }
    }

    /// The combinator written as `token`, if any.
    #[must_use]
    pub fn from_token(token: char) -> Option<Self> {
        Self::ALL.into_iter().find(|combinator| combinator.token() == token)
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl FromStr for Combinator {
    type Err = SelectorError;

    /// Accepts a single token character or a combinator name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let by_token = match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_token(c),
            _ => None,
        };

        by_token
            .or_else(|| {
                Self::ALL
                    .into_iter()
                    .find(|combinator| combinator.name().eq_ignore_ascii_case(s))
            })
            .ok_or_else(|| SelectorError::UnknownCombinator(s.to_string()))
    }
}
