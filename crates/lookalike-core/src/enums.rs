// Shared enums: decomposition strategy, unmapped-character policy, sampling

use std::fmt;

/// How a word is cut into substitutable chunks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Longest-match-first chunking over multi-character keys.
    #[default]
    Greedy,
    /// One chunk per character.
    PerCharacter,
}

impl Strategy {
    /// Map the `greedy` flag of the compile entry point to a strategy.
    pub fn from_greedy(greedy: bool) -> Self {
        if greedy {
            Strategy::Greedy
        } else {
            Strategy::PerCharacter
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Greedy => "greedy",
            Strategy::PerCharacter => "per-character",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What per-character compilation does with a character that has no
/// look-alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UnmappedPolicy {
    /// Keep the character unchanged. Compilation always yields at least one
    /// candidate.
    #[default]
    Literal,
    /// Reject the whole word; compilation yields no candidates.
    Reject,
}

/// How a capped candidate list is drawn from the product sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Sampling {
    /// Take the first candidates in product order.
    Ordered,
    /// Oversample, shuffle, and truncate.
    #[default]
    Shuffled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_from_flag() {
        assert_eq!(Strategy::from_greedy(true), Strategy::Greedy);
        assert_eq!(Strategy::from_greedy(false), Strategy::PerCharacter);
        assert_eq!(Strategy::PerCharacter.to_string(), "per-character");
    }

    #[test]
    fn defaults() {
        assert_eq!(Strategy::default(), Strategy::Greedy);
        assert_eq!(UnmappedPolicy::default(), UnmappedPolicy::Literal);
        assert_eq!(Sampling::default(), Sampling::Shuffled);
    }
}
