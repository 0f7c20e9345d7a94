//! Card suits

use crate::error::{DeckError, Result};

/// One of the 4 canonical suits, in canonical order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All suits in canonical order
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    pub const fn name(self) -> &'static str {
        match self {
            Suit::Clubs => "clubs",
            Suit::Diamonds => "diamonds",
            Suit::Hearts => "hearts",
            Suit::Spades => "spades",
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Suit::Clubs => "c",
            Suit::Diamonds => "d",
            Suit::Hearts => "h",
            Suit::Spades => "s",
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Case-insensitive lookup by name (`"Hearts"`)
    pub fn validate(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| DeckError::InvalidSuit(name.to_string()))
    }

    /// Case-insensitive lookup by code (`"H"`)
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.code().eq_ignore_ascii_case(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        assert_eq!(Suit::validate("Spades").unwrap(), Suit::Spades);
        assert_eq!(Suit::validate("CLUBS").unwrap(), Suit::Clubs);
        assert!(matches!(Suit::validate("stars"), Err(DeckError::InvalidSuit(_))));
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Suit::from_code("d"), Some(Suit::Diamonds));
        assert_eq!(Suit::from_code("H"), Some(Suit::Hearts));
        assert_eq!(Suit::from_code("a"), None);
    }
}
