//! Card face values

use crate::error::{DeckError, Result};

/// One of the 13 canonical ranks, in canonical (ascending) order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Value {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Value {
    /// All values in canonical order
    pub const ALL: [Value; 13] = [
        Value::Two,
        Value::Three,
        Value::Four,
        Value::Five,
        Value::Six,
        Value::Seven,
        Value::Eight,
        Value::Nine,
        Value::Ten,
        Value::Jack,
        Value::Queen,
        Value::King,
        Value::Ace,
    ];

    /// Lowercase name, e.g. `"queen"`
    pub const fn name(self) -> &'static str {
        match self {
            Value::Two => "two",
            Value::Three => "three",
            Value::Four => "four",
            Value::Five => "five",
            Value::Six => "six",
            Value::Seven => "seven",
            Value::Eight => "eight",
            Value::Nine => "nine",
            Value::Ten => "ten",
            Value::Jack => "jack",
            Value::Queen => "queen",
            Value::King => "king",
            Value::Ace => "ace",
        }
    }

    /// Short code used in card codes, e.g. `"10"` or `"q"`
    pub const fn code(self) -> &'static str {
        match self {
            Value::Two => "2",
            Value::Three => "3",
            Value::Four => "4",
            Value::Five => "5",
            Value::Six => "6",
            Value::Seven => "7",
            Value::Eight => "8",
            Value::Nine => "9",
            Value::Ten => "10",
            Value::Jack => "j",
            Value::Queen => "q",
            Value::King => "k",
            Value::Ace => "a",
        }
    }

    /// Position within `Value::ALL`
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Case-insensitive lookup by name (`"Ace"`, `"ten"`)
    pub fn validate(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| DeckError::InvalidValue(name.to_string()))
    }

    /// Case-insensitive lookup by code (`"A"`, `"10"`)
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|v| v.code().eq_ignore_ascii_case(code))
    }
}
