//! Cards and the canonical 52-card sequence

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Suit, Value};
use crate::error::{DeckError, Result};

/// Number of cards in a standard deck
pub const DECK_SIZE: usize = Value::ALL.len() * Suit::ALL.len();

/// All 52 cards: clubs, diamonds, hearts, spades; two through ace within each suit
pub static CANONICAL_DECK: [Card; DECK_SIZE] = build_canonical_deck();

const fn build_canonical_deck() -> [Card; DECK_SIZE] {
    let mut cards = [Card {
        value: Value::Two,
        suit: Suit::Clubs,
    }; DECK_SIZE];

    let mut s = 0;
    while s < Suit::ALL.len() {
        let mut v = 0;
        while v < Value::ALL.len() {
            cards[s * Value::ALL.len() + v] = Card {
                value: Value::ALL[v],
                suit: Suit::ALL[s],
            };
            v += 1;
        }
        s += 1;
    }
    cards
}

/// An immutable playing card
///
/// Serialized as `{"value": "q", "suit": "h", "code": "qh"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "CardRepr", try_from = "CardRepr")]
pub struct Card {
    value: Value,
    suit: Suit,
}

impl Card {
    /// Build a card from value and suit names (`"Queen"`, `"Hearts"`)
    ///
    /// Fails if either name is not one of the canonical ones.
    pub fn new(value: &str, suit: &str) -> Result<Self> {
        Ok(Self {
            value: Value::validate(value)?,
            suit: Suit::validate(suit)?,
        })
    }

    /// Look up a canonical card by its code (`"QH"`, `"10c"`), ignoring case
    pub fn from_code(code: &str) -> Result<Self> {
        let invalid = || DeckError::InvalidCardCode(code.to_string());

        // The suit code is always the final character
        let (split, _) = code.char_indices().last().ok_or_else(invalid)?;
        let (value_code, suit_code) = code.split_at(split);

        let value = Value::from_code(value_code).ok_or_else(invalid)?;
        let suit = Suit::from_code(suit_code).ok_or_else(invalid)?;

        Ok(CANONICAL_DECK[suit.index() * Value::ALL.len() + value.index()])
    }

    pub fn value(&self) -> Value {
        self.value
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Value code followed by suit code, lowercase
    pub fn code(&self) -> String {
        format!("{}{}", self.value.code(), self.suit.code())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.code(), self.suit.code())
    }
}

/// Wire representation of a card
#[derive(Serialize, Deserialize)]
struct CardRepr {
    value: String,
    suit: String,
    code: String,
}

impl From<Card> for CardRepr {
    fn from(card: Card) -> Self {
        Self {
            value: card.value.code().to_string(),
            suit: card.suit.code().to_string(),
            code: card.code(),
        }
    }
}

impl TryFrom<CardRepr> for Card {
    type Error = DeckError;

    fn try_from(repr: CardRepr) -> Result<Self> {
        let card = Card::from_code(&repr.code)?;
        if !card.value.code().eq_ignore_ascii_case(&repr.value)
            || !card.suit.code().eq_ignore_ascii_case(&repr.suit)
        {
            return Err(DeckError::InvalidCardCode(repr.code));
        }
        Ok(card)
    }
}
