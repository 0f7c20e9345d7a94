//! Deck construction and drawing

use rand::Rng;

use super::card::{Card, CANONICAL_DECK};
use super::shuffle;
use crate::error::{DeckError, Result};

/// An ordered sequence of cards with a remaining-count watermark
///
/// The undrawn cards are always the last `remaining` elements of `cards`.
/// Drawing advances the watermark; the sequence itself is never truncated
/// or reordered after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    shuffled: bool,
    remaining: usize,
    cards: Vec<Card>,
}

impl Deck {
    /// Build a deck from card codes, or the full canonical deck if `codes` is empty
    ///
    /// All-or-nothing: the first unknown code fails construction. Duplicate
    /// codes are allowed. `shuffled` is recorded as given.
    pub fn new<S: AsRef<str>>(codes: &[S], shuffled: bool) -> Result<Self> {
        let mut deck = Self::unshuffled(codes, shuffled)?;
        if shuffled {
            shuffle::shuffle(&mut deck.cards);
        }
        Ok(deck)
    }

    /// Same as [`Deck::new`] with a caller-supplied RNG for the shuffle
    pub fn new_with_rng<S: AsRef<str>, R: Rng + ?Sized>(
        codes: &[S],
        shuffled: bool,
        rng: &mut R,
    ) -> Result<Self> {
        let mut deck = Self::unshuffled(codes, shuffled)?;
        if shuffled {
            shuffle::shuffle_with(&mut deck.cards, rng);
        }
        Ok(deck)
    }

    fn unshuffled<S: AsRef<str>>(codes: &[S], shuffled: bool) -> Result<Self> {
        let cards = if codes.is_empty() {
            CANONICAL_DECK.to_vec()
        } else {
            codes
                .iter()
                .map(|code| Card::from_code(code.as_ref()))
                .collect::<Result<Vec<_>>>()?
        };

        Ok(Self {
            shuffled,
            remaining: cards.len(),
            cards,
        })
    }

    /// Draw up to `count` cards off the top
    ///
    /// Fails with `AlreadyExhausted` when nothing remains (checked first),
    /// then with `InvalidCount` for `count <= 0`. Asking for more than remains
    /// draws exactly what remains. Nothing is mutated on error.
    pub fn draw(&mut self, count: i64) -> Result<Vec<Card>> {
        if self.remaining == 0 {
            return Err(DeckError::AlreadyExhausted);
        }
        if count <= 0 {
            return Err(DeckError::InvalidCount(format!("{count} is not positive")));
        }

        let take = usize::try_from(count).map_or(self.remaining, |c| c.min(self.remaining));
        let start = self.cards.len() - self.remaining;
        self.remaining -= take;

        Ok(self.cards[start..start + take].to_vec())
    }

    pub fn shuffled(&self) -> bool {
        self.shuffled
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// The full sequence, drawn and undrawn
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Cards already drawn, in draw order
    pub fn drawn(&self) -> &[Card] {
        &self.cards[..self.cards.len() - self.remaining]
    }

    /// Cards not yet drawn, top first
    pub fn undrawn(&self) -> &[Card] {
        &self.cards[self.cards.len() - self.remaining..]
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}
