//! Deck Engine
//!
//! Pure card/deck model: no I/O, no shared state.
//!
//! ## Components
//! - `Value` / `Suit`: fixed enumerations with total code mappings
//! - `Card`: immutable (value, suit) pair, plus the canonical 52-card sequence
//! - `Deck`: card sequence + remaining watermark + shuffled flag
//! - `shuffle`: Fisher–Yates with per-call entropy

mod value;
mod suit;
mod card;
mod deck;
pub mod shuffle;

pub use value::Value;
pub use suit::Suit;
pub use card::{Card, CANONICAL_DECK, DECK_SIZE};
pub use deck::Deck;
