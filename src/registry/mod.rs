//! Registry Module
//!
//! Concurrent in-memory store mapping deck identifiers to decks.
//!
//! ## Responsibilities
//! - Generate fresh identifiers on create
//! - Atomic create/read/update/delete
//! - Versioned compare-and-swap and locked read-modify-write for draws
//!
//! ## Data Structure Choice
//! A fixed number of shards, each a `HashMap` behind a `parking_lot::RwLock`:
//! - Operations on the same identifier always hit the same lock
//! - Operations on different shards never contend
//! - Readers only ever see committed decks

mod id;
mod store;

pub use id::DeckId;
pub use store::DeckRegistry;

use crate::model::Deck;

/// A deck snapshot together with the version it was read at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Versioned {
    pub deck: Deck,
    pub version: u64,
}
