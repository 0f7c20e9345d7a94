//! Engine Module
//!
//! Coordinates the deck model and the registry.
//!
//! ## Responsibilities
//! - Build decks and hand them to the registry
//! - Serve deck snapshots
//! - Run draws as a single locked read-modify-write
//! - Route protocol commands

use crate::config::Config;
use crate::error::{DeckError, Result};
use crate::model::Deck;
use crate::protocol::{parse_count, Command, CreatedDeck, DrawnCards, OpenedDeck, Reply};
use crate::registry::{DeckId, DeckRegistry};

/// The deck service core
///
/// Constructed once at startup and shared (behind an `Arc`) by every request
/// handler. All shared state lives in the registry.
pub struct Engine {
    registry: DeckRegistry,
}

impl Engine {
    /// Open an engine with the given config
    pub fn open(config: Config) -> Result<Self> {
        let registry = DeckRegistry::from_config(&config)?;
        tracing::debug!(
            "Registry ready: {} shards, capacity {:?}",
            registry.shard_count(),
            config.max_decks
        );
        Ok(Self { registry })
    }

    /// Execute a command
    ///
    /// Routes commands to appropriate handlers
    pub fn execute(&self, command: Command) -> Result<Reply> {
        match command {
            Command::CreateDeck { cards, shuffled } => {
                self.create_deck(&cards, shuffled).map(Reply::Created)
            }
            Command::OpenDeck { id } => self.open_deck(&id).map(Reply::Opened),
            Command::Draw { id, count } => {
                // Unknown deck wins over a bad count
                if !self.registry.contains(&id) {
                    return Err(DeckError::DeckNotFound(id));
                }
                let count = parse_count(count.as_deref())?;
                self.draw(&id, count).map(Reply::Drawn)
            }
            Command::DeleteDeck { id } => {
                self.delete_deck(&id);
                Ok(Reply::Deleted)
            }
        }
    }

    /// Build a deck from card codes (all 52 if empty) and store it
    pub fn create_deck<S: AsRef<str>>(&self, cards: &[S], shuffled: bool) -> Result<CreatedDeck> {
        let deck = Deck::new(cards, shuffled)?;
        let shuffled = deck.shuffled();
        let remaining = deck.remaining();

        let deck_id = self.registry.create(deck)?;

        Ok(CreatedDeck {
            deck_id,
            shuffled,
            remaining,
        })
    }

    /// Full state of a stored deck
    pub fn open_deck(&self, id: &DeckId) -> Result<OpenedDeck> {
        let deck = self
            .registry
            .read(id)
            .ok_or(DeckError::DeckNotFound(*id))?;

        Ok(OpenedDeck {
            deck_id: *id,
            shuffled: deck.shuffled(),
            remaining: deck.remaining(),
            cards: deck.cards().to_vec(),
        })
    }

    /// Draw `count` cards and persist the new watermark atomically
    pub fn draw(&self, id: &DeckId, count: i64) -> Result<DrawnCards> {
        let cards = self.registry.update_with(id, |deck| deck.draw(count))?;
        Ok(DrawnCards { cards })
    }

    /// Remove a deck; returns whether it existed
    pub fn delete_deck(&self, id: &DeckId) -> bool {
        self.registry.delete(id)
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    pub fn registry(&self) -> &DeckRegistry {
        &self.registry
    }
}
