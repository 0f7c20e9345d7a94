//! Command definitions

use crate::registry::DeckId;

/// Commands executed by the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Build a deck and store it
    CreateDeck { cards: Vec<String>, shuffled: bool },

    /// Return the full state of a deck
    OpenDeck { id: DeckId },

    /// Draw cards off the top of a deck
    ///
    /// `count` is kept raw so an unknown deck is reported before a bad count.
    Draw { id: DeckId, count: Option<String> },

    /// Remove a deck (idempotent)
    DeleteDeck { id: DeckId },
}

impl Command {
    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Command::CreateDeck { .. } => "create",
            Command::OpenDeck { .. } => "open",
            Command::Draw { .. } => "draw",
            Command::DeleteDeck { .. } => "delete",
        }
    }
}
