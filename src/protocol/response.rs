//! Reply bodies

use serde::{Deserialize, Serialize};

use crate::model::Card;
use crate::registry::DeckId;

/// Body of a successful create
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedDeck {
    pub deck_id: DeckId,
    pub shuffled: bool,
    pub remaining: usize,
}

/// Body of a successful open: the deck plus its full card sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenedDeck {
    pub deck_id: DeckId,
    pub shuffled: bool,
    pub remaining: usize,
    pub cards: Vec<Card>,
}

/// Body of a successful draw
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawnCards {
    pub cards: Vec<Card>,
}

/// Result of executing a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Created(CreatedDeck),
    Opened(OpenedDeck),
    Drawn(DrawnCards),
    Deleted,
}
