//! Error types for deckstore
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

use crate::registry::DeckId;

/// Result type alias using DeckError
pub type Result<T> = std::result::Result<T, DeckError>;

/// Unified error type for deckstore operations
#[derive(Debug, Error)]
pub enum DeckError {
    // -------------------------------------------------------------------------
    // Validation Errors
    // -------------------------------------------------------------------------
    #[error("Invalid card value: {0:?}")]
    InvalidValue(String),

    #[error("Invalid card suit: {0:?}")]
    InvalidSuit(String),

    #[error("Invalid card code: {0:?}")]
    InvalidCardCode(String),

    #[error("Invalid count: {0}")]
    InvalidCount(String),

    #[error("Query parameter `count` must be defined")]
    MissingCount,

    #[error("Invalid deck id: {0:?}")]
    InvalidDeckId(String),

    // -------------------------------------------------------------------------
    // Deck State Errors
    // -------------------------------------------------------------------------
    #[error("The whole deck was already drawn")]
    AlreadyExhausted,

    // -------------------------------------------------------------------------
    // Registry Errors
    // -------------------------------------------------------------------------
    #[error("Deck not found: {0}")]
    DeckNotFound(DeckId),

    #[error("Version conflict: expected {expected}, found {actual}")]
    VersionConflict { expected: u64, actual: u64 },

    #[error("Registry full: capacity of {capacity} decks reached")]
    RegistryFull { capacity: usize },

    // -------------------------------------------------------------------------
    // Configuration / I/O Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification used at the transport boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller-fixable input problem
    Validation,
    /// Unknown deck identifier
    NotFound,
    /// Draw on a fully drawn deck
    Exhausted,
    /// Lost an optimistic write race
    Conflict,
    /// Registry could not store the deck
    Storage,
    /// Anything else (startup, I/O)
    Internal,
}

impl DeckError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            DeckError::InvalidValue(_)
            | DeckError::InvalidSuit(_)
            | DeckError::InvalidCardCode(_)
            | DeckError::InvalidCount(_)
            | DeckError::MissingCount
            | DeckError::InvalidDeckId(_) => ErrorKind::Validation,
            DeckError::AlreadyExhausted => ErrorKind::Exhausted,
            DeckError::DeckNotFound(_) => ErrorKind::NotFound,
            DeckError::VersionConflict { .. } => ErrorKind::Conflict,
            DeckError::RegistryFull { .. } => ErrorKind::Storage,
            DeckError::Config(_) | DeckError::Io(_) => ErrorKind::Internal,
        }
    }
}
