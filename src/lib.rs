//! # deckstore
//!
//! An in-memory playing-card deck service with:
//! - Full or custom decks, optionally shuffled at creation
//! - Draws that advance a remaining-count watermark
//! - A sharded, lock-protected registry shared by concurrent requests
//! - An HTTP/JSON API
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      HTTP Server                             │
//! │                  (axum, one task/request)                    │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │  Command
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                        Engine                                │
//! └──────────┬──────────────────────────────────┬───────────────┘
//!            │                                  │
//!            ▼                                  ▼
//!   ┌─────────────────┐               ┌───────────────────┐
//!   │   Deck Model    │               │   DeckRegistry    │
//!   │ (pure, no I/O)  │               │ (sharded RwLocks) │
//!   └─────────────────┘               └───────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod model;
pub mod registry;
pub mod protocol;
pub mod network;
pub mod engine;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{DeckError, ErrorKind, Result};
pub use config::Config;
pub use engine::Engine;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of deckstore
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
