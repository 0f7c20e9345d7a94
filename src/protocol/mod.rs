//! Protocol Module
//!
//! Requests and replies exchanged between the HTTP layer and the engine.
//!
//! ## Requests
//! - `POST /deck?shuffled=true&cards=AS&cards=KH` → `Command::CreateDeck`
//! - `GET /decks/{id}` → `Command::OpenDeck`
//! - `POST /decks/{id}/draw?count=3` → `Command::Draw`
//! - `DELETE /decks/{id}` → `Command::DeleteDeck`
//!
//! ## Replies
//! JSON bodies built from `Reply` variants. Errors carry no body.

mod command;
mod codec;
mod response;

pub use command::Command;
pub use codec::{parse_count, parse_create_query, parse_deck_id, QueryParams};
pub use response::{CreatedDeck, DrawnCards, OpenedDeck, Reply};
