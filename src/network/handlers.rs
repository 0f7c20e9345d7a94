//! Request handlers
//!
//! Each handler turns a request into a `Command`, executes it and maps the
//! reply or error onto a status code.

use std::sync::Arc;

use axum::extract::{Path, RawQuery, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::engine::Engine;
use crate::error::{DeckError, ErrorKind};
use crate::protocol::{parse_create_query, parse_deck_id, Command, QueryParams, Reply};

/// `POST /deck?shuffled={bool}&cards={code}...`
pub async fn create_deck(
    State(engine): State<Arc<Engine>>,
    RawQuery(query): RawQuery,
) -> Response {
    tracing::info!("Request received to create a new deck");

    let params = QueryParams::parse(query.as_deref());
    let (cards, shuffled) = parse_create_query(&params);

    execute(&engine, Command::CreateDeck { cards, shuffled })
}

/// `GET /decks/{id}`
pub async fn open_deck(State(engine): State<Arc<Engine>>, Path(raw_id): Path<String>) -> Response {
    tracing::info!("Request received to open deck {}", raw_id);

    match parse_deck_id(&raw_id) {
        Ok(id) => execute(&engine, Command::OpenDeck { id }),
        Err(e) => error_response(&e),
    }
}

/// `POST /decks/{id}/draw?count={n}`
pub async fn draw_cards(
    State(engine): State<Arc<Engine>>,
    Path(raw_id): Path<String>,
    RawQuery(query): RawQuery,
) -> Response {
    tracing::info!("Request received to draw cards from deck {}", raw_id);

    let id = match parse_deck_id(&raw_id) {
        Ok(id) => id,
        Err(e) => return error_response(&e),
    };
    let count = QueryParams::parse(query.as_deref())
        .first("count")
        .map(str::to_string);

    execute(&engine, Command::Draw { id, count })
}

/// `DELETE /decks/{id}`
pub async fn delete_deck(
    State(engine): State<Arc<Engine>>,
    Path(raw_id): Path<String>,
) -> Response {
    tracing::info!("Request received to delete deck {}", raw_id);

    match parse_deck_id(&raw_id) {
        Ok(id) => execute(&engine, Command::DeleteDeck { id }),
        Err(e) => error_response(&e),
    }
}

fn execute(engine: &Engine, command: Command) -> Response {
    let name = command.name();

    match engine.execute(command) {
        Ok(Reply::Created(created)) => {
            tracing::info!("Successfully created deck {}", created.deck_id);
            (StatusCode::CREATED, Json(created)).into_response()
        }
        Ok(Reply::Opened(opened)) => {
            tracing::info!("Successfully opened deck {}", opened.deck_id);
            (StatusCode::OK, Json(opened)).into_response()
        }
        Ok(Reply::Drawn(drawn)) => {
            tracing::info!("Successfully drew {} cards", drawn.cards.len());
            (StatusCode::OK, Json(drawn)).into_response()
        }
        Ok(Reply::Deleted) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            tracing::debug!("Command {} failed", name);
            error_response(&e)
        }
    }
}

/// Status for an error kind
pub(crate) fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Validation | ErrorKind::Exhausted => StatusCode::BAD_REQUEST,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::Storage | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_response(error: &DeckError) -> Response {
    let status = status_for(error.kind());
    if status.is_server_error() {
        tracing::error!("Request failed: {}", error);
    } else {
        tracing::warn!("Request rejected: {}", error);
    }

    (status, [(header::CONTENT_TYPE, "application/json")]).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_for(ErrorKind::Validation), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(ErrorKind::Exhausted), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(ErrorKind::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_for(ErrorKind::Storage), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
