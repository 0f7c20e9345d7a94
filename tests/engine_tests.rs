//! Tests for Engine
//!
//! These tests verify:
//! - Create / open / draw / delete through direct calls and `execute`
//! - Error ordering for draw (unknown deck before bad count)
//! - Config validation on open
//! - Concurrent draws on one deck never hand out a card twice

use std::collections::HashSet;
use std::sync::Barrier;

use deckstore::engine::Engine;
use deckstore::model::Card;
use deckstore::protocol::{Command, Reply};
use deckstore::registry::DeckId;
use deckstore::{Config, DeckError, ErrorKind};

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_engine() -> Engine {
    Engine::open(Config::default()).unwrap()
}

fn codes(cards: &[Card]) -> Vec<String> {
    cards.iter().map(|c| c.code()).collect()
}

// =============================================================================
// Lifecycle Tests
// =============================================================================

#[test]
fn test_engine_open_rejects_zero_shards() {
    let config = Config::builder().registry_shards(0).build();
    assert!(matches!(Engine::open(config), Err(DeckError::Config(_))));
}

#[test]
fn test_create_open_draw_scenario() {
    let engine = setup_engine();

    let created = engine.create_deck::<&str>(&[], false).unwrap();
    assert_eq!(created.remaining, 52);
    assert!(!created.shuffled);

    let drawn = engine.draw(&created.deck_id, 3).unwrap();
    assert_eq!(codes(&drawn.cards), vec!["2c", "3c", "4c"]);

    let opened = engine.open_deck(&created.deck_id).unwrap();
    assert_eq!(opened.remaining, 49);
    assert_eq!(opened.cards.len(), 52);

    let rest = engine.draw(&created.deck_id, 93).unwrap();
    assert_eq!(rest.cards.len(), 49);
    assert_eq!(engine.open_deck(&created.deck_id).unwrap().remaining, 0);

    assert!(matches!(
        engine.draw(&created.deck_id, 1),
        Err(DeckError::AlreadyExhausted)
    ));
}

#[test]
fn test_create_with_invalid_card_stores_nothing() {
    let engine = setup_engine();

    let err = engine.create_deck(&["AS", "KH", "AA"], false).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(engine.registry().is_empty());
}

#[test]
fn test_open_nonexistent_deck() {
    let engine = setup_engine();
    let err = engine.open_deck(&DeckId::new()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn test_create_shuffled_custom_deck() {
    let engine = setup_engine();

    let created = engine.create_deck(&["AS", "KH", "8C"], true).unwrap();
    assert!(created.shuffled);
    assert_eq!(created.remaining, 3);

    let mut opened = codes(&engine.open_deck(&created.deck_id).unwrap().cards);
    opened.sort();
    assert_eq!(opened, vec!["8c", "as", "kh"]);
}

#[test]
fn test_concurrent_draws_never_over_issue() {
    let engine = setup_engine();
    let id = engine.create_deck::<&str>(&[], false).unwrap().deck_id;
    let barrier = Barrier::new(26);

    let drawn: Vec<Card> = crossbeam::scope(|s| {
        let handles: Vec<_> = (0..26)
            .map(|_| {
                s.spawn(|_| {
                    barrier.wait();
                    engine.draw(&id, 2).unwrap().cards
                })
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect()
    })
    .unwrap();

    let remaining = engine.open_deck(&id).unwrap().remaining;
    assert_eq!(drawn.len() + remaining, 52, "issued {} remaining {remaining}", drawn.len());
    assert_eq!(remaining, 0);

    let unique: HashSet<Card> = drawn.into_iter().collect();
    assert_eq!(unique.len(), 52);
}

#[test]
fn test_registry_full_is_storage_error() {
    let engine = Engine::open(Config::builder().max_decks(Some(1)).build()).unwrap();
    engine.create_deck::<&str>(&[], false).unwrap();

    let err = engine.create_deck::<&str>(&[], false).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Storage);
}

// =============================================================================
// Command Execution Tests
// =============================================================================

#[test]
fn test_execute_create_and_open() {
    let engine = setup_engine();

    let reply = engine
        .execute(Command::CreateDeck {
            cards: vec!["10h".into(), "QS".into()],
            shuffled: false,
        })
        .unwrap();
    let created = match reply {
        Reply::Created(created) => created,
        other => panic!("expected Created, got {other:?}"),
    };

    let reply = engine
        .execute(Command::OpenDeck { id: created.deck_id })
        .unwrap();
    let opened = match reply {
        Reply::Opened(opened) => opened,
        other => panic!("expected Opened, got {other:?}"),
    };
    assert_eq!(codes(&opened.cards), vec!["10h", "qs"]);
}

#[test]
fn test_execute_draw() {
    let engine = setup_engine();
    let created = engine.create_deck::<&str>(&[], false).unwrap();

    let reply = engine
        .execute(Command::Draw {
            id: created.deck_id,
            count: Some("10".into()),
        })
        .unwrap();
    let drawn = match reply {
        Reply::Drawn(drawn) => drawn,
        other => panic!("expected Drawn, got {other:?}"),
    };
    assert_eq!(drawn.cards.len(), 10);
    assert_eq!(engine.open_deck(&created.deck_id).unwrap().remaining, 42);
}

#[test]
fn test_execute_draw_unknown_deck_wins_over_missing_count() {
    let engine = setup_engine();

    let err = engine
        .execute(Command::Draw {
            id: DeckId::new(),
            count: None,
        })
        .unwrap_err();
    assert!(matches!(err, DeckError::DeckNotFound(_)));
}

#[test]
fn test_execute_draw_bad_counts() {
    let engine = setup_engine();
    let id = engine.create_deck::<&str>(&[], false).unwrap().deck_id;

    for count in [None, Some("abc"), Some("0"), Some("-2"), Some("1.5")] {
        let err = engine
            .execute(Command::Draw {
                id,
                count: count.map(String::from),
            })
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation, "count {count:?}");
    }

    // Nothing was drawn by the rejected requests
    assert_eq!(engine.open_deck(&id).unwrap().remaining, 52);
}

#[test]
fn test_execute_delete() {
    let engine = setup_engine();
    let id = engine.create_deck::<&str>(&[], false).unwrap().deck_id;

    assert_eq!(engine.execute(Command::DeleteDeck { id }).unwrap(), Reply::Deleted);
    assert_eq!(engine.execute(Command::DeleteDeck { id }).unwrap(), Reply::Deleted);
    assert!(matches!(
        engine.execute(Command::OpenDeck { id }),
        Err(DeckError::DeckNotFound(_))
    ));
}
