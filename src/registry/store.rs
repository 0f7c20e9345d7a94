//! Sharded deck registry

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::RwLock;

use super::{DeckId, Versioned};
use crate::config::Config;
use crate::error::{DeckError, Result};
use crate::model::Deck;

const DEFAULT_SHARDS: usize = 16;

/// Stored deck plus its write counter
struct Slot {
    deck: Deck,
    version: u64,
}

type Shard = RwLock<HashMap<DeckId, Slot>>;

/// Concurrent keyed store of decks
///
/// ## Concurrency Model
///
/// - Every operation takes exactly one shard lock and releases it before
///   returning, so each create/read/update/delete is atomic.
/// - Readers get cloned snapshots; nobody holds a reference into the map.
/// - `read` followed by `update` is two separate critical sections. Two
///   callers doing that against the same deck can overwrite each other's
///   draw. Use `update_with` (locked read-modify-write) or
///   `compare_and_swap` (optimistic, version-checked) instead.
pub struct DeckRegistry {
    shards: Box<[Shard]>,

    /// Live deck count (includes creates that have reserved a slot)
    len: AtomicUsize,

    max_decks: Option<usize>,
}

impl DeckRegistry {
    /// Create a registry with `shards` independently locked shards
    pub fn new(shards: usize, max_decks: Option<usize>) -> Result<Self> {
        if shards == 0 {
            return Err(DeckError::Config(
                "registry needs at least one shard".to_string(),
            ));
        }
        Ok(Self::build(shards, max_decks))
    }

    /// Create a registry from the registry section of `config`
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.registry_shards, config.max_decks)
    }

    fn build(shards: usize, max_decks: Option<usize>) -> Self {
        Self {
            shards: (0..shards).map(|_| RwLock::new(HashMap::new())).collect(),
            len: AtomicUsize::new(0),
            max_decks,
        }
    }

    fn shard(&self, id: &DeckId) -> &Shard {
        let index = id.as_u128() % self.shards.len() as u128;
        &self.shards[index as usize]
    }

    /// Store a new deck under a freshly generated identifier
    pub fn create(&self, deck: Deck) -> Result<DeckId> {
        self.reserve_slot()?;

        loop {
            let id = DeckId::new();
            let mut shard = self.shard(&id).write();
            match shard.entry(id) {
                Entry::Vacant(vacant) => {
                    vacant.insert(Slot { deck, version: 1 });
                    tracing::debug!("Created deck {}", id);
                    return Ok(id);
                }
                Entry::Occupied(_) => {
                    tracing::warn!("Deck id collision on {}, regenerating", id);
                }
            }
        }
    }

    fn reserve_slot(&self) -> Result<()> {
        match self.max_decks {
            None => {
                self.len.fetch_add(1, Ordering::AcqRel);
                Ok(())
            }
            Some(capacity) => self
                .len
                .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| {
                    (n < capacity).then_some(n + 1)
                })
                .map(|_| ())
                .map_err(|_| DeckError::RegistryFull { capacity }),
        }
    }

    /// Snapshot of the deck, or None if unknown
    pub fn read(&self, id: &DeckId) -> Option<Deck> {
        self.shard(id).read().get(id).map(|slot| slot.deck.clone())
    }

    /// Snapshot of the deck with the version it was read at
    pub fn read_versioned(&self, id: &DeckId) -> Option<Versioned> {
        self.shard(id).read().get(id).map(|slot| Versioned {
            deck: slot.deck.clone(),
            version: slot.version,
        })
    }

    pub fn contains(&self, id: &DeckId) -> bool {
        self.shard(id).read().contains_key(id)
    }

    /// Replace a stored deck wholesale, returning the new version
    ///
    /// Never inserts: an unknown (or deleted) id is `DeckNotFound`.
    pub fn update(&self, id: &DeckId, deck: Deck) -> Result<u64> {
        let mut shard = self.shard(id).write();
        let slot = shard.get_mut(id).ok_or(DeckError::DeckNotFound(*id))?;

        slot.deck = deck;
        slot.version += 1;
        Ok(slot.version)
    }

    /// Replace a stored deck only if it is still at `expected_version`
    pub fn compare_and_swap(&self, id: &DeckId, expected_version: u64, deck: Deck) -> Result<u64> {
        let mut shard = self.shard(id).write();
        let slot = shard.get_mut(id).ok_or(DeckError::DeckNotFound(*id))?;

        if slot.version != expected_version {
            tracing::debug!(
                "CAS on deck {} rejected: expected v{}, found v{}",
                id,
                expected_version,
                slot.version
            );
            return Err(DeckError::VersionConflict {
                expected: expected_version,
                actual: slot.version,
            });
        }

        slot.deck = deck;
        slot.version += 1;
        Ok(slot.version)
    }

    /// Apply `f` to a stored deck under its shard's write lock
    ///
    /// `f` works on a copy that is committed only if it returns `Ok`, so a
    /// failed mutation leaves the stored deck untouched.
    pub fn update_with<T, F>(&self, id: &DeckId, f: F) -> Result<T>
    where
        F: FnOnce(&mut Deck) -> Result<T>,
    {
        let mut shard = self.shard(id).write();
        let slot = shard.get_mut(id).ok_or(DeckError::DeckNotFound(*id))?;

        let mut draft = slot.deck.clone();
        let out = f(&mut draft)?;

        slot.deck = draft;
        slot.version += 1;
        Ok(out)
    }

    /// Remove a deck; returns whether it was present
    pub fn delete(&self, id: &DeckId) -> bool {
        let removed = self.shard(id).write().remove(id).is_some();
        if removed {
            self.len.fetch_sub(1, Ordering::AcqRel);
            tracing::debug!("Deleted deck {}", id);
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.len.load(Ordering::Acquire)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }
}

impl Default for DeckRegistry {
    fn default() -> Self {
        Self::build(DEFAULT_SHARDS, None)
    }
}
