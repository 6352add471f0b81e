//! The event store: sole owner of the event collection.
//!
//! Every mutation goes through [`EventStore`] and is written back to its
//! [`KeyValueStore`] before the method returns. Persistence failures are
//! logged and absorbed; the in-memory collection stays authoritative.

use std::collections::HashSet;

use crate::calendar::{Event, EventDraft, EventId};
use crate::storage::{decode_events, encode_events, KeyValueStore, DEFAULT_EVENTS_KEY};

/// Ordered, id-keyed event collection backed by key-value storage.
#[derive(Debug)]
pub struct EventStore<S: KeyValueStore> {
    storage: S,
    key: String,
    events: Vec<Event>,
}

impl<S: KeyValueStore> EventStore<S> {
    /// Opens the store under the default `EVENTS` key.
    pub fn open(storage: S) -> Self {
        Self::open_with_key(storage, DEFAULT_EVENTS_KEY)
    }

    /// Opens the store, restoring whatever is saved under `key`.
    ///
    /// An empty slot, an unreadable slot, or a corrupt payload all yield an
    /// empty collection.
    pub fn open_with_key(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let events = load_events(&storage, &key);
        tracing::debug!(key = %key, count = events.len(), "Opened event store");
        Self {
            storage,
            key,
            events,
        }
    }

    /// Read-only view of every event, in insertion order.
    pub fn list(&self) -> &[Event] {
        &self.events
    }

    /// Gets an event by its ID.
    pub fn get(&self, id: &EventId) -> Option<&Event> {
        self.events.iter().find(|event| &event.id == id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The storage key this store persists under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Appends a new event built from `draft` under a fresh id.
    pub fn add(&mut self, draft: EventDraft) -> EventId {
        let id = self.fresh_id();
        self.events.push(Event::from_draft(id.clone(), draft));
        tracing::debug!(id = %id, "Added event");
        self.persist();
        id
    }

    /// Replaces the event with `id` by a value built from `draft`.
    ///
    /// The event keeps its id and position. Returns `false`, without
    /// touching storage, when no event has that id.
    pub fn update(&mut self, draft: EventDraft, id: &EventId) -> bool {
        let Some(slot) = self.events.iter_mut().find(|event| &event.id == id) else {
            tracing::debug!(id = %id, "Update skipped, event not found");
            return false;
        };

        *slot = Event::from_draft(id.clone(), draft);
        tracing::debug!(id = %id, "Updated event");
        self.persist();
        true
    }

    /// Removes the event with `id`. Returns `false` when it was absent.
    pub fn delete(&mut self, id: &EventId) -> bool {
        let before = self.events.len();
        self.events.retain(|event| &event.id != id);

        if self.events.len() == before {
            tracing::debug!(id = %id, "Delete skipped, event not found");
            return false;
        }

        tracing::debug!(id = %id, "Deleted event");
        self.persist();
        true
    }

    /// Consumes the store and returns its storage handle.
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn fresh_id(&self) -> EventId {
        loop {
            let id = EventId::generate();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    /// Writes the full collection. Fire-and-forget: failures are logged only.
    fn persist(&self) {
        let payload = match encode_events(&self.events) {
            Ok(payload) => payload,
            Err(error) => {
                tracing::warn!(key = %self.key, %error, "Failed to encode events");
                return;
            }
        };

        if let Err(error) = self.storage.set(&self.key, &payload) {
            tracing::warn!(key = %self.key, %error, "Failed to persist events");
        }
    }
}

fn load_events<S: KeyValueStore>(storage: &S, key: &str) -> Vec<Event> {
    let payload = match storage.get(key) {
        Ok(Some(payload)) => payload,
        Ok(None) => return Vec::new(),
        Err(error) => {
            tracing::warn!(key, %error, "Failed to read stored events, starting empty");
            return Vec::new();
        }
    };

    let decoded = match decode_events(&payload) {
        Ok(events) => events,
        Err(error) => {
            tracing::warn!(key, %error, "Stored events are corrupt, starting empty");
            return Vec::new();
        }
    };

    let mut seen = HashSet::new();
    decoded
        .into_iter()
        .filter(|event| {
            let unique = seen.insert(event.id.clone());
            if !unique {
                tracing::warn!(id = %event.id, "Dropping stored event with duplicate id");
            }
            unique
        })
        .collect()
}
