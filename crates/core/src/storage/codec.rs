//! Pure functions converting the event collection to and from its stored
//! JSON form.
//!
//! The stored value is a JSON array of event objects. Decoding is done item
//! by item so one damaged object does not cost the whole collection.

use serde_json::Value;

use crate::calendar::Event;

use super::{Result, StorageError};

/// Serializes events, in order, to a JSON array.
pub fn encode_events(events: &[Event]) -> Result<String> {
    serde_json::to_string(events).map_err(|e| StorageError::Serialization(e.to_string()))
}

/// Deserializes a stored JSON array into events.
///
/// Fails only when the payload is not a JSON array. Items that cannot be
/// converted into an [`Event`] (unknown color, unreadable date, timed event
/// without times) are skipped and logged.
pub fn decode_events(payload: &str) -> Result<Vec<Event>> {
    let value: Value =
        serde_json::from_str(payload).map_err(|e| StorageError::Serialization(e.to_string()))?;

    let Value::Array(items) = value else {
        return Err(StorageError::InvalidData(
            "stored events must be a JSON array".to_string(),
        ));
    };

    let total = items.len();
    let events: Vec<Event> = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value::<Event>(item) {
            Ok(event) => Some(event),
            Err(error) => {
                tracing::warn!(index, %error, "Skipping unreadable stored event");
                None
            }
        })
        .collect();

    if events.len() < total {
        tracing::warn!(
            kept = events.len(),
            skipped = total - events.len(),
            "Stored events partially decoded"
        );
    }

    Ok(events)
}
