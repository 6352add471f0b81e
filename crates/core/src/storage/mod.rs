mod codec;
mod error;
mod memory;
mod traits;

pub use codec::{decode_events, encode_events};
pub use error::{Result, StorageError};
pub use memory::{MemoryStorage, NoopStorage};
pub use traits::KeyValueStore;

/// Key the event collection is stored under unless configured otherwise.
pub const DEFAULT_EVENTS_KEY: &str = "EVENTS";
