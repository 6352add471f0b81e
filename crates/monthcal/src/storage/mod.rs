//! Storage backends for the event store.
//!
//! The core only knows the `KeyValueStore` port; this module provides the
//! durable implementation used by the binary.

mod file;

pub use file::FileStorage;
