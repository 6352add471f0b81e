//! monthcal_core - functional core for the monthcal month calendar.
//!
//! The crate holds everything that does not touch a terminal or a disk:
//! the event model, per-day filtering and ordering, form validation, the
//! event store and its key-value persistence port, calendar math, and the
//! overflow measurer used to truncate long day lists.

pub mod calendar;
pub mod overflow;
pub mod serde;
pub mod storage;
pub mod store;

pub use store::EventStore;
