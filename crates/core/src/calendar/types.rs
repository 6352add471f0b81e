use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::{RecordError, ValidationError};
use crate::serde::{deserialize_datetime, parse_time, serialize_datetime, TIME_FORMAT};

/// Opaque, store-generated event identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for EventId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for EventId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// The fixed event color palette. The first member is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventColor {
    #[default]
    Red,
    Green,
    Blue,
}

impl EventColor {
    /// Every palette color, in display order.
    pub const ALL: [EventColor; 3] = [EventColor::Red, EventColor::Green, EventColor::Blue];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventColor::Red => "red",
            EventColor::Green => "green",
            EventColor::Blue => "blue",
        }
    }
}

impl fmt::Display for EventColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventColor {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        EventColor::ALL
            .into_iter()
            .find(|color| color.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ValidationError::UnknownColor(s.to_string()))
    }
}

/// Whether an event occupies the whole day or a wall-clock range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// An all-day event (no specific time).
    AllDay,
    /// A timed event. `end` is not required to follow `start`.
    Timed { start: NaiveTime, end: NaiveTime },
}

impl EventKind {
    /// Returns the sort priority for this kind.
    /// Lower values appear first in a day cell.
    pub fn sort_priority(&self) -> u8 {
        match self {
            EventKind::AllDay => 0,
            EventKind::Timed { .. } => 1,
        }
    }

    pub fn is_all_day(&self) -> bool {
        matches!(self, EventKind::AllDay)
    }

    pub fn is_timed(&self) -> bool {
        matches!(self, EventKind::Timed { .. })
    }

    /// Returns the start time if this is a timed event.
    pub fn start_time(&self) -> Option<NaiveTime> {
        match self {
            EventKind::Timed { start, .. } => Some(*start),
            EventKind::AllDay => None,
        }
    }

    /// Returns the end time if this is a timed event.
    pub fn end_time(&self) -> Option<NaiveTime> {
        match self {
            EventKind::Timed { end, .. } => Some(*end),
            EventKind::AllDay => None,
        }
    }
}

/// An event as produced by the form, before the store assigns an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub name: String,
    pub color: EventColor,
    /// Only the calendar day is used for placement.
    pub date: NaiveDateTime,
    pub kind: EventKind,
}

impl EventDraft {
    /// Creates an all-day draft with the default color.
    pub fn all_day(name: impl Into<String>, date: NaiveDateTime) -> Self {
        Self {
            name: name.into(),
            color: EventColor::default(),
            date,
            kind: EventKind::AllDay,
        }
    }

    /// Creates a timed draft with the default color.
    pub fn timed(
        name: impl Into<String>,
        date: NaiveDateTime,
        start: NaiveTime,
        end: NaiveTime,
    ) -> Self {
        Self {
            name: name.into(),
            color: EventColor::default(),
            date,
            kind: EventKind::Timed { start, end },
        }
    }

    pub fn with_color(mut self, color: EventColor) -> Self {
        self.color = color;
        self
    }
}

/// A stored event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EventRecord", into = "EventRecord")]
pub struct Event {
    pub id: EventId,
    pub name: String,
    pub color: EventColor,
    pub date: NaiveDateTime,
    pub kind: EventKind,
}

impl Event {
    /// Builds the full value stored under `id` from a draft.
    pub fn from_draft(id: EventId, draft: EventDraft) -> Self {
        let EventDraft {
            name,
            color,
            date,
            kind,
        } = draft;
        Self {
            id,
            name,
            color,
            date,
            kind,
        }
    }

    /// The calendar day this event is placed on.
    pub fn day(&self) -> NaiveDate {
        self.date.date()
    }

    /// Returns the event without its id.
    pub fn to_draft(&self) -> EventDraft {
        EventDraft {
            name: self.name.clone(),
            color: self.color,
            date: self.date,
            kind: self.kind,
        }
    }
}

/// Wire shape of an event: a flat object tagged by `allDay`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EventRecord {
    id: EventId,
    name: String,
    color: EventColor,
    #[serde(
        serialize_with = "serialize_datetime",
        deserialize_with = "deserialize_datetime"
    )]
    date: NaiveDateTime,
    all_day: bool,
    /// Raw text; parsed only when `all_day` is false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    end_time: Option<String>,
}

fn record_time(value: Option<&str>, field: &'static str) -> Result<NaiveTime, RecordError> {
    let value = value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or(RecordError::MissingTime(field))?;
    parse_time(value).ok_or_else(|| RecordError::InvalidTime {
        field,
        value: value.to_string(),
    })
}

impl TryFrom<EventRecord> for Event {
    type Error = RecordError;

    fn try_from(record: EventRecord) -> Result<Self, Self::Error> {
        if record.id.as_str().trim().is_empty() {
            return Err(RecordError::MissingId);
        }

        let kind = if record.all_day {
            EventKind::AllDay
        } else {
            EventKind::Timed {
                start: record_time(record.start_time.as_deref(), "startTime")?,
                end: record_time(record.end_time.as_deref(), "endTime")?,
            }
        };

        Ok(Event {
            id: record.id,
            name: record.name,
            color: record.color,
            date: record.date,
            kind,
        })
    }
}

impl From<Event> for EventRecord {
    fn from(event: Event) -> Self {
        EventRecord {
            id: event.id,
            name: event.name,
            color: event.color,
            date: event.date,
            all_day: event.kind.is_all_day(),
            start_time: event
                .kind
                .start_time()
                .map(|time| time.format(TIME_FORMAT).to_string()),
            end_time: event
                .kind
                .end_time()
                .map(|time| time.format(TIME_FORMAT).to_string()),
        }
    }
}
