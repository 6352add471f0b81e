//! Event form: raw input from the add/edit surface and its validation.
//!
//! Validation failures never reach the caller as errors from [`EventForm::submit`];
//! the submission simply does not happen and the store is left untouched.

use chrono::NaiveDateTime;

use super::error::ValidationError;
use super::types::{Event, EventColor, EventDraft, EventId, EventKind};
use crate::serde::{parse_time, TIME_FORMAT};
use crate::storage::KeyValueStore;
use crate::store::EventStore;

/// Raw values as typed into the event form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventForm {
    pub name: Option<String>,
    pub all_day: bool,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    /// Selected palette color by name. Blank means the default color.
    pub color: Option<String>,
    /// The day being added to, or the edited event's own date.
    pub date: NaiveDateTime,
    /// Set when editing an existing event.
    pub event_id: Option<EventId>,
}

impl EventForm {
    /// Creates an empty form for adding an event on `date`.
    pub fn new(date: NaiveDateTime) -> Self {
        Self {
            date,
            ..Self::default()
        }
    }

    /// Creates a form pre-filled from an existing event.
    pub fn edit(event: &Event) -> Self {
        let time = |value: Option<chrono::NaiveTime>| {
            value.map(|time| time.format(TIME_FORMAT).to_string())
        };
        Self {
            name: Some(event.name.clone()),
            all_day: event.kind.is_all_day(),
            start_time: time(event.kind.start_time()),
            end_time: time(event.kind.end_time()),
            color: Some(event.color.to_string()),
            date: event.date,
            event_id: Some(event.id.clone()),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_all_day(mut self, all_day: bool) -> Self {
        self.all_day = all_day;
        self
    }

    pub fn with_start_time(mut self, start: impl Into<String>) -> Self {
        self.start_time = Some(start.into());
        self
    }

    pub fn with_end_time(mut self, end: impl Into<String>) -> Self {
        self.end_time = Some(end.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// True when the form edits an existing event rather than adding one.
    pub fn is_edit(&self) -> bool {
        self.event_id.is_some()
    }

    /// Converts the raw input into a draft of the matching kind.
    ///
    /// Start and end times are not compared; an end before the start is
    /// accepted as entered.
    pub fn validate(&self) -> Result<EventDraft, ValidationError> {
        let name = self
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or(ValidationError::EmptyName)?;

        let color = match self.color.as_deref().map(str::trim) {
            Some(color) if !color.is_empty() => color.parse::<EventColor>()?,
            _ => EventColor::default(),
        };

        let kind = if self.all_day {
            EventKind::AllDay
        } else {
            let start = required_time(
                self.start_time.as_deref(),
                "start time",
                ValidationError::MissingStartTime,
            )?;
            let end = required_time(
                self.end_time.as_deref(),
                "end time",
                ValidationError::MissingEndTime,
            )?;
            EventKind::Timed { start, end }
        };

        Ok(EventDraft {
            name: name.to_string(),
            color,
            date: self.date,
            kind,
        })
    }

    /// Validates and writes the result into `store`.
    ///
    /// Adds in add mode and replaces the edited event in edit mode. Returns
    /// the affected id, or `None` when the input was rejected or the edited
    /// event no longer exists.
    pub fn submit<S: KeyValueStore>(&self, store: &mut EventStore<S>) -> Option<EventId> {
        let draft = match self.validate() {
            Ok(draft) => draft,
            Err(error) => {
                tracing::debug!(%error, "Event form rejected");
                return None;
            }
        };

        match &self.event_id {
            Some(id) => store.update(draft, id).then(|| id.clone()),
            None => Some(store.add(draft)),
        }
    }
}

fn required_time(
    value: Option<&str>,
    field: &'static str,
    missing: ValidationError,
) -> Result<chrono::NaiveTime, ValidationError> {
    let value = value.map(str::trim).filter(|value| !value.is_empty());
    let Some(value) = value else {
        return Err(missing);
    };
    parse_time(value).ok_or_else(|| ValidationError::InvalidTime {
        field,
        value: value.to_string(),
    })
}

/// Open/closed state of the add/edit dialog.
///
/// The dialog closes itself on a successful submit or a delete; a rejected
/// submit leaves it open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventFormModal {
    open: bool,
}

impl EventFormModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Submits `form`, closing the dialog only when the submission went through.
    pub fn submit<S: KeyValueStore>(
        &mut self,
        form: &EventForm,
        store: &mut EventStore<S>,
    ) -> Option<EventId> {
        let id = form.submit(store)?;
        self.close();
        Some(id)
    }

    /// Deletes the edited event and closes the dialog.
    pub fn delete<S: KeyValueStore>(&mut self, id: &EventId, store: &mut EventStore<S>) -> bool {
        let deleted = store.delete(id);
        self.close();
        deleted
    }
}
