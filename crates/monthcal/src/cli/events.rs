//! Event CLI arguments and their mapping onto the event form.

use chrono::{NaiveDate, NaiveTime};
use clap::{Args, Parser};
use monthcal_core::calendar::{Event, EventForm};

/// Form fields shared by `add` and `edit`.
#[derive(Debug, Clone, Default, Args)]
pub struct EventFields {
    /// Event name.
    #[arg(long)]
    pub name: Option<String>,
    /// Make this an all-day event.
    #[arg(long, conflicts_with = "timed")]
    pub all_day: bool,
    /// Make this a timed event (edit only; add is timed unless --all-day).
    #[arg(long)]
    pub timed: bool,
    /// Start time (HH:MM) for timed events.
    #[arg(long)]
    pub start: Option<String>,
    /// End time (HH:MM) for timed events.
    #[arg(long)]
    pub end: Option<String>,
    /// Color: red, green or blue.
    #[arg(long)]
    pub color: Option<String>,
}

/// Arguments for adding an event.
#[derive(Debug, Parser)]
pub struct AddArgs {
    /// Day of the event (YYYY-MM-DD).
    #[arg(long)]
    pub date: NaiveDate,
    #[command(flatten)]
    pub fields: EventFields,
}

/// Arguments for replacing an event. The event keeps its date.
#[derive(Debug, Parser)]
pub struct EditArgs {
    /// Event ID.
    pub id: String,
    #[command(flatten)]
    pub fields: EventFields,
}

impl AddArgs {
    /// Builds the add-mode form for these arguments.
    pub fn to_form(&self) -> EventForm {
        let form = EventForm::new(self.date.and_time(NaiveTime::MIN));
        self.fields.apply(form)
    }
}

impl EditArgs {
    /// Builds the edit-mode form: the event's current values, overridden by
    /// whatever was passed.
    pub fn to_form(&self, event: &Event) -> EventForm {
        self.fields.apply(EventForm::edit(event))
    }
}

impl EventFields {
    fn apply(&self, mut form: EventForm) -> EventForm {
        if let Some(name) = &self.name {
            form.name = Some(name.clone());
        }
        if self.all_day {
            form.all_day = true;
        } else if self.timed {
            form.all_day = false;
        }
        if let Some(start) = &self.start {
            form.start_time = Some(start.clone());
        }
        if let Some(end) = &self.end {
            form.end_time = Some(end.clone());
        }
        if let Some(color) = &self.color {
            form.color = Some(color.clone());
        }
        form
    }
}
