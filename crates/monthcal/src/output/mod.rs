//! Output formatting functions.

pub mod json;
pub mod pretty;

use chrono::NaiveDate;
use monthcal_core::calendar::Event;

use crate::cli::OutputFormat;

/// Format one event in the requested format.
pub fn format_event(event: &Event, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_json(event),
        OutputFormat::Pretty => pretty::format_event(event),
    }
}

/// Format the whole collection in storage order.
pub fn format_events(events: &[Event], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_json(&events),
        OutputFormat::Pretty => pretty::format_events(events),
    }
}

/// Format the events of `day`, already in display order.
pub fn format_day(day: NaiveDate, events: &[&Event], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_json(&events),
        OutputFormat::Pretty => pretty::format_day(day, events),
    }
}
