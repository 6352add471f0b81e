//! Style-driven date formatting for calendar chrome.
//!
//! Renders the en-US forms of the handful of styles the month view uses.

use chrono::{NaiveDateTime, NaiveTime};

use super::types::{Event, EventKind};

/// Formatting styles, named after the options they correspond to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// `{weekday: 'short'}` - "Sat"
    WeekdayShort,
    /// `{day: 'numeric'}` - "1"
    DayNumeric,
    /// `{month: 'long', year: 'numeric'}` - "June 2024"
    MonthYearLong,
    /// `{dateStyle: 'short'}` - "6/1/24"
    DateShort,
    /// `{timeStyle: 'short'}` - "9:00 AM"
    TimeShort,
}

impl DateFormat {
    fn pattern(&self) -> &'static str {
        match self {
            DateFormat::WeekdayShort => "%a",
            DateFormat::DayNumeric => "%-d",
            DateFormat::MonthYearLong => "%B %Y",
            DateFormat::DateShort => "%-m/%-d/%y",
            DateFormat::TimeShort => "%-I:%M %p",
        }
    }
}

pub fn format_date(value: &NaiveDateTime, style: DateFormat) -> String {
    value.format(style.pattern()).to_string()
}

/// Formats a wall-clock time in the short time style.
pub fn format_time(value: NaiveTime) -> String {
    value.format(DateFormat::TimeShort.pattern()).to_string()
}

/// The one-line label for an event inside a day cell.
pub fn format_event_label(event: &Event) -> String {
    match event.kind {
        EventKind::AllDay => event.name.clone(),
        EventKind::Timed { start, .. } => format!("{} {}", format_time(start), event.name),
    }
}
