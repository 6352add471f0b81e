//! Pretty output formatting.

use chrono::NaiveDate;
use monthcal_core::calendar::{format_date, format_time, DateFormat, Event, EventKind};

/// Format an event for display.
pub fn format_event(event: &Event) -> String {
    let when = match event.kind {
        EventKind::AllDay => "all day".to_string(),
        EventKind::Timed { start, end } => {
            format!("{} - {}", format_time(start), format_time(end))
        }
    };
    format!(
        "{} [{}]\n  ID: {}\n  Date: {}\n  Time: {}",
        event.name,
        event.color,
        event.id,
        format_date(&event.date, DateFormat::DateShort),
        when
    )
}

/// Format events for display.
pub fn format_events(events: &[Event]) -> String {
    format_listing("EVENTS", events.iter())
}

/// Format the events of one day, already in display order.
pub fn format_day(day: NaiveDate, events: &[&Event]) -> String {
    let title = format!(
        "{} {}",
        format_date(&day.and_time(chrono::NaiveTime::MIN), DateFormat::WeekdayShort),
        format_date(&day.and_time(chrono::NaiveTime::MIN), DateFormat::DateShort)
    );
    format_listing(&title, events.iter().copied())
}

fn format_listing<'a>(title: &str, events: impl ExactSizeIterator<Item = &'a Event>) -> String {
    if events.len() == 0 {
        return "No events found.".to_string();
    }
    let mut output = format!("{} ({})\n", title, events.len());
    output.push_str(&"-".repeat(40));
    for event in events {
        output.push_str(&format!("\n{}", format_event(event)));
        output.push('\n');
    }
    output
}
