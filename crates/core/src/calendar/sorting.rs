use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::NaiveDate;

use super::types::Event;

/// Display order for events in a day cell: all-day first, then timed
/// events by start time. All-day events compare equal to each other.
pub fn compare_for_display(a: &Event, b: &Event) -> Ordering {
    let priority_cmp = a.kind.sort_priority().cmp(&b.kind.sort_priority());
    if priority_cmp != Ordering::Equal {
        return priority_cmp;
    }

    match (a.kind.start_time(), b.kind.start_time()) {
        (Some(a_time), Some(b_time)) => a_time.cmp(&b_time),
        _ => Ordering::Equal,
    }
}

/// Sorts events for display. The sort is stable, so ties keep input order.
pub fn sort_for_display(events: &mut [&Event]) {
    events.sort_by(|a, b| compare_for_display(a, b));
}

/// Selects the events placed on `day` and orders them for display.
pub fn events_for_day(day: NaiveDate, events: &[Event]) -> Vec<&Event> {
    let mut selected: Vec<&Event> = events.iter().filter(|event| event.day() == day).collect();
    sort_for_display(&mut selected);
    selected
}

/// Groups events by calendar day, keeping input order within each day.
pub fn group_events_by_day(events: &[Event]) -> HashMap<NaiveDate, Vec<&Event>> {
    let mut grouped: HashMap<NaiveDate, Vec<&Event>> = HashMap::new();

    for event in events {
        grouped.entry(event.day()).or_default().push(event);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::types::{EventDraft, EventId};
    use chrono::{NaiveDateTime, NaiveTime};

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn at(day: NaiveDate, hour: u32, min: u32) -> NaiveDateTime {
        day.and_hms_opt(hour, min, 0).unwrap()
    }

    fn make_time(hour: u32, min: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, min, 0).unwrap()
    }

    fn all_day(id: &str, name: &str, day: NaiveDate) -> Event {
        Event::from_draft(EventId::from(id), EventDraft::all_day(name, at(day, 0, 0)))
    }

    fn timed(id: &str, name: &str, day: NaiveDate, start: NaiveTime, end: NaiveTime) -> Event {
        Event::from_draft(
            EventId::from(id),
            EventDraft::timed(name, at(day, 0, 0), start, end),
        )
    }

    fn names(events: &[&Event]) -> Vec<String> {
        events.iter().map(|e| e.name.clone()).collect()
    }

    #[test]
    fn test_all_day_before_timed() {
        let day = make_date(2024, 6, 1);
        let events = vec![
            timed("1", "Lunch", day, make_time(12, 0), make_time(13, 0)),
            all_day("2", "Birthday", day),
            timed("3", "Standup", day, make_time(9, 0), make_time(9, 15)),
        ];

        let result = events_for_day(day, &events);

        assert_eq!(names(&result), vec!["Birthday", "Standup", "Lunch"]);
    }

    #[test]
    fn test_all_day_events_keep_insertion_order() {
        let day = make_date(2024, 6, 1);
        let events = vec![
            all_day("1", "Zeta", day),
            timed("2", "Gym", day, make_time(7, 0), make_time(8, 0)),
            all_day("3", "Alpha", day),
        ];

        let result = events_for_day(day, &events);

        assert_eq!(names(&result), vec!["Zeta", "Alpha", "Gym"]);
    }

    #[test]
    fn test_timed_compares_numerically() {
        let day = make_date(2024, 6, 1);
        let events = vec![
            timed("1", "Ten", day, make_time(10, 0), make_time(10, 30)),
            timed("2", "NineThirty", day, make_time(9, 30), make_time(9, 45)),
            timed("3", "Nine", day, make_time(9, 0), make_time(9, 10)),
        ];

        let result = events_for_day(day, &events);

        assert_eq!(names(&result), vec!["Nine", "NineThirty", "Ten"]);
    }

    #[test]
    fn test_equal_start_times_are_stable() {
        let day = make_date(2024, 6, 1);
        let events = vec![
            timed("1", "First", day, make_time(9, 0), make_time(10, 0)),
            timed("2", "Second", day, make_time(9, 0), make_time(9, 30)),
        ];

        let result = events_for_day(day, &events);

        assert_eq!(names(&result), vec!["First", "Second"]);
    }

    #[test]
    fn test_filters_by_calendar_day_ignoring_time() {
        let day = make_date(2024, 6, 1);
        let late = Event::from_draft(
            EventId::from("late"),
            EventDraft::all_day("Late", at(day, 23, 59)),
        );
        let events = vec![
            late,
            all_day("next", "Next day", make_date(2024, 6, 2)),
            all_day("prev", "Previous day", make_date(2024, 5, 31)),
        ];

        let result = events_for_day(day, &events);

        assert_eq!(names(&result), vec!["Late"]);
        assert!(result.iter().all(|event| event.day() == day));
    }

    #[test]
    fn test_input_is_not_mutated() {
        let day = make_date(2024, 6, 1);
        let events = vec![
            timed("1", "Lunch", day, make_time(12, 0), make_time(13, 0)),
            all_day("2", "Birthday", day),
        ];
        let before = events.clone();

        let _ = events_for_day(day, &events);

        assert_eq!(events, before);
    }

    #[test]
    fn test_group_events_by_day() {
        let date1 = make_date(2024, 1, 15);
        let date2 = make_date(2024, 1, 16);
        let events = vec![
            all_day("1", "Event 1", date1),
            all_day("2", "Event 2", date1),
            all_day("3", "Event 3", date2),
        ];

        let grouped = group_events_by_day(&events);

        assert_eq!(grouped.get(&date1).unwrap().len(), 2);
        assert_eq!(grouped.get(&date2).unwrap().len(), 1);
    }
}
