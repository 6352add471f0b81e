//! Calendar math for the month grid.
//!
//! Weeks start on Sunday. Every function is pure; "now" is always passed in.

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime};

use super::sorting::{group_events_by_day, sort_for_display};
use super::types::Event;

/// The Sunday on or before `date`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_sunday() as i64;
    date - Duration::days(offset)
}

/// The Saturday on or after `date`.
pub fn end_of_week(date: NaiveDate) -> NaiveDate {
    start_of_week(date) + Duration::days(6)
}

pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    let first = start_of_month(date);
    first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(first)
}

/// Every day from `start` to `end`, inclusive. Empty when `start > end`.
pub fn days_in_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|day| *day <= end).collect()
}

pub fn is_same_day(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    a.date() == b.date()
}

pub fn is_same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// True when the whole of `day` lies before `now`.
pub fn is_before_day(day: NaiveDate, now: NaiveDateTime) -> bool {
    let end_of_day = day.and_time(NaiveTime::MIN) + Duration::days(1) - Duration::nanoseconds(1);
    end_of_day < now
}

pub fn is_today(day: NaiveDate, now: NaiveDateTime) -> bool {
    day == now.date()
}

/// Adds months, clamping the day to the end of the target month.
pub fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months)).unwrap_or(date)
}

/// Subtracts months, clamping the day to the end of the target month.
pub fn sub_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(months)).unwrap_or(date)
}

/// The days shown for `month`: whole weeks covering the first to the last
/// day of the month.
pub fn month_grid(month: NaiveDate) -> Vec<NaiveDate> {
    days_in_range(
        start_of_week(start_of_month(month)),
        end_of_week(end_of_month(month)),
    )
}

/// One cell of the month grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell<'a> {
    pub date: NaiveDate,
    /// False for leading/trailing days borrowed from adjacent months.
    pub in_month: bool,
    pub is_past: bool,
    pub is_today: bool,
    /// True for the first row, which carries the weekday names.
    pub show_week_name: bool,
    /// Events on this day in display order.
    pub events: Vec<&'a Event>,
}

/// A rendered month: its title date and its grid cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthView<'a> {
    pub month: NaiveDate,
    pub days: Vec<DayCell<'a>>,
}

impl<'a> MonthView<'a> {
    /// Cells grouped into rows of seven.
    pub fn weeks(&self) -> std::slice::Chunks<'_, DayCell<'a>> {
        self.days.chunks(7)
    }
}

/// Builds the month view model for `month` as seen at `now`.
pub fn build_month_view(month: NaiveDate, now: NaiveDateTime, events: &[Event]) -> MonthView<'_> {
    let mut grouped = group_events_by_day(events);

    let days = month_grid(month)
        .into_iter()
        .enumerate()
        .map(|(index, date)| {
            let mut day_events = grouped.remove(&date).unwrap_or_default();
            sort_for_display(&mut day_events);

            DayCell {
                date,
                in_month: is_same_month(date, month),
                is_past: is_before_day(date, now),
                is_today: is_today(date, now),
                show_week_name: index < 7,
                events: day_events,
            }
        })
        .collect();

    MonthView { month, days }
}
