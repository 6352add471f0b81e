mod error;
mod form;
mod format;
mod grid;
mod sorting;
mod types;

pub use error::{RecordError, ValidationError};
pub use form::{EventForm, EventFormModal};
pub use format::{format_date, format_event_label, format_time, DateFormat};
pub use grid::{
    add_months, build_month_view, days_in_range, end_of_month, end_of_week, is_before_day,
    is_same_day, is_same_month, is_today, month_grid, start_of_month, start_of_week, sub_months,
    DayCell, MonthView,
};
pub use sorting::{compare_for_display, events_for_day, group_events_by_day, sort_for_display};
pub use types::{Event, EventColor, EventDraft, EventId, EventKind};
