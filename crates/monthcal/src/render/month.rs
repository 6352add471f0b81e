//! Month grid rendered as a fixed-width text table.
//!
//! Each day cell is a container of `cell_height - 1` rows under its header
//! row. Event labels are one row each; when they do not fit, the overflow
//! measurer decides how many to drop and the last row says "+N more".

use monthcal_core::calendar::{format_date, format_event_label, DateFormat, DayCell, MonthView};
use monthcal_core::overflow::{compute_overflow, overflow_label, StackLayout};

/// Cell dimensions for the month grid.
///
/// A cell is at least three rows tall: the header, the first event, and the
/// overflow indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridOptions {
    pub cell_width: usize,
    /// Rows per cell, header row included.
    pub cell_height: usize,
}

impl GridOptions {
    pub fn new(cell_width: usize, cell_height: usize) -> Self {
        Self {
            cell_width: cell_width.max(4),
            cell_height: cell_height.max(3),
        }
    }
}

/// Renders the lines of one day cell, each exactly `cell_width` wide.
pub fn render_day_cell(cell: &DayCell<'_>, options: GridOptions) -> Vec<String> {
    let width = options.cell_width;
    let body_rows = options.cell_height - 1;

    let mut lines = Vec::with_capacity(options.cell_height);
    lines.push(fit(&day_header(cell), width));

    let mut layout = StackLayout::uniform(cell.events.len(), 1, body_rows as u32);
    let hidden = compute_overflow(&mut layout);
    let shown = cell.events.len() - hidden;

    lines.extend(cell.events.iter().take(shown).map(|event| {
        let symbol = marker(event.kind.is_all_day());
        fit(&format!("{symbol} {}", format_event_label(event)), width)
    }));
    if let Some(label) = overflow_label(hidden) {
        lines.push(fit(&label, width));
    }

    while lines.len() < options.cell_height {
        lines.push(" ".repeat(width));
    }
    lines
}

/// Renders the whole month: title, weekday names, and the grid.
pub fn render_month(view: &MonthView<'_>, options: GridOptions) -> String {
    let width = options.cell_width;
    let border = {
        let segment = "-".repeat(width);
        format!("+{}+", vec![segment; 7].join("+"))
    };

    let mut output = String::new();
    let title = format_date(
        &view.month.and_hms_opt(0, 0, 0).unwrap_or_default(),
        DateFormat::MonthYearLong,
    );
    output.push_str(&title);
    output.push('\n');

    if let Some(first_week) = view.weeks().next() {
        let names: Vec<String> = first_week
            .iter()
            .filter(|cell| cell.show_week_name)
            .map(|cell| {
                let day = cell.date.and_hms_opt(0, 0, 0).unwrap_or_default();
                fit(&format_date(&day, DateFormat::WeekdayShort), width)
            })
            .collect();
        output.push_str(&format!(" {} \n", names.join(" ")));
    }

    output.push_str(&border);
    output.push('\n');

    for week in view.weeks() {
        let cells: Vec<Vec<String>> = week
            .iter()
            .map(|cell| render_day_cell(cell, options))
            .collect();
        for row in 0..options.cell_height {
            let line: Vec<&str> = cells.iter().map(|cell| cell[row].as_str()).collect();
            output.push_str(&format!("|{}|\n", line.join("|")));
        }
        output.push_str(&border);
        output.push('\n');
    }

    output
}

/// Header row: "[10]" for today, "(26)" for days outside the month,
/// a trailing "~" for days already past.
fn day_header(cell: &DayCell<'_>) -> String {
    let day = cell.date.and_hms_opt(0, 0, 0).unwrap_or_default();
    let number = format_date(&day, DateFormat::DayNumeric);
    let mut header = if cell.is_today {
        format!("[{number}]")
    } else if !cell.in_month {
        format!("({number})")
    } else {
        number
    };
    if cell.is_past {
        header.push('~');
    }
    header
}

fn marker(all_day: bool) -> char {
    if all_day {
        '#'
    } else {
        '*'
    }
}

/// Pads or cuts `text` to exactly `width` characters.
fn fit(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count > width {
        let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
        cut.push('…');
        cut
    } else {
        format!("{text}{}", " ".repeat(width - count))
    }
}
