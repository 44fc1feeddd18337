use crate::models::presence::PresenceRecord;
use crate::utils::date::{all_days_of_month, is_new_year_day};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Cells per month grid: 6 weeks of 7 days, Sunday-led.
pub const GRID_CELLS: usize = 42;

/// One cell of the month grid. `day` is None for the leading/trailing
/// blanks and for the permanently non-trackable January 1st.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarCell {
    pub day: Option<u32>,
    pub attended: bool,
    pub confirmed: bool,
    pub is_today: bool,
}

impl CalendarCell {
    fn blank() -> Self {
        Self {
            day: None,
            attended: false,
            confirmed: false,
            is_today: false,
        }
    }
}

/// Project a person's records onto a fixed 42-cell month grid.
///
/// Returns an empty vec when the month's year is outside the current
/// attendance year. The grid length is always a multiple of 7 and at
/// most one cell carries `is_today`.
pub fn month_grid(
    history: &[PresenceRecord],
    year: i32,
    month: u32,
    today: &NaiveDate,
) -> Vec<CalendarCell> {
    if year != today.year() {
        return Vec::new();
    }

    let days = all_days_of_month(year, month);
    let Some(first) = days.first() else {
        return Vec::new();
    };

    let mut cells = Vec::with_capacity(GRID_CELLS);

    // Leading blanks up to the weekday of the 1st (Sunday-led rows)
    for _ in 0..first.weekday().num_days_from_sunday() {
        cells.push(CalendarCell::blank());
    }

    for d in &days {
        // The gym is closed on January 1st: permanently blank cell
        if is_new_year_day(d) {
            cells.push(CalendarCell::blank());
            continue;
        }

        let record = history.iter().find(|r| r.date == *d);

        cells.push(CalendarCell {
            day: Some(d.day()),
            attended: record.is_some(),
            confirmed: record.map(|r| r.confirmed).unwrap_or(false),
            is_today: d == today,
        });
    }

    // Trailing blanks to complete full weeks
    while cells.len() < GRID_CELLS {
        cells.push(CalendarCell::blank());
    }

    cells
}
