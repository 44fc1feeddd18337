//! Date helpers for the attendance window: the calendar year in effect,
//! the two fixed semester halves and the Mon-Sat business week.
//!
//! January 1st is never a trackable date: the gym is closed and the
//! attendance year rolls over on that day.

use chrono::{Datelike, NaiveDate, Weekday};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// True when `date` is January 1st (of any year).
pub fn is_new_year_day(date: &NaiveDate) -> bool {
    date.month() == 1 && date.day() == 1
}

/// A date is trackable only inside the current attendance year, and
/// never on January 1st.
pub fn is_valid_attendance_date(date: &NaiveDate, today: &NaiveDate) -> bool {
    if date.year() != today.year() {
        return false;
    }
    !is_new_year_day(date)
}

/// Count the days in `[start, end]` whose weekday is Monday through
/// Saturday, excluding January 1st. Returns 0 when `end < start`.
pub fn count_business_days(start: &NaiveDate, end: &NaiveDate) -> u32 {
    let mut count = 0;
    let mut d = *start;

    while d <= *end {
        if d.weekday() != Weekday::Sun && !is_new_year_day(&d) {
            count += 1;
        }
        d = match d.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    count
}

/// One of the two fixed half-year ranges used as the denominator period
/// for the attendance percentage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemesterWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub label: String,
    pub range_label: String,
}

/// Split the reference year into two fixed halves:
/// months 1-6 → Jan 2 - Jun 30, months 7-12 → Jul 1 - Dec 31.
/// Selection is purely by calendar month of the reference date.
pub fn semester_window(reference: &NaiveDate) -> SemesterWindow {
    let year = reference.year();

    let (start, end, label) = if reference.month() <= 6 {
        (
            NaiveDate::from_ymd_opt(year, 1, 2).unwrap(),
            NaiveDate::from_ymd_opt(year, 6, 30).unwrap(),
            format!("1st semester {}", year),
        )
    } else {
        (
            NaiveDate::from_ymd_opt(year, 7, 1).unwrap(),
            NaiveDate::from_ymd_opt(year, 12, 31).unwrap(),
            format!("2nd semester {}", year),
        )
    };

    let range_label = format!(
        "{} → {}",
        start.format("%Y-%m-%d"),
        end.format("%Y-%m-%d")
    );

    SemesterWindow {
        start,
        end,
        label,
        range_label,
    }
}

pub fn all_days_of_month(year: i32, month: u32) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut d = match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(d) => d,
        None => return out,
    };

    while d.month() == month {
        out.push(d);
        d = match d.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    out
}

pub fn month_name(mm: &str) -> &'static str {
    match mm {
        "01" => "January",
        "02" => "February",
        "03" => "March",
        "04" => "April",
        "05" => "May",
        "06" => "June",
        "07" => "July",
        "08" => "August",
        "09" => "September",
        "10" => "October",
        "11" => "November",
        "12" => "December",
        _ => "Unknown",
    }
}

/// Weekday label in the style requested by the config `show_weekday`
/// parameter (None / Short / Medium / Long). Unknown modes behave as None.
pub fn weekday_str(date: &NaiveDate, mode: &str) -> String {
    let idx = date.weekday().num_days_from_monday() as usize;

    const SHORT: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];
    const MEDIUM: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
    const LONG: [&str; 7] = [
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ];

    match mode {
        "Short" => SHORT[idx].to_string(),
        "Medium" => MEDIUM[idx].to_string(),
        "Long" => LONG[idx].to_string(),
        _ => String::new(),
    }
}
