use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One attendance mark for one calendar day.
///
/// Persisted inside the owning member document as
/// `{"date":"YYYY-MM-DD","confirmed":false}`. At most one record exists
/// per person per date; the stored collection is unordered and consumers
/// sort by date descending for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenceRecord {
    pub date: NaiveDate, // ⇔ "date" (TEXT "YYYY-MM-DD")
    pub confirmed: bool, // ⇔ "confirmed" (false until an admin confirms)
}

impl PresenceRecord {
    /// A fresh, unconfirmed check-in for the given day.
    pub fn checked_in(date: NaiveDate) -> Self {
        Self {
            date,
            confirmed: false,
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn state(&self) -> AttendanceState {
        if self.confirmed {
            AttendanceState::Confirmed
        } else {
            AttendanceState::CheckedIn
        }
    }
}

/// Per (person, date) state machine:
/// Absent → CheckedIn → Confirmed, one-directional.
///
/// A record never exists in a "confirmed but never checked in" state:
/// Absent means no record at all, and confirmation can only flip an
/// existing CheckedIn record.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum AttendanceState {
    Absent,
    CheckedIn,
    Confirmed,
}

impl AttendanceState {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceState::Absent => "absent",
            AttendanceState::CheckedIn => "checked-in",
            AttendanceState::Confirmed => "confirmed",
        }
    }

    pub fn is_checked_in(&self) -> bool {
        matches!(self, AttendanceState::CheckedIn | AttendanceState::Confirmed)
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self, AttendanceState::Confirmed)
    }
}

/// State of a record set on a given day.
pub fn state_for(history: &[PresenceRecord], date: &NaiveDate) -> AttendanceState {
    match history.iter().find(|r| r.date == *date) {
        Some(r) => r.state(),
        None => AttendanceState::Absent,
    }
}

pub fn record_for<'a>(
    history: &'a [PresenceRecord],
    date: &NaiveDate,
) -> Option<&'a PresenceRecord> {
    history.iter().find(|r| r.date == *date)
}

/// Most recent check-in date, if any.
pub fn last_check_in(history: &[PresenceRecord]) -> Option<NaiveDate> {
    history.iter().map(|r| r.date).max()
}

/// Records sorted by date descending (display order).
pub fn sorted_desc(history: &[PresenceRecord]) -> Vec<PresenceRecord> {
    let mut out = history.to_vec();
    out.sort_by(|a, b| b.date.cmp(&a.date));
    out
}
