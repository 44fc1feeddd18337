use crate::models::presence::{PresenceRecord, last_check_in, state_for};
use chrono::NaiveDate;
use serde::Serialize;

/// Derived per-person flags, recomputed from the record set on every
/// pushed snapshot. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonStatus {
    pub checked_in_today: bool,
    pub confirmed_today: bool,
    pub is_new_day: bool,
    pub last_check_in: Option<NaiveDate>,
}

impl PersonStatus {
    pub fn derive(history: &[PresenceRecord], today: &NaiveDate) -> Self {
        let state = state_for(history, today);
        let last = last_check_in(history);

        Self {
            checked_in_today: state.is_checked_in(),
            confirmed_today: state.is_confirmed(),
            // Check-in is allowed only once the most recent record is
            // strictly before today (or there is no record at all).
            is_new_day: last.map(|d| d < *today).unwrap_or(true),
            last_check_in: last,
        }
    }
}
