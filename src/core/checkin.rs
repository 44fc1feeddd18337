use crate::core::prune::PruneLogic;
use crate::db::documents::DocStore;
use crate::db::log::ttlog;
use crate::db::presence;
use crate::errors::AppResult;
use crate::models::person::PersonRef;
use crate::models::presence::{PresenceRecord, record_for};
use crate::ui::messages::warning;
use crate::utils::date;
use chrono::NaiveDate;

/// High-level business logic for the `checkin` command.
pub struct CheckInLogic;

impl CheckInLogic {
    /// Record today's attendance for the person.
    ///
    /// Returns Ok(false) without writing when the date is excluded or a
    /// record for today already exists; both are expected, recoverable
    /// outcomes, not errors. The current persisted state is re-read
    /// immediately before the conditional append so two racing check-ins
    /// cannot both succeed.
    pub fn apply(store: &mut DocStore, person: &PersonRef, today: &NaiveDate) -> AppResult<bool> {
        //
        // 1) Excluded date: no attendance is tracked on January 1st
        //
        if date::is_new_year_day(today) {
            return Ok(false);
        }

        //
        // 2) Fresh re-read of the persisted history (never a cached view)
        //
        let history = PruneLogic::load_current(store, person, today)?;

        //
        // 3) Same-day guard: at most one record per (person, date)
        //
        if record_for(&history, today).is_some() {
            return Ok(false);
        }

        //
        // 4) Append and persist the whole parent document
        //
        let mut updated = history;
        updated.push(PresenceRecord::checked_in(*today));

        presence::save_history(store, person, updated)?;

        if let Err(e) = ttlog(
            &store.pool.conn,
            "checkin",
            &person.label(),
            &format!("Checked in on {}", today.format("%Y-%m-%d")),
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }

        Ok(true)
    }
}
