use crate::db::documents::DocStore;
use crate::db::log::ttlog;
use crate::db::presence;
use crate::errors::AppResult;
use crate::models::member::MemberDoc;
use crate::models::person::PersonRef;
use crate::models::presence::PresenceRecord;
use crate::ui::messages::warning;
use crate::utils::date;
use chrono::NaiveDate;

/// Year-rollover and out-of-window pruning.
///
/// Every engine read of a person's record set goes through `load_current`,
/// so the stored collection stays bounded to the current attendance year.
pub struct PruneLogic;

impl PruneLogic {
    /// Load the person's records as of the current attendance year.
    ///
    /// - On January 1st the history reads as empty (a fresh attendance
    ///   year begins). The empty history is persisted opportunistically;
    ///   a store failure here only warns, display does not depend on it.
    /// - On any other day, records failing the attendance-date check are
    ///   filtered out and, when any were dropped, the stored history is
    ///   rewritten.
    pub fn load_current(
        store: &mut DocStore,
        person: &PersonRef,
        today: &NaiveDate,
    ) -> AppResult<Vec<PresenceRecord>> {
        let history = presence::load_history(store, person)?;

        //
        // 1) Year rollover: nothing from the prior year is shown
        //
        if date::is_new_year_day(today) {
            if !history.is_empty() {
                match presence::save_history(store, person, Vec::new()) {
                    Ok(()) => {
                        let _ = ttlog(
                            &store.pool.conn,
                            "prune",
                            &person.label(),
                            &format!("Year rollover: cleared {} record(s)", history.len()),
                        );
                    }
                    Err(e) => warning(format!(
                        "Could not reset history for {}: {}",
                        person.label(),
                        e
                    )),
                }
            }
            return Ok(Vec::new());
        }

        //
        // 2) Drop records outside the attendance year (or on Jan 1)
        //
        let kept: Vec<PresenceRecord> = history
            .iter()
            .filter(|r| date::is_valid_attendance_date(&r.date, today))
            .cloned()
            .collect();

        if kept.len() != history.len() {
            let dropped = history.len() - kept.len();
            presence::save_history(store, person, kept.clone())?;

            if let Err(e) = ttlog(
                &store.pool.conn,
                "prune",
                &person.label(),
                &format!("Dropped {} out-of-window record(s)", dropped),
            ) {
                warning(format!("Failed to write internal log: {}", e));
            }
        }

        Ok(kept)
    }

    /// Prune one loaded document in place. Returns the number of records
    /// dropped across the member and all dependents.
    pub fn prune_doc(doc: &mut MemberDoc, today: &NaiveDate) -> usize {
        let mut dropped = 0;

        let before = doc.presence_history.len();
        doc.presence_history
            .retain(|r| date::is_valid_attendance_date(&r.date, today));
        dropped += before - doc.presence_history.len();

        for dep in doc.dependents.iter_mut() {
            let before = dep.presence_history.len();
            dep.presence_history
                .retain(|r| date::is_valid_attendance_date(&r.date, today));
            dropped += before - dep.presence_history.len();
        }

        dropped
    }

    /// Periodic purge over the whole store: one write per document that
    /// actually had out-of-window records.
    pub fn prune_all(store: &mut DocStore, today: &NaiveDate) -> AppResult<usize> {
        let ids = store.list_member_ids()?;
        let mut total = 0;

        for id in ids {
            let Some(mut doc) = store.get_member(&id)? else {
                continue;
            };

            let dropped = Self::prune_doc(&mut doc, today);
            if dropped > 0 {
                store.put_member(&doc)?;
                total += dropped;
            }
        }

        if total > 0 {
            if let Err(e) = ttlog(
                &store.pool.conn,
                "prune",
                "all",
                &format!("Dropped {} out-of-window record(s)", total),
            ) {
                warning(format!("Failed to write internal log: {}", e));
            }
        }

        Ok(total)
    }
}
