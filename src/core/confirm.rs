use crate::db::documents::DocStore;
use crate::db::log::ttlog;
use crate::db::presence::load_member;
use crate::errors::{AppError, AppResult};
use crate::models::person::RecordRef;
use crate::ui::messages::warning;

/// High-level business logic for the admin `confirm` command.
pub struct ConfirmLogic;

impl ConfirmLogic {
    /// Confirm a single check-in identified by (member, optional
    /// dependent, date).
    ///
    /// Returns Ok(true) when the record was newly confirmed, Ok(false)
    /// when it was already confirmed (idempotent no-op). A missing
    /// member, dependent or record is an error: a stale reference means
    /// a data-consistency problem worth reporting, not ignoring.
    pub fn apply(store: &mut DocStore, record: &RecordRef) -> AppResult<bool> {
        //
        // 1) Locate the exact record on a fresh read
        //
        let mut doc = load_member(store, &record.person.member_id)?;

        let history = match &record.person.dependent_id {
            None => &mut doc.presence_history,
            Some(dep_id) => {
                let dep = doc
                    .dependents
                    .iter_mut()
                    .find(|d| d.id == *dep_id)
                    .ok_or_else(|| AppError::DependentNotFound(record.person.label()))?;
                &mut dep.presence_history
            }
        };

        let rec = history
            .iter_mut()
            .find(|r| r.date == record.date)
            .ok_or_else(|| AppError::RecordNotFound(record.label()))?;

        //
        // 2) One-way transition: re-check right before flipping
        //
        if rec.confirmed {
            return Ok(false);
        }

        rec.confirmed = true;

        //
        // 3) Single whole-document write
        //
        store.put_member(&doc)?;

        if let Err(e) = ttlog(
            &store.pool.conn,
            "confirm",
            &record.person.label(),
            &format!("Confirmed check-in of {}", record.date.format("%Y-%m-%d")),
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }

        Ok(true)
    }
}
