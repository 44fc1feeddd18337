use crate::db::documents::DocStore;
use crate::db::log::ttlog;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use chrono::NaiveDate;

/// One row of the cross-member confirmation dashboard.
#[derive(Debug, Clone)]
pub struct PendingRow {
    pub member_id: String,
    pub person: String,
    pub name: String,
    pub date: NaiveDate,
}

/// Bulk confirmation over every member document.
pub struct SweepLogic;

impl SweepLogic {
    /// Confirm every unconfirmed check-in dated `today`, across all
    /// members and their dependents.
    ///
    /// Each document is re-read immediately before flipping, so a
    /// confirmation made by a concurrent single `confirm` is never
    /// clobbered, and only documents with at least one actionable change
    /// are written (one write per changed document). Returns the total
    /// count of records newly confirmed; safe to run repeatedly.
    pub fn confirm_all_today(store: &mut DocStore, today: &NaiveDate) -> AppResult<usize> {
        let ids = store.list_member_ids()?;
        let mut total = 0;

        for id in ids {
            // Fresh read per document: the re-check below must see the
            // current persisted state, not the listing snapshot.
            let Some(mut doc) = store.get_member(&id)? else {
                continue;
            };

            let mut changed = 0;

            if let Some(rec) = doc
                .presence_history
                .iter_mut()
                .find(|r| r.date == *today && !r.confirmed)
            {
                rec.confirmed = true;
                changed += 1;
            }

            for dep in doc.dependents.iter_mut() {
                if let Some(rec) = dep
                    .presence_history
                    .iter_mut()
                    .find(|r| r.date == *today && !r.confirmed)
                {
                    rec.confirmed = true;
                    changed += 1;
                }
            }

            if changed > 0 {
                store.put_member(&doc)?;
                total += changed;
            }
        }

        if total > 0 {
            let day = today.format("%Y-%m-%d").to_string();
            if let Err(e) = ttlog(
                &store.pool.conn,
                "sweep",
                &day,
                &format!("Confirmed {} check-in(s)", total),
            ) {
                warning(format!("Failed to write internal log: {}", e));
            }
        }

        Ok(total)
    }

    /// Immutable snapshot of today's unconfirmed check-ins across all
    /// member documents. Scatter-gather over the store listing; each
    /// refresh produces a fresh list, nothing is cached between calls.
    pub fn pending_today(store: &DocStore, today: &NaiveDate) -> AppResult<Vec<PendingRow>> {
        let mut rows = Vec::new();

        for doc in store.list_members()? {
            if doc
                .presence_history
                .iter()
                .any(|r| r.date == *today && !r.confirmed)
            {
                rows.push(PendingRow {
                    member_id: doc.id.clone(),
                    person: doc.id.clone(),
                    name: doc.name.clone(),
                    date: *today,
                });
            }

            for dep in &doc.dependents {
                if dep
                    .presence_history
                    .iter()
                    .any(|r| r.date == *today && !r.confirmed)
                {
                    rows.push(PendingRow {
                        member_id: doc.id.clone(),
                        person: format!("{}/{}", doc.id, dep.id),
                        name: dep.name.clone(),
                        date: *today,
                    });
                }
            }
        }

        Ok(rows)
    }
}
