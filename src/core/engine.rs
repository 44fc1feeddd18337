use crate::core::calendar::{self, CalendarCell};
use crate::core::checkin::CheckInLogic;
use crate::core::confirm::ConfirmLogic;
use crate::core::prune::PruneLogic;
use crate::core::stats::{SemesterStats, StatsLogic};
use crate::core::status::PersonStatus;
use crate::core::sweep::{PendingRow, SweepLogic};
use crate::db::documents::DocStore;
use crate::db::presence::history_in_doc;
use crate::db::watch::WatchId;
use crate::errors::AppResult;
use crate::models::person::{PersonRef, RecordRef};
use chrono::NaiveDate;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Facade over the attendance logic units.
///
/// Owns the document store and the per-session state the logic units do
/// not carry: the frozen "today" and the in-flight check-in guard that
/// blocks re-entrant check-ins while one round-trip is outstanding.
pub struct AttendanceEngine {
    store: DocStore,
    today: NaiveDate,
    check_in_pending: Cell<bool>,
}

impl AttendanceEngine {
    pub fn new(store: DocStore, today: NaiveDate) -> Self {
        Self {
            store,
            today,
            check_in_pending: Cell::new(false),
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn store(&mut self) -> &mut DocStore {
        &mut self.store
    }

    /// True while a check-in round-trip is outstanding; the presentation
    /// layer uses this to disable duplicate actions.
    pub fn is_check_in_pending(&self) -> bool {
        self.check_in_pending.get()
    }

    pub fn check_in(&mut self, person: &PersonRef) -> AppResult<bool> {
        if self.check_in_pending.get() {
            return Ok(false);
        }

        self.check_in_pending.set(true);
        let result = CheckInLogic::apply(&mut self.store, person, &self.today);
        self.check_in_pending.set(false);

        result
    }

    pub fn confirm(&mut self, record: &RecordRef) -> AppResult<bool> {
        ConfirmLogic::apply(&mut self.store, record)
    }

    pub fn confirm_all_today(&mut self) -> AppResult<usize> {
        SweepLogic::confirm_all_today(&mut self.store, &self.today)
    }

    pub fn pending_today(&self) -> AppResult<Vec<PendingRow>> {
        SweepLogic::pending_today(&self.store, &self.today)
    }

    pub fn records(&mut self, person: &PersonRef) -> AppResult<Vec<crate::models::presence::PresenceRecord>> {
        PruneLogic::load_current(&mut self.store, person, &self.today)
    }

    pub fn attendance_percentage(&mut self, person: &PersonRef) -> AppResult<u8> {
        let history = self.records(person)?;
        Ok(StatsLogic::attendance_percentage(&history, &self.today))
    }

    pub fn semester_stats(&mut self, person: &PersonRef) -> AppResult<SemesterStats> {
        let history = self.records(person)?;
        Ok(StatsLogic::semester_stats(&history, &self.today))
    }

    pub fn month_grid(
        &mut self,
        person: &PersonRef,
        year: i32,
        month: u32,
    ) -> AppResult<Vec<CalendarCell>> {
        let history = self.records(person)?;
        Ok(calendar::month_grid(&history, year, month, &self.today))
    }

    pub fn status(&mut self, person: &PersonRef) -> AppResult<PersonStatus> {
        let history = self.records(person)?;
        Ok(PersonStatus::derive(&history, &self.today))
    }

    /// Subscribe to the person's document and keep a status cell current:
    /// every pushed snapshot recomputes the derived flags. The returned
    /// cell starts from the state as stored now.
    pub fn watch_status(
        &mut self,
        person: &PersonRef,
    ) -> AppResult<(Rc<RefCell<PersonStatus>>, WatchId)> {
        let initial = self.status(person)?;
        let cell = Rc::new(RefCell::new(initial));

        let watched = Rc::clone(&cell);
        let target = person.clone();
        let today = self.today;

        let id = self.store.subscribe(
            &person.member_id,
            Box::new(move |doc| {
                if let Some(history) = history_in_doc(doc, &target) {
                    *watched.borrow_mut() = PersonStatus::derive(history, &today);
                }
            }),
        );

        Ok((cell, id))
    }

    pub fn unwatch(&mut self, id: WatchId) {
        self.store.unsubscribe(id);
    }
}
