use gymattend::core::checkin::CheckInLogic;
use gymattend::core::engine::AttendanceEngine;
use gymattend::db::presence::load_history;
use gymattend::models::member::{Dependent, MemberDoc};
use gymattend::models::person::PersonRef;
use gymattend::models::presence::AttendanceState;

mod common;
use common::{d, open_store, setup_test_db};

fn seed_member(store: &mut gymattend::db::documents::DocStore) {
    let mut doc = MemberDoc::new("m001", "Mario Rossi");
    doc.dependents.push(Dependent::new("d01", "Luca Rossi"));
    store.put_member(&doc).expect("seed member");
}

#[test]
fn test_checkin_creates_single_unconfirmed_record() {
    let db = setup_test_db("checkin_single");
    let mut store = open_store(&db);
    seed_member(&mut store);

    let person = PersonRef::member("m001");
    let today = d("2025-03-10");

    assert!(CheckInLogic::apply(&mut store, &person, &today).expect("checkin"));

    let history = load_history(&store, &person).expect("load");
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].date, today);
    assert!(!history[0].confirmed);
    assert_eq!(history[0].state(), AttendanceState::CheckedIn);
}

#[test]
fn test_same_day_guard_second_checkin_rejected() {
    let db = setup_test_db("checkin_same_day");
    let mut store = open_store(&db);
    seed_member(&mut store);

    let person = PersonRef::member("m001");
    let today = d("2025-03-10");

    assert!(CheckInLogic::apply(&mut store, &person, &today).expect("first"));
    // Second call on the same date: negative result, no error, no write
    assert!(!CheckInLogic::apply(&mut store, &person, &today).expect("second"));

    let history = load_history(&store, &person).expect("load");
    assert_eq!(history.len(), 1);
}

#[test]
fn test_uniqueness_across_sequence_of_checkins() {
    let db = setup_test_db("checkin_uniqueness");
    let mut store = open_store(&db);
    seed_member(&mut store);

    let person = PersonRef::member("m001");

    // A retry-heavy sequence: every date at most once, retries rejected
    for day in ["2025-03-10", "2025-03-10", "2025-03-11", "2025-03-12", "2025-03-11"] {
        let _ = CheckInLogic::apply(&mut store, &person, &d(day)).expect("checkin");
    }

    let history = load_history(&store, &person).expect("load");
    assert_eq!(history.len(), 3);

    let mut dates: Vec<_> = history.iter().map(|r| r.date).collect();
    dates.sort();
    dates.dedup();
    assert_eq!(dates.len(), 3);
}

#[test]
fn test_january_first_always_rejected() {
    let db = setup_test_db("checkin_jan1");
    let mut store = open_store(&db);
    seed_member(&mut store);

    let person = PersonRef::member("m001");

    assert!(!CheckInLogic::apply(&mut store, &person, &d("2025-01-01")).expect("jan 1"));

    let history = load_history(&store, &person).expect("load");
    assert!(history.is_empty());
}

#[test]
fn test_dependent_checkin_rewrites_parent_document_only() {
    let db = setup_test_db("checkin_dependent");
    let mut store = open_store(&db);
    seed_member(&mut store);

    let dep = PersonRef::dependent("m001", "d01");
    let today = d("2025-03-10");

    assert!(CheckInLogic::apply(&mut store, &dep, &today).expect("dependent checkin"));

    let doc = store.get_member("m001").expect("get").expect("exists");
    assert!(doc.presence_history.is_empty());
    assert_eq!(doc.dependents[0].presence_history.len(), 1);
    assert_eq!(doc.dependents[0].presence_history[0].date, today);
}

#[test]
fn test_checkin_unknown_member_is_an_error() {
    let db = setup_test_db("checkin_unknown");
    let mut store = open_store(&db);

    let person = PersonRef::member("ghost");
    let res = CheckInLogic::apply(&mut store, &person, &d("2025-03-10"));
    assert!(res.is_err());
}

#[test]
fn test_engine_status_flags_follow_checkin() {
    let db = setup_test_db("checkin_status");
    let mut store = open_store(&db);
    seed_member(&mut store);

    let person = PersonRef::member("m001");
    let mut engine = AttendanceEngine::new(store, d("2025-03-10"));

    let before = engine.status(&person).expect("status");
    assert!(!before.checked_in_today);
    assert!(before.is_new_day);
    assert_eq!(before.last_check_in, None);

    assert!(engine.check_in(&person).expect("checkin"));
    assert!(!engine.is_check_in_pending());

    let after = engine.status(&person).expect("status");
    assert!(after.checked_in_today);
    assert!(!after.confirmed_today);
    assert!(!after.is_new_day);
    assert_eq!(after.last_check_in, Some(d("2025-03-10")));
}

#[test]
fn test_watch_status_cell_updates_on_pushed_snapshot() {
    let db = setup_test_db("checkin_watch");
    let mut store = open_store(&db);
    seed_member(&mut store);

    let person = PersonRef::member("m001");
    let mut engine = AttendanceEngine::new(store, d("2025-03-10"));

    let (cell, watch_id) = engine.watch_status(&person).expect("watch");
    assert!(!cell.borrow().checked_in_today);

    // The write pushes a fresh snapshot; the cell recomputes without a read
    assert!(engine.check_in(&person).expect("checkin"));
    assert!(cell.borrow().checked_in_today);
    assert!(!cell.borrow().confirmed_today);

    engine.unwatch(watch_id);
}
