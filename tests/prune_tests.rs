use gymattend::core::prune::PruneLogic;
use gymattend::db::documents::DocStore;
use gymattend::db::presence::load_history;
use gymattend::models::member::{Dependent, MemberDoc};
use gymattend::models::person::PersonRef;
use gymattend::models::presence::PresenceRecord;

mod common;
use common::{d, open_store, setup_test_db};

fn seed_mixed_years(store: &mut DocStore) {
    let mut doc = MemberDoc::new("m001", "Mario Rossi");
    doc.presence_history = vec![
        PresenceRecord {
            date: d("2024-06-01"),
            confirmed: true,
        },
        PresenceRecord {
            date: d("2025-02-10"),
            confirmed: false,
        },
        PresenceRecord {
            date: d("2025-03-05"),
            confirmed: true,
        },
    ];
    store.put_member(&doc).expect("seed member");
}

#[test]
fn test_load_drops_prior_year_records_and_rewrites() {
    let db = setup_test_db("prune_prior_year");
    let mut store = open_store(&db);
    seed_mixed_years(&mut store);

    let person = PersonRef::member("m001");
    let today = d("2025-06-05");

    let current = PruneLogic::load_current(&mut store, &person, &today).expect("load");
    assert_eq!(current.len(), 2);
    assert!(current.iter().all(|r| r.date.format("%Y").to_string() == "2025"));

    // The stored history was rewritten, not just filtered for display
    let stored = load_history(&store, &person).expect("load stored");
    assert_eq!(stored.len(), 2);
}

#[test]
fn test_load_drops_record_landed_on_january_first() {
    let db = setup_test_db("prune_jan1_record");
    let mut store = open_store(&db);

    let mut doc = MemberDoc::new("m001", "Mario Rossi");
    doc.presence_history = vec![
        PresenceRecord {
            date: d("2025-01-01"),
            confirmed: false,
        },
        PresenceRecord {
            date: d("2025-01-02"),
            confirmed: false,
        },
    ];
    store.put_member(&doc).expect("seed");

    let person = PersonRef::member("m001");
    let current =
        PruneLogic::load_current(&mut store, &person, &d("2025-01-20")).expect("load");

    assert_eq!(current.len(), 1);
    assert_eq!(current[0].date, d("2025-01-02"));
}

#[test]
fn test_load_on_january_first_resets_history() {
    let db = setup_test_db("prune_rollover");
    let mut store = open_store(&db);
    seed_mixed_years(&mut store);

    let person = PersonRef::member("m001");

    // A fresh attendance year begins: nothing from the prior year shows
    let current =
        PruneLogic::load_current(&mut store, &person, &d("2026-01-01")).expect("load");
    assert!(current.is_empty());

    // The empty history was persisted opportunistically
    let stored = load_history(&store, &person).expect("load stored");
    assert!(stored.is_empty());
}

#[test]
fn test_load_keeps_clean_history_untouched() {
    let db = setup_test_db("prune_untouched");
    let mut store = open_store(&db);

    let mut doc = MemberDoc::new("m001", "Mario Rossi");
    doc.presence_history = vec![PresenceRecord {
        date: d("2025-02-10"),
        confirmed: false,
    }];
    store.put_member(&doc).expect("seed");

    let person = PersonRef::member("m001");
    let current =
        PruneLogic::load_current(&mut store, &person, &d("2025-03-01")).expect("load");

    assert_eq!(current.len(), 1);
}

#[test]
fn test_prune_all_sweeps_dependents_too() {
    let db = setup_test_db("prune_all");
    let mut store = open_store(&db);

    let mut doc = MemberDoc::new("m001", "Mario Rossi");
    doc.presence_history = vec![
        PresenceRecord {
            date: d("2024-12-31"),
            confirmed: true,
        },
        PresenceRecord {
            date: d("2025-02-10"),
            confirmed: false,
        },
    ];
    let mut dep = Dependent::new("d01", "Luca Rossi");
    dep.presence_history = vec![PresenceRecord {
        date: d("2024-11-20"),
        confirmed: false,
    }];
    doc.dependents.push(dep);
    store.put_member(&doc).expect("seed m001");

    // Clean document: must not be rewritten or counted
    let mut clean = MemberDoc::new("m002", "Anna Bianchi");
    clean.presence_history = vec![PresenceRecord {
        date: d("2025-02-11"),
        confirmed: false,
    }];
    store.put_member(&clean).expect("seed m002");

    let dropped = PruneLogic::prune_all(&mut store, &d("2025-03-01")).expect("prune");
    assert_eq!(dropped, 2);

    let doc = store.get_member("m001").expect("get").expect("exists");
    assert_eq!(doc.presence_history.len(), 1);
    assert!(doc.dependents[0].presence_history.is_empty());

    // Second run finds nothing left
    assert_eq!(
        PruneLogic::prune_all(&mut store, &d("2025-03-01")).expect("prune"),
        0
    );
}
