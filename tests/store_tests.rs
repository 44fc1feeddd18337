use gymattend::db::documents::DocStore;
use gymattend::db::initialize::init_db;
use gymattend::errors::AppError;
use gymattend::models::member::MemberDoc;
use gymattend::models::presence::PresenceRecord;
use std::cell::RefCell;
use std::rc::Rc;

mod common;
use common::{d, open_store, setup_test_db};

#[test]
fn test_put_and_get_roundtrip() {
    let db = setup_test_db("store_roundtrip");
    let mut store = open_store(&db);

    let mut doc = MemberDoc::new("m001", "Mario Rossi");
    doc.presence_history.push(PresenceRecord::checked_in(d("2025-03-10")));
    store.put_member(&doc).expect("put");

    let loaded = store.get_member("m001").expect("get").expect("exists");
    assert_eq!(loaded.name, "Mario Rossi");
    assert_eq!(loaded.presence_history.len(), 1);
    assert!(!loaded.created_at.is_empty());

    assert!(store.get_member("ghost").expect("get").is_none());
}

#[test]
fn test_list_members_ordered_by_id() {
    let db = setup_test_db("store_list");
    let mut store = open_store(&db);

    for (id, name) in [("m003", "C"), ("m001", "A"), ("m002", "B")] {
        store.put_member(&MemberDoc::new(id, name)).expect("put");
    }

    let ids: Vec<_> = store
        .list_members()
        .expect("list")
        .into_iter()
        .map(|m| m.id)
        .collect();
    assert_eq!(ids, vec!["m001", "m002", "m003"]);

    assert_eq!(store.member_count().expect("count"), 3);
}

#[test]
fn test_update_fields_merges_top_level_only() {
    let db = setup_test_db("store_merge");
    let mut store = open_store(&db);

    let mut doc = MemberDoc::new("m001", "Mario Rossi");
    doc.presence_history.push(PresenceRecord::checked_in(d("2025-03-10")));
    store.put_member(&doc).expect("put");

    // Replace only the presence_history field; the name must survive
    let mut fields = serde_json::Map::new();
    fields.insert(
        "presence_history".to_string(),
        serde_json::json!([{"date": "2025-03-11", "confirmed": true}]),
    );
    store.update_member_fields("m001", &fields).expect("update");

    let loaded = store.get_member("m001").expect("get").expect("exists");
    assert_eq!(loaded.name, "Mario Rossi");
    assert_eq!(loaded.presence_history.len(), 1);
    assert_eq!(loaded.presence_history[0].date, d("2025-03-11"));
    assert!(loaded.presence_history[0].confirmed);
}

#[test]
fn test_update_fields_missing_document_is_reported() {
    let db = setup_test_db("store_merge_missing");
    let mut store = open_store(&db);

    let fields = serde_json::Map::new();
    match store.update_member_fields("ghost", &fields) {
        Err(AppError::MemberNotFound(id)) => assert_eq!(id, "ghost"),
        other => panic!("expected MemberNotFound, got {:?}", other),
    }
}

#[test]
fn test_subscription_delivers_snapshots_after_writes() {
    let db = setup_test_db("store_watch");
    let mut store = open_store(&db);

    store
        .put_member(&MemberDoc::new("m001", "Mario Rossi"))
        .expect("seed");

    let seen: Rc<RefCell<Vec<usize>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);

    let id = store.subscribe(
        "m001",
        Box::new(move |doc| sink.borrow_mut().push(doc.presence_history.len())),
    );

    let mut doc = store.get_member("m001").expect("get").expect("exists");
    doc.presence_history.push(PresenceRecord::checked_in(d("2025-03-10")));
    store.put_member(&doc).expect("write 1");

    doc.presence_history.push(PresenceRecord::checked_in(d("2025-03-11")));
    store.put_member(&doc).expect("write 2");

    // Writes to other documents must not be delivered
    store
        .put_member(&MemberDoc::new("m002", "Anna Bianchi"))
        .expect("other doc");

    assert_eq!(*seen.borrow(), vec![1, 2]);

    store.unsubscribe(id);
    doc.presence_history.push(PresenceRecord::checked_in(d("2025-03-12")));
    store.put_member(&doc).expect("write 3");

    assert_eq!(*seen.borrow(), vec![1, 2]);
}

#[test]
fn test_migrations_are_idempotent() {
    let db = setup_test_db("store_migrations");
    let store = DocStore::open(&db).expect("open");

    init_db(&store.pool.conn).expect("first init");
    init_db(&store.pool.conn).expect("second init");

    // The versioned migration is recorded exactly once
    let count: i64 = store
        .pool
        .conn
        .query_row(
            "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
            [],
            |row| row.get(0),
        )
        .expect("count");
    assert_eq!(count, 1);
}
