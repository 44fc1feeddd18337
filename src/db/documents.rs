use crate::db::pool::DbPool;
use crate::db::watch::{WatchCallback, WatchId, WatcherRegistry};
use crate::errors::{AppError, AppResult};
use crate::models::member::MemberDoc;
use chrono::Local;
use rusqlite::{OptionalExtension, TransactionBehavior, params};
use serde_json::Value;

/// Collection holding the member documents.
pub const MEMBERS: &str = "members";

/// Document store over SQLite.
///
/// Documents are whole JSON bodies keyed by (collection, id). The single
/// update primitive is atomic at whole-document granularity: writes run
/// inside an IMMEDIATE transaction, so two concurrent writers race on the
/// row and the loser is rejected or superseded, never partially applied.
pub struct DocStore {
    pub pool: DbPool,
    watchers: WatcherRegistry,
}

impl DocStore {
    pub fn open(path: &str) -> AppResult<Self> {
        Ok(Self {
            pool: DbPool::new(path)?,
            watchers: WatcherRegistry::new(),
        })
    }

    // ---------------------------
    // Raw document access
    // ---------------------------

    pub fn get_raw(&self, collection: &str, id: &str) -> AppResult<Option<String>> {
        let body: Option<String> = self
            .pool
            .conn
            .query_row(
                "SELECT body FROM documents WHERE collection = ?1 AND id = ?2",
                params![collection, id],
                |row| row.get(0),
            )
            .optional()?;

        Ok(body)
    }

    pub fn list_raw(&self, collection: &str) -> AppResult<Vec<String>> {
        let mut stmt = self
            .pool
            .conn
            .prepare("SELECT body FROM documents WHERE collection = ?1 ORDER BY id ASC")?;

        let rows = stmt.query_map([collection], |row| row.get::<_, String>(0))?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    // ---------------------------
    // Member documents
    // ---------------------------

    pub fn get_member(&self, id: &str) -> AppResult<Option<MemberDoc>> {
        match self.get_raw(MEMBERS, id)? {
            Some(body) => Ok(Some(parse_member(&body)?)),
            None => Ok(None),
        }
    }

    pub fn list_members(&self) -> AppResult<Vec<MemberDoc>> {
        let mut out = Vec::new();
        for body in self.list_raw(MEMBERS)? {
            out.push(parse_member(&body)?);
        }
        Ok(out)
    }

    pub fn list_member_ids(&self) -> AppResult<Vec<String>> {
        let mut stmt = self
            .pool
            .conn
            .prepare("SELECT id FROM documents WHERE collection = ?1 ORDER BY id ASC")?;

        let rows = stmt.query_map([MEMBERS], |row| row.get::<_, String>(0))?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    pub fn member_count(&self) -> AppResult<i64> {
        let count: i64 = self.pool.conn.query_row(
            "SELECT COUNT(*) FROM documents WHERE collection = ?1",
            [MEMBERS],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    /// Write a whole member document and notify its watchers.
    pub fn put_member(&mut self, doc: &MemberDoc) -> AppResult<()> {
        let body = serde_json::to_string(doc)
            .map_err(|e| AppError::Document(format!("{}: {}", doc.id, e)))?;
        let now = Local::now().to_rfc3339();

        let tx = self
            .pool
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        tx.execute(
            "INSERT INTO documents (collection, id, body, updated_at)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(collection, id) DO UPDATE SET
                 body = excluded.body,
                 updated_at = excluded.updated_at",
            params![MEMBERS, doc.id, body, now],
        )?;

        tx.commit()?;

        self.watchers.notify(doc);
        Ok(())
    }

    /// Atomic top-level field merge: read the current body, replace the
    /// given fields, rewrite the whole document. The read and the write
    /// share one IMMEDIATE transaction.
    pub fn update_member_fields(
        &mut self,
        id: &str,
        fields: &serde_json::Map<String, Value>,
    ) -> AppResult<()> {
        let now = Local::now().to_rfc3339();

        let merged = {
            let tx = self
                .pool
                .conn
                .transaction_with_behavior(TransactionBehavior::Immediate)?;

            let body: Option<String> = tx
                .query_row(
                    "SELECT body FROM documents WHERE collection = ?1 AND id = ?2",
                    params![MEMBERS, id],
                    |row| row.get(0),
                )
                .optional()?;

            let body = body.ok_or_else(|| AppError::MemberNotFound(id.to_string()))?;

            let mut value: Value = serde_json::from_str(&body)
                .map_err(|e| AppError::Document(format!("{}: {}", id, e)))?;

            let map = value
                .as_object_mut()
                .ok_or_else(|| AppError::Document(format!("{}: not a JSON object", id)))?;

            for (k, v) in fields {
                map.insert(k.clone(), v.clone());
            }

            let merged = serde_json::to_string(&value)
                .map_err(|e| AppError::Document(format!("{}: {}", id, e)))?;

            tx.execute(
                "UPDATE documents SET body = ?3, updated_at = ?4
                 WHERE collection = ?1 AND id = ?2",
                params![MEMBERS, id, merged, now],
            )?;

            tx.commit()?;
            merged
        };

        let doc = parse_member(&merged)?;
        self.watchers.notify(&doc);
        Ok(())
    }

    // ---------------------------
    // Subscriptions
    // ---------------------------

    pub fn subscribe(&mut self, member_id: &str, callback: WatchCallback) -> WatchId {
        self.watchers.subscribe(member_id, callback)
    }

    pub fn unsubscribe(&mut self, id: WatchId) {
        self.watchers.unsubscribe(id);
    }
}

fn parse_member(body: &str) -> AppResult<MemberDoc> {
    serde_json::from_str(body).map_err(|e| AppError::Document(e.to_string()))
}
