use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `documents` table exists.
fn documents_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='documents'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if the `documents` table has an `updated_at` column.
fn documents_has_updated_at_column(conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('documents')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == "updated_at" {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `documents` table with the modern schema.
///
/// One row per document: the whole member (with embedded dependents and
/// presence histories) is a single JSON body. The row is the unit of
/// consistency; every update rewrites the body atomically.
fn create_documents_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS documents (
            collection TEXT NOT NULL,
            id         TEXT NOT NULL,
            body       TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            PRIMARY KEY (collection, id)
        );

        CREATE INDEX IF NOT EXISTS idx_documents_collection ON documents(collection);
        "#,
    )?;
    Ok(())
}

/// Migration that adds the `updated_at` column to stores created by
/// releases older than 0.4.0, and marks the migration as applied in the
/// `log` table.
fn migrate_add_updated_at_column(conn: &Connection) -> Result<()> {
    let version = "20250605_0004_add_documents_updated_at";

    // 1) Skip if already applied
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    if chk.query_row([version], |_| Ok(())).optional()?.is_some() {
        return Ok(());
    }

    // 2) Stores created before 0.4.0 lack the column entirely
    let missing = !documents_has_updated_at_column(conn)?;

    if missing {
        conn.execute(
            "ALTER TABLE documents ADD COLUMN updated_at TEXT NOT NULL DEFAULT '';",
            [],
        )?;
    }

    // 3) Mark as applied
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added updated_at to documents')",
        [version],
    )?;

    if missing {
        success(format!(
            "Migration applied: {} → added 'updated_at' to documents table",
            version
        ));
    }

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Documents table
    if !documents_table_exists(conn)? {
        create_documents_table(conn)?;
    } else {
        conn.execute_batch(
            r#"
            CREATE INDEX IF NOT EXISTS idx_documents_collection ON documents(collection);
            "#,
        )?;

        migrate_add_updated_at_column(conn)?;
    }

    Ok(())
}
