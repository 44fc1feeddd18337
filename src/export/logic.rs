// src/export/logic.rs

use crate::db::documents::DocStore;
use crate::db::log::ttlog;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::csv::export_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::export_json;
use crate::export::model::PresenceExport;
use crate::export::range::parse_range;
use crate::models::member::MemberDoc;
use crate::ui::messages::warning;
use crate::utils::formatting::state_label;
use crate::utils::path::expand_tilde;

use chrono::NaiveDate;
use std::io;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export presence records.
    ///
    /// - `format`: "csv" | "json"
    /// - `file`: absolute output file path
    /// - `range`: `None`, `"all"` or expressions like:
    ///   - `YYYY`
    ///   - `YYYY-MM`
    ///   - `YYYY-MM-DD`
    ///   - `YYYY:YYYY`
    ///   - `YYYY-MM:YYYY-MM`
    ///   - `YYYY-MM-DD:YYYY-MM-DD`
    /// - `member`: restrict to one member document (with its dependents)
    pub fn export(
        store: &mut DocStore,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        member: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let expanded = expand_tilde(file);
        let path: &Path = expanded.as_path();

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let date_bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let rows = load_rows(store, date_bounds, member)?;

        if rows.is_empty() {
            warning("⚠️  No presence records found for selected range.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        if let Err(e) = ttlog(
            &store.pool.conn,
            "export",
            path.to_string_lossy().as_ref(),
            &format!("Exported {} record(s)", rows.len()),
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }

        Ok(())
    }
}

/// Flatten the documents into export rows, applying the bounds.
fn load_rows(
    store: &DocStore,
    bounds: Option<(NaiveDate, NaiveDate)>,
    member: &Option<String>,
) -> AppResult<Vec<PresenceExport>> {
    let docs: Vec<MemberDoc> = match member {
        Some(id) => match store.get_member(id)? {
            Some(doc) => vec![doc],
            None => return Err(AppError::MemberNotFound(id.clone())),
        },
        None => store.list_members()?,
    };

    let in_bounds = |d: &NaiveDate| match bounds {
        None => true,
        Some((start, end)) => *d >= start && *d <= end,
    };

    let mut rows = Vec::new();

    for doc in &docs {
        for r in &doc.presence_history {
            if in_bounds(&r.date) {
                rows.push(PresenceExport {
                    member_id: doc.id.clone(),
                    person: doc.id.clone(),
                    name: doc.name.clone(),
                    date: r.date_str(),
                    state: state_label(r.confirmed).to_string(),
                });
            }
        }

        for dep in &doc.dependents {
            for r in &dep.presence_history {
                if in_bounds(&r.date) {
                    rows.push(PresenceExport {
                        member_id: doc.id.clone(),
                        person: format!("{}/{}", doc.id, dep.id),
                        name: dep.name.clone(),
                        date: r.date_str(),
                        state: state_label(r.confirmed).to_string(),
                    });
                }
            }
        }
    }

    rows.sort_by(|a, b| a.date.cmp(&b.date).then(a.person.cmp(&b.person)));

    Ok(rows)
}
