use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::engine::AttendanceEngine;
use crate::db::documents::DocStore;
use crate::errors::{AppError, AppResult};
use crate::models::person::{PersonRef, RecordRef};
use crate::ui::messages::{info, success};
use crate::utils::date;
use crate::utils::formatting::truncate_width;
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;

/// Confirm check-ins: a single record, the whole day (`--all`), or just
/// list what is pending (`--pending`).
pub fn handle(cmd: &Commands, cfg: &Config, today: NaiveDate) -> AppResult<()> {
    if let Commands::Confirm {
        member,
        date: date_arg,
        dependent,
        all,
        pending,
    } = cmd
    {
        let store = DocStore::open(&cfg.database)?;
        let mut engine = AttendanceEngine::new(store, today);

        //
        // 1. Dashboard: snapshot of today's unconfirmed check-ins
        //
        if *pending {
            let rows = engine.pending_today()?;

            if rows.is_empty() {
                info(format!(
                    "No pending check-ins for {}.",
                    today.format("%Y-%m-%d")
                ));
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column {
                    header: "Person".to_string(),
                    width: 16,
                },
                Column {
                    header: "Name".to_string(),
                    width: 20,
                },
                Column {
                    header: "Date".to_string(),
                    width: 10,
                },
            ]);

            for row in &rows {
                table.add_row(vec![
                    row.person.clone(),
                    truncate_width(&row.name, 20),
                    row.date.format("%Y-%m-%d").to_string(),
                ]);
            }

            println!(
                "🕗 Pending check-ins for {}:\n\n{}",
                today.format("%Y-%m-%d"),
                table.render()
            );
            return Ok(());
        }

        //
        // 2. Bulk sweep
        //
        if *all {
            let count = engine.confirm_all_today()?;
            success(format!(
                "Confirmed {} check-in(s) for {}.",
                count,
                today.format("%Y-%m-%d")
            ));
            return Ok(());
        }

        //
        // 3. Single record
        //
        let member_id = member.as_ref().ok_or_else(|| {
            AppError::Config("confirm needs a member id (or --all / --pending)".to_string())
        })?;

        let d = match date_arg {
            Some(s) => {
                date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?
            }
            None => today,
        };

        let person = match dependent {
            Some(dep) => PersonRef::dependent(member_id, dep),
            None => PersonRef::member(member_id),
        };

        let record = RecordRef::new(person, d);

        if engine.confirm(&record)? {
            success(format!("Confirmed {}.", record.label()));
        } else {
            info(format!("{} was already confirmed.", record.label()));
        }
    }

    Ok(())
}
