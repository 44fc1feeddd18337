use crate::cli::commands::resolve_person;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::engine::AttendanceEngine;
use crate::db::documents::DocStore;
use crate::errors::AppResult;
use crate::models::presence::sorted_desc;
use crate::ui::messages::info;
use crate::utils::colors::{RESET, color_for_state};
use crate::utils::date::weekday_str;
use crate::utils::formatting::state_label;
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;

/// List a person's presence records, newest first.
pub fn handle(cmd: &Commands, cfg: &Config, today: NaiveDate) -> AppResult<()> {
    if let Commands::List {
        member,
        dependent,
        period,
    } = cmd
    {
        let person = resolve_person(member, dependent, cfg)?;

        let store = DocStore::open(&cfg.database)?;
        let mut engine = AttendanceEngine::new(store, today);

        let mut records = engine.records(&person)?;

        //
        // Optional period filter
        //
        if let Some(p) = period {
            let (start, end) = crate::export::range::parse_range(p)?;
            records.retain(|r| r.date >= start && r.date <= end);
        }

        if records.is_empty() {
            info(format!("No presence records for {}.", person.label()));
            return Ok(());
        }

        let show_weekday = cfg.show_weekday != "None";

        let mut columns = vec![Column {
            header: "Date".to_string(),
            width: 10,
        }];
        if show_weekday {
            columns.push(Column {
                header: "Day".to_string(),
                width: 9,
            });
        }
        columns.push(Column {
            header: "State".to_string(),
            width: 20,
        });

        let mut table = Table::new(columns);

        for r in sorted_desc(&records) {
            let state = format!(
                "{}{}{}",
                color_for_state(r.confirmed),
                state_label(r.confirmed),
                RESET
            );

            let mut row = vec![r.date_str()];
            if show_weekday {
                row.push(weekday_str(&r.date, &cfg.show_weekday));
            }
            row.push(state);

            table.add_row(row);
        }

        println!(
            "📅 Presence for {} ({} record(s)):\n\n{}",
            person.label(),
            records.len(),
            table.render()
        );
    }

    Ok(())
}
