use crate::cli::commands::resolve_person;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::engine::AttendanceEngine;
use crate::db::documents::DocStore;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::date;
use chrono::NaiveDate;

/// Record today's attendance for a member or dependent.
pub fn handle(cmd: &Commands, cfg: &Config, today: NaiveDate) -> AppResult<()> {
    if let Commands::Checkin { member, dependent } = cmd {
        //
        // 1. Resolve the person (argument or configured default member)
        //
        let person = resolve_person(member, dependent, cfg)?;

        //
        // 2. Open store and engine
        //
        let store = DocStore::open(&cfg.database)?;
        let mut engine = AttendanceEngine::new(store, today);

        //
        // 3. Execute logic
        //
        if engine.check_in(&person)? {
            success(format!(
                "Checked in {} on {}.",
                person.label(),
                today.format("%Y-%m-%d")
            ));
        } else if date::is_new_year_day(&today) {
            warning("The gym is closed on January 1st: no attendance is tracked.");
        } else {
            warning(format!(
                "{} is already checked in today — nothing to do.",
                person.label()
            ));
        }
    }

    Ok(())
}
