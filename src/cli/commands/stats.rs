use crate::cli::commands::resolve_person;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::engine::AttendanceEngine;
use crate::db::documents::DocStore;
use crate::db::presence::person_name;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, RESET, color_for_percentage};
use crate::utils::formatting::percent_str;
use chrono::NaiveDate;

/// Show semester attendance statistics for a member or dependent.
pub fn handle(cmd: &Commands, cfg: &Config, today: NaiveDate) -> AppResult<()> {
    if let Commands::Stats { member, dependent } = cmd {
        let person = resolve_person(member, dependent, cfg)?;

        let store = DocStore::open(&cfg.database)?;
        let mut engine = AttendanceEngine::new(store, today);

        let name = person_name(engine.store(), &person)?;
        let stats = engine.semester_stats(&person)?;

        let pct_color = color_for_percentage(stats.percentage);

        println!();
        println!("📊 Attendance for {} ({})", person.label(), name);
        println!(
            "   {}{}{} ({})",
            CYAN, stats.window.label, RESET, stats.window.range_label
        );
        println!("   {}• Business days:{} {}", CYAN, RESET, stats.business_days);
        println!("   {}• Check-ins:{}     {}", CYAN, RESET, stats.check_ins);
        println!("   {}• Confirmed:{}     {}", CYAN, RESET, stats.confirmed);
        println!(
            "   {}• Attendance:{}    {}{}{}",
            CYAN,
            RESET,
            pct_color,
            percent_str(stats.percentage),
            RESET
        );
        println!();
    }

    Ok(())
}
