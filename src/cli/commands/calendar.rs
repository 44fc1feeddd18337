use crate::cli::commands::resolve_person;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::engine::AttendanceEngine;
use crate::db::documents::DocStore;
use crate::errors::{AppError, AppResult};
use crate::utils::colors::{GREEN, GREY, RESET, YELLOW};
use crate::utils::date::month_name;
use crate::utils::formatting::bold;
use chrono::{Datelike, NaiveDate};

/// Render the 42-cell month grid for a member or dependent.
pub fn handle(cmd: &Commands, cfg: &Config, today: NaiveDate) -> AppResult<()> {
    if let Commands::Calendar {
        member,
        dependent,
        month,
    } = cmd
    {
        let person = resolve_person(member, dependent, cfg)?;

        //
        // 1. Resolve the month (YYYY-MM, default: current)
        //
        let (year, mm) = match month {
            Some(m) => parse_month(m)?,
            None => (today.year(), today.month()),
        };

        //
        // 2. Project the grid
        //
        let store = DocStore::open(&cfg.database)?;
        let mut engine = AttendanceEngine::new(store, today);

        let cells = engine.month_grid(&person, year, mm)?;

        if cells.is_empty() {
            crate::ui::messages::warning(format!(
                "No calendar for {}-{:02}: only the current attendance year is tracked.",
                year, mm
            ));
            return Ok(());
        }

        //
        // 3. Render, one week per row
        //
        println!();
        println!(
            "📅 {} {} — {}",
            month_name(&format!("{:02}", mm)),
            year,
            person.label()
        );
        println!(" Su  Mo  Tu  We  Th  Fr  Sa");

        for week in cells.chunks(7) {
            let mut line = String::new();

            for cell in week {
                match cell.day {
                    None => line.push_str("  · "),
                    Some(day) => {
                        let num = format!("{:>3}", day);

                        let marked = if cell.confirmed {
                            format!("{GREEN}{num}{RESET}")
                        } else if cell.attended {
                            format!("{YELLOW}{num}{RESET}")
                        } else {
                            format!("{GREY}{num}{RESET}")
                        };

                        if cell.is_today {
                            line.push_str(&bold(&marked));
                        } else {
                            line.push_str(&marked);
                        }
                        line.push(' ');
                    }
                }
            }

            println!("{}", line);
        }

        println!();
        println!(
            "   {GREEN}confirmed{RESET} · {YELLOW}checked-in{RESET} · {GREY}absent{RESET}"
        );
        println!();
    }

    Ok(())
}

fn parse_month(m: &str) -> AppResult<(i32, u32)> {
    let parts: Vec<&str> = m.split('-').collect();

    if parts.len() == 2
        && let (Ok(year), Ok(month)) = (parts[0].parse::<i32>(), parts[1].parse::<u32>())
        && (1..=12).contains(&month)
    {
        return Ok((year, month));
    }

    Err(AppError::InvalidMonth(m.to_string()))
}
