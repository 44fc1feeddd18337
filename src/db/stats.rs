use crate::db::documents::DocStore;
use crate::utils::colors::{CYAN, GREEN, RESET, YELLOW, colorize_optional};
use std::fs;

pub fn print_db_info(store: &DocStore, db_path: &str) -> crate::errors::AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) MEMBERS / DEPENDENTS / RECORDS
    //
    let members = store.list_members()?;

    let dependent_count: usize = members.iter().map(|m| m.dependents.len()).sum();
    let record_count: usize = members
        .iter()
        .map(|m| {
            m.presence_history.len()
                + m.dependents
                    .iter()
                    .map(|d| d.presence_history.len())
                    .sum::<usize>()
        })
        .sum();

    println!(
        "{}• Members:{} {}{}{}",
        CYAN,
        RESET,
        GREEN,
        members.len(),
        RESET
    );
    println!(
        "{}• Dependents:{} {}{}{}",
        CYAN, RESET, GREEN, dependent_count, RESET
    );
    println!(
        "{}• Presence records:{} {}{}{}",
        CYAN, RESET, GREEN, record_count, RESET
    );

    //
    // 3) DATE RANGE
    //
    let mut dates: Vec<_> = members
        .iter()
        .flat_map(|m| {
            m.presence_history
                .iter()
                .map(|r| r.date)
                .chain(m.dependents.iter().flat_map(|d| {
                    d.presence_history.iter().map(|r| r.date)
                }))
        })
        .collect();
    dates.sort();

    let fmt_first = colorize_optional(
        &dates
            .first()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "--".to_string()),
    );
    let fmt_last = colorize_optional(
        &dates
            .last()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "--".to_string()),
    );

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 4) AVERAGE RECORDS/MEMBER
    //
    if !members.is_empty() {
        let avg = record_count as f64 / members.len() as f64;
        println!("{}• Average records/member:{} {:.2}", CYAN, RESET, avg);
    }

    println!();
    Ok(())
}
