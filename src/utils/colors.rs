/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const WHITE: &str = "\x1b[37m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Color for a record state column:
/// confirmed → green, checked-in (pending) → yellow.
pub fn color_for_state(confirmed: bool) -> &'static str {
    if confirmed { GREEN } else { YELLOW }
}

/// Color for an attendance percentage:
/// \>= 75 → green
/// \>= 50 → yellow
/// below  → red
pub fn color_for_percentage(value: u8) -> &'static str {
    if value >= 75 {
        GREEN
    } else if value >= 50 {
        YELLOW
    } else {
        RED
    }
}

/// Grey out empty placeholder values ("--", "" or whitespace).
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
