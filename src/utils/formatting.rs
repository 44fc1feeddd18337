//! Formatting utilities used for CLI and export outputs.

use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn italic(s: &str) -> String {
    format!("\x1b[3m{}\x1b[0m", s)
}

/// Pad right using the display width (not the byte length), so member
/// names with wide characters keep the table columns aligned.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

pub fn pad_left(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - w), s)
    }
}

/// Truncate to `max` display columns, appending "..." when cut.
pub fn truncate_width(s: &str, max: usize) -> String {
    if UnicodeWidthStr::width(s) <= max {
        return s.to_string();
    }

    let mut out = String::new();
    let mut used = 0;

    for c in s.chars() {
        let cw = UnicodeWidthStr::width(c.to_string().as_str());
        if used + cw > max.saturating_sub(3) {
            break;
        }
        used += cw;
        out.push(c);
    }

    out.push_str("...");
    out
}

/// "87%" — a plain percentage label for tables and stats output.
pub fn percent_str(value: u8) -> String {
    format!("{}%", value)
}

/// Human label for a record state used in list/export output.
pub fn state_label(confirmed: bool) -> &'static str {
    if confirmed { "confirmed" } else { "checked-in" }
}
