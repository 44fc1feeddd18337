use crate::models::presence::PresenceRecord;
use crate::utils::date::{SemesterWindow, count_business_days, semester_window};
use chrono::NaiveDate;

/// Semester attendance figures for one person, recomputed on every read
/// and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemesterStats {
    pub window: SemesterWindow,
    pub business_days: u32,
    pub check_ins: u32,
    pub confirmed: u32,
    pub percentage: u8,
}

pub struct StatsLogic;

impl StatsLogic {
    /// Attendance figures over the semester containing `reference`.
    ///
    /// A semester in progress is measured only up to the reference date,
    /// not its full future extent. All check-ins count toward the
    /// percentage, confirmed or not; confirmation is an administrative
    /// audit step tracked as a separate figure.
    pub fn semester_stats(history: &[PresenceRecord], reference: &NaiveDate) -> SemesterStats {
        let window = semester_window(reference);

        // Clamp a semester in progress to "now"
        let end = if window.end < *reference {
            window.end
        } else {
            *reference
        };

        let business_days = count_business_days(&window.start, &end);

        let in_window: Vec<&PresenceRecord> = history
            .iter()
            .filter(|r| r.date >= window.start && r.date <= end)
            .collect();

        let check_ins = in_window.len() as u32;
        let confirmed = in_window.iter().filter(|r| r.confirmed).count() as u32;

        let percentage = if business_days == 0 {
            0
        } else {
            let pct = (100.0 * f64::from(check_ins) / f64::from(business_days)).round();
            (pct as u32).min(100) as u8
        };

        SemesterStats {
            window,
            business_days,
            check_ins,
            confirmed,
            percentage,
        }
    }

    /// Rounded percentage in [0, 100]; 0 when the business-day
    /// denominator is 0.
    pub fn attendance_percentage(history: &[PresenceRecord], reference: &NaiveDate) -> u8 {
        Self::semester_stats(history, reference).percentage
    }
}
