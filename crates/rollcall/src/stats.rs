//! Dashboard statistics

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::model::{AttendanceRecord, AttendanceStatus};

/// Headline numbers for today.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Members on the roster
    pub total_members: usize,
    /// Members recorded present today
    pub present_today: usize,
    /// Members recorded absent today
    pub absent_today: usize,
    /// `present / total * 100`, one decimal with ties to even, `0.0` without members
    pub attendance_percentage: f64,
}

impl DashboardStats {
    /// Members with no record today.
    pub fn not_marked(&self) -> usize {
        self.total_members
            .saturating_sub(self.present_today + self.absent_today)
    }
}

/// Counts for one day of the trend chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTally {
    /// The day
    pub date: NaiveDate,
    /// Axis label, e.g. `Mon 06`
    pub label: String,
    /// Present records
    pub present: usize,
    /// Absent records
    pub absent: usize,
    /// `present + absent`
    pub total: usize,
}

fn count(records: &[AttendanceRecord], date: Option<NaiveDate>) -> (usize, usize) {
    records
        .iter()
        .filter(|r| date.is_none_or(|d| r.date == d))
        .fold((0, 0), |(present, absent), r| match r.status {
            AttendanceStatus::Present => (present + 1, absent),
            AttendanceStatus::Absent => (present, absent + 1),
        })
}

/// Compute today's stats from the roster size and today's records.
///
/// Only counts stored records: members nobody has marked yet are neither
/// present nor absent here.
pub fn dashboard_stats(total_members: usize, today_records: &[AttendanceRecord]) -> DashboardStats {
    let (present_today, absent_today) = count(today_records, None);
    let attendance_percentage = if total_members > 0 {
        let raw = present_today as f64 / total_members as f64 * 100.0;
        (raw * 10.0).round_ties_even() / 10.0
    } else {
        0.0
    };

    DashboardStats {
        total_members,
        present_today,
        absent_today,
        attendance_percentage,
    }
}

/// Per-day counts for the `days` days ending at `today`, oldest first.
pub fn weekly_trend(records: &[AttendanceRecord], today: NaiveDate, days: u32) -> Vec<DailyTally> {
    (0..days)
        .rev()
        .filter_map(|offset| today.checked_sub_days(Days::new(u64::from(offset))))
        .map(|date| {
            let (present, absent) = count(records, Some(date));
            DailyTally {
                date,
                label: date.format("%a %d").to_string(),
                present,
                absent,
                total: present + absent,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_members() {
        let stats = dashboard_stats(0, &[]);
        assert_eq!(stats.attendance_percentage, 0.0);
        assert_eq!(stats.not_marked(), 0);
    }

    #[test]
    fn test_percentage_rounding() {
        let day = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let records = vec![AttendanceRecord::new(1, day, AttendanceStatus::Present)];
        let stats = dashboard_stats(3, &records);
        assert_eq!(stats.attendance_percentage, 33.3);
        assert_eq!(stats.not_marked(), 2);
    }
}
