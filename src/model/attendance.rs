use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
    HalfDay,
}

/// One attendance row per user per calendar date. The (user_id, date) pair is
/// unique; the engine refuses a second check-in for the same day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// None until the persistence layer assigns one.
    pub id: Option<u64>,
    pub user_id: u64,
    pub date: NaiveDate,
    pub check_in: Option<NaiveTime>,
    pub check_out: Option<NaiveTime>,
    /// Worked hours, rounded to 2 decimal places. Set on check-out.
    pub total_hours: Option<f64>,
    pub status: AttendanceStatus,
    pub notes: Option<String>,
}

/// Roster-wide counts for a single date. `absent` is derived as roster size
/// minus rows recorded for the date; users with no row are implicitly absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyStats {
    pub total_staff: usize,
    pub present: usize,
    pub late: usize,
    pub absent: usize,
}

/// Per-user attendance summary as shown on the staff dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyStats {
    /// Days present or late within the reference month.
    pub this_month: usize,
    /// Days present or late all-time.
    pub total_present: usize,
    pub late_arrivals: usize,
    pub absent_days: usize,
}
