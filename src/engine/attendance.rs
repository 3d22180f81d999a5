use crate::config::PolicyConfig;
use crate::error::EngineError;
use crate::model::attendance::{AttendanceRecord, AttendanceStatus, DailyStats, MonthlyStats};
use chrono::{Datelike, NaiveDate, NaiveTime};
use tracing::debug;

/// Turns raw check-in/check-out events into classified daily rows and answers
/// the aggregate queries behind the dashboards.
///
/// The engine holds no storage: the caller fetches the snapshot row(s) for the
/// day and persists whatever comes back. The one-row-per-(user, date)
/// invariant is enforced as a conditional write — check-in refuses when a row
/// for the day already exists, so under racing check-ins the first write wins.
pub struct AttendanceEngine {
    workday_start: NaiveTime,
}

impl AttendanceEngine {
    pub fn new(config: &PolicyConfig) -> Self {
        Self {
            workday_start: config.workday_start,
        }
    }

    /// Create today's attendance row for a user.
    ///
    /// `existing` is the row already stored for (user_id, date), if any;
    /// passing `Some` yields `AlreadyCheckedIn`. Arriving strictly after the
    /// workday start classifies the day as late; at the boundary exactly it is
    /// still present.
    pub fn check_in(
        &self,
        user_id: u64,
        date: NaiveDate,
        at: NaiveTime,
        existing: Option<&AttendanceRecord>,
        notes: Option<String>,
    ) -> Result<AttendanceRecord, EngineError> {
        if existing.is_some() {
            return Err(EngineError::AlreadyCheckedIn);
        }

        let status = if at > self.workday_start {
            AttendanceStatus::Late
        } else {
            AttendanceStatus::Present
        };

        debug!(user_id, %date, %at, %status, "check-in recorded");

        Ok(AttendanceRecord {
            id: None,
            user_id,
            date,
            check_in: Some(at),
            check_out: None,
            total_hours: None,
            status,
            notes,
        })
    }

    /// Close out today's attendance row, computing worked hours.
    ///
    /// Hours are plain same-day subtraction rounded to 2 decimals; there is no
    /// timezone conversion and no overnight-shift handling. A check-out time
    /// earlier than check-in is rejected as `InvalidDuration` rather than
    /// stored as a negative figure.
    pub fn check_out(
        &self,
        record: Option<&AttendanceRecord>,
        at: NaiveTime,
        notes: Option<String>,
    ) -> Result<AttendanceRecord, EngineError> {
        let record = record.ok_or(EngineError::NoCheckInFound)?;
        let check_in = record.check_in.ok_or(EngineError::NoCheckInFound)?;

        if record.check_out.is_some() {
            return Err(EngineError::AlreadyCheckedOut);
        }
        if at < check_in {
            return Err(EngineError::InvalidDuration);
        }

        let worked = at - check_in;
        let hours = worked.num_seconds() as f64 / 3600.0;
        let hours = (hours * 100.0).round() / 100.0;

        debug!(user_id = record.user_id, %at, hours, "check-out recorded");

        let mut updated = record.clone();
        updated.check_out = Some(at);
        updated.total_hours = Some(hours);
        if notes.is_some() {
            updated.notes = notes;
        }
        Ok(updated)
    }

    /// Roster-wide counts for one date's rows.
    ///
    /// Absence is derived: roster size minus rows recorded for the date. A
    /// user with no row is implicitly absent; no absent rows are ever stored,
    /// so a late arrival counts under `late` and never under `absent`.
    pub fn daily_stats(&self, roster_size: usize, rows: &[AttendanceRecord]) -> DailyStats {
        let present = rows
            .iter()
            .filter(|r| r.status == AttendanceStatus::Present)
            .count();
        let late = rows
            .iter()
            .filter(|r| r.status == AttendanceStatus::Late)
            .count();

        DailyStats {
            total_staff: roster_size,
            present,
            late,
            absent: roster_size.saturating_sub(rows.len()),
        }
    }

    /// Per-user summary over that user's full attendance history. `as_of`
    /// fixes which (month, year) counts as "this month".
    pub fn monthly_stats(&self, rows: &[AttendanceRecord], as_of: NaiveDate) -> MonthlyStats {
        let attended =
            |r: &&AttendanceRecord| matches!(r.status, AttendanceStatus::Present | AttendanceStatus::Late);

        let this_month = rows
            .iter()
            .filter(attended)
            .filter(|r| r.date.month() == as_of.month() && r.date.year() == as_of.year())
            .count();
        let total_present = rows.iter().filter(attended).count();
        let late_arrivals = rows
            .iter()
            .filter(|r| r.status == AttendanceStatus::Late)
            .count();
        let absent_days = rows
            .iter()
            .filter(|r| r.status == AttendanceStatus::Absent)
            .count();

        MonthlyStats {
            this_month,
            total_present,
            late_arrivals,
            absent_days,
        }
    }
}
