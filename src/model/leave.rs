use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LeaveType {
    Sick,
    Casual,
    Annual,
    Maternity,
    Paternity,
    Other,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

/// The admin's verdict on a pending request. Separate from [`LeaveStatus`] so
/// a caller cannot "decide" a request back to pending.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LeaveDecision {
    Approve,
    Reject,
}

/// A leave application. Created pending by staff, settled exactly once by an
/// admin, cancellable by the owner only while still pending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// None until the persistence layer assigns one.
    pub id: Option<u64>,
    pub user_id: u64,
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    /// Inclusive end of the span.
    pub end_date: NaiveDate,
    /// Inclusive day count: (end_date - start_date) + 1.
    pub total_days: u32,
    pub reason: String,
    pub status: LeaveStatus,
    pub approved_by: Option<u64>,
    pub approved_at: Option<DateTime<Utc>>,
    pub admin_notes: Option<String>,
}

/// Year-to-date allowance consumption. Display-only: `remaining` can go
/// negative under racing approvals, so enforcement always re-validates at
/// request-creation time instead of trusting this figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveBalance {
    pub total: u32,
    pub used: i64,
    pub remaining: i64,
}
