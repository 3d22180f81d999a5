use crate::config::PolicyConfig;
use crate::error::EngineError;
use crate::model::leave::{LeaveBalance, LeaveDecision, LeaveRequest, LeaveStatus, LeaveType};
use crate::model::role::Role;
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use tracing::{debug, info};

/// Validates leave requests against policy and tracks how much of the annual
/// allowance a user has consumed.
///
/// Balance arithmetic always runs over the approved requests the caller hands
/// in; the engine keeps no running totals, so the caller decides the snapshot
/// and persists the outcome.
pub struct LeaveEngine {
    allowance: u32,
}

impl LeaveEngine {
    pub fn new(config: &PolicyConfig) -> Self {
        Self {
            allowance: config.annual_leave_allowance,
        }
    }

    /// Inclusive day count of a date range: both endpoints count, so a
    /// single-day leave spans 1.
    pub fn compute_span(&self, start: NaiveDate, end: NaiveDate) -> Result<u32, EngineError> {
        if start > end {
            return Err(EngineError::InvalidRange);
        }
        Ok((end - start).num_days() as u32 + 1)
    }

    /// Validate a new application and produce the pending request.
    ///
    /// `approved_this_year` is the user's already-approved requests; only
    /// those starting in `today`'s calendar year count against the allowance.
    /// A same-day start is allowed (emergency leave); only a start strictly in
    /// the past is rejected.
    pub fn validate_new_request(
        &self,
        user_id: u64,
        leave_type: LeaveType,
        start: NaiveDate,
        end: NaiveDate,
        reason: String,
        approved_this_year: &[LeaveRequest],
        today: NaiveDate,
    ) -> Result<LeaveRequest, EngineError> {
        let total_days = self.compute_span(start, end)?;

        if start < today {
            return Err(EngineError::PastStartDate);
        }

        let used = self.used_days(approved_this_year, today.year());
        let remaining = self.allowance as i64 - used;
        if total_days as i64 > remaining {
            debug!(user_id, total_days, remaining, "leave request over balance");
            return Err(EngineError::InsufficientBalance { remaining });
        }

        Ok(LeaveRequest {
            id: None,
            user_id,
            leave_type,
            start_date: start,
            end_date: end,
            total_days,
            reason,
            status: LeaveStatus::Pending,
            approved_by: None,
            approved_at: None,
            admin_notes: None,
        })
    }

    /// Settle a pending request. Decisions are final: once approved or
    /// rejected the request can never be re-decided, so under racing admins
    /// the first decision wins and the second gets `NotPending`.
    pub fn decide(
        &self,
        request: &mut LeaveRequest,
        decision: LeaveDecision,
        approver_id: u64,
        notes: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<(), EngineError> {
        if request.status != LeaveStatus::Pending {
            return Err(EngineError::NotPending);
        }

        request.status = match decision {
            LeaveDecision::Approve => LeaveStatus::Approved,
            LeaveDecision::Reject => LeaveStatus::Rejected,
        };
        request.approved_by = Some(approver_id);
        request.approved_at = Some(now);
        request.admin_notes = notes;

        info!(
            user_id = request.user_id,
            approver_id,
            status = %request.status,
            "leave request settled"
        );
        Ok(())
    }

    /// Authorize removal of a request. Admins may cancel anything; the owning
    /// staff member only while the request is still pending. The caller does
    /// the actual delete.
    pub fn cancel(
        &self,
        request: &LeaveRequest,
        requester_id: u64,
        requester_role: Role,
    ) -> Result<(), EngineError> {
        let owner_while_pending =
            request.user_id == requester_id && request.status == LeaveStatus::Pending;

        if requester_role.is_admin() || owner_while_pending {
            Ok(())
        } else {
            Err(EngineError::Forbidden)
        }
    }

    /// Year-to-date consumption against the allowance. Advisory only:
    /// enforcement goes through [`Self::validate_new_request`], never a cached
    /// remaining figure.
    pub fn balance(&self, approved_for_user: &[LeaveRequest], year: i32) -> LeaveBalance {
        let used = self.used_days(approved_for_user, year);
        LeaveBalance {
            total: self.allowance,
            used,
            remaining: self.allowance as i64 - used,
        }
    }

    fn used_days(&self, requests: &[LeaveRequest], year: i32) -> i64 {
        requests
            .iter()
            .filter(|r| r.status == LeaveStatus::Approved && r.start_date.year() == year)
            .map(|r| r.total_days as i64)
            .sum()
    }
}
