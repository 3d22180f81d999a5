//! Role-scoped visibility for tasks and notices, plus the task status
//! transition rules. Pure predicates over rows the caller already fetched.

use crate::error::EngineError;
use crate::model::notice::{Audience, Notice};
use crate::model::role::Role;
use crate::model::task::{Task, TaskStatus};
use chrono::{DateTime, Utc};
use tracing::debug;

/// The authenticated caller as the engines see it: just an id and a role,
/// already verified upstream by the identity collaborator.
#[derive(Debug, Copy, Clone)]
pub struct Viewer {
    pub id: u64,
    pub role: Role,
}

impl Viewer {
    pub fn new(id: u64, role: Role) -> Self {
        Self { id, role }
    }
}

/// Admins see every task; staff only the ones assigned to them.
pub fn can_view_task(viewer: &Viewer, task: &Task) -> bool {
    viewer.role.is_admin() || task.assigned_to == viewer.id
}

/// Admins see every notice; staff only published ones addressed to all staff
/// or to staff specifically. Expiry never hides a notice.
pub fn can_view_notice(viewer: &Viewer, notice: &Notice) -> bool {
    if viewer.role.is_admin() {
        return true;
    }
    notice.is_published && matches!(notice.target_audience, Audience::All | Audience::Staff)
}

pub fn visible_tasks<'a>(viewer: &Viewer, tasks: &'a [Task]) -> Vec<&'a Task> {
    tasks.iter().filter(|t| can_view_task(viewer, t)).collect()
}

pub fn visible_notices<'a>(viewer: &Viewer, notices: &'a [Notice]) -> Vec<&'a Notice> {
    notices
        .iter()
        .filter(|n| can_view_notice(viewer, n))
        .collect()
}

/// Move a task along its lifecycle: pending -> in-progress -> completed, with
/// cancellation reachable from any state. Only the assignee or an admin may
/// transition.
///
/// Entering `Completed` forces progress to 100 and stamps `completed_at`
/// whatever progress the caller supplied, which keeps the completed ⇔
/// progress=100 invariant intact. On other edges a supplied progress is
/// applied, capped at 100.
pub fn transition_task(
    task: &mut Task,
    to: TaskStatus,
    viewer: &Viewer,
    progress: Option<u8>,
    now: DateTime<Utc>,
) -> Result<(), EngineError> {
    if !viewer.role.is_admin() && task.assigned_to != viewer.id {
        return Err(EngineError::Forbidden);
    }

    let admissible = matches!(
        (task.status, to),
        (TaskStatus::Pending, TaskStatus::InProgress)
            | (TaskStatus::InProgress, TaskStatus::Completed)
            | (_, TaskStatus::Cancelled)
    );
    if !admissible {
        return Err(EngineError::InvalidTransition {
            from: task.status,
            to,
        });
    }

    debug!(task_id = ?task.id, from = %task.status, %to, "task transition");

    task.status = to;
    if to == TaskStatus::Completed {
        task.progress = 100;
        task.completed_at = Some(now);
    } else if let Some(p) = progress {
        task.progress = p.min(100);
    }
    Ok(())
}
