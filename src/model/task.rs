use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
    Urgent,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

/// An assigned piece of work.
///
/// Invariant: status == Completed implies progress == 100 and completed_at is
/// set. The transition logic in [`crate::visibility`] enforces this on entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: Option<u64>,
    pub title: String,
    pub description: Option<String>,
    pub assigned_to: u64,
    pub assigned_by: u64,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    /// Percent complete, 0..=100.
    pub progress: u8,
    pub due_date: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
}
