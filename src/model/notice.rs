use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NoticeType {
    General,
    Important,
    Urgent,
    Announcement,
}

/// Who a notice is addressed to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Audience {
    All,
    Admin,
    Staff,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notice {
    pub id: Option<u64>,
    pub title: String,
    pub content: String,
    #[serde(rename = "type")]
    pub notice_type: NoticeType,
    pub published_by: u64,
    pub is_published: bool,
    pub publish_date: Option<DateTime<Utc>>,
    /// Expiry is informational only; it never hides a notice.
    pub expiry_date: Option<DateTime<Utc>>,
    pub target_audience: Audience,
    /// 1 (lowest) to 5 (highest).
    pub priority: u8,
}
