use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// The two account roles WorkNest knows about. Role is immutable except by an
/// admin action, which happens outside this crate.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Admin,
    Staff,
}

impl Role {
    pub fn is_admin(&self) -> bool {
        *self == Role::Admin
    }
}
