use crate::model::role::Role;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A staff account row. Credentials live with the identity collaborator and
/// are never modelled here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub is_active: bool,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub hire_date: Option<NaiveDate>,
}

/// Active head count, the denominator for daily absence figures. Deactivated
/// accounts drop out of the roster without being deleted.
pub fn roster_size(users: &[User]) -> usize {
    users.iter().filter(|u| u.is_active).count()
}
