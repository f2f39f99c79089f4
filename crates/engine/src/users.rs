//! The module contains the definition of a user account.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role of a user. Admins manage containers, fleet, inventory, financials
/// and reports; customers create and track shipments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[default]
    Customer,
    Admin,
}

/// A registered user.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
