//! User identity and platform membership records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Access level attached to a session identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

/// The identity the session provider hands to views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// A registered platform member as shown in the admin panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformUser {
    pub name: String,
    pub email: String,
    pub joined: NaiveDate,
    pub cases: u32,
}
