use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::projection::{FieldValue, Projectable};
use crate::types::UserId;

/// Fixed role enumeration; a caller has exactly one role. Role drives
/// which candidate fields the projector exposes and which visibility
/// filters apply to source lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    SourcePartnerAdmin,
    SemiLimited,
    Limited,
    User,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    Active,
    Deactivated,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub role: Role,
    pub status: UserStatus,
    pub created_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
}

impl User {
    pub fn new(id: UserId, username: impl Into<String>, role: Role) -> Self {
        let now = Utc::now();
        Self {
            id,
            username: username.into(),
            first_name: None,
            last_name: None,
            email: None,
            role,
            status: UserStatus::Active,
            created_date: now,
            updated_date: now,
        }
    }
}

impl Projectable for User {
    fn entity_name(&self) -> &'static str {
        "user"
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        let value = match name {
            "id" => json!(self.id),
            "username" => json!(self.username),
            "first_name" => json!(self.first_name),
            "last_name" => json!(self.last_name),
            "email" => json!(self.email),
            "role" => json!(self.role),
            "status" => json!(self.status),
            "created_date" => json!(self.created_date),
            "updated_date" => json!(self.updated_date),
            _ => return None,
        };
        Some(FieldValue::Scalar(value))
    }
}
