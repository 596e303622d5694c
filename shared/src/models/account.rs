//! Account Model (login identity)

use serde::{Deserialize, Serialize};

/// Account kind
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum AccountKind {
    Owner,
    Employee,
}

impl AccountKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Owner => "OWNER",
            Self::Employee => "EMPLOYEE",
        }
    }
}

/// Account entity (credential hash is never part of this type)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Account {
    pub id: i64,
    pub username: String,
    pub kind: AccountKind,
    /// Linked employee (EMPLOYEE accounts only)
    pub employee_id: Option<i64>,
    pub created_at: i64,
}

/// Sign-in payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Sign-in result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub expires_at: i64,
    pub user: SessionUser,
}

/// Caller identity as carried by the access token
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionUser {
    pub account_id: i64,
    pub username: String,
    pub kind: AccountKind,
    pub employee_id: Option<i64>,
    pub employee_role: Option<super::EmployeeRole>,
}
