//! Data models
//!
//! Shared between tiptrim-server and clients (via the RPC surface).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` snowflakes, all timestamps Unix milliseconds.

pub mod account;
pub mod employee;
pub mod order;
pub mod payroll;
pub mod product;

// Re-exports
pub use account::*;
pub use employee::*;
pub use order::*;
pub use payroll::*;
pub use product::*;

use serde::{Deserialize, Serialize};

/// Input of procedures addressing a single record
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct IdInput {
    pub id: i64,
}
