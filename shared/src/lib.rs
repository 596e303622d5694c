//! Shared types for TipTrim
//!
//! Error system, data models and small utilities used by the server and
//! by any client talking to its RPC surface.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use axum::{Json, body};
pub use http;
pub use serde::{Deserialize, Serialize};
