//! TipTrim server
//!
//! Barbershop back office: staff sign-in, roster, catalog, point-of-sale
//! orders with per-line barber and cashier bonuses, and payroll runs that
//! settle those bonuses.
//!
//! # Layout
//!
//! - [`api`] - HTTP routes (RPC procedures, pages, health)
//! - [`auth`] - access tokens, passwords, the Role Gate
//! - [`db`] - SQLite pool and repositories
//! - [`orders`] - Order Engine
//! - [`payroll`] - Payroll Engine
//! - [`services`] - account sign-in and provisioning
//! - [`utils`] - logging and input validation

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod orders;
pub mod payroll;
pub mod services;
pub mod state;
pub mod utils;

#[cfg(test)]
pub(crate) mod testing;

pub use api::build_router;
pub use config::Config;
pub use db::DbService;
pub use state::AppState;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;
