//! HTTP surface
//!
//! # Routes
//!
//! | Path | Method | Gate |
//! |------|--------|------|
//! | /health | GET | public |
//! | /api/auth/login | POST | public |
//! | /api/auth/me | GET | authenticated |
//! | /rpc/employees.* | POST | see [`employees`] |
//! | /rpc/products.* | POST | see [`products`] |
//! | /rpc/orders.* | POST | see [`orders`] |
//! | /rpc/payrolls.* | POST | owner |
//! | /login | GET | public |
//! | /owner/** | GET | owner (redirects) |
//! | /cashier/** | GET | cashier (redirects) |

pub mod auth;
pub mod employees;
pub mod health;
pub mod input;
pub mod orders;
pub mod pages;
pub mod payrolls;
pub mod products;

pub use input::Input;

use axum::{Router, middleware};
use shared::error::{AppError, ErrorCode};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth::route_gate::route_gate;
use crate::db::RepoError;
use crate::state::AppState;

/// Build the full application router with middleware and state
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(employees::router())
        .merge(products::router())
        .merge(orders::router())
        .merge(payrolls::router())
        .merge(pages::router())
        // Page-level Role Gate (redirects); RPC routes pass through it
        .layer(middleware::from_fn_with_state(state.clone(), route_gate))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Map a repository `NotFound` to a domain-specific code, keeping its message
pub fn not_found_as(code: ErrorCode) -> impl FnOnce(RepoError) -> AppError {
    move |err| match err {
        RepoError::NotFound(msg) => AppError::with_message(code, msg),
        other => other.into(),
    }
}
