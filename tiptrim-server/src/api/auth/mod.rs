//! Authentication Routes

mod handler;

use axum::{Router, routing::get, routing::post};

use crate::state::AppState;

/// - /api/auth/login: public
/// - /api/auth/me: any valid token
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", post(handler::login))
        .route("/api/auth/me", get(handler::me))
}
