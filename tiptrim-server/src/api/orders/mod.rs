//! Order RPC procedures
//!
//! `orders.create` is cashier-only and takes the cashier from the token;
//! reads need any valid token.

mod handler;

use axum::{Router, routing::post};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/rpc/orders.create", post(handler::create))
        .route("/rpc/orders.getAll", post(handler::get_all))
        .route("/rpc/orders.getById", post(handler::get_by_id))
}
