//! Product RPC procedures
//!
//! Reads need any valid token, writes need the owner. Delete is a hard
//! delete; order lines keep their own snapshot.

mod handler;

use axum::{Router, routing::post};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/rpc/products.getAll", post(handler::get_all))
        .route("/rpc/products.getById", post(handler::get_by_id))
        .route("/rpc/products.create", post(handler::create))
        .route("/rpc/products.update", post(handler::update))
        .route("/rpc/products.delete", post(handler::delete))
}
