//! Payroll RPC procedures (owner only)

mod handler;

use axum::{Router, routing::post};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/rpc/payrolls.getAll", post(handler::get_all))
        .route("/rpc/payrolls.getById", post(handler::get_by_id))
        .route("/rpc/payrolls.create", post(handler::create))
        .route("/rpc/payrolls.updateStatus", post(handler::update_status))
        .route("/rpc/payrolls.delete", post(handler::delete))
}
