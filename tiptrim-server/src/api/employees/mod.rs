//! Employee RPC procedures
//!
//! | Procedure | Gate |
//! |---|---|
//! | employees.getAll / getBarbers / getById | authenticated |
//! | employees.create / update / delete | owner |

mod handler;

use axum::{Router, routing::post};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/rpc/employees.getAll", post(handler::get_all))
        .route("/rpc/employees.getBarbers", post(handler::get_barbers))
        .route("/rpc/employees.getById", post(handler::get_by_id))
        .route("/rpc/employees.create", post(handler::create))
        .route("/rpc/employees.update", post(handler::update))
        .route("/rpc/employees.delete", post(handler::delete))
}
