//! Page landings
//!
//! Rendering is left to the client; these return the page context as JSON.
//! `/owner/**` and `/cashier/**` sit behind the route gate, `/login` is public.

use axum::{Json, Router, extract::OriginalUri, routing::get};
use serde::Serialize;
use shared::models::SessionUser;

use crate::auth::CurrentUser;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", get(login_page))
        .route("/owner", get(area_page))
        .route("/owner/{*page}", get(area_page))
        .route("/cashier", get(area_page))
        .route("/cashier/{*page}", get(area_page))
}

#[derive(Serialize)]
pub struct PageContext {
    pub page: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<SessionUser>,
}

async fn login_page(OriginalUri(uri): OriginalUri) -> Json<PageContext> {
    Json(PageContext {
        page: uri.to_string(),
        user: None,
    })
}

async fn area_page(user: CurrentUser, OriginalUri(uri): OriginalUri) -> Json<PageContext> {
    Json(PageContext {
        page: uri.path().to_string(),
        user: Some(user.into()),
    })
}
