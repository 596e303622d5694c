//! Authentication Handlers

use axum::extract::State;
use shared::error::{ApiResponse, AppResult};
use shared::models::{LoginRequest, LoginResponse, SessionUser};

use crate::api::Input;
use crate::auth::CurrentUser;
use crate::services::account;
use crate::state::AppState;

/// Sign in with username and password
pub async fn login(
    State(state): State<AppState>,
    Input(req): Input<LoginRequest>,
) -> AppResult<ApiResponse<LoginResponse>> {
    let res = account::login(state.pool(), state.get_jwt_service(), &req).await?;
    Ok(ApiResponse::success(res))
}

/// Identity carried by the caller's token
pub async fn me(user: CurrentUser) -> AppResult<ApiResponse<SessionUser>> {
    Ok(ApiResponse::success(user.into()))
}
