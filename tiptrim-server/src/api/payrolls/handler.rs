//! Payroll Handlers

use axum::extract::State;
use shared::error::{ApiResponse, AppResult};
use shared::models::{
    IdInput, Payroll, PayrollCreate, PayrollDetail, PayrollFilter, PayrollStatusUpdate,
    PayrollSummary,
};

use crate::api::Input;
use crate::auth::OwnerUser;
use crate::payroll;
use crate::state::AppState;

pub async fn get_all(
    OwnerUser(_owner): OwnerUser,
    State(state): State<AppState>,
    Input(filter): Input<PayrollFilter>,
) -> AppResult<ApiResponse<Vec<PayrollSummary>>> {
    let payrolls = payroll::list_payrolls(state.pool(), &filter).await?;
    Ok(ApiResponse::success(payrolls))
}

pub async fn get_by_id(
    OwnerUser(_owner): OwnerUser,
    State(state): State<AppState>,
    Input(input): Input<IdInput>,
) -> AppResult<ApiResponse<PayrollDetail>> {
    let detail = payroll::get_payroll(state.pool(), input.id).await?;
    Ok(ApiResponse::success(detail))
}

pub async fn create(
    OwnerUser(_owner): OwnerUser,
    State(state): State<AppState>,
    Input(input): Input<PayrollCreate>,
) -> AppResult<ApiResponse<PayrollSummary>> {
    let created = payroll::create_payroll(state.pool(), &input).await?;
    Ok(ApiResponse::success(created))
}

pub async fn update_status(
    OwnerUser(_owner): OwnerUser,
    State(state): State<AppState>,
    Input(input): Input<PayrollStatusUpdate>,
) -> AppResult<ApiResponse<Payroll>> {
    let updated = payroll::update_status(state.pool(), &input).await?;
    Ok(ApiResponse::success(updated))
}

/// Soft delete
pub async fn delete(
    OwnerUser(_owner): OwnerUser,
    State(state): State<AppState>,
    Input(input): Input<IdInput>,
) -> AppResult<ApiResponse<Payroll>> {
    let deleted = payroll::delete_payroll(state.pool(), input.id).await?;
    Ok(ApiResponse::success(deleted))
}
