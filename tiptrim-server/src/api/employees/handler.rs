//! Employee Handlers

use axum::extract::State;
use shared::error::{ApiResponse, AppError, AppResult, ErrorCode};
use shared::models::{
    Employee, EmployeeCreate, EmployeeDetail, EmployeeRole, EmployeeUpdate, IdInput,
};

use crate::api::{Input, not_found_as};
use crate::auth::{CurrentUser, OwnerUser};
use crate::db;
use crate::services::account;
use crate::state::AppState;
use crate::utils::validation::validate_employee_name;

/// Active employees, by name
pub async fn get_all(
    _user: CurrentUser,
    State(state): State<AppState>,
) -> AppResult<ApiResponse<Vec<Employee>>> {
    let employees = db::employee::find_all_active(state.pool()).await?;
    Ok(ApiResponse::success(employees))
}

/// Active barbers, by name
pub async fn get_barbers(
    _user: CurrentUser,
    State(state): State<AppState>,
) -> AppResult<ApiResponse<Vec<Employee>>> {
    let barbers = db::employee::find_active_by_role(state.pool(), EmployeeRole::Barber).await?;
    Ok(ApiResponse::success(barbers))
}

/// Employee with login account; soft-deleted employees included
pub async fn get_by_id(
    _user: CurrentUser,
    State(state): State<AppState>,
    Input(input): Input<IdInput>,
) -> AppResult<ApiResponse<EmployeeDetail>> {
    let employee = db::employee::find_by_id(state.pool(), input.id)
        .await?
        .ok_or_else(|| {
            AppError::with_message(
                ErrorCode::EmployeeNotFound,
                format!("Employee with ID {} not found", input.id),
            )
        })?;
    let account = db::account::find_by_employee(state.pool(), employee.id).await?;
    Ok(ApiResponse::success(EmployeeDetail { employee, account }))
}

pub async fn create(
    OwnerUser(_owner): OwnerUser,
    State(state): State<AppState>,
    Input(input): Input<EmployeeCreate>,
) -> AppResult<ApiResponse<EmployeeDetail>> {
    let created = account::create_employee(state.pool(), &input).await?;
    Ok(ApiResponse::success(created))
}

pub async fn update(
    OwnerUser(_owner): OwnerUser,
    State(state): State<AppState>,
    Input(input): Input<EmployeeUpdate>,
) -> AppResult<ApiResponse<Employee>> {
    validate_employee_name(&input.name)?;
    let employee = db::employee::update(state.pool(), input.id, input.name.trim(), input.role)
        .await
        .map_err(not_found_as(ErrorCode::EmployeeNotFound))?;
    tracing::info!(employee_id = employee.id, role = employee.role.as_str(), "Employee updated");
    Ok(ApiResponse::success(employee))
}

/// Soft delete
pub async fn delete(
    OwnerUser(_owner): OwnerUser,
    State(state): State<AppState>,
    Input(input): Input<IdInput>,
) -> AppResult<ApiResponse<Employee>> {
    let employee = db::employee::soft_delete(state.pool(), input.id)
        .await
        .map_err(not_found_as(ErrorCode::EmployeeNotFound))?;
    tracing::info!(employee_id = employee.id, "Employee deleted");
    Ok(ApiResponse::success(employee))
}
