//! Order Handlers

use axum::extract::State;
use shared::error::{ApiResponse, AppResult};
use shared::models::{IdInput, OrderCreate, OrderDetail, OrderListQuery, OrderPage};

use crate::api::Input;
use crate::auth::{CashierUser, CurrentUser};
use crate::orders;
use crate::state::AppState;

pub async fn create(
    CashierUser(cashier): CashierUser,
    State(state): State<AppState>,
    Input(input): Input<OrderCreate>,
) -> AppResult<ApiResponse<OrderDetail>> {
    let order = orders::create_order(state.pool(), &cashier, &input).await?;
    Ok(ApiResponse::success(order))
}

pub async fn get_all(
    _user: CurrentUser,
    State(state): State<AppState>,
    Input(query): Input<OrderListQuery>,
) -> AppResult<ApiResponse<OrderPage>> {
    let page = orders::list_orders(state.pool(), &query).await?;
    Ok(ApiResponse::success(page))
}

pub async fn get_by_id(
    _user: CurrentUser,
    State(state): State<AppState>,
    Input(input): Input<IdInput>,
) -> AppResult<ApiResponse<OrderDetail>> {
    let order = orders::get_order(state.pool(), input.id).await?;
    Ok(ApiResponse::success(order))
}
