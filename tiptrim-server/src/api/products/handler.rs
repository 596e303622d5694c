//! Product Handlers

use axum::extract::State;
use shared::error::{ApiResponse, AppError, AppResult, ErrorCode};
use shared::models::{IdInput, Product, ProductCreate, ProductUpdate};

use crate::api::{Input, not_found_as};
use crate::auth::{CurrentUser, OwnerUser};
use crate::db;
use crate::state::AppState;
use crate::utils::validation::{validate_product_create, validate_product_update};

pub async fn get_all(
    _user: CurrentUser,
    State(state): State<AppState>,
) -> AppResult<ApiResponse<Vec<Product>>> {
    let products = db::product::find_all(state.pool()).await?;
    Ok(ApiResponse::success(products))
}

pub async fn get_by_id(
    _user: CurrentUser,
    State(state): State<AppState>,
    Input(input): Input<IdInput>,
) -> AppResult<ApiResponse<Product>> {
    let product = db::product::find_by_id(state.pool(), input.id)
        .await?
        .ok_or_else(|| {
            AppError::with_message(
                ErrorCode::ProductNotFound,
                format!("Product with ID {} not found", input.id),
            )
        })?;
    Ok(ApiResponse::success(product))
}

pub async fn create(
    OwnerUser(_owner): OwnerUser,
    State(state): State<AppState>,
    Input(input): Input<ProductCreate>,
) -> AppResult<ApiResponse<Product>> {
    validate_product_create(&input)?;
    let product = db::product::create(state.pool(), &input).await?;
    tracing::info!(product_id = product.id, name = %product.name, "Product created");
    Ok(ApiResponse::success(product))
}

pub async fn update(
    OwnerUser(_owner): OwnerUser,
    State(state): State<AppState>,
    Input(input): Input<ProductUpdate>,
) -> AppResult<ApiResponse<Product>> {
    validate_product_update(&input)?;
    let product = db::product::update(state.pool(), &input)
        .await
        .map_err(not_found_as(ErrorCode::ProductNotFound))?;
    tracing::info!(product_id = product.id, "Product updated");
    Ok(ApiResponse::success(product))
}

pub async fn delete(
    OwnerUser(_owner): OwnerUser,
    State(state): State<AppState>,
    Input(input): Input<IdInput>,
) -> AppResult<ApiResponse<Product>> {
    let product = db::product::delete(state.pool(), input.id)
        .await
        .map_err(not_found_as(ErrorCode::ProductNotFound))?;
    tracing::info!(product_id = product.id, "Product deleted");
    Ok(ApiResponse::success(product))
}
