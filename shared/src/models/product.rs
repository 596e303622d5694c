//! Product Model

use serde::{Deserialize, Serialize};

/// Product category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum ProductCategory {
    Service,
    Product,
}

/// Product entity (a service or a retail item)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub category: ProductCategory,
    pub description: String,
    /// Percentage of the line subtotal paid to the barber (0-100)
    pub bonus_percentage_for_barber: f64,
    /// Percentage of the line subtotal paid to the cashier (0-100)
    pub bonus_percentage_for_cashier: f64,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub price: f64,
    pub category: ProductCategory,
    #[serde(default)]
    pub description: String,
    pub bonus_percentage_for_barber: f64,
    pub bonus_percentage_for_cashier: f64,
}

/// Update product payload (full replacement of editable fields)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub category: ProductCategory,
    #[serde(default)]
    pub description: String,
    pub bonus_percentage_for_barber: f64,
    pub bonus_percentage_for_cashier: f64,
}
