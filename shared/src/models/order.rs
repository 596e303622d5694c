//! Order Model (point-of-sale transactions)

use super::Employee;
use serde::{Deserialize, Serialize};

/// Settlement status of an order line's bonuses
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum SettlementStatus {
    #[default]
    Pending,
    Paid,
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Order {
    pub id: i64,
    pub total_price: f64,
    pub cashier_id: i64,
    pub barber_id: i64,
    pub created_at: i64,
}

/// Order line with the product snapshot taken at sale time
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct OrderItem {
    pub id: i64,
    pub order_id: i64,
    /// `None` once the product has been deleted
    pub product_id: Option<i64>,
    pub product_name: String,
    pub product_price: f64,
    pub quantity: i64,
    pub barber_bonus: f64,
    pub cashier_bonus: f64,
    pub payroll_status: SettlementStatus,
    /// Payroll item that settled (or reserved) this line
    pub payroll_item_id: Option<i64>,
    pub created_at: i64,
}

/// Order with its lines and the resolved cashier and barber
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDetail {
    #[serde(flatten)]
    pub order: Order,
    pub cashier: Employee,
    pub barber: Employee,
    pub items: Vec<OrderItem>,
}

/// One requested line of a new order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLineInput {
    pub product_id: i64,
    pub quantity: i64,
}

/// Create order payload (the cashier comes from the caller's token)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub barber_id: i64,
    pub items: Vec<OrderLineInput>,
}

/// Order listing parameters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderListQuery {
    pub limit: Option<i64>,
    /// Id of the first order of the requested page
    pub cursor: Option<i64>,
}

/// One page of orders, newest first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderPage {
    pub orders: Vec<OrderDetail>,
    pub next_cursor: Option<i64>,
}
