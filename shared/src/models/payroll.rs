//! Payroll Model

use super::{Employee, Order, OrderItem};
use serde::{Deserialize, Serialize};

/// Payroll run status (DRAFT -> PAID, one way)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum PayrollStatus {
    #[default]
    Draft,
    Paid,
}

/// Payroll item type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum PayrollItemType {
    Salary,
    Bonus,
}

/// Payroll run entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Payroll {
    pub id: i64,
    pub employee_id: i64,
    pub period_start: i64,
    pub period_end: i64,
    /// Salary plus every bonus item, fixed at creation
    pub amount: f64,
    pub status: PayrollStatus,
    pub deleted_at: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Payroll item entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct PayrollItem {
    pub id: i64,
    pub payroll_id: i64,
    pub item_type: PayrollItemType,
    pub amount: f64,
    pub created_at: i64,
}

/// Payroll with employee and items (list view)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollSummary {
    #[serde(flatten)]
    pub payroll: Payroll,
    pub employee: Employee,
    pub items: Vec<PayrollItem>,
}

/// Order line settled by a bonus item, with its order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettledOrderItem {
    #[serde(flatten)]
    pub item: OrderItem,
    pub order: Order,
}

/// Payroll item with the order line it settles (BONUS items only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollItemDetail {
    #[serde(flatten)]
    pub item: PayrollItem,
    pub order_item: Option<SettledOrderItem>,
}

/// Payroll with employee and fully resolved items (detail view)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollDetail {
    #[serde(flatten)]
    pub payroll: Payroll,
    pub employee: Employee,
    pub items: Vec<PayrollItemDetail>,
}

fn default_true() -> bool {
    true
}

/// Create payroll payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollCreate {
    pub employee_id: i64,
    pub period_start: i64,
    pub period_end: i64,
    pub salary: f64,
    #[serde(default)]
    pub status: PayrollStatus,
    #[serde(default = "default_true")]
    pub include_order_items: bool,
}

/// Status transition payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollStatusUpdate {
    pub id: i64,
    pub status: PayrollStatus,
}

/// Payroll listing filter (all fields optional, AND semantics)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PayrollFilter {
    /// Only payrolls whose period starts at or after this instant
    pub start_date: Option<i64>,
    /// Only payrolls whose period ends at or before this instant
    pub end_date: Option<i64>,
    pub status: Option<PayrollStatus>,
    pub employee_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payroll_create_defaults() {
        let json = r#"{"employee_id":1,"period_start":0,"period_end":10,"salary":100.0}"#;
        let input: PayrollCreate = serde_json::from_str(json).unwrap();
        assert_eq!(input.status, PayrollStatus::Draft);
        assert!(input.include_order_items);
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(serde_json::to_string(&PayrollStatus::Paid).unwrap(), "\"PAID\"");
        assert_eq!(
            serde_json::to_string(&PayrollItemType::Salary).unwrap(),
            "\"SALARY\""
        );
    }
}
