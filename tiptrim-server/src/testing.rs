//! Seed helpers for unit tests

use shared::models::{AccountKind, Employee, EmployeeRole, Product, ProductCategory, ProductCreate};
use sqlx::SqlitePool;

use crate::auth::CurrentUser;
use crate::db;

pub async fn seed_employee(pool: &SqlitePool, name: &str, role: EmployeeRole) -> Employee {
    db::employee::insert(pool, name, role).await.unwrap()
}

pub async fn seed_product(
    pool: &SqlitePool,
    name: &str,
    price: f64,
    barber_percent: f64,
    cashier_percent: f64,
) -> Product {
    db::product::create(
        pool,
        &ProductCreate {
            name: name.into(),
            price,
            category: ProductCategory::Service,
            description: String::new(),
            bonus_percentage_for_barber: barber_percent,
            bonus_percentage_for_cashier: cashier_percent,
        },
    )
    .await
    .unwrap()
}

/// Session of the employee as if signed in (role taken from the employee)
pub fn cashier_session(employee: &Employee) -> CurrentUser {
    CurrentUser {
        account_id: employee.id + 1,
        username: employee.name.to_lowercase(),
        kind: AccountKind::Employee,
        employee_id: Some(employee.id),
        employee_role: Some(employee.role),
    }
}
