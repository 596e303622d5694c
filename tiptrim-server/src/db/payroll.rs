//! Payroll Repository
//!
//! Payroll runs, their items, and the settlement link on order lines.

use super::{RepoError, RepoResult};
use shared::models::{
    EmployeeRole, OrderItem, Payroll, PayrollFilter, PayrollItem, PayrollStatus, SettlementStatus,
};
use sqlx::sqlite::SqliteExecutor;
use sqlx::{QueryBuilder, Sqlite, SqliteConnection, SqlitePool};

const COLUMNS: &str =
    "id, employee_id, period_start, period_end, amount, status, deleted_at, created_at, updated_at";

const ITEM_COLUMNS: &str = "id, payroll_id, item_type, amount, created_at";

const PENDING_FOR_BARBER: &str = "SELECT oi.id, oi.order_id, oi.product_id, oi.product_name, oi.product_price, oi.quantity, oi.barber_bonus, oi.cashier_bonus, oi.payroll_status, oi.payroll_item_id, oi.created_at \
     FROM order_item oi JOIN orders o ON o.id = oi.order_id \
     WHERE oi.payroll_status = 'PENDING' AND o.barber_id = ? AND o.created_at >= ? AND o.created_at <= ? \
     ORDER BY o.created_at ASC, oi.id ASC";

const PENDING_FOR_CASHIER: &str = "SELECT oi.id, oi.order_id, oi.product_id, oi.product_name, oi.product_price, oi.quantity, oi.barber_bonus, oi.cashier_bonus, oi.payroll_status, oi.payroll_item_id, oi.created_at \
     FROM order_item oi JOIN orders o ON o.id = oi.order_id \
     WHERE oi.payroll_status = 'PENDING' AND o.cashier_id = ? AND o.created_at >= ? AND o.created_at <= ? \
     ORDER BY o.created_at ASC, oi.id ASC";

/// PENDING order lines of `employee_id` whose order falls in
/// `[period_start, period_end]`, matched on the column for `role`.
///
/// Only the settlement status is checked; a line already linked to a
/// DRAFT payroll is selected again.
pub async fn select_pending_items(
    ex: impl SqliteExecutor<'_>,
    employee_id: i64,
    role: EmployeeRole,
    period_start: i64,
    period_end: i64,
) -> RepoResult<Vec<OrderItem>> {
    let sql = match role {
        EmployeeRole::Barber => PENDING_FOR_BARBER,
        EmployeeRole::Cashier => PENDING_FOR_CASHIER,
    };
    let items = sqlx::query_as::<_, OrderItem>(sql)
        .bind(employee_id)
        .bind(period_start)
        .bind(period_end)
        .fetch_all(ex)
        .await?;
    Ok(items)
}

pub async fn insert_payroll(ex: impl SqliteExecutor<'_>, payroll: &Payroll) -> RepoResult<()> {
    sqlx::query(&format!(
        "INSERT INTO payroll ({COLUMNS}) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)"
    ))
    .bind(payroll.id)
    .bind(payroll.employee_id)
    .bind(payroll.period_start)
    .bind(payroll.period_end)
    .bind(payroll.amount)
    .bind(payroll.status)
    .bind(payroll.deleted_at)
    .bind(payroll.created_at)
    .bind(payroll.updated_at)
    .execute(ex)
    .await?;
    Ok(())
}

pub async fn insert_item(ex: impl SqliteExecutor<'_>, item: &PayrollItem) -> RepoResult<()> {
    sqlx::query(&format!(
        "INSERT INTO payroll_item ({ITEM_COLUMNS}) VALUES (?, ?, ?, ?, ?)"
    ))
    .bind(item.id)
    .bind(item.payroll_id)
    .bind(item.item_type)
    .bind(item.amount)
    .bind(item.created_at)
    .execute(ex)
    .await?;
    Ok(())
}

/// Point an order line at the payroll item settling it
pub async fn link_order_item(
    ex: impl SqliteExecutor<'_>,
    order_item_id: i64,
    payroll_item_id: i64,
    status: SettlementStatus,
) -> RepoResult<()> {
    sqlx::query("UPDATE order_item SET payroll_item_id = ?, payroll_status = ? WHERE id = ?")
        .bind(payroll_item_id)
        .bind(status)
        .bind(order_item_id)
        .execute(ex)
        .await?;
    Ok(())
}

/// Find a payroll by id, soft-deleted ones included
pub async fn find_by_id(ex: impl SqliteExecutor<'_>, id: i64) -> RepoResult<Option<Payroll>> {
    let payroll = sqlx::query_as::<_, Payroll>(&format!(
        "SELECT {COLUMNS} FROM payroll WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(ex)
    .await?;
    Ok(payroll)
}

/// Non-deleted payrolls matching every given filter, latest period end first
pub async fn find_filtered(pool: &SqlitePool, filter: &PayrollFilter) -> RepoResult<Vec<Payroll>> {
    let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new(format!(
        "SELECT {COLUMNS} FROM payroll WHERE deleted_at IS NULL"
    ));
    if let Some(start) = filter.start_date {
        qb.push(" AND period_start >= ").push_bind(start);
    }
    if let Some(end) = filter.end_date {
        qb.push(" AND period_end <= ").push_bind(end);
    }
    if let Some(status) = filter.status {
        qb.push(" AND status = ").push_bind(status);
    }
    if let Some(employee_id) = filter.employee_id {
        qb.push(" AND employee_id = ").push_bind(employee_id);
    }
    qb.push(" ORDER BY period_end DESC, id DESC");

    let payrolls = qb.build_query_as::<Payroll>().fetch_all(pool).await?;
    Ok(payrolls)
}

pub async fn items_for_payroll(
    ex: impl SqliteExecutor<'_>,
    payroll_id: i64,
) -> RepoResult<Vec<PayrollItem>> {
    let items = sqlx::query_as::<_, PayrollItem>(&format!(
        "SELECT {ITEM_COLUMNS} FROM payroll_item WHERE payroll_id = ? ORDER BY created_at ASC, id ASC"
    ))
    .bind(payroll_id)
    .fetch_all(ex)
    .await?;
    Ok(items)
}

pub async fn items_for_payrolls(
    conn: &mut SqliteConnection,
    payroll_ids: &[i64],
) -> RepoResult<Vec<PayrollItem>> {
    if payroll_ids.is_empty() {
        return Ok(Vec::new());
    }
    let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new(format!(
        "SELECT {ITEM_COLUMNS} FROM payroll_item WHERE payroll_id IN ("
    ));
    let mut sep = qb.separated(", ");
    for id in payroll_ids {
        sep.push_bind(*id);
    }
    sep.push_unseparated(") ORDER BY created_at ASC, id ASC");
    let items = qb.build_query_as::<PayrollItem>().fetch_all(conn).await?;
    Ok(items)
}

pub async fn set_status(
    ex: impl SqliteExecutor<'_>,
    id: i64,
    status: PayrollStatus,
) -> RepoResult<()> {
    let now = shared::util::now_millis();
    let rows = sqlx::query("UPDATE payroll SET status = ?, updated_at = ? WHERE id = ?")
        .bind(status)
        .bind(now)
        .bind(id)
        .execute(ex)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Payroll with ID {id} not found")));
    }
    Ok(())
}

/// Mark every order line linked through this payroll's items as PAID.
/// Returns the number of lines touched.
pub async fn settle_linked_items(ex: impl SqliteExecutor<'_>, payroll_id: i64) -> RepoResult<u64> {
    let rows = sqlx::query(
        "UPDATE order_item SET payroll_status = 'PAID' \
         WHERE payroll_item_id IN (SELECT id FROM payroll_item WHERE payroll_id = ?)",
    )
    .bind(payroll_id)
    .execute(ex)
    .await?;
    Ok(rows.rows_affected())
}

/// Soft delete; settlement flags on linked order lines are left as they are
pub async fn soft_delete(pool: &SqlitePool, id: i64) -> RepoResult<Payroll> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE payroll SET deleted_at = COALESCE(deleted_at, ?1), updated_at = ?1 WHERE id = ?2",
    )
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Payroll with ID {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Payroll with ID {id} not found")))
}
