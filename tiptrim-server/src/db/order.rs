//! Order Repository

use super::RepoResult;
use shared::models::{Order, OrderItem};
use sqlx::sqlite::SqliteExecutor;
use sqlx::{QueryBuilder, Sqlite, SqliteConnection};

const ITEM_COLUMNS: &str = "id, order_id, product_id, product_name, product_price, quantity, barber_bonus, cashier_bonus, payroll_status, payroll_item_id, created_at";

pub async fn insert_order(ex: impl SqliteExecutor<'_>, order: &Order) -> RepoResult<()> {
    sqlx::query(
        "INSERT INTO orders (id, total_price, cashier_id, barber_id, created_at) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(order.id)
    .bind(order.total_price)
    .bind(order.cashier_id)
    .bind(order.barber_id)
    .bind(order.created_at)
    .execute(ex)
    .await?;
    Ok(())
}

pub async fn insert_item(ex: impl SqliteExecutor<'_>, item: &OrderItem) -> RepoResult<()> {
    sqlx::query(&format!(
        "INSERT INTO order_item ({ITEM_COLUMNS}) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"
    ))
    .bind(item.id)
    .bind(item.order_id)
    .bind(item.product_id)
    .bind(&item.product_name)
    .bind(item.product_price)
    .bind(item.quantity)
    .bind(item.barber_bonus)
    .bind(item.cashier_bonus)
    .bind(item.payroll_status)
    .bind(item.payroll_item_id)
    .bind(item.created_at)
    .execute(ex)
    .await?;
    Ok(())
}

pub async fn find_by_id(ex: impl SqliteExecutor<'_>, id: i64) -> RepoResult<Option<Order>> {
    let order = sqlx::query_as::<_, Order>(
        "SELECT id, total_price, cashier_id, barber_id, created_at FROM orders WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(ex)
    .await?;
    Ok(order)
}

/// Newest-first page of at most `take` orders.
///
/// With a cursor the page starts at the cursor order itself; an unknown
/// cursor yields an empty page.
pub async fn find_page(
    ex: impl SqliteExecutor<'_>,
    take: i64,
    cursor: Option<i64>,
) -> RepoResult<Vec<Order>> {
    let orders = match cursor {
        None => {
            sqlx::query_as::<_, Order>(
                "SELECT id, total_price, cashier_id, barber_id, created_at FROM orders ORDER BY created_at DESC, id DESC LIMIT ?",
            )
            .bind(take)
            .fetch_all(ex)
            .await?
        }
        Some(cursor) => {
            sqlx::query_as::<_, Order>(
                "SELECT o.id, o.total_price, o.cashier_id, o.barber_id, o.created_at \
                 FROM orders o JOIN orders c ON c.id = ? \
                 WHERE o.created_at < c.created_at OR (o.created_at = c.created_at AND o.id <= c.id) \
                 ORDER BY o.created_at DESC, o.id DESC LIMIT ?",
            )
            .bind(cursor)
            .bind(take)
            .fetch_all(ex)
            .await?
        }
    };
    Ok(orders)
}

pub async fn count(ex: impl SqliteExecutor<'_>) -> RepoResult<i64> {
    let (n,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM orders")
        .fetch_one(ex)
        .await?;
    Ok(n)
}

pub async fn items_for_orders(
    conn: &mut SqliteConnection,
    order_ids: &[i64],
) -> RepoResult<Vec<OrderItem>> {
    if order_ids.is_empty() {
        return Ok(Vec::new());
    }
    let mut qb: QueryBuilder<Sqlite> =
        QueryBuilder::new(format!("SELECT {ITEM_COLUMNS} FROM order_item WHERE order_id IN ("));
    let mut sep = qb.separated(", ");
    for id in order_ids {
        sep.push_bind(*id);
    }
    sep.push_unseparated(") ORDER BY created_at ASC, id ASC");
    let items = qb.build_query_as::<OrderItem>().fetch_all(conn).await?;
    Ok(items)
}

pub async fn find_item_by_payroll_item(
    ex: impl SqliteExecutor<'_>,
    payroll_item_id: i64,
) -> RepoResult<Option<OrderItem>> {
    let item = sqlx::query_as::<_, OrderItem>(&format!(
        "SELECT {ITEM_COLUMNS} FROM order_item WHERE payroll_item_id = ?"
    ))
    .bind(payroll_item_id)
    .fetch_optional(ex)
    .await?;
    Ok(item)
}
