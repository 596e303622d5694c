//! Order Engine
//!
//! Point-of-sale orders: price resolution, per-line bonus computation and
//! atomic persistence of an order with its lines.

pub mod money;

use std::collections::{BTreeSet, HashMap};

use rust_decimal::Decimal;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{
    Employee, EmployeeRole, Order, OrderCreate, OrderDetail, OrderItem, OrderListQuery, OrderPage,
    SettlementStatus,
};
use sqlx::{SqliteConnection, SqlitePool};

use crate::auth::CurrentUser;
use crate::db::{self, RepoError, RepoResult};
use crate::utils::validation::validate_order_create;

/// Page size when the caller gives none
pub const DEFAULT_PAGE_SIZE: i64 = 50;
/// Largest page a caller may ask for
pub const MAX_PAGE_SIZE: i64 = 100;

/// Create an order for `cashier`, who must carry an employee id.
///
/// Products are resolved and priced inside the same transaction that
/// writes the order, so either the order and all its lines exist or
/// nothing does.
pub async fn create_order(
    pool: &SqlitePool,
    cashier: &CurrentUser,
    input: &OrderCreate,
) -> AppResult<OrderDetail> {
    validate_order_create(input)?;
    let cashier_id = cashier
        .employee_id
        .ok_or_else(|| AppError::new(ErrorCode::CashierIdMissing))?;

    let mut tx = pool.begin().await.map_err(RepoError::from)?;

    let barber = db::employee::find_by_id(&mut *tx, input.barber_id)
        .await?
        .ok_or_else(|| {
            AppError::with_message(
                ErrorCode::BarberNotFound,
                format!("Barber with ID {} not found", input.barber_id),
            )
        })?;
    if barber.role != EmployeeRole::Barber {
        return Err(AppError::with_message(
            ErrorCode::NotABarber,
            format!("Employee with ID {} is not a barber", barber.id),
        ));
    }
    let cashier_employee = db::employee::find_by_id(&mut *tx, cashier_id)
        .await?
        .ok_or_else(|| {
            AppError::with_message(
                ErrorCode::EmployeeNotFound,
                format!("Employee with ID {cashier_id} not found"),
            )
        })?;

    let wanted: Vec<i64> = input
        .items
        .iter()
        .map(|line| line.product_id)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let products: HashMap<i64, _> = db::product::find_many(&mut *tx, &wanted)
        .await?
        .into_iter()
        .map(|p| (p.id, p))
        .collect();
    if let Some(missing) = wanted.iter().find(|id| !products.contains_key(*id)) {
        return Err(AppError::with_message(
            ErrorCode::ProductNotFound,
            format!("Product with ID {missing} not found"),
        )
        .with_detail("product_id", *missing));
    }

    let now = shared::util::now_millis();
    let order_id = shared::util::snowflake_id();
    let mut total = Decimal::ZERO;
    let mut items = Vec::with_capacity(input.items.len());
    for line in &input.items {
        let product = &products[&line.product_id];
        let amounts = money::price_line(
            product.price,
            line.quantity,
            product.bonus_percentage_for_barber,
            product.bonus_percentage_for_cashier,
        );
        total += amounts.subtotal;
        items.push(OrderItem {
            id: shared::util::snowflake_id(),
            order_id,
            product_id: Some(product.id),
            product_name: product.name.clone(),
            product_price: product.price,
            quantity: line.quantity,
            barber_bonus: amounts.barber_bonus,
            cashier_bonus: amounts.cashier_bonus,
            payroll_status: SettlementStatus::Pending,
            payroll_item_id: None,
            created_at: now,
        });
    }

    let order = Order {
        id: order_id,
        total_price: money::to_f64(total),
        cashier_id,
        barber_id: barber.id,
        created_at: now,
    };

    db::order::insert_order(&mut *tx, &order).await?;
    for item in &items {
        db::order::insert_item(&mut *tx, item).await?;
    }
    tx.commit().await.map_err(RepoError::from)?;

    tracing::info!(
        order_id = order.id,
        cashier_id,
        barber_id = barber.id,
        lines = items.len(),
        total = order.total_price,
        "Order created"
    );

    Ok(OrderDetail {
        order,
        cashier: cashier_employee,
        barber,
        items,
    })
}

/// Newest-first page of orders.
///
/// One row beyond `limit` is fetched; when present its id becomes
/// `next_cursor` and it is left out of the page.
pub async fn list_orders(pool: &SqlitePool, query: &OrderListQuery) -> AppResult<OrderPage> {
    let limit = query.limit.unwrap_or(DEFAULT_PAGE_SIZE);
    if !(1..=MAX_PAGE_SIZE).contains(&limit) {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("limit must be between 1 and {MAX_PAGE_SIZE}"),
        )
        .with_detail("limit", limit));
    }

    let mut conn = pool.acquire().await.map_err(RepoError::from)?;
    let mut rows = db::order::find_page(&mut *conn, limit + 1, query.cursor).await?;
    let next_cursor = if rows.len() as i64 > limit {
        rows.pop().map(|o| o.id)
    } else {
        None
    };

    let orders = assemble(&mut conn, rows).await?;
    Ok(OrderPage {
        orders,
        next_cursor,
    })
}

pub async fn get_order(pool: &SqlitePool, id: i64) -> AppResult<OrderDetail> {
    let mut conn = pool.acquire().await.map_err(RepoError::from)?;
    let order = db::order::find_by_id(&mut *conn, id).await?.ok_or_else(|| {
        AppError::with_message(ErrorCode::OrderNotFound, format!("Order with ID {id} not found"))
    })?;
    let mut details = assemble(&mut conn, vec![order]).await?;
    details
        .pop()
        .ok_or_else(|| AppError::internal("Order assembly returned nothing"))
}

/// Attach cashier, barber and lines to each order, keeping the input order
async fn assemble(conn: &mut SqliteConnection, orders: Vec<Order>) -> RepoResult<Vec<OrderDetail>> {
    if orders.is_empty() {
        return Ok(Vec::new());
    }
    let order_ids: Vec<i64> = orders.iter().map(|o| o.id).collect();
    let employee_ids: Vec<i64> = orders
        .iter()
        .flat_map(|o| [o.cashier_id, o.barber_id])
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let employees: HashMap<i64, Employee> = db::employee::find_many(&mut *conn, &employee_ids)
        .await?
        .into_iter()
        .map(|e| (e.id, e))
        .collect();
    let mut items_by_order: HashMap<i64, Vec<OrderItem>> = HashMap::new();
    for item in db::order::items_for_orders(&mut *conn, &order_ids).await? {
        items_by_order.entry(item.order_id).or_default().push(item);
    }

    let lookup = |id: i64| {
        employees
            .get(&id)
            .cloned()
            .ok_or_else(|| RepoError::NotFound(format!("Employee with ID {id} not found")))
    };

    orders
        .into_iter()
        .map(|order| -> RepoResult<OrderDetail> {
            Ok(OrderDetail {
                cashier: lookup(order.cashier_id)?,
                barber: lookup(order.barber_id)?,
                items: items_by_order.remove(&order.id).unwrap_or_default(),
                order,
            })
        })
        .collect()
}
