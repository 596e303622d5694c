//! Payroll Engine
//!
//! A payroll run bundles one employee's base salary with the bonuses of
//! their PENDING order lines over a closed period. Marking a run PAID
//! settles every order line linked through its items.
//!
//! Line selection checks the settlement status only. A DRAFT run links
//! its lines but leaves them PENDING, so a later run over the same period
//! picks them up again and moves the link to its own items.

use std::collections::{BTreeSet, HashMap};
use std::iter;

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{
    Employee, EmployeeRole, OrderItem, Payroll, PayrollCreate, PayrollDetail, PayrollFilter,
    PayrollItem, PayrollItemDetail, PayrollItemType, PayrollStatus, PayrollStatusUpdate,
    PayrollSummary, SettledOrderItem, SettlementStatus,
};
use sqlx::{SqliteConnection, SqlitePool};

use crate::db::{self, RepoError};
use crate::orders::money;
use crate::utils::validation::validate_payroll_create;

fn payroll_not_found(id: i64) -> AppError {
    AppError::with_message(ErrorCode::PayrollNotFound, format!("Payroll with ID {id} not found"))
}

fn employee_not_found(id: i64) -> AppError {
    AppError::with_message(ErrorCode::EmployeeNotFound, format!("Employee with ID {id} not found"))
}

/// The bonus an order line earns for an employee of `role`
fn role_bonus(item: &OrderItem, role: EmployeeRole) -> f64 {
    match role {
        EmployeeRole::Barber => item.barber_bonus,
        EmployeeRole::Cashier => item.cashier_bonus,
    }
}

/// Create a payroll run.
///
/// Selection, the payroll row, its SALARY and BONUS items and the order
/// line links are written in one transaction.
pub async fn create_payroll(pool: &SqlitePool, input: &PayrollCreate) -> AppResult<PayrollSummary> {
    validate_payroll_create(input)?;

    let mut tx = pool.begin().await.map_err(RepoError::from)?;

    let employee = db::employee::find_by_id(&mut *tx, input.employee_id)
        .await?
        .ok_or_else(|| employee_not_found(input.employee_id))?;

    let lines = if input.include_order_items {
        db::payroll::select_pending_items(
            &mut *tx,
            employee.id,
            employee.role,
            input.period_start,
            input.period_end,
        )
        .await?
    } else {
        Vec::new()
    };

    let salary = money::to_f64(money::to_decimal(input.salary));
    let bonuses: Vec<f64> = lines.iter().map(|l| role_bonus(l, employee.role)).collect();
    let amount = money::sum(iter::once(salary).chain(bonuses.iter().copied()));

    let now = shared::util::now_millis();
    let payroll = Payroll {
        id: shared::util::snowflake_id(),
        employee_id: employee.id,
        period_start: input.period_start,
        period_end: input.period_end,
        amount,
        status: input.status,
        deleted_at: None,
        created_at: now,
        updated_at: now,
    };
    db::payroll::insert_payroll(&mut *tx, &payroll).await?;

    let mut items = Vec::with_capacity(lines.len() + 1);
    let salary_item = PayrollItem {
        id: shared::util::snowflake_id(),
        payroll_id: payroll.id,
        item_type: PayrollItemType::Salary,
        amount: salary,
        created_at: now,
    };
    db::payroll::insert_item(&mut *tx, &salary_item).await?;
    items.push(salary_item);

    let line_status = match input.status {
        PayrollStatus::Paid => SettlementStatus::Paid,
        PayrollStatus::Draft => SettlementStatus::Pending,
    };
    for (line, bonus) in lines.iter().zip(bonuses) {
        let bonus_item = PayrollItem {
            id: shared::util::snowflake_id(),
            payroll_id: payroll.id,
            item_type: PayrollItemType::Bonus,
            amount: bonus,
            created_at: now,
        };
        db::payroll::insert_item(&mut *tx, &bonus_item).await?;
        db::payroll::link_order_item(&mut *tx, line.id, bonus_item.id, line_status).await?;
        items.push(bonus_item);
    }

    tx.commit().await.map_err(RepoError::from)?;

    tracing::info!(
        payroll_id = payroll.id,
        employee_id = employee.id,
        status = ?payroll.status,
        bonus_lines = lines.len(),
        amount = payroll.amount,
        "Payroll created"
    );

    Ok(PayrollSummary {
        payroll,
        employee,
        items,
    })
}

/// Change a payroll's status. Moving to PAID settles every linked order
/// line in the same transaction; PAID never goes back to DRAFT.
pub async fn update_status(pool: &SqlitePool, input: &PayrollStatusUpdate) -> AppResult<Payroll> {
    let mut tx = pool.begin().await.map_err(RepoError::from)?;

    let current = db::payroll::find_by_id(&mut *tx, input.id)
        .await?
        .ok_or_else(|| payroll_not_found(input.id))?;
    if current.status == PayrollStatus::Paid && input.status == PayrollStatus::Draft {
        return Err(AppError::with_message(
            ErrorCode::PayrollAlreadyPaid,
            format!("Payroll with ID {} is already paid", input.id),
        ));
    }

    db::payroll::set_status(&mut *tx, input.id, input.status).await?;
    let settled = if input.status == PayrollStatus::Paid {
        db::payroll::settle_linked_items(&mut *tx, input.id).await?
    } else {
        0
    };
    let updated = db::payroll::find_by_id(&mut *tx, input.id)
        .await?
        .ok_or_else(|| payroll_not_found(input.id))?;

    tx.commit().await.map_err(RepoError::from)?;

    tracing::info!(
        payroll_id = input.id,
        from = ?current.status,
        to = ?updated.status,
        settled_lines = settled,
        "Payroll status updated"
    );
    Ok(updated)
}

/// Non-deleted payrolls matching the filter, with employee and items
pub async fn list_payrolls(
    pool: &SqlitePool,
    filter: &PayrollFilter,
) -> AppResult<Vec<PayrollSummary>> {
    let payrolls = db::payroll::find_filtered(pool, filter).await?;
    if payrolls.is_empty() {
        return Ok(Vec::new());
    }

    let mut conn = pool.acquire().await.map_err(RepoError::from)?;
    let employees = employees_by_id(&mut conn, payrolls.iter().map(|p| p.employee_id)).await?;

    let ids: Vec<i64> = payrolls.iter().map(|p| p.id).collect();
    let mut items_by_payroll: HashMap<i64, Vec<PayrollItem>> = HashMap::new();
    for item in db::payroll::items_for_payrolls(&mut conn, &ids).await? {
        items_by_payroll.entry(item.payroll_id).or_default().push(item);
    }

    payrolls
        .into_iter()
        .map(|payroll| -> AppResult<PayrollSummary> {
            let employee = employees
                .get(&payroll.employee_id)
                .cloned()
                .ok_or_else(|| employee_not_found(payroll.employee_id))?;
            Ok(PayrollSummary {
                items: items_by_payroll.remove(&payroll.id).unwrap_or_default(),
                employee,
                payroll,
            })
        })
        .collect()
}

/// One payroll (soft-deleted included) with each item's settled order line
pub async fn get_payroll(pool: &SqlitePool, id: i64) -> AppResult<PayrollDetail> {
    let mut conn = pool.acquire().await.map_err(RepoError::from)?;
    let payroll = db::payroll::find_by_id(&mut *conn, id)
        .await?
        .ok_or_else(|| payroll_not_found(id))?;
    let employee = db::employee::find_by_id(&mut *conn, payroll.employee_id)
        .await?
        .ok_or_else(|| employee_not_found(payroll.employee_id))?;

    let mut items = Vec::new();
    for item in db::payroll::items_for_payroll(&mut *conn, id).await? {
        let order_item = match db::order::find_item_by_payroll_item(&mut *conn, item.id).await? {
            Some(line) => db::order::find_by_id(&mut *conn, line.order_id)
                .await?
                .map(|order| SettledOrderItem { item: line, order }),
            None => None,
        };
        items.push(PayrollItemDetail { item, order_item });
    }

    Ok(PayrollDetail {
        payroll,
        employee,
        items,
    })
}

/// Soft delete. Settlement flags on linked order lines stay as they are.
pub async fn delete_payroll(pool: &SqlitePool, id: i64) -> AppResult<Payroll> {
    let payroll = db::payroll::soft_delete(pool, id).await.map_err(|e| match e {
        RepoError::NotFound(_) => payroll_not_found(id),
        other => other.into(),
    })?;
    tracing::info!(payroll_id = id, "Payroll deleted");
    Ok(payroll)
}

async fn employees_by_id(
    conn: &mut SqliteConnection,
    ids: impl Iterator<Item = i64>,
) -> AppResult<HashMap<i64, Employee>> {
    let ids: Vec<i64> = ids.collect::<BTreeSet<_>>().into_iter().collect();
    Ok(db::employee::find_many(conn, &ids)
        .await?
        .into_iter()
        .map(|e| (e.id, e))
        .collect())
}
