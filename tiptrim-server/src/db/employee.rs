//! Employee Repository
//!
//! Employees are never physically removed; `deleted_at` marks them
//! inactive while keeping historical orders and payrolls resolvable.

use super::{RepoError, RepoResult};
use shared::models::{Employee, EmployeeRole};
use sqlx::sqlite::SqliteExecutor;
use sqlx::{QueryBuilder, Sqlite, SqliteConnection, SqlitePool};

const COLUMNS: &str = "id, name, role, deleted_at, created_at, updated_at";

pub async fn find_all_active(pool: &SqlitePool) -> RepoResult<Vec<Employee>> {
    let employees = sqlx::query_as::<_, Employee>(&format!(
        "SELECT {COLUMNS} FROM employee WHERE deleted_at IS NULL ORDER BY name ASC, id ASC"
    ))
    .fetch_all(pool)
    .await?;
    Ok(employees)
}

pub async fn find_active_by_role(
    pool: &SqlitePool,
    role: EmployeeRole,
) -> RepoResult<Vec<Employee>> {
    let employees = sqlx::query_as::<_, Employee>(&format!(
        "SELECT {COLUMNS} FROM employee WHERE deleted_at IS NULL AND role = ? ORDER BY name ASC, id ASC"
    ))
    .bind(role)
    .fetch_all(pool)
    .await?;
    Ok(employees)
}

/// Find an employee by id, soft-deleted ones included
pub async fn find_by_id(ex: impl SqliteExecutor<'_>, id: i64) -> RepoResult<Option<Employee>> {
    let employee = sqlx::query_as::<_, Employee>(&format!(
        "SELECT {COLUMNS} FROM employee WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(ex)
    .await?;
    Ok(employee)
}

/// Load every employee whose id is in `ids`, soft-deleted ones included
pub async fn find_many(conn: &mut SqliteConnection, ids: &[i64]) -> RepoResult<Vec<Employee>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    let mut qb: QueryBuilder<Sqlite> =
        QueryBuilder::new(format!("SELECT {COLUMNS} FROM employee WHERE id IN ("));
    let mut sep = qb.separated(", ");
    for id in ids {
        sep.push_bind(*id);
    }
    sep.push_unseparated(")");
    let employees = qb.build_query_as::<Employee>().fetch_all(conn).await?;
    Ok(employees)
}

pub async fn insert(
    ex: impl SqliteExecutor<'_>,
    name: &str,
    role: EmployeeRole,
) -> RepoResult<Employee> {
    let now = shared::util::now_millis();
    let employee = Employee {
        id: shared::util::snowflake_id(),
        name: name.to_string(),
        role,
        deleted_at: None,
        created_at: now,
        updated_at: now,
    };
    sqlx::query(
        "INSERT INTO employee (id, name, role, deleted_at, created_at, updated_at) VALUES (?, ?, ?, NULL, ?, ?)",
    )
    .bind(employee.id)
    .bind(&employee.name)
    .bind(employee.role)
    .bind(employee.created_at)
    .bind(employee.updated_at)
    .execute(ex)
    .await?;
    Ok(employee)
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    name: &str,
    role: EmployeeRole,
) -> RepoResult<Employee> {
    let now = shared::util::now_millis();
    let rows = sqlx::query("UPDATE employee SET name = ?, role = ?, updated_at = ? WHERE id = ?")
        .bind(name)
        .bind(role)
        .bind(now)
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Employee with ID {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Employee with ID {id} not found")))
}

/// Soft delete; a second delete keeps the first timestamp
pub async fn soft_delete(pool: &SqlitePool, id: i64) -> RepoResult<Employee> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE employee SET deleted_at = COALESCE(deleted_at, ?1), updated_at = ?1 WHERE id = ?2",
    )
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Employee with ID {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Employee with ID {id} not found")))
}
