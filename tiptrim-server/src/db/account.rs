//! Account Repository

use super::RepoResult;
use shared::models::{Account, AccountKind};
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteExecutor;

/// Account row including the credential hash (sign-in only)
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AccountCredential {
    pub id: i64,
    pub username: String,
    pub hash_pass: String,
    pub kind: AccountKind,
    pub employee_id: Option<i64>,
}

pub async fn find_credential(
    pool: &SqlitePool,
    username: &str,
) -> RepoResult<Option<AccountCredential>> {
    let row = sqlx::query_as::<_, AccountCredential>(
        "SELECT id, username, hash_pass, kind, employee_id FROM account WHERE username = ?",
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn username_exists(ex: impl SqliteExecutor<'_>, username: &str) -> RepoResult<bool> {
    let found: Option<(i64,)> = sqlx::query_as("SELECT id FROM account WHERE username = ?")
        .bind(username)
        .fetch_optional(ex)
        .await?;
    Ok(found.is_some())
}

pub async fn find_by_employee(
    ex: impl SqliteExecutor<'_>,
    employee_id: i64,
) -> RepoResult<Option<Account>> {
    let account = sqlx::query_as::<_, Account>(
        "SELECT id, username, kind, employee_id, created_at FROM account WHERE employee_id = ?",
    )
    .bind(employee_id)
    .fetch_optional(ex)
    .await?;
    Ok(account)
}

pub async fn insert(
    ex: impl SqliteExecutor<'_>,
    username: &str,
    hash_pass: &str,
    kind: AccountKind,
    employee_id: Option<i64>,
) -> RepoResult<Account> {
    let account = Account {
        id: shared::util::snowflake_id(),
        username: username.to_string(),
        kind,
        employee_id,
        created_at: shared::util::now_millis(),
    };
    sqlx::query(
        "INSERT INTO account (id, username, hash_pass, kind, employee_id, created_at) VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(account.id)
    .bind(&account.username)
    .bind(hash_pass)
    .bind(account.kind)
    .bind(account.employee_id)
    .bind(account.created_at)
    .execute(ex)
    .await?;
    Ok(account)
}
