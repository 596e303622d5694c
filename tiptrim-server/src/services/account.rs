//! Account service: sign-in and provisioning of login accounts

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{
    Account, AccountKind, EmployeeCreate, EmployeeDetail, LoginRequest, LoginResponse,
};
use sqlx::SqlitePool;

use crate::auth::{CurrentUser, JwtService, hash_password, verify_password};
use crate::db::{self, RepoError};
use crate::security_log;
use crate::utils::validation::validate_employee_create;

fn hash(password: &str) -> AppResult<String> {
    hash_password(password).map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))
}

fn username_taken(username: &str) -> AppError {
    AppError::new(ErrorCode::EmployeeUsernameExists).with_detail("username", username)
}

/// Verify credentials and issue an access token.
///
/// An unknown user and a wrong password fail the same way.
pub async fn login(
    pool: &SqlitePool,
    jwt: &JwtService,
    req: &LoginRequest,
) -> AppResult<LoginResponse> {
    let credential = db::account::find_credential(pool, &req.username).await?;

    let Some(credential) = credential.filter(|c| verify_password(&req.password, &c.hash_pass))
    else {
        security_log!(WARN, "login_failed", username = %req.username);
        return Err(AppError::invalid_credentials());
    };

    let employee_role = match credential.employee_id {
        Some(employee_id) => db::employee::find_by_id(pool, employee_id)
            .await?
            .map(|e| e.role),
        None => None,
    };

    let user = CurrentUser {
        account_id: credential.id,
        username: credential.username,
        kind: credential.kind,
        employee_id: credential.employee_id,
        employee_role,
    };
    let issued = jwt
        .generate_token(&user)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {e}")))?;

    security_log!(
        INFO,
        "login_success",
        account_id = user.account_id,
        username = %user.username,
        kind = user.kind.as_str()
    );

    Ok(LoginResponse {
        token: issued.token,
        expires_at: issued.expires_at,
        user: user.into(),
    })
}

/// Create an employee together with its EMPLOYEE login account
pub async fn create_employee(
    pool: &SqlitePool,
    input: &EmployeeCreate,
) -> AppResult<EmployeeDetail> {
    validate_employee_create(input)?;
    if db::account::username_exists(pool, &input.username).await? {
        return Err(username_taken(&input.username));
    }
    let hash_pass = hash(&input.password)?;

    let mut tx = pool.begin().await.map_err(RepoError::from)?;
    let employee = db::employee::insert(&mut *tx, input.name.trim(), input.role).await?;
    let account = db::account::insert(
        &mut *tx,
        &input.username,
        &hash_pass,
        AccountKind::Employee,
        Some(employee.id),
    )
    .await
    .map_err(|e| match e {
        // Lost a race with another create for the same name
        RepoError::Duplicate(_) => username_taken(&input.username),
        other => other.into(),
    })?;
    tx.commit().await.map_err(RepoError::from)?;

    tracing::info!(
        employee_id = employee.id,
        role = employee.role.as_str(),
        username = %account.username,
        "Employee created"
    );

    Ok(EmployeeDetail {
        employee,
        account: Some(account),
    })
}

/// Create an OWNER account
pub async fn create_owner(pool: &SqlitePool, username: &str, password: &str) -> AppResult<Account> {
    if username.trim().is_empty() || password.is_empty() {
        return Err(AppError::validation("username and password are required"));
    }
    if db::account::username_exists(pool, username).await? {
        return Err(username_taken(username));
    }
    let hash_pass = hash(password)?;
    let account = db::account::insert(pool, username, &hash_pass, AccountKind::Owner, None)
        .await
        .map_err(|e| match e {
            RepoError::Duplicate(_) => username_taken(username),
            other => other.into(),
        })?;
    tracing::info!(account_id = account.id, username = %account.username, "Owner created");
    Ok(account)
}
