//! JWT Extractors
//!
//! Procedure-level half of the Role Gate. `CurrentUser` requires any valid
//! token; `OwnerUser` and `CashierUser` additionally require the role.

use axum::{extract::FromRequestParts, http::request::Parts};
use http::HeaderMap;
use shared::error::{AppError, ErrorCode};

use super::gate::{Capability, GateRejection, authorize};
use super::{CurrentUser, JwtError, JwtService};
use crate::security_log;
use crate::state::AppState;

/// Bearer token from the `Authorization` header, if present and well-formed
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(JwtService::extract_from_header)
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<CurrentUser>() {
            return Ok(user.clone());
        }

        let auth_header = parts
            .headers
            .get(http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok());

        let token = match auth_header {
            Some(header) => JwtService::extract_from_header(header)
                .ok_or_else(|| AppError::invalid_token("Invalid authorization header"))?,
            None => {
                security_log!(WARN, "auth_missing", uri = %parts.uri);
                return Err(AppError::not_authenticated());
            }
        };

        match state.get_jwt_service().validate_token(token) {
            Ok(claims) => {
                let user = CurrentUser::try_from(claims)
                    .map_err(|e| AppError::invalid_token(format!("Malformed JWT claims: {e}")))?;

                parts.extensions.insert(user.clone());
                Ok(user)
            }
            Err(e) => {
                security_log!(WARN, "auth_failed", error = %e, uri = %parts.uri);

                match e {
                    JwtError::ExpiredToken => Err(AppError::token_expired()),
                    _ => Err(AppError::invalid_token("Invalid token")),
                }
            }
        }
    }
}

/// Authenticate, then require `capability`
async fn require(
    parts: &mut Parts,
    state: &AppState,
    capability: Capability,
    denied: ErrorCode,
) -> Result<CurrentUser, AppError> {
    let user = CurrentUser::from_request_parts(parts, state).await?;
    match authorize(Some(&user), capability) {
        Ok(()) => Ok(user),
        Err(GateRejection::Unauthenticated) => Err(AppError::not_authenticated()),
        Err(GateRejection::Forbidden) => {
            security_log!(
                WARN,
                "permission_denied",
                account_id = user.account_id,
                username = %user.username,
                required = ?capability,
                uri = %parts.uri
            );
            Err(AppError::new(denied))
        }
    }
}

/// Caller holding an OWNER account
#[derive(Debug, Clone)]
pub struct OwnerUser(pub CurrentUser);

impl FromRequestParts<AppState> for OwnerUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        require(parts, state, Capability::Owner, ErrorCode::OwnerRequired)
            .await
            .map(OwnerUser)
    }
}

/// Caller holding a CASHIER employee account
#[derive(Debug, Clone)]
pub struct CashierUser(pub CurrentUser);

impl FromRequestParts<AppState> for CashierUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        require(parts, state, Capability::Cashier, ErrorCode::CashierRequired)
            .await
            .map(CashierUser)
    }
}
