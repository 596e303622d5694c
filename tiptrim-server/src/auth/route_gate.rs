//! Page route gate
//!
//! Routing-level half of the Role Gate. Requests under `/owner` and
//! `/cashier` that fail the gate are redirected (307), never errored.
//! Everything else passes through untouched.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use shared::models::AccountKind;

use super::extractor::bearer_token;
use super::gate::{Capability, GateRejection, authorize};
use super::CurrentUser;
use crate::security_log;
use crate::state::AppState;

pub const LOGIN_PATH: &str = "/login";
pub const OWNER_LANDING: &str = "/owner/dashboard";
pub const CASHIER_LANDING: &str = "/cashier";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Area {
    Owner,
    Cashier,
}

fn area_of(path: &str) -> Option<Area> {
    let under = |prefix: &str| {
        path.strip_prefix(prefix)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
    };
    if under("/owner") {
        Some(Area::Owner)
    } else if under("/cashier") {
        Some(Area::Cashier)
    } else {
        None
    }
}

/// Where a request for `target` (path plus optional query) must be sent
/// instead, or `None` to let it through
pub fn redirect_for(target: &str, user: Option<&CurrentUser>) -> Option<String> {
    let path = target.split_once('?').map_or(target, |(path, _)| path);
    let area = area_of(path)?;
    let capability = match area {
        Area::Owner => Capability::Owner,
        Area::Cashier => Capability::Cashier,
    };
    match authorize(user, capability) {
        Ok(()) => None,
        Err(GateRejection::Unauthenticated) => Some(format!(
            "{LOGIN_PATH}?callbackUrl={}",
            urlencoding::encode(target)
        )),
        Err(GateRejection::Forbidden) => Some(match area {
            Area::Owner => format!("{CASHIER_LANDING}?toast=unauthorized-owner"),
            Area::Cashier if user.is_some_and(|u| u.kind == AccountKind::Owner) => {
                format!("{OWNER_LANDING}?toast=unauthorized-cashier")
            }
            Area::Cashier => format!("{LOGIN_PATH}?toast=unauthorized-role"),
        }),
    }
}

/// Middleware applying [`redirect_for`] to every request
pub async fn route_gate(State(state): State<AppState>, req: Request, next: Next) -> Response {
    if area_of(req.uri().path()).is_none() {
        return next.run(req).await;
    }
    let target = req
        .uri()
        .path_and_query()
        .map_or(req.uri().path(), |pq| pq.as_str())
        .to_string();

    // An invalid or expired token counts as no token here
    let user = bearer_token(req.headers())
        .and_then(|token| state.get_jwt_service().validate_token(token).ok())
        .and_then(|claims| CurrentUser::try_from(claims).ok());

    match redirect_for(&target, user.as_ref()) {
        None => next.run(req).await,
        Some(location) => {
            security_log!(
                INFO,
                "page_redirect",
                path = %target,
                location = %location,
                account_id = ?user.as_ref().map(|u| u.account_id)
            );
            Redirect::temporary(&location).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::EmployeeRole;

    fn user(kind: AccountKind, role: Option<EmployeeRole>) -> CurrentUser {
        CurrentUser {
            account_id: 1,
            username: "u".into(),
            kind,
            employee_id: role.map(|_| 10),
            employee_role: role,
        }
    }

    #[test]
    fn test_public_paths_pass() {
        assert_eq!(redirect_for("/login", None), None);
        assert_eq!(redirect_for("/health", None), None);
        assert_eq!(redirect_for("/ownership", None), None);
        assert_eq!(redirect_for("/cashiers", None), None);
    }

    #[test]
    fn test_anonymous_goes_to_login_with_callback() {
        assert_eq!(
            redirect_for("/owner/payrolls", None).as_deref(),
            Some("/login?callbackUrl=%2Fowner%2Fpayrolls")
        );
        assert_eq!(
            redirect_for("/cashier", None).as_deref(),
            Some("/login?callbackUrl=%2Fcashier")
        );
    }

    #[test]
    fn test_callback_keeps_query_encoded() {
        assert_eq!(
            redirect_for("/owner/payrolls?status=PAID&employee=3", None).as_deref(),
            Some("/login?callbackUrl=%2Fowner%2Fpayrolls%3Fstatus%3DPAID%26employee%3D3")
        );
        // The query never decides the area
        assert_eq!(redirect_for("/login?next=/owner", None), None);

        let owner = user(AccountKind::Owner, None);
        assert_eq!(redirect_for("/owner/dashboard?tab=1", Some(&owner)), None);
    }

    #[test]
    fn test_owner_area() {
        let owner = user(AccountKind::Owner, None);
        let cashier = user(AccountKind::Employee, Some(EmployeeRole::Cashier));
        assert_eq!(redirect_for("/owner/dashboard", Some(&owner)), None);
        assert_eq!(
            redirect_for("/owner/dashboard", Some(&cashier)).as_deref(),
            Some("/cashier?toast=unauthorized-owner")
        );
    }

    #[test]
    fn test_cashier_area() {
        let owner = user(AccountKind::Owner, None);
        let cashier = user(AccountKind::Employee, Some(EmployeeRole::Cashier));
        let barber = user(AccountKind::Employee, Some(EmployeeRole::Barber));
        assert_eq!(redirect_for("/cashier/orders", Some(&cashier)), None);
        assert_eq!(
            redirect_for("/cashier/orders", Some(&owner)).as_deref(),
            Some("/owner/dashboard?toast=unauthorized-cashier")
        );
        assert_eq!(
            redirect_for("/cashier/orders", Some(&barber)).as_deref(),
            Some("/login?toast=unauthorized-role")
        );
    }
}
