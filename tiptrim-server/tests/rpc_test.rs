//! End-to-end tests over the HTTP router: Role Gate, page redirects,
//! and a full sell-then-pay cycle.

mod common;

use common::{TestShop, assert_error};
use http::StatusCode;
use serde_json::json;

fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

// ========== Health and sign-in ==========

#[tokio::test]
async fn test_health_is_public() {
    let shop = TestShop::new().await;
    let res = shop.get("/health", None).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["status"], "ok");
    assert_eq!(res.body["database"], "ok");
}

#[tokio::test]
async fn test_login_failure_is_unauthenticated() {
    let shop = TestShop::new().await;
    let res = shop
        .post(
            "/api/auth/login",
            None,
            json!({ "username": "carla", "password": "nope" }),
        )
        .await;
    assert_error(&res, StatusCode::UNAUTHORIZED, "UNAUTHENTICATED", 1002);
    assert_eq!(res.body["message"], "User or password is incorrect");
}

#[tokio::test]
async fn test_me_reports_session() {
    let shop = TestShop::new().await;
    let res = shop.get("/api/auth/me", Some(&shop.cashier_token)).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["data"]["username"], "carla");
    assert_eq!(res.body["data"]["kind"], "EMPLOYEE");
    assert_eq!(res.body["data"]["employee_role"], "CASHIER");
    assert_eq!(res.body["data"]["employee_id"], shop.cashier_id);

    let res = shop.get("/api/auth/me", Some(&shop.owner_token)).await;
    assert_eq!(res.body["data"]["kind"], "OWNER");
    assert!(res.body["data"]["employee_id"].is_null());
}

// ========== Role Gate ==========

#[tokio::test]
async fn test_procedures_require_a_token() {
    let shop = TestShop::new().await;
    for procedure in [
        "employees.getAll",
        "products.getAll",
        "orders.getAll",
        "orders.create",
        "payrolls.getAll",
    ] {
        let res = shop.rpc(procedure, None, json!({})).await;
        assert_error(&res, StatusCode::UNAUTHORIZED, "UNAUTHENTICATED", 1001);
    }

    let res = shop.rpc("products.getAll", Some("garbage"), json!({})).await;
    assert_error(&res, StatusCode::UNAUTHORIZED, "UNAUTHENTICATED", 1004);
}

#[tokio::test]
async fn test_authenticated_reads_open_to_every_role() {
    let shop = TestShop::new().await;
    for token in [&shop.owner_token, &shop.cashier_token, &shop.barber_token] {
        let res = shop.rpc("employees.getBarbers", Some(token), json!({})).await;
        assert_eq!(res.status, StatusCode::OK);
        let barbers = res.body["data"].as_array().unwrap();
        assert_eq!(barbers.len(), 1);
        assert_eq!(barbers[0]["name"], "Bruno");
    }
}

#[tokio::test]
async fn test_owner_procedures_reject_employees() {
    let shop = TestShop::new().await;
    for token in [&shop.cashier_token, &shop.barber_token] {
        let res = shop
            .rpc(
                "products.create",
                Some(token),
                json!({
                    "name": "Shave",
                    "price": 10.0,
                    "category": "SERVICE",
                    "bonus_percentage_for_barber": 10.0,
                    "bonus_percentage_for_cashier": 0.0,
                }),
            )
            .await;
        assert_error(&res, StatusCode::FORBIDDEN, "FORBIDDEN", 2002);

        let res = shop.rpc("payrolls.getAll", Some(token), json!({})).await;
        assert_error(&res, StatusCode::FORBIDDEN, "FORBIDDEN", 2002);
    }
}

#[tokio::test]
async fn test_only_cashiers_create_orders() {
    let shop = TestShop::new().await;
    let product = shop.product("Haircut", 20.0, 50.0, 10.0).await;
    let input = json!({
        "barber_id": shop.barber_id,
        "items": [{ "product_id": product, "quantity": 1 }],
    });

    for token in [&shop.owner_token, &shop.barber_token] {
        let res = shop.rpc("orders.create", Some(token), input.clone()).await;
        assert_error(&res, StatusCode::FORBIDDEN, "FORBIDDEN", 2003);
    }

    let res = shop.rpc("orders.create", Some(&shop.cashier_token), input).await;
    assert_eq!(res.status, StatusCode::OK, "{}", res.body);
}

// ========== Page redirects ==========

#[tokio::test]
async fn test_page_redirects() {
    let shop = TestShop::new().await;

    let res = shop.get("/owner/dashboard", None).await;
    assert_eq!(res.status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        res.location.as_deref(),
        Some("/login?callbackUrl=%2Fowner%2Fdashboard")
    );

    let res = shop.get("/owner/payrolls?status=DRAFT", None).await;
    assert_eq!(
        res.location.as_deref(),
        Some("/login?callbackUrl=%2Fowner%2Fpayrolls%3Fstatus%3DDRAFT")
    );

    let res = shop.get("/owner/reports", Some(&shop.cashier_token)).await;
    assert_eq!(res.status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        res.location.as_deref(),
        Some("/cashier?toast=unauthorized-owner")
    );

    let res = shop.get("/cashier", Some(&shop.owner_token)).await;
    assert_eq!(res.status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        res.location.as_deref(),
        Some("/owner/dashboard?toast=unauthorized-cashier")
    );

    let res = shop.get("/cashier/pos", Some(&shop.barber_token)).await;
    assert_eq!(res.status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        res.location.as_deref(),
        Some("/login?toast=unauthorized-role")
    );
}

#[tokio::test]
async fn test_pages_render_for_the_right_role() {
    let shop = TestShop::new().await;

    let res = shop.get("/owner/dashboard", Some(&shop.owner_token)).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["page"], "/owner/dashboard");
    assert_eq!(res.body["user"]["kind"], "OWNER");

    let res = shop.get("/cashier", Some(&shop.cashier_token)).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["user"]["username"], "carla");

    let res = shop.get("/login", None).await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.location.is_none());
}

// ========== Roster and catalog ==========

#[tokio::test]
async fn test_duplicate_username_is_conflict() {
    let shop = TestShop::new().await;
    let res = shop
        .rpc(
            "employees.create",
            Some(&shop.owner_token),
            json!({
                "name": "Another Carla",
                "role": "BARBER",
                "username": "carla",
                "password": "secret1",
            }),
        )
        .await;
    assert_error(&res, StatusCode::CONFLICT, "CONFLICT", 8002);
    assert_eq!(res.body["details"]["username"], "carla");
}

#[tokio::test]
async fn test_validation_failures_name_fields() {
    let shop = TestShop::new().await;
    let res = shop
        .rpc(
            "products.create",
            Some(&shop.owner_token),
            json!({
                "name": "",
                "price": 0.0,
                "category": "PRODUCT",
                "bonus_percentage_for_barber": 150.0,
                "bonus_percentage_for_cashier": 0.0,
            }),
        )
        .await;
    assert_error(&res, StatusCode::BAD_REQUEST, "BAD_REQUEST", 2);
    let details = res.body["details"].as_object().unwrap();
    assert!(details.contains_key("name"));
    assert!(details.contains_key("price"));
    assert!(details.contains_key("bonus_percentage_for_barber"));
    assert!(!details.contains_key("bonus_percentage_for_cashier"));
}

#[tokio::test]
async fn test_oversized_salary_rejected() {
    let shop = TestShop::new().await;
    let res = shop
        .rpc(
            "payrolls.create",
            Some(&shop.owner_token),
            json!({
                "employee_id": shop.barber_id,
                "period_start": 0,
                "period_end": 1,
                "salary": 1e29,
            }),
        )
        .await;
    assert_error(&res, StatusCode::BAD_REQUEST, "BAD_REQUEST", 5003);
    assert!(res.body["details"]["salary"].is_string());

    let res = shop
        .rpc("payrolls.getAll", Some(&shop.owner_token), json!({}))
        .await;
    assert_eq!(res.body["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_malformed_input_is_bad_request() {
    let shop = TestShop::new().await;
    let res = shop
        .rpc(
            "orders.getById",
            Some(&shop.owner_token),
            json!({ "id": "seven" }),
        )
        .await;
    assert_error(&res, StatusCode::BAD_REQUEST, "BAD_REQUEST", 6);
}

#[tokio::test]
async fn test_deleted_employee_leaves_roster_but_stays_readable() {
    let shop = TestShop::new().await;
    let res = shop
        .rpc(
            "employees.delete",
            Some(&shop.owner_token),
            json!({ "id": shop.barber_id }),
        )
        .await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body["data"]["deleted_at"].is_i64());

    let res = shop
        .rpc("employees.getBarbers", Some(&shop.owner_token), json!({}))
        .await;
    assert!(res.body["data"].as_array().unwrap().is_empty());

    let res = shop
        .rpc(
            "employees.getById",
            Some(&shop.owner_token),
            json!({ "id": shop.barber_id }),
        )
        .await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["data"]["name"], "Bruno");
    assert_eq!(res.body["data"]["account"]["username"], "bruno");
}

// ========== Sell, then pay ==========

#[tokio::test]
async fn test_order_to_paid_payroll() {
    let shop = TestShop::new().await;
    let haircut = shop.product("Haircut", 20.0, 50.0, 10.0).await;
    let wax = shop.product("Wax", 8.5, 0.0, 20.0).await;
    let start = now_ms() - 60_000;

    let res = shop
        .rpc(
            "orders.create",
            Some(&shop.cashier_token),
            json!({
                "barber_id": shop.barber_id,
                "items": [
                    { "product_id": haircut, "quantity": 2 },
                    { "product_id": wax, "quantity": 1 },
                ],
            }),
        )
        .await;
    assert_eq!(res.status, StatusCode::OK, "{}", res.body);
    let order = &res.body["data"];
    let order_id = order["id"].as_i64().unwrap();
    assert_eq!(order["total_price"].as_f64(), Some(48.5));
    assert_eq!(order["cashier_id"], shop.cashier_id);
    assert_eq!(order["barber"]["name"], "Bruno");
    assert_eq!(order["items"][0]["barber_bonus"].as_f64(), Some(20.0));
    assert_eq!(order["items"][0]["cashier_bonus"].as_f64(), Some(4.0));
    assert_eq!(order["items"][1]["cashier_bonus"].as_f64(), Some(1.7));
    assert_eq!(order["items"][0]["payroll_status"], "PENDING");

    let end = now_ms() + 60_000;

    let res = shop
        .rpc(
            "payrolls.create",
            Some(&shop.owner_token),
            json!({
                "employee_id": shop.barber_id,
                "period_start": start,
                "period_end": end,
                "salary": 100.0,
            }),
        )
        .await;
    assert_eq!(res.status, StatusCode::OK, "{}", res.body);
    let payroll = &res.body["data"];
    let payroll_id = payroll["id"].as_i64().unwrap();
    assert_eq!(payroll["status"], "DRAFT");
    assert_eq!(payroll["amount"].as_f64(), Some(120.0));
    let types: Vec<_> = payroll["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["item_type"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(types, ["SALARY", "BONUS", "BONUS"]);

    let res = shop
        .rpc(
            "payrolls.updateStatus",
            Some(&shop.owner_token),
            json!({ "id": payroll_id, "status": "PAID" }),
        )
        .await;
    assert_eq!(res.status, StatusCode::OK, "{}", res.body);
    assert_eq!(res.body["data"]["status"], "PAID");

    let res = shop
        .rpc(
            "orders.getById",
            Some(&shop.owner_token),
            json!({ "id": order_id }),
        )
        .await;
    for item in res.body["data"]["items"].as_array().unwrap() {
        assert_eq!(item["payroll_status"], "PAID");
    }

    // A paid run cannot be reopened
    let res = shop
        .rpc(
            "payrolls.updateStatus",
            Some(&shop.owner_token),
            json!({ "id": payroll_id, "status": "DRAFT" }),
        )
        .await;
    assert_error(&res, StatusCode::BAD_REQUEST, "BAD_REQUEST", 5004);

    let res = shop
        .rpc(
            "payrolls.getAll",
            Some(&shop.owner_token),
            json!({ "status": "PAID", "employee_id": shop.barber_id }),
        )
        .await;
    assert_eq!(res.body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_cashier_run_collects_cashier_bonuses() {
    let shop = TestShop::new().await;
    let haircut = shop.product("Haircut", 20.0, 50.0, 10.0).await;
    let wax = shop.product("Wax", 8.5, 0.0, 20.0).await;
    let start = now_ms() - 60_000;

    for (product, quantity) in [(haircut, 2), (wax, 1)] {
        let res = shop
            .rpc(
                "orders.create",
                Some(&shop.cashier_token),
                json!({
                    "barber_id": shop.barber_id,
                    "items": [{ "product_id": product, "quantity": quantity }],
                }),
            )
            .await;
        assert_eq!(res.status, StatusCode::OK, "{}", res.body);
    }

    let res = shop
        .rpc(
            "payrolls.create",
            Some(&shop.owner_token),
            json!({
                "employee_id": shop.cashier_id,
                "period_start": start,
                "period_end": now_ms() + 60_000,
                "salary": 0.0,
            }),
        )
        .await;
    assert_eq!(res.status, StatusCode::OK, "{}", res.body);
    assert_eq!(res.body["data"]["amount"].as_f64(), Some(5.7));
    assert_eq!(res.body["data"]["employee"]["name"], "Carla");
    assert_eq!(res.body["data"]["items"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_order_lookups_use_domain_codes() {
    let shop = TestShop::new().await;
    let haircut = shop.product("Haircut", 20.0, 50.0, 10.0).await;

    let res = shop
        .rpc(
            "orders.create",
            Some(&shop.cashier_token),
            json!({
                "barber_id": shop.cashier_id,
                "items": [{ "product_id": haircut, "quantity": 1 }],
            }),
        )
        .await;
    assert_error(&res, StatusCode::BAD_REQUEST, "BAD_REQUEST", 4005);

    let res = shop
        .rpc(
            "orders.create",
            Some(&shop.cashier_token),
            json!({
                "barber_id": shop.barber_id,
                "items": [{ "product_id": haircut + 999, "quantity": 1 }],
            }),
        )
        .await;
    assert_error(&res, StatusCode::NOT_FOUND, "NOT_FOUND", 6001);

    let res = shop
        .rpc("orders.getById", Some(&shop.cashier_token), json!({ "id": 1 }))
        .await;
    assert_error(&res, StatusCode::NOT_FOUND, "NOT_FOUND", 4001);
}
