//! Shared fixtures for the HTTP tests: an in-memory shop with one owner,
//! one cashier and one barber, each already signed in.

#![allow(dead_code)]

use axum::Router;
use axum::body::{Body, to_bytes};
use http::{Request, StatusCode, header};
use serde_json::{Value, json};
use shared::models::{EmployeeCreate, EmployeeRole};
use tiptrim_server::services::account;
use tiptrim_server::{AppState, Config, DbService, build_router};
use tower::ServiceExt;

pub struct TestShop {
    pub app: Router,
    pub db: DbService,
    pub owner_token: String,
    pub cashier_token: String,
    pub barber_token: String,
    pub cashier_id: i64,
    pub barber_id: i64,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: Value,
}

impl TestShop {
    pub async fn new() -> Self {
        let db = DbService::in_memory().await.unwrap();
        account::create_owner(&db.pool, "owner", "owner-pass")
            .await
            .unwrap();
        let cashier = account::create_employee(
            &db.pool,
            &EmployeeCreate {
                name: "Carla".into(),
                role: EmployeeRole::Cashier,
                username: "carla".into(),
                password: "cashier-pass".into(),
            },
        )
        .await
        .unwrap();
        let barber = account::create_employee(
            &db.pool,
            &EmployeeCreate {
                name: "Bruno".into(),
                role: EmployeeRole::Barber,
                username: "bruno".into(),
                password: "barber-pass".into(),
            },
        )
        .await
        .unwrap();

        let state = AppState::new(Config::for_tests(), db.clone());
        let app = build_router(state);

        let mut shop = Self {
            app,
            db,
            owner_token: String::new(),
            cashier_token: String::new(),
            barber_token: String::new(),
            cashier_id: cashier.employee.id,
            barber_id: barber.employee.id,
        };
        shop.owner_token = shop.login("owner", "owner-pass").await;
        shop.cashier_token = shop.login("carla", "cashier-pass").await;
        shop.barber_token = shop.login("bruno", "barber-pass").await;
        shop
    }

    pub async fn login(&self, username: &str, password: &str) -> String {
        let res = self
            .post(
                "/api/auth/login",
                None,
                json!({ "username": username, "password": password }),
            )
            .await;
        assert_eq!(res.status, StatusCode::OK, "login failed: {}", res.body);
        res.body["data"]["token"].as_str().unwrap().to_string()
    }

    /// Call `/rpc/<procedure>` with a JSON input
    pub async fn rpc(&self, procedure: &str, token: Option<&str>, input: Value) -> TestResponse {
        self.post(&format!("/rpc/{procedure}"), token, input).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> TestResponse {
        let mut req = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            req = req.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        self.send(req.body(Body::from(body.to_string())).unwrap())
            .await
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> TestResponse {
        let mut req = Request::builder().method("GET").uri(uri);
        if let Some(token) = token {
            req = req.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        self.send(req.body(Body::empty()).unwrap()).await
    }

    async fn send(&self, req: Request<Body>) -> TestResponse {
        let res = self.app.clone().oneshot(req).await.unwrap();
        let status = res.status();
        let location = res
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        TestResponse {
            status,
            location,
            body,
        }
    }

    /// Create a product as the owner and return its id
    pub async fn product(&self, name: &str, price: f64, barber_pct: f64, cashier_pct: f64) -> i64 {
        let res = self
            .rpc(
                "products.create",
                Some(&self.owner_token),
                json!({
                    "name": name,
                    "price": price,
                    "category": "SERVICE",
                    "bonus_percentage_for_barber": barber_pct,
                    "bonus_percentage_for_cashier": cashier_pct,
                }),
            )
            .await;
        assert_eq!(res.status, StatusCode::OK, "{}", res.body);
        res.body["data"]["id"].as_i64().unwrap()
    }
}

/// Assert a failure envelope: HTTP status, `kind` and numeric `code`
pub fn assert_error(res: &TestResponse, status: StatusCode, kind: &str, code: u16) {
    assert_eq!(res.status, status, "unexpected body: {}", res.body);
    assert_eq!(res.body["kind"], kind);
    assert_eq!(res.body["code"], code);
}
