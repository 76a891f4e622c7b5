// tests/common/mod.rs
#![allow(dead_code)]

use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::{header, StatusCode};
use actix_web::{test, Error};
use actix_http::Request;
use once_cell::sync::Lazy;
use serde_json::{json, Value};
use tiffin_server::{AppConfig, AppState};
use tracing::Level;

pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "admin123";

// Seeded ids on a fresh in-memory backend.
pub const SPICE_VILLA: i64 = 1;
pub const URBAN_BITES: i64 = 2;
pub const PANEER: i64 = 1;
pub const NAAN: i64 = 2;
pub const BURGER: i64 = 3;
pub const FRIES: i64 = 4;

static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

/// A seeded in-memory application state.
pub async fn app_state() -> AppState {
  setup_tracing();
  AppState::build(AppConfig::in_memory()).await.unwrap()
}

pub fn bearer(token: &str) -> (header::HeaderName, String) {
  (header::AUTHORIZATION, format!("Bearer {}", token))
}

pub async fn send<S, B>(app: &S, req: Request) -> (StatusCode, Value)
where
  S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
  B: MessageBody,
{
  let resp = test::call_service(app, req).await;
  let status = resp.status();
  let bytes = test::read_body(resp).await;
  let body = if bytes.is_empty() {
    Value::Null
  } else {
    serde_json::from_slice(&bytes).unwrap()
  };
  (status, body)
}

pub async fn signin<S, B>(app: &S, email: &str, password: &str) -> String
where
  S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
  B: MessageBody,
{
  let req = test::TestRequest::post()
    .uri("/api/v1/auth/signin")
    .set_json(json!({ "email": email, "password": password }))
    .to_request();
  let (status, body) = send(app, req).await;
  assert_eq!(status, StatusCode::OK, "signin failed: {}", body);
  body["token"].as_str().unwrap().to_string()
}

/// Registers a customer and returns a session token for them.
pub async fn customer<S, B>(app: &S, name: &str, email: &str) -> String
where
  S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
  B: MessageBody,
{
  let req = test::TestRequest::post()
    .uri("/api/v1/auth/signup")
    .set_json(json!({ "name": name, "email": email, "password": "pw-1234" }))
    .to_request();
  let (status, body) = send(app, req).await;
  assert_eq!(status, StatusCode::CREATED, "signup failed: {}", body);
  signin(app, email, "pw-1234").await
}

pub async fn admin<S, B>(app: &S) -> String
where
  S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
  B: MessageBody,
{
  signin(app, ADMIN_EMAIL, ADMIN_PASSWORD).await
}

pub fn get(uri: &str, token: &str) -> Request {
  test::TestRequest::get().uri(uri).insert_header(bearer(token)).to_request()
}

pub fn post(uri: &str, token: &str, body: Value) -> Request {
  test::TestRequest::post()
    .uri(uri)
    .insert_header(bearer(token))
    .set_json(body)
    .to_request()
}

pub async fn add_to_cart<S, B>(app: &S, token: &str, menu_item_id: i64, quantity: i64) -> (StatusCode, Value)
where
  S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
  B: MessageBody,
{
  send(
    app,
    post(
      "/api/v1/cart/add",
      token,
      json!({ "menuItemId": menu_item_id, "quantity": quantity }),
    ),
  )
  .await
}
