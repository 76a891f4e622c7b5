// tests/api_tests.rs

mod common;

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use common::*;
use serde_json::json;
use tiffin_server::web::configure_app_routes;

macro_rules! test_app {
  ($state:expr) => {
    test::init_service(
      App::new()
        .app_data(web::Data::new($state.clone()))
        .configure(configure_app_routes),
    )
    .await
  };
}

#[actix_web::test]
async fn health_check_is_public() {
  let state = app_state().await;
  let app = test_app!(state);

  let req = test::TestRequest::get().uri("/api/v1/health").to_request();
  let (status, body) = send(&app, req).await;

  assert_eq!(status, StatusCode::OK);
  assert_eq!(body, json!({ "status": "ok" }));
}

#[actix_web::test]
async fn signup_validates_and_rejects_duplicate_email() {
  let state = app_state().await;
  let app = test_app!(state);

  let signup = |body: serde_json::Value| {
    test::TestRequest::post()
      .uri("/api/v1/auth/signup")
      .set_json(body)
      .to_request()
  };

  let (status, body) = send(&app, signup(json!({ "name": "Asha", "email": "Asha@Example.com", "password": "pw" }))).await;
  assert_eq!(status, StatusCode::CREATED);
  assert_eq!(body["email"], "asha@example.com");

  let (status, _) = send(&app, signup(json!({ "name": "Other", "email": "asha@example.com", "password": "pw2" }))).await;
  assert_eq!(status, StatusCode::CONFLICT);

  let (status, body) = send(&app, signup(json!({ "name": "  ", "email": "x@example.com", "password": "pw" }))).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert!(body["error"].as_str().unwrap().contains("All fields are required."));
}

#[actix_web::test]
async fn signin_with_wrong_password_is_unauthorized() {
  let state = app_state().await;
  let app = test_app!(state);

  let req = test::TestRequest::post()
    .uri("/api/v1/auth/signin")
    .set_json(json!({ "email": ADMIN_EMAIL, "password": "nope" }))
    .to_request();
  let (status, body) = send(&app, req).await;

  assert_eq!(status, StatusCode::UNAUTHORIZED);
  assert_eq!(body["error"], "Invalid credentials");
}

#[actix_web::test]
async fn protected_routes_need_a_live_session() {
  let state = app_state().await;
  let app = test_app!(state);

  let req = test::TestRequest::get().uri("/api/v1/cart").to_request();
  let (status, _) = send(&app, req).await;
  assert_eq!(status, StatusCode::UNAUTHORIZED);

  let token = customer(&app, "Asha", "asha@example.com").await;
  let (status, _) = send(&app, get("/api/v1/cart", &token)).await;
  assert_eq!(status, StatusCode::OK);

  let (status, _) = send(&app, post("/api/v1/auth/signout", &token, json!({}))).await;
  assert_eq!(status, StatusCode::OK);

  let (status, _) = send(&app, get("/api/v1/cart", &token)).await;
  assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn restaurants_and_menus_are_browsable() {
  let state = app_state().await;
  let app = test_app!(state);
  let token = customer(&app, "Asha", "asha@example.com").await;

  let (status, body) = send(&app, get("/api/v1/restaurants", &token)).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body.as_array().unwrap().len(), 2);

  let (status, body) = send(&app, get(&format!("/api/v1/restaurants/{}/menu", URBAN_BITES), &token)).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["restaurant"]["name"], "Urban Bites");
  assert_eq!(body["items"].as_array().unwrap().len(), 2);
  assert_eq!(body["items"][0]["price"], "150.00");

  let (status, _) = send(&app, get("/api/v1/restaurants/99/menu", &token)).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn cart_stays_with_one_restaurant() {
  let state = app_state().await;
  let app = test_app!(state);
  let token = customer(&app, "Asha", "asha@example.com").await;

  let (status, body) = add_to_cart(&app, &token, PANEER, 1).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["ok"], true);

  let (status, body) = add_to_cart(&app, &token, BURGER, 1).await;
  assert_eq!(status, StatusCode::CONFLICT);
  assert_eq!(body["ok"], false);
  assert!(body["message"].as_str().unwrap().contains("another restaurant"));

  // The refused add left the cart untouched.
  let (_, cart) = send(&app, get("/api/v1/cart", &token)).await;
  assert_eq!(cart["restaurant_id"], SPICE_VILLA);
  assert_eq!(cart["lines"].as_array().unwrap().len(), 1);
  assert_eq!(cart["total"], "220.00");

  let (status, _) = send(&app, post("/api/v1/cart/clear", &token, json!({}))).await;
  assert_eq!(status, StatusCode::OK);

  let (status, _) = add_to_cart(&app, &token, BURGER, 1).await;
  assert_eq!(status, StatusCode::OK);
}

#[actix_web::test]
async fn add_to_cart_accumulates_and_floors_quantity() {
  let state = app_state().await;
  let app = test_app!(state);
  let token = customer(&app, "Asha", "asha@example.com").await;

  add_to_cart(&app, &token, NAAN, 2).await;
  add_to_cart(&app, &token, NAAN, 0).await;
  let (status, body) = add_to_cart(&app, &token, NAAN, -5).await;

  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["cart"]["lines"][0]["quantity"], 4);
  assert_eq!(body["cart"]["total"], "160.00");

  let (status, _) = add_to_cart(&app, &token, 404, 1).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn checkout_of_empty_cart_is_rejected() {
  let state = app_state().await;
  let app = test_app!(state);
  let token = customer(&app, "Asha", "asha@example.com").await;

  let (status, body) = send(&app, post("/api/v1/checkout", &token, json!({}))).await;

  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(body["error"], "Your cart is empty.");
}

#[actix_web::test]
async fn customers_cannot_use_admin_routes() {
  let state = app_state().await;
  let app = test_app!(state);
  let token = customer(&app, "Asha", "asha@example.com").await;

  let (status, _) = send(&app, get("/api/v1/admin/orders", &token)).await;
  assert_eq!(status, StatusCode::FORBIDDEN);

  let req = test::TestRequest::delete()
    .uri("/api/v1/admin/orders/1")
    .insert_header(bearer(&token))
    .to_request();
  let (status, _) = send(&app, req).await;
  assert_eq!(status, StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn admin_status_changes_validate_input() {
  let state = app_state().await;
  let app = test_app!(state);
  let asha = customer(&app, "Asha", "asha@example.com").await;
  let admin = admin(&app).await;

  add_to_cart(&app, &asha, FRIES, 1).await;
  let (_, body) = send(&app, post("/api/v1/checkout", &asha, json!({}))).await;
  let order_id = body["orderId"].as_i64().unwrap();
  let status_uri = format!("/api/v1/admin/orders/{}/status", order_id);

  let (status, body) = send(&app, post(&status_uri, &admin, json!({ "status": "Cooking" }))).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert!(body["error"].as_str().unwrap().contains("Cooking"));

  let (status, _) = send(&app, post(&status_uri, &admin, json!({ "status": "preparing" }))).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);

  let (status, _) = send(
    &app,
    post("/api/v1/admin/orders/999/status", &admin, json!({ "status": "Preparing" })),
  )
  .await;
  assert_eq!(status, StatusCode::NOT_FOUND);

  let (status, body) = send(&app, post(&status_uri, &admin, json!({ "status": "Out for Delivery" }))).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["status"], "Out for Delivery");
}
