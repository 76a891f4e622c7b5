// tests/scenario_tests.rs

mod common;

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use common::*;
use serde_json::json;
use tiffin_server::web::configure_app_routes;

#[actix_web::test]
async fn order_from_cart_to_delivery_over_http() {
  let state = app_state().await;
  let app = test::init_service(
    App::new()
      .app_data(web::Data::new(state.clone()))
      .configure(configure_app_routes),
  )
  .await;

  let asha = customer(&app, "Asha", "asha@example.com").await;
  let ravi = customer(&app, "Ravi", "ravi@example.com").await;
  let admin = admin(&app).await;

  // Fill the cart from one restaurant and check out.
  add_to_cart(&app, &asha, PANEER, 1).await;
  add_to_cart(&app, &asha, NAAN, 2).await;
  let (status, body) = send(&app, post("/api/v1/checkout", &asha, json!({}))).await;
  assert_eq!(status, StatusCode::CREATED);
  let order_id = body["orderId"].as_i64().unwrap();

  let (_, cart) = send(&app, get("/api/v1/cart", &asha)).await;
  assert_eq!(cart["restaurant_id"], serde_json::Value::Null);
  assert!(cart["lines"].as_array().unwrap().is_empty());

  // Details carry the snapshot prices.
  let (status, details) = send(&app, get(&format!("/api/v1/orders/{}", order_id), &asha)).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(details["order"]["total_amount"], "300.00");
  assert_eq!(details["order"]["status"], "Pending");
  let items = details["items"].as_array().unwrap();
  assert_eq!(items.len(), 2);
  assert!(items.iter().any(|i| i["price_each"] == "220.00" && i["quantity"] == 1));
  assert!(items.iter().any(|i| i["price_each"] == "40.00" && i["quantity"] == 2));

  // Status polling: owner yes, stranger no.
  let status_uri = format!("/api/v1/orders/{}/status", order_id);
  let (status, first) = send(&app, get(&status_uri, &asha)).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(first["ok"], true);
  assert_eq!(first["status"], "Pending");
  assert_eq!(first["pollMs"], 5000);

  let (status, _) = send(&app, get(&status_uri, &ravi)).await;
  assert_eq!(status, StatusCode::FORBIDDEN);
  let (status, _) = send(&app, get("/api/v1/orders/4242/status", &ravi)).await;
  assert_eq!(status, StatusCode::FORBIDDEN);

  // Only admins move the order along.
  let admin_status_uri = format!("/api/v1/admin/orders/{}/status", order_id);
  let (status, _) = send(&app, post(&admin_status_uri, &asha, json!({ "status": "Delivered" }))).await;
  assert_eq!(status, StatusCode::FORBIDDEN);

  let (status, body) = send(&app, post(&admin_status_uri, &admin, json!({ "status": "Delivered" }))).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["status"], "Delivered");

  let (_, latest) = send(&app, get(&status_uri, &asha)).await;
  assert_eq!(latest["status"], "Delivered");
  let before: chrono::DateTime<chrono::Utc> = serde_json::from_value(first["updatedAt"].clone()).unwrap();
  let after: chrono::DateTime<chrono::Utc> = serde_json::from_value(latest["updatedAt"].clone()).unwrap();
  assert!(after >= before);

  // History and the admin dashboard both list it.
  let (_, history) = send(&app, get("/api/v1/orders", &asha)).await;
  assert_eq!(history.as_array().unwrap().len(), 1);
  let (_, ravi_history) = send(&app, get("/api/v1/orders", &ravi)).await;
  assert!(ravi_history.as_array().unwrap().is_empty());
  let (status, all) = send(&app, get("/api/v1/admin/orders", &admin)).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(all[0]["id"], order_id);

  // Deleting removes it for everyone.
  let delete = |token: &str| {
    test::TestRequest::delete()
      .uri(&format!("/api/v1/admin/orders/{}", order_id))
      .insert_header(bearer(token))
      .to_request()
  };
  let (status, _) = send(&app, delete(&admin)).await;
  assert_eq!(status, StatusCode::NO_CONTENT);
  let (status, _) = send(&app, delete(&admin)).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  let (status, _) = send(&app, get(&format!("/api/v1/orders/{}", order_id), &admin)).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}
