// server/src/web/handlers/order_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tiffin::OrderId;
use tracing::instrument;

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::extractors::AuthenticatedUser;

#[instrument(name = "handler::order_history", skip(app_state, auth_user), fields(user_id = %auth_user.caller.user_id))]
pub async fn order_history_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let orders = app_state.platform.orders().history(&auth_user.caller).await?;
  Ok(HttpResponse::Ok().json(orders))
}

#[instrument(name = "handler::order_details", skip(app_state, path, auth_user), fields(order_id = %path))]
pub async fn order_details_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let details = app_state
    .platform
    .orders()
    .details(OrderId(path.into_inner()), &auth_user.caller)
    .await?;
  Ok(HttpResponse::Ok().json(details))
}

/// Polled by the order page; `pollMs` tells the client how long to wait before asking again.
#[instrument(name = "handler::order_status", skip(app_state, path, auth_user), fields(order_id = %path))]
pub async fn order_status_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let view = app_state
    .platform
    .status()
    .status(OrderId(path.into_inner()), &auth_user.caller)
    .await?;
  Ok(HttpResponse::Ok().json(json!({
      "ok": true,
      "orderId": view.order_id,
      "status": view.status,
      "updatedAt": view.updated_at,
      "pollMs": app_state.config.order_status_poll_ms,
  })))
}
