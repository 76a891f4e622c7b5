// server/src/web/handlers/admin_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tiffin::OrderId;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::extractors::AuthenticatedUser;

#[derive(Deserialize, Debug)]
pub struct SetStatusRequestPayload {
  pub status: String,
}

#[instrument(name = "handler::admin_orders", skip(app_state, auth_user), fields(user_id = %auth_user.caller.user_id))]
pub async fn list_all_orders_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let orders = app_state.platform.orders().all_orders(&auth_user.caller).await?;
  Ok(HttpResponse::Ok().json(orders))
}

#[instrument(
  name = "handler::admin_set_status",
  skip(app_state, path, auth_user, req_payload),
  fields(order_id = %path, requested = %req_payload.status)
)]
pub async fn set_order_status_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
  req_payload: web::Json<SetStatusRequestPayload>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let view = app_state
    .platform
    .status()
    .set_status(OrderId(path.into_inner()), &req_payload.status, &auth_user.caller)
    .await?;
  info!(order_id = %view.order_id, status = %view.status, "Order status set by admin.");
  Ok(HttpResponse::Ok().json(json!({
      "ok": true,
      "orderId": view.order_id,
      "status": view.status,
      "updatedAt": view.updated_at,
  })))
}

#[instrument(name = "handler::admin_delete_order", skip(app_state, path, auth_user), fields(order_id = %path))]
pub async fn delete_order_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  app_state
    .platform
    .orders()
    .delete(OrderId(path.into_inner()), &auth_user.caller)
    .await?;
  Ok(HttpResponse::NoContent().finish())
}
