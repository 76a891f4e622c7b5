// server/src/web/handlers/checkout_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tiffin::ports::SessionStore;
use tracing::{error, info, instrument};

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::extractors::AuthenticatedUser;

#[instrument(name = "handler::checkout", skip(app_state, auth_user), fields(user_id = %auth_user.caller.user_id))]
pub async fn checkout_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let platform = &app_state.platform;
  let mut cart = auth_user.session.cart.clone();
  let order_id = platform.checkout().checkout(&mut cart, &auth_user.caller).await?;

  // The order is committed at this point; a failed cart write must not turn it into an error.
  if let Err(e) = platform.sessions().save_cart(auth_user.token(), &cart).await {
    error!(error = %e, %order_id, "Order placed but the session cart could not be cleared.");
  }

  info!(%order_id, "Checkout complete.");
  Ok(HttpResponse::Created().json(json!({ "ok": true, "orderId": order_id })))
}
