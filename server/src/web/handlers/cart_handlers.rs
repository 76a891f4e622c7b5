// server/src/web/handlers/cart_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tiffin::ports::SessionStore;
use tiffin::{MenuItemId, TiffinError};
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::extractors::AuthenticatedUser;

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequestPayload {
  pub menu_item_id: i64,
  /// Missing or below one counts as one.
  #[serde(default)]
  pub quantity: Option<i64>,
}

#[instrument(
  name = "handler::add_to_cart",
  skip(app_state, req_payload, auth_user),
  fields(user_id = %auth_user.caller.user_id, menu_item_id = req_payload.menu_item_id)
)]
pub async fn add_to_cart_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<AddToCartRequestPayload>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let platform = &app_state.platform;
  let mut cart = auth_user.session.cart.clone();
  let item_id = MenuItemId(req_payload.menu_item_id);

  match platform.cart().add(&mut cart, item_id, req_payload.quantity.unwrap_or(1)).await {
    Ok(()) => {}
    Err(err @ TiffinError::CrossRestaurantConflict { .. }) => {
      warn!(error = %err, "Add to cart refused.");
      return Ok(HttpResponse::Conflict().json(json!({
          "ok": false,
          "message": "Your cart contains items from another restaurant. Clear the cart to order from here.",
      })));
    }
    Err(err) => return Err(err.into()),
  }

  platform.sessions().save_cart(auth_user.token(), &cart).await?;
  info!(quantity = cart.quantity_of(item_id), "Cart updated.");
  let view = platform.cart().view(&cart).await?;
  Ok(HttpResponse::Ok().json(json!({ "ok": true, "cart": view })))
}

#[instrument(name = "handler::view_cart", skip(app_state, auth_user), fields(user_id = %auth_user.caller.user_id))]
pub async fn view_cart_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let view = app_state.platform.cart().view(&auth_user.session.cart).await?;
  Ok(HttpResponse::Ok().json(view))
}

#[instrument(name = "handler::clear_cart", skip(app_state, auth_user), fields(user_id = %auth_user.caller.user_id))]
pub async fn clear_cart_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let platform = &app_state.platform;
  let mut cart = auth_user.session.cart.clone();
  platform.cart().clear(&mut cart);
  platform.sessions().save_cart(auth_user.token(), &cart).await?;
  Ok(HttpResponse::Ok().json(json!({ "ok": true })))
}
