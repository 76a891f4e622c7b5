// server/src/web/handlers/restaurant_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tiffin::ports::MenuCatalog;
use tiffin::{RestaurantId, TiffinError};
use tracing::instrument;

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::extractors::AuthenticatedUser;

#[instrument(name = "handler::list_restaurants", skip_all)]
pub async fn list_restaurants_handler(
  app_state: web::Data<AppState>,
  _auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let restaurants = app_state.platform.catalog().active_restaurants().await?;
  Ok(HttpResponse::Ok().json(restaurants))
}

/// The restaurant and its available items. Inactive restaurants are treated as unknown.
#[instrument(name = "handler::restaurant_menu", skip(app_state, path, _auth_user), fields(restaurant_id = %path))]
pub async fn restaurant_menu_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
  _auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let restaurant_id = RestaurantId(path.into_inner());
  let catalog = app_state.platform.catalog();
  let restaurant = catalog
    .restaurant(restaurant_id)
    .await?
    .filter(|r| r.is_active)
    .ok_or_else(|| TiffinError::not_found("Restaurant", restaurant_id))?;
  let items = catalog.menu(restaurant_id).await?;

  Ok(HttpResponse::Ok().json(json!({
      "restaurant": restaurant,
      "items": items,
  })))
}
