// core/src/model/catalog.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ids::{MenuItemId, RestaurantId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
  pub id: RestaurantId,
  pub name: String,
  pub address: String,
  pub is_active: bool,
}

/// A dish on a restaurant's menu.
///
/// The cart and checkout never modify menu items. Checkout copies `price` into the order
/// line it creates; the cart view always reads it live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
  pub id: MenuItemId,
  pub restaurant_id: RestaurantId,
  pub name: String,
  pub description: String,
  pub price: Decimal,
  pub is_available: bool,
}
