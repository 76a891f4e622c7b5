// core/src/cart/mod.rs

//! The session cart: menu item id to quantity, all from one restaurant.

pub mod manager;

pub use manager::CartManager;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::{MenuItem, MenuItemId, RestaurantId};

/// Serialized into the session as `{"restaurant_id": 1, "items": {"7": 3}}`.
///
/// Invariant: `restaurant_id` is `None` exactly when `items` is empty, and every item
/// belongs to `restaurant_id`. Only [`CartManager`] mutates a cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
  pub restaurant_id: Option<RestaurantId>,
  pub items: BTreeMap<MenuItemId, u32>,
}

impl Cart {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  pub fn quantity_of(&self, id: MenuItemId) -> u32 {
    self.items.get(&id).copied().unwrap_or(0)
  }

  pub fn item_ids(&self) -> Vec<MenuItemId> {
    self.items.keys().copied().collect()
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
  pub item: MenuItem,
  pub quantity: u32,
  pub line_total: Decimal,
}

/// What the customer sees before checkout. Priced with live menu prices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartView {
  pub restaurant_id: Option<RestaurantId>,
  pub lines: Vec<CartLine>,
  pub total: Decimal,
}
