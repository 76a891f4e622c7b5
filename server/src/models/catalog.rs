// server/src/models/catalog.rs

use rust_decimal::Decimal;
use sqlx::FromRow;
use tiffin::{MenuItem, MenuItemId, Restaurant, RestaurantId};

#[derive(Debug, Clone, FromRow)]
pub struct RestaurantRow {
  pub id: i64,
  pub name: String,
  pub address: String,
  pub is_active: bool,
}

impl From<RestaurantRow> for Restaurant {
  fn from(row: RestaurantRow) -> Self {
    Restaurant {
      id: RestaurantId(row.id),
      name: row.name,
      address: row.address,
      is_active: row.is_active,
    }
  }
}

#[derive(Debug, Clone, FromRow)]
pub struct MenuItemRow {
  pub id: i64,
  pub restaurant_id: i64,
  pub name: String,
  pub description: String,
  pub price: Decimal,
  pub is_available: bool,
}

impl From<MenuItemRow> for MenuItem {
  fn from(row: MenuItemRow) -> Self {
    MenuItem {
      id: MenuItemId(row.id),
      restaurant_id: RestaurantId(row.restaurant_id),
      name: row.name,
      description: row.description,
      price: tiffin::money::normalize(row.price),
      is_available: row.is_available,
    }
  }
}
