// core/src/memory/catalog.rs
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use super::shared::{Sequence, Shared};
use crate::error::{TiffinError, TiffinResult};
use crate::model::{MenuItem, MenuItemId, Restaurant, RestaurantId};
use crate::money;
use crate::ports::MenuCatalog;

#[derive(Debug, Default)]
struct CatalogTables {
  restaurants: BTreeMap<RestaurantId, Restaurant>,
  menu_items: BTreeMap<MenuItemId, MenuItem>,
  restaurant_ids: Sequence,
  menu_item_ids: Sequence,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
  tables: Shared<CatalogTables>,
}

impl MemoryCatalog {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn add_restaurant(&self, name: &str, address: &str) -> Restaurant {
    let mut tables = self.tables.write();
    let restaurant = Restaurant {
      id: RestaurantId(tables.restaurant_ids.next()),
      name: name.to_string(),
      address: address.to_string(),
      is_active: true,
    };
    tables.restaurants.insert(restaurant.id, restaurant.clone());
    restaurant
  }

  pub fn add_menu_item(
    &self,
    restaurant_id: RestaurantId,
    name: &str,
    description: &str,
    price: Decimal,
  ) -> TiffinResult<MenuItem> {
    let mut tables = self.tables.write();
    if !tables.restaurants.contains_key(&restaurant_id) {
      return Err(TiffinError::not_found("Restaurant", restaurant_id));
    }
    let item = MenuItem {
      id: MenuItemId(tables.menu_item_ids.next()),
      restaurant_id,
      name: name.to_string(),
      description: description.to_string(),
      price: money::normalize(price),
      is_available: true,
    };
    tables.menu_items.insert(item.id, item.clone());
    Ok(item)
  }

  pub fn set_price(&self, id: MenuItemId, price: Decimal) -> TiffinResult<()> {
    let mut tables = self.tables.write();
    let item = tables
      .menu_items
      .get_mut(&id)
      .ok_or_else(|| TiffinError::not_found("Menu item", id))?;
    item.price = money::normalize(price);
    Ok(())
  }

  pub fn set_available(&self, id: MenuItemId, is_available: bool) -> TiffinResult<()> {
    let mut tables = self.tables.write();
    let item = tables
      .menu_items
      .get_mut(&id)
      .ok_or_else(|| TiffinError::not_found("Menu item", id))?;
    item.is_available = is_available;
    Ok(())
  }

  pub fn set_restaurant_active(&self, id: RestaurantId, is_active: bool) -> TiffinResult<()> {
    let mut tables = self.tables.write();
    let restaurant = tables
      .restaurants
      .get_mut(&id)
      .ok_or_else(|| TiffinError::not_found("Restaurant", id))?;
    restaurant.is_active = is_active;
    Ok(())
  }

  pub fn remove_menu_item(&self, id: MenuItemId) -> bool {
    self.tables.write().menu_items.remove(&id).is_some()
  }
}

#[async_trait]
impl MenuCatalog for MemoryCatalog {
  async fn active_restaurants(&self) -> TiffinResult<Vec<Restaurant>> {
    let tables = self.tables.read();
    Ok(tables.restaurants.values().filter(|r| r.is_active).cloned().collect())
  }

  async fn restaurant(&self, id: RestaurantId) -> TiffinResult<Option<Restaurant>> {
    Ok(self.tables.read().restaurants.get(&id).cloned())
  }

  async fn menu(&self, restaurant_id: RestaurantId) -> TiffinResult<Vec<MenuItem>> {
    let tables = self.tables.read();
    Ok(
      tables
        .menu_items
        .values()
        .filter(|item| item.restaurant_id == restaurant_id && item.is_available)
        .cloned()
        .collect(),
    )
  }

  async fn menu_item(&self, id: MenuItemId) -> TiffinResult<Option<MenuItem>> {
    Ok(self.tables.read().menu_items.get(&id).cloned())
  }

  async fn menu_items(&self, ids: &[MenuItemId]) -> TiffinResult<Vec<MenuItem>> {
    let tables = self.tables.read();
    Ok(ids.iter().filter_map(|id| tables.menu_items.get(id).cloned()).collect())
  }
}
