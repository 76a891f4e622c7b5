// server/src/db/catalog.rs

use anyhow::Context;
use async_trait::async_trait;
use sqlx::PgPool;
use tiffin::ports::MenuCatalog;
use tiffin::{MenuItem, MenuItemId, Restaurant, RestaurantId, TiffinResult};

use crate::models::{MenuItemRow, RestaurantRow};

const MENU_ITEM_COLUMNS: &str = "id, restaurant_id, name, description, price, is_available";

#[derive(Clone)]
pub struct PgMenuCatalog {
  pool: PgPool,
}

impl PgMenuCatalog {
  pub fn new(pool: PgPool) -> Self {
    PgMenuCatalog { pool }
  }
}

#[async_trait]
impl MenuCatalog for PgMenuCatalog {
  async fn active_restaurants(&self) -> TiffinResult<Vec<Restaurant>> {
    let rows = sqlx::query_as::<_, RestaurantRow>(
      "SELECT id, name, address, is_active FROM restaurants WHERE is_active ORDER BY id",
    )
    .fetch_all(&self.pool)
    .await
    .context("listing active restaurants")?;
    Ok(rows.into_iter().map(Restaurant::from).collect())
  }

  async fn restaurant(&self, id: RestaurantId) -> TiffinResult<Option<Restaurant>> {
    let row = sqlx::query_as::<_, RestaurantRow>("SELECT id, name, address, is_active FROM restaurants WHERE id = $1")
      .bind(id.get())
      .fetch_optional(&self.pool)
      .await
      .with_context(|| format!("loading restaurant {}", id))?;
    Ok(row.map(Restaurant::from))
  }

  async fn menu(&self, restaurant_id: RestaurantId) -> TiffinResult<Vec<MenuItem>> {
    let rows = sqlx::query_as::<_, MenuItemRow>(&format!(
      "SELECT {} FROM menu_items WHERE restaurant_id = $1 AND is_available ORDER BY id",
      MENU_ITEM_COLUMNS
    ))
    .bind(restaurant_id.get())
    .fetch_all(&self.pool)
    .await
    .with_context(|| format!("loading menu of restaurant {}", restaurant_id))?;
    Ok(rows.into_iter().map(MenuItem::from).collect())
  }

  async fn menu_item(&self, id: MenuItemId) -> TiffinResult<Option<MenuItem>> {
    let row = sqlx::query_as::<_, MenuItemRow>(&format!("SELECT {} FROM menu_items WHERE id = $1", MENU_ITEM_COLUMNS))
      .bind(id.get())
      .fetch_optional(&self.pool)
      .await
      .with_context(|| format!("loading menu item {}", id))?;
    Ok(row.map(MenuItem::from))
  }

  async fn menu_items(&self, ids: &[MenuItemId]) -> TiffinResult<Vec<MenuItem>> {
    if ids.is_empty() {
      return Ok(Vec::new());
    }
    let raw_ids: Vec<i64> = ids.iter().map(|id| id.get()).collect();
    let rows = sqlx::query_as::<_, MenuItemRow>(&format!(
      "SELECT {} FROM menu_items WHERE id = ANY($1) ORDER BY id",
      MENU_ITEM_COLUMNS
    ))
    .bind(raw_ids)
    .fetch_all(&self.pool)
    .await
    .context("batch loading menu items")?;
    Ok(rows.into_iter().map(MenuItem::from).collect())
  }
}
