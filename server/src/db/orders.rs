// server/src/db/orders.rs

use anyhow::Context;
use async_trait::async_trait;
use sqlx::PgPool;
use tiffin::model::OrderDraft;
use tiffin::ports::OrderStore;
use tiffin::{money, Order, OrderId, OrderItem, OrderStatus, TiffinResult, UserId};
use tracing::{debug, instrument};

use crate::models::{OrderItemRow, OrderRow};

const ORDER_COLUMNS: &str = "id, user_id, restaurant_id, status, total_amount, created_at, updated_at";

#[derive(Clone)]
pub struct PgOrderStore {
  pool: PgPool,
}

impl PgOrderStore {
  pub fn new(pool: PgPool) -> Self {
    PgOrderStore { pool }
  }
}

fn into_orders(rows: Vec<OrderRow>) -> TiffinResult<Vec<Order>> {
  rows.into_iter().map(Order::try_from).collect()
}

#[async_trait]
impl OrderStore for PgOrderStore {
  // Header and items are written in one transaction. Any failure drops `tx` without
  // commit, which rolls everything back.
  #[instrument(
    name = "pg_orders::place_order",
    skip(self, draft),
    fields(user_id = %draft.user_id, restaurant_id = %draft.restaurant_id, lines = draft.lines.len())
  )]
  async fn place_order(&self, draft: &OrderDraft) -> TiffinResult<Order> {
    let mut tx = self.pool.begin().await.context("starting checkout transaction")?;

    let row = sqlx::query_as::<_, OrderRow>(&format!(
      "INSERT INTO orders (user_id, restaurant_id, status, total_amount) VALUES ($1, $2, $3, $4) RETURNING {}",
      ORDER_COLUMNS
    ))
    .bind(draft.user_id.get())
    .bind(draft.restaurant_id.get())
    .bind(OrderStatus::Pending.as_str())
    .bind(money::normalize(draft.total_amount))
    .fetch_one(&mut *tx)
    .await
    .context("inserting order header")?;

    for line in &draft.lines {
      sqlx::query("INSERT INTO order_items (order_id, menu_item_id, quantity, price_each) VALUES ($1, $2, $3, $4)")
        .bind(row.id)
        .bind(line.menu_item_id.get())
        .bind(i64::from(line.quantity))
        .bind(line.price_each)
        .execute(&mut *tx)
        .await
        .with_context(|| format!("inserting item {} of order {}", line.menu_item_id, row.id))?;
    }

    tx.commit().await.context("committing checkout transaction")?;
    debug!(order_id = row.id, total = %row.total_amount, "Order persisted.");
    Order::try_from(row)
  }

  async fn order(&self, id: OrderId) -> TiffinResult<Option<Order>> {
    let row = sqlx::query_as::<_, OrderRow>(&format!("SELECT {} FROM orders WHERE id = $1", ORDER_COLUMNS))
      .bind(id.get())
      .fetch_optional(&self.pool)
      .await
      .with_context(|| format!("loading order {}", id))?;
    row.map(Order::try_from).transpose()
  }

  async fn order_items(&self, id: OrderId) -> TiffinResult<Vec<OrderItem>> {
    let rows = sqlx::query_as::<_, OrderItemRow>(
      "SELECT id, order_id, menu_item_id, quantity, price_each FROM order_items WHERE order_id = $1 ORDER BY id",
    )
    .bind(id.get())
    .fetch_all(&self.pool)
    .await
    .with_context(|| format!("loading items of order {}", id))?;
    rows.into_iter().map(OrderItem::try_from).collect()
  }

  async fn orders_for_user(&self, user_id: UserId) -> TiffinResult<Vec<Order>> {
    let rows = sqlx::query_as::<_, OrderRow>(&format!(
      "SELECT {} FROM orders WHERE user_id = $1 ORDER BY created_at DESC, id DESC",
      ORDER_COLUMNS
    ))
    .bind(user_id.get())
    .fetch_all(&self.pool)
    .await
    .with_context(|| format!("loading orders of user {}", user_id))?;
    into_orders(rows)
  }

  async fn all_orders(&self) -> TiffinResult<Vec<Order>> {
    let rows = sqlx::query_as::<_, OrderRow>(&format!(
      "SELECT {} FROM orders ORDER BY created_at DESC, id DESC",
      ORDER_COLUMNS
    ))
    .fetch_all(&self.pool)
    .await
    .context("loading all orders")?;
    into_orders(rows)
  }

  async fn update_status(&self, id: OrderId, status: OrderStatus) -> TiffinResult<Option<Order>> {
    let row = sqlx::query_as::<_, OrderRow>(&format!(
      "UPDATE orders SET status = $2, updated_at = NOW() WHERE id = $1 RETURNING {}",
      ORDER_COLUMNS
    ))
    .bind(id.get())
    .bind(status.as_str())
    .fetch_optional(&self.pool)
    .await
    .with_context(|| format!("updating status of order {}", id))?;
    row.map(Order::try_from).transpose()
  }

  #[instrument(name = "pg_orders::delete_order", skip(self), fields(order_id = %id))]
  async fn delete_order(&self, id: OrderId) -> TiffinResult<bool> {
    let mut tx = self.pool.begin().await.context("starting delete transaction")?;
    sqlx::query("DELETE FROM order_items WHERE order_id = $1")
      .bind(id.get())
      .execute(&mut *tx)
      .await
      .with_context(|| format!("deleting items of order {}", id))?;
    let deleted = sqlx::query("DELETE FROM orders WHERE id = $1")
      .bind(id.get())
      .execute(&mut *tx)
      .await
      .with_context(|| format!("deleting order {}", id))?
      .rows_affected();
    tx.commit().await.context("committing delete transaction")?;
    Ok(deleted > 0)
  }
}
