// server/src/models/order.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;
use tiffin::{Order, OrderId, OrderStatus, RestaurantId, TiffinError, UserId};

/// `orders.status` is stored as the display literal ("Out for Delivery").
#[derive(Debug, Clone, FromRow)]
pub struct OrderRow {
  pub id: i64,
  pub user_id: i64,
  pub restaurant_id: i64,
  pub status: String,
  pub total_amount: Decimal,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl TryFrom<OrderRow> for Order {
  type Error = TiffinError;

  fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
    let status = row.status.parse::<OrderStatus>().map_err(|_| {
      TiffinError::from(anyhow::anyhow!(
        "order {} has unknown status '{}' in storage",
        row.id,
        row.status
      ))
    })?;
    Ok(Order {
      id: OrderId(row.id),
      user_id: UserId(row.user_id),
      restaurant_id: RestaurantId(row.restaurant_id),
      status,
      total_amount: tiffin::money::normalize(row.total_amount),
      created_at: row.created_at,
      updated_at: row.updated_at,
    })
  }
}
