// server/src/models/order_item.rs

use rust_decimal::Decimal;
use sqlx::FromRow;
use tiffin::model::OrderItemId;
use tiffin::{MenuItemId, OrderId, OrderItem, TiffinError};

#[derive(Debug, Clone, FromRow)]
pub struct OrderItemRow {
  pub id: i64,
  pub order_id: i64,
  pub menu_item_id: i64,
  pub quantity: i64,
  pub price_each: Decimal,
}

impl TryFrom<OrderItemRow> for OrderItem {
  type Error = TiffinError;

  fn try_from(row: OrderItemRow) -> Result<Self, Self::Error> {
    let quantity = u32::try_from(row.quantity).map_err(|_| {
      TiffinError::from(anyhow::anyhow!(
        "order item {} has out-of-range quantity {}",
        row.id,
        row.quantity
      ))
    })?;
    Ok(OrderItem {
      id: OrderItemId(row.id),
      order_id: OrderId(row.order_id),
      menu_item_id: MenuItemId(row.menu_item_id),
      quantity,
      price_each: tiffin::money::normalize(row.price_each),
    })
  }
}
