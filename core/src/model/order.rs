// core/src/model/order.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::{MenuItemId, OrderId, OrderItemId, RestaurantId, UserId};
use crate::error::TiffinError;

/// Fulfilment progress of an order. The string literals are what storage and clients see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
  Pending,
  Preparing,
  #[serde(rename = "Out for Delivery")]
  OutForDelivery,
  Delivered,
}

impl OrderStatus {
  pub const ALL: [OrderStatus; 4] = [
    OrderStatus::Pending,
    OrderStatus::Preparing,
    OrderStatus::OutForDelivery,
    OrderStatus::Delivered,
  ];

  pub fn as_str(self) -> &'static str {
    match self {
      OrderStatus::Pending => "Pending",
      OrderStatus::Preparing => "Preparing",
      OrderStatus::OutForDelivery => "Out for Delivery",
      OrderStatus::Delivered => "Delivered",
    }
  }
}

impl fmt::Display for OrderStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for OrderStatus {
  type Err = TiffinError;

  // Exact match against the four literals; no trimming, no case folding.
  fn from_str(raw: &str) -> Result<Self, Self::Err> {
    OrderStatus::ALL
      .into_iter()
      .find(|status| status.as_str() == raw)
      .ok_or_else(|| TiffinError::InvalidStatus { value: raw.to_string() })
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
  pub id: OrderId,
  pub user_id: UserId,
  pub restaurant_id: RestaurantId,
  pub status: OrderStatus,
  /// Sum of `price_each * quantity` over the order's items, fixed at creation.
  pub total_amount: Decimal,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
  pub id: OrderItemId,
  pub order_id: OrderId,
  pub menu_item_id: MenuItemId,
  pub quantity: u32,
  /// Menu price at checkout time. Later price changes never reach this field.
  pub price_each: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderDetails {
  pub order: Order,
  pub items: Vec<OrderItem>,
}

/// A priced order that has not been written yet. Produced by checkout, consumed by
/// [`OrderStore::place_order`](crate::ports::OrderStore::place_order).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDraft {
  pub user_id: UserId,
  pub restaurant_id: RestaurantId,
  pub lines: Vec<DraftLine>,
  pub total_amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftLine {
  pub menu_item_id: MenuItemId,
  pub quantity: u32,
  pub price_each: Decimal,
}
