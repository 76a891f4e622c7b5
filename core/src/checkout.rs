// core/src/checkout.rs

//! Turns a session cart into a persisted order.

use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::cart::Cart;
use crate::error::{TiffinError, TiffinResult};
use crate::model::{Caller, DraftLine, MenuItemId, OrderDraft, OrderId, RestaurantId};
use crate::money;
use crate::ports::{MenuCatalog, OrderStore};

#[derive(Clone)]
pub struct CheckoutProcessor {
  catalog: Arc<dyn MenuCatalog>,
  orders: Arc<dyn OrderStore>,
}

impl CheckoutProcessor {
  pub fn new(catalog: Arc<dyn MenuCatalog>, orders: Arc<dyn OrderStore>) -> Self {
    CheckoutProcessor { catalog, orders }
  }

  /// Places an order for everything in `cart` and empties it.
  ///
  /// Prices are read once, here, and copied into the order lines. The cart is only cleared
  /// after the store has committed; on error it is untouched.
  #[instrument(name = "checkout::run", skip(self, cart, caller), fields(user_id = %caller.user_id), err(Display))]
  pub async fn checkout(&self, cart: &mut Cart, caller: &Caller) -> TiffinResult<OrderId> {
    let restaurant_id = match cart.restaurant_id {
      Some(restaurant_id) if !cart.is_empty() => restaurant_id,
      _ => {
        debug!("Checkout refused: cart is empty.");
        return Err(TiffinError::EmptyCart);
      }
    };

    let draft = self.price_cart(cart, caller, restaurant_id).await?;
    let order = self.orders.place_order(&draft).await?;

    *cart = Cart::new();
    info!(
      order_id = %order.id,
      %restaurant_id,
      lines = draft.lines.len(),
      total = %order.total_amount,
      "Order placed."
    );
    Ok(order.id)
  }

  async fn price_cart(
    &self,
    cart: &Cart,
    caller: &Caller,
    restaurant_id: RestaurantId,
  ) -> TiffinResult<OrderDraft> {
    let current: HashMap<MenuItemId, _> = self
      .catalog
      .menu_items(&cart.item_ids())
      .await?
      .into_iter()
      .map(|item| (item.id, item))
      .collect();

    let mut lines = Vec::with_capacity(cart.items.len());
    let mut total_amount = money::zero();
    for (id, &quantity) in &cart.items {
      let Some(item) = current.get(id) else {
        warn!(menu_item_id = %id, "Cart entry no longer resolves; left out of the order.");
        continue;
      };
      let price_each = money::normalize(item.price);
      total_amount += money::line_total(price_each, quantity);
      lines.push(DraftLine {
        menu_item_id: item.id,
        quantity,
        price_each,
      });
    }

    Ok(OrderDraft {
      user_id: caller.user_id,
      restaurant_id,
      lines,
      total_amount,
    })
  }
}
