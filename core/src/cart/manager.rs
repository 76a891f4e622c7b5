// core/src/cart/manager.rs

use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use super::{Cart, CartLine, CartView};
use crate::error::{TiffinError, TiffinResult};
use crate::model::MenuItemId;
use crate::money;
use crate::ports::MenuCatalog;

#[derive(Clone)]
pub struct CartManager {
  catalog: Arc<dyn MenuCatalog>,
}

impl CartManager {
  pub fn new(catalog: Arc<dyn MenuCatalog>) -> Self {
    CartManager { catalog }
  }

  /// Adds `requested` units (floored at 1) of a menu item.
  ///
  /// On any error the cart is left exactly as it was.
  #[instrument(name = "cart::add", skip(self, cart), fields(cart_restaurant = ?cart.restaurant_id), err(Display))]
  pub async fn add(&self, cart: &mut Cart, menu_item_id: MenuItemId, requested: i64) -> TiffinResult<()> {
    let item = self
      .catalog
      .menu_item(menu_item_id)
      .await?
      .ok_or_else(|| TiffinError::not_found("Menu item", menu_item_id))?;

    if let Some(cart_restaurant) = cart.restaurant_id {
      if cart_restaurant != item.restaurant_id {
        warn!(
          %cart_restaurant,
          item_restaurant = %item.restaurant_id,
          "Rejected add: item belongs to another restaurant."
        );
        return Err(TiffinError::CrossRestaurantConflict {
          cart_restaurant,
          item_restaurant: item.restaurant_id,
        });
      }
    }

    let quantity = u32::try_from(requested.max(1))
      .map_err(|_| TiffinError::Validation(format!("Quantity {} is too large.", requested)))?;
    let new_quantity = cart
      .quantity_of(menu_item_id)
      .checked_add(quantity)
      .ok_or_else(|| TiffinError::Validation("Quantity is too large.".to_string()))?;

    cart.restaurant_id = Some(item.restaurant_id);
    cart.items.insert(menu_item_id, new_quantity);
    info!(%menu_item_id, added = quantity, new_quantity, "Item added to cart.");
    Ok(())
  }

  /// Prices the cart with current menu prices. Items that no longer exist are skipped.
  #[instrument(name = "cart::view", skip(self, cart), fields(lines = cart.items.len()), err(Display))]
  pub async fn view(&self, cart: &Cart) -> TiffinResult<CartView> {
    let mut view = CartView {
      restaurant_id: cart.restaurant_id,
      lines: Vec::with_capacity(cart.items.len()),
      total: money::zero(),
    };
    if cart.is_empty() {
      return Ok(view);
    }

    let live: HashMap<MenuItemId, _> = self
      .catalog
      .menu_items(&cart.item_ids())
      .await?
      .into_iter()
      .map(|item| (item.id, item))
      .collect();

    for (id, &quantity) in &cart.items {
      let Some(item) = live.get(id) else {
        debug!(menu_item_id = %id, "Skipping cart entry that no longer resolves.");
        continue;
      };
      let line_total = money::line_total(item.price, quantity);
      view.total += line_total;
      view.lines.push(CartLine {
        item: item.clone(),
        quantity,
        line_total,
      });
    }
    Ok(view)
  }

  pub fn clear(&self, cart: &mut Cart) {
    *cart = Cart::new();
    debug!("Cart cleared.");
  }
}
