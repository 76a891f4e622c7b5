// core/examples/order_walkthrough.rs

use rust_decimal::Decimal;
use tiffin::ports::UserStore;
use tiffin::{Cart, NewUser, Platform, TiffinError, TiffinResult, TransitionPolicy};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> TiffinResult<()> {
  // Initialize tracing (optional, for demonstration)
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Order Walkthrough ---");

  // 1. Stores and a small menu
  let (platform, catalog, _orders) = Platform::in_memory(TransitionPolicy::Unrestricted);
  let villa = catalog.add_restaurant("Spice Villa", "Main Street 1");
  let bites = catalog.add_restaurant("Urban Bites", "Central Avenue 99");
  let paneer = catalog.add_menu_item(villa.id, "Paneer Butter Masala", "Classic North Indian curry", Decimal::new(22000, 2))?;
  let naan = catalog.add_menu_item(villa.id, "Garlic Naan", "Tandoor-baked flatbread", Decimal::new(4000, 2))?;
  let burger = catalog.add_menu_item(bites.id, "Veg Burger", "Crispy patty with fresh veggies", Decimal::new(15000, 2))?;

  // 2. A customer and an admin
  let customer = platform
    .users()
    .create_user(&NewUser::parse("Asha", "asha@example.com", "pw")?, "hash")
    .await?
    .as_caller();
  let admin = platform
    .users()
    .create_user(&NewUser::parse("Admin", "admin@example.com", "pw")?.with_admin(true), "hash")
    .await?
    .as_caller();

  // 3. Fill the cart; the burger is from another restaurant and bounces
  let mut cart = Cart::new();
  platform.cart().add(&mut cart, paneer.id, 1).await?;
  platform.cart().add(&mut cart, naan.id, 2).await?;
  match platform.cart().add(&mut cart, burger.id, 1).await {
    Err(TiffinError::CrossRestaurantConflict { .. }) => warn!("Burger refused: cart is for Spice Villa."),
    other => other?,
  }
  let view = platform.cart().view(&cart).await?;
  info!("Cart has {} lines, total {}", view.lines.len(), view.total);

  // 4. Checkout and follow the order
  let order_id = platform.checkout().checkout(&mut cart, &customer).await?;
  info!("Placed order {}", order_id);

  for next in ["Preparing", "Out for Delivery", "Delivered"] {
    platform.status().set_status(order_id, next, &admin).await?;
    let seen = platform.status().status(order_id, &customer).await?;
    info!("Customer sees '{}' (updated {})", seen.status, seen.updated_at);
  }

  let details = platform.orders().details(order_id, &customer).await?;
  info!(
    "Final order: {} items, total {}, status {}",
    details.items.len(),
    details.order.total_amount,
    details.order.status
  );
  Ok(())
}
