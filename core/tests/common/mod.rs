// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use std::str::FromStr;
use tiffin::memory::{MemoryCatalog, MemoryOrderStore};
use tiffin::ports::UserStore;
use tiffin::{Caller, MenuItem, NewUser, Platform, Restaurant, TransitionPolicy, User};
use tracing::Level;

// --- Helper for Tracing Setup (call once per test run if needed) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

pub fn money(raw: &str) -> Decimal {
  Decimal::from_str(raw).unwrap()
}

/// A platform seeded with the demo menu:
/// Spice Villa (Paneer Butter Masala 220.00, Garlic Naan 40.00) and
/// Urban Bites (Veg Burger 150.00, French Fries 90.00), plus one admin and two customers.
pub struct Fixture {
  pub platform: Platform,
  pub catalog: MemoryCatalog,
  pub orders: MemoryOrderStore,
  pub spice_villa: Restaurant,
  pub urban_bites: Restaurant,
  pub paneer: MenuItem,
  pub naan: MenuItem,
  pub burger: MenuItem,
  pub fries: MenuItem,
  pub admin: User,
  pub alice: User,
  pub bob: User,
}

impl Fixture {
  pub async fn new() -> Self {
    Self::with_policy(TransitionPolicy::Unrestricted).await
  }

  pub async fn with_policy(policy: TransitionPolicy) -> Self {
    setup_tracing();
    let (platform, catalog, orders) = Platform::in_memory(policy);

    let spice_villa = catalog.add_restaurant("Spice Villa", "Main Street 1");
    let urban_bites = catalog.add_restaurant("Urban Bites", "Central Avenue 99");
    let paneer = catalog
      .add_menu_item(spice_villa.id, "Paneer Butter Masala", "Classic North Indian curry", money("220.00"))
      .unwrap();
    let naan = catalog
      .add_menu_item(spice_villa.id, "Garlic Naan", "Tandoor-baked flatbread", money("40.00"))
      .unwrap();
    let burger = catalog
      .add_menu_item(urban_bites.id, "Veg Burger", "Crispy patty with fresh veggies", money("150.00"))
      .unwrap();
    let fries = catalog
      .add_menu_item(urban_bites.id, "French Fries", "Golden and crispy", money("90.00"))
      .unwrap();

    let admin = create_user(&platform, "Admin", "admin@example.com", true).await;
    let alice = create_user(&platform, "Alice", "alice@example.com", false).await;
    let bob = create_user(&platform, "Bob", "bob@example.com", false).await;

    Fixture {
      platform,
      catalog,
      orders,
      spice_villa,
      urban_bites,
      paneer,
      naan,
      burger,
      fries,
      admin,
      alice,
      bob,
    }
  }

  pub fn admin_caller(&self) -> Caller {
    self.admin.as_caller()
  }

  pub fn alice_caller(&self) -> Caller {
    self.alice.as_caller()
  }

  pub fn bob_caller(&self) -> Caller {
    self.bob.as_caller()
  }
}

async fn create_user(platform: &Platform, name: &str, email: &str, is_admin: bool) -> User {
  let new_user = NewUser::parse(name, email, "secret").unwrap().with_admin(is_admin);
  platform.users().create_user(&new_user, "not-a-real-hash").await.unwrap()
}
