// server/src/db/seed.rs

//! Demo data: one admin account, two restaurants and four menu items.

use rust_decimal::Decimal;
use sqlx::PgPool;
use tiffin::memory::MemoryCatalog;
use tiffin::ports::UserStore;
use tiffin::{NewUser, Platform, TiffinError};
use tracing::{info, instrument};

use crate::config::AppConfig;
use crate::errors::Result;
use crate::services::auth_service::hash_password;

pub struct SeedRestaurant {
  pub name: &'static str,
  pub address: &'static str,
  /// (name, description, price in cents)
  pub items: &'static [(&'static str, &'static str, i64)],
}

pub const DEMO_RESTAURANTS: &[SeedRestaurant] = &[
  SeedRestaurant {
    name: "Spice Villa",
    address: "Main Street 1",
    items: &[
      ("Paneer Butter Masala", "Classic North Indian curry", 22000),
      ("Garlic Naan", "Tandoor-baked flatbread", 4000),
    ],
  },
  SeedRestaurant {
    name: "Urban Bites",
    address: "Central Avenue 99",
    items: &[
      ("Veg Burger", "Crispy patty with fresh veggies", 15000),
      ("French Fries", "Golden and crispy", 9000),
    ],
  },
];

fn price(cents: i64) -> Decimal {
  Decimal::new(cents, 2)
}

/// Registers the configured admin unless the email is already taken.
async fn seed_admin(platform: &Platform, config: &AppConfig) -> Result<()> {
  let admin = NewUser::parse("Admin", &config.seed_admin_email, &config.seed_admin_password)?.with_admin(true);
  let password_hash = hash_password(&admin.password)?;
  match platform.users().create_user(&admin, &password_hash).await {
    Ok(user) => info!(user_id = %user.id, "Seeded admin account."),
    Err(TiffinError::DuplicateEmail { .. }) => info!("Admin account already present."),
    Err(e) => return Err(e.into()),
  }
  Ok(())
}

#[instrument(name = "db::seed_postgres", skip_all, err(Display))]
pub async fn seed_postgres(pool: &PgPool, platform: &Platform, config: &AppConfig) -> Result<()> {
  seed_admin(platform, config).await?;

  let restaurant_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM restaurants")
    .fetch_one(pool)
    .await?;
  if restaurant_count > 0 {
    info!(restaurant_count, "Restaurants already present, skipping menu seed.");
    return Ok(());
  }

  let mut tx = pool.begin().await?;
  for restaurant in DEMO_RESTAURANTS {
    let restaurant_id: i64 =
      sqlx::query_scalar("INSERT INTO restaurants (name, address, is_active) VALUES ($1, $2, TRUE) RETURNING id")
        .bind(restaurant.name)
        .bind(restaurant.address)
        .fetch_one(&mut *tx)
        .await?;
    for (name, description, cents) in restaurant.items {
      sqlx::query(
        "INSERT INTO menu_items (restaurant_id, name, description, price, is_available) VALUES ($1, $2, $3, $4, TRUE)",
      )
      .bind(restaurant_id)
      .bind(*name)
      .bind(*description)
      .bind(price(*cents))
      .execute(&mut *tx)
      .await?;
    }
  }
  tx.commit().await?;
  info!(restaurants = DEMO_RESTAURANTS.len(), "Seeded demo menu.");
  Ok(())
}

#[instrument(name = "db::seed_memory", skip_all, err(Display))]
pub async fn seed_memory(catalog: &MemoryCatalog, platform: &Platform, config: &AppConfig) -> Result<()> {
  seed_admin(platform, config).await?;
  for restaurant in DEMO_RESTAURANTS {
    let seeded = catalog.add_restaurant(restaurant.name, restaurant.address);
    for (name, description, cents) in restaurant.items {
      catalog.add_menu_item(seeded.id, name, description, price(*cents))?;
    }
  }
  info!(restaurants = DEMO_RESTAURANTS.len(), "Seeded in-memory demo menu.");
  Ok(())
}
