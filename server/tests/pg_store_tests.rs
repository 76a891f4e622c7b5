// tests/pg_store_tests.rs
//! PostgreSQL order store checks. They need a scratch database:
//! `DATABASE_URL=postgres://... cargo test -p tiffin_server --test pg_store_tests -- --ignored`

mod common;

use rust_decimal::Decimal;
use sqlx::PgPool;
use tiffin::model::{DraftLine, OrderDraft};
use tiffin::ports::{OrderStore, UserStore};
use tiffin::{MenuItemId, NewUser, OrderStatus, RestaurantId, TiffinError, UserId};
use tiffin_server::db::{self, PgOrderStore, PgUserStore};

const SKIP: &str = "SKIP-PG: set DATABASE_URL to run";

async fn scratch_pool() -> Option<PgPool> {
  common::setup_tracing();
  let url = std::env::var("DATABASE_URL").ok()?;
  let pool = db::connect(&url, 2).await.unwrap();
  db::apply_schema(&pool).await.unwrap();
  Some(pool)
}

/// A fresh user plus a restaurant with one 220.00 dish.
async fn seed_customer(pool: &PgPool) -> (UserId, RestaurantId, MenuItemId) {
  let email = format!("pg-{}@example.com", uuid::Uuid::new_v4());
  let user = PgUserStore::new(pool.clone())
    .create_user(&NewUser::parse("Pg Tester", &email, "pw").unwrap(), "hash")
    .await
    .unwrap();
  let restaurant_id: i64 = sqlx::query_scalar("INSERT INTO restaurants (name, address) VALUES ('Spice Villa', 'Main Street 1') RETURNING id")
    .fetch_one(pool)
    .await
    .unwrap();
  let menu_item_id: i64 = sqlx::query_scalar(
    "INSERT INTO menu_items (restaurant_id, name, price) VALUES ($1, 'Paneer Butter Masala', 220.00) RETURNING id",
  )
  .bind(restaurant_id)
  .fetch_one(pool)
  .await
  .unwrap();
  (user.id, RestaurantId(restaurant_id), MenuItemId(menu_item_id))
}

fn draft(user_id: UserId, restaurant_id: RestaurantId, menu_item_id: MenuItemId, quantity: u32) -> OrderDraft {
  let price_each = Decimal::new(22000, 2);
  OrderDraft {
    user_id,
    restaurant_id,
    lines: vec![DraftLine {
      menu_item_id,
      quantity,
      price_each,
    }],
    total_amount: price_each * Decimal::from(quantity),
  }
}

#[actix_web::test]
#[ignore = "requires PostgreSQL; set DATABASE_URL and run with --ignored"]
async fn large_order_round_trips_and_deletes_with_items() {
  let Some(pool) = scratch_pool().await else {
    eprintln!("{}", SKIP);
    return;
  };
  let store = PgOrderStore::new(pool.clone());
  let (user_id, restaurant_id, paneer) = seed_customer(&pool).await;

  let order = store
    .place_order(&draft(user_id, restaurant_id, paneer, 3_000_000_000))
    .await
    .unwrap();
  assert_eq!(order.status, OrderStatus::Pending);
  assert_eq!(order.total_amount.to_string(), "660000000000.00");

  let items = store.order_items(order.id).await.unwrap();
  assert_eq!(items.len(), 1);
  assert_eq!(items[0].quantity, 3_000_000_000);
  assert_eq!(items[0].price_each.to_string(), "220.00");

  assert!(store.delete_order(order.id).await.unwrap());
  assert!(store.order(order.id).await.unwrap().is_none());
  assert!(store.order_items(order.id).await.unwrap().is_empty());
  assert!(!store.delete_order(order.id).await.unwrap());
}

#[actix_web::test]
#[ignore = "requires PostgreSQL; set DATABASE_URL and run with --ignored"]
async fn failed_item_insert_rolls_back_the_order() {
  let Some(pool) = scratch_pool().await else {
    eprintln!("{}", SKIP);
    return;
  };
  let store = PgOrderStore::new(pool.clone());
  let (user_id, restaurant_id, paneer) = seed_customer(&pool).await;

  // Quantity 0 violates the order_items CHECK after the header row is already written.
  let result = store.place_order(&draft(user_id, restaurant_id, paneer, 0)).await;

  assert!(matches!(result, Err(TiffinError::Storage { .. })));
  assert!(store.orders_for_user(user_id).await.unwrap().is_empty());
}
