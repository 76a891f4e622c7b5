// server/src/web/routes.rs

use actix_web::web;

use crate::web::handlers::{
  admin_handlers, auth_handlers, cart_handlers, checkout_handlers, order_handlers, restaurant_handlers,
};

async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api/v1")
      .route("/health", web::get().to(health_check_handler))
      .service(
        web::scope("/auth")
          .route("/signup", web::post().to(auth_handlers::signup_handler))
          .route("/signin", web::post().to(auth_handlers::signin_handler))
          .route("/signout", web::post().to(auth_handlers::signout_handler)),
      )
      .service(
        web::scope("/restaurants")
          .route("", web::get().to(restaurant_handlers::list_restaurants_handler))
          .route("/{restaurant_id}/menu", web::get().to(restaurant_handlers::restaurant_menu_handler)),
      )
      .service(
        web::scope("/cart")
          .route("", web::get().to(cart_handlers::view_cart_handler))
          .route("/add", web::post().to(cart_handlers::add_to_cart_handler))
          .route("/clear", web::post().to(cart_handlers::clear_cart_handler)),
      )
      .route("/checkout", web::post().to(checkout_handlers::checkout_handler))
      .service(
        web::scope("/orders")
          .route("", web::get().to(order_handlers::order_history_handler))
          .route("/{order_id}", web::get().to(order_handlers::order_details_handler))
          .route("/{order_id}/status", web::get().to(order_handlers::order_status_handler)),
      )
      .service(
        web::scope("/admin")
          .route("/orders", web::get().to(admin_handlers::list_all_orders_handler))
          .route("/orders/{order_id}/status", web::post().to(admin_handlers::set_order_status_handler))
          .route("/orders/{order_id}", web::delete().to(admin_handlers::delete_order_handler)),
      ),
  );
}
