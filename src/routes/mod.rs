mod categories;
mod health;
mod products;

use axum::{Router, routing::get};

use crate::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route(
            "/Categorias",
            get(categories::get_all_categories).post(categories::create_category),
        )
        .route(
            "/Categorias/produtos",
            get(categories::get_categories_with_products),
        )
        .route(
            "/Categorias/{id}",
            get(categories::get_category)
                .put(categories::update_category)
                .delete(categories::delete_category),
        )
        .route(
            "/Produtos",
            get(products::get_all_products).post(products::create_product),
        )
        .route(
            "/Produtos/{id}",
            get(products::get_product)
                .put(products::update_product)
                .delete(products::delete_product),
        )
}
