use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::{
    db::DynCategoryStore,
    handlers::{category, health},
};

pub fn create_routes(store: DynCategoryStore) -> Router {
    Router::new()
        .route("/", get(health::health_handler))
        .route("/v1/categories", get(category::list_categories_handler))
        .route("/v1/categories", post(category::create_category_handler))
        .route("/v1/categories/:id", get(category::get_category_handler))
        .route("/v1/categories/:id", put(category::update_category_handler))
        .route("/v1/categories/:id", delete(category::delete_category_handler))
        .with_state(store)
}
