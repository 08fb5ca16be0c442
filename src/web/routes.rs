use axum::{routing::get, Router};

use crate::web::handlers::{
    api::{api_not_found, health_check, list_provinces, search_municipalities, ApiState},
    static_files::serve_index,
};

pub fn create_routes(state: ApiState) -> Router {
    // API routes
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/municipalities", get(search_municipalities))
        .route("/provinces", get(list_provinces))
        .fallback(api_not_found)
        .with_state(state);

    // Everything else gets the location picker page
    Router::new()
        .nest("/api", api_routes)
        .fallback(serve_index)
}
