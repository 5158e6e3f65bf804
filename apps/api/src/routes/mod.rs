pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    services::{ServeDir, ServeFile},
};

use crate::errors::panic_response;
use crate::frameworks::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();

    Router::new()
        .route("/health", get(health::health_handler))
        // Framework API
        .route(
            "/api/framework-types",
            get(handlers::handle_framework_types),
        )
        .route("/api/examples", get(handlers::handle_examples))
        .route(
            "/api/generate-framework",
            post(handlers::handle_generate_framework),
        )
        // Landing page and front-end assets
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(CatchPanicLayer::custom(panic_response))
        .with_state(state)
}
