//! Route definitions and router construction.

use axum::Router;
use axum::routing::get;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::bootstrap::WebContext;
use crate::handlers;
use crate::state::AppState;

/// Create the main router with all page routes.
///
/// The create and edit forms live at the same paths as their submit
/// targets: GET shows the form, POST processes it. Delete keeps the
/// original site's link-driven GET with an `id` query parameter.
pub fn create_router(ctx: WebContext) -> Router {
    let state: AppState = Arc::new(ctx);

    Router::new()
        .route("/", get(handlers::movies::list))
        .route(
            "/new",
            get(handlers::movies::new_form).post(handlers::movies::create),
        )
        .route(
            "/edit",
            get(handlers::movies::edit).post(handlers::movies::update),
        )
        .route("/delete", get(handlers::movies::remove))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
pub(crate) async fn health_check() -> &'static str {
    "OK"
}
