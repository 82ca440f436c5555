use axum::{middleware, Router};
use tower_http::trace::TraceLayer;

use crate::context::attach_store;
use crate::routes;
use crate::state::AppState;

/// Build the axum router with every API endpoint.
pub fn build_router(state: AppState) -> Router {
    routes::router()
        .layer(middleware::from_fn_with_state(state.clone(), attach_store))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
