//! REST API routes.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::api::auth::{self, RateLimiter};
use crate::api::{paths, telemetry};
use crate::state::AppState;

/// Create the API router.
pub fn create_router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    let login_limiter = RateLimiter::new(
        state.config().login_rate_limit_rps,
        state.config().rate_limit_enabled,
    );

    // Public routes (no session required)
    let public_routes = Router::new()
        .route("/v1/auth/login", post(auth::login))
        .layer(middleware::from_fn_with_state(login_limiter, auth::rate_limit));

    // Everything behind the dashboard login
    let protected_routes = Router::new()
        .route("/v1/paths/plan", post(paths::plan_path))
        .route("/v1/paths", post(paths::save_path))
        .route("/v1/paths", get(paths::list_paths))
        .route("/v1/paths/:id", get(paths::get_path))
        .route("/v1/paths/:id/export", get(paths::export_path))
        .route("/v1/vehicle_odometry", get(telemetry::vehicle_odometry))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_session,
        ));

    public_routes.merge(protected_routes)
}
