//! API routes for the Skydeck server.

pub mod auth;
pub mod paths;
pub mod telemetry;
mod routes;

use crate::state::AppState;
use axum::Router;
use std::sync::Arc;

pub fn routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    routes::create_router(state)
}
