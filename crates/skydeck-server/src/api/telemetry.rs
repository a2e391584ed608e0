//! Vehicle odometry endpoint.

use axum::Json;
use chrono::Utc;
use skydeck_core::{sample_odometry, VehicleOdometry};

/// Current odometry snapshot for the telemetry page.
pub async fn vehicle_odometry() -> Json<VehicleOdometry> {
    Json(sample_odometry(Utc::now()))
}
