pub mod models;
pub mod planner;
pub mod telemetry;

pub use models::{CoveragePath, PathMetadata, PathRecord, PlanningParameters};
pub use planner::{plan_coverage, summarize, PlanError, RAMP_FRACTION};
pub use telemetry::{sample_odometry, Trajectory, VehicleOdometry};
