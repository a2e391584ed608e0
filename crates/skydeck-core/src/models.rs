//! Core data models for the Skydeck dashboard.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Parameters for one coverage-path computation.
///
/// Distances are meters. `height_m` and `speed_mps` come from the planning
/// form but do not influence the path geometry: the height is recorded with
/// the request, the speed only feeds the flight-time estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningParameters {
    /// Area extent along the across axis
    pub width_m: f64,
    /// Area extent along the along axis
    pub length_m: f64,
    /// Spacing between successive passes
    pub gap_m: f64,
    /// Cruise altitude during the flat portion of the path
    pub max_altitude_m: f64,
    /// Ceiling of the surveyed volume (recorded only)
    #[serde(default)]
    pub height_m: Option<f64>,
    /// Average vehicle speed, used for the flight-time estimate
    #[serde(default)]
    pub speed_mps: Option<f64>,
}

/// A planned 3D path as three parallel coordinate sequences.
///
/// Index `i` across `x`/`y`/`z` is one waypoint; the order is the traversal
/// order. The split layout is what plotting frontends consume directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoveragePath {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
}

impl CoveragePath {
    /// Number of waypoints.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Waypoint at index `i` as `(x, y, z)`.
    pub fn waypoint(&self, i: usize) -> Option<(f64, f64, f64)> {
        match (self.x.get(i), self.y.get(i), self.z.get(i)) {
            (Some(&x), Some(&y), Some(&z)) => Some((x, y, z)),
            _ => None,
        }
    }
}

/// Summary figures derived from a planned path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathMetadata {
    pub waypoint_count: usize,
    /// Number of sweeps across the width
    pub passes: usize,
    /// 3D polyline length in meters
    pub total_distance_m: f64,
    /// Estimated flight time, present when a positive speed was given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub est_flight_time_s: Option<f64>,
}

/// A computed path together with its originating parameters, as persisted
/// in the history log and exported to operators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathRecord {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub params: PlanningParameters,
    pub path: CoveragePath,
    pub metadata: PathMetadata,
}
