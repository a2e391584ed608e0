//! Synthetic vehicle odometry for the dashboard demo.
//!
//! Stands in for a live autopilot feed: a helix-ish reference trajectory
//! plus the vehicle state at its tip. Deterministic for a given timestamp,
//! so the visualization pages always have something stable to render.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Samples in the generated trajectory.
pub const TRAJECTORY_SAMPLES: usize = 200;

/// Seconds between consecutive trajectory samples.
pub const SAMPLE_STEP_S: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Attitude as roll/pitch/yaw in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttitudeRpy {
    pub roll: f64,
    pub pitch: f64,
    pub yaw: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyVelocity {
    pub vx: f64,
    pub vy: f64,
    pub vz: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyAccel {
    pub ax: f64,
    pub ay: f64,
    pub az: f64,
}

/// Recent flight trajectory as three parallel coordinate sequences, the
/// layout 3D scatter plots consume directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
}

/// One odometry snapshot as served to the telemetry page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleOdometry {
    pub position: Vec3,
    pub heading_rpy: AttitudeRpy,
    pub velocity: BodyVelocity,
    pub accel: BodyAccel,
    pub timestamp: DateTime<Utc>,
    pub trajectory: Trajectory,
}

/// Generate the demo odometry snapshot.
///
/// The trajectory is `x = t`, `y = sin t`, `z = 0.5·cos 0.7t` sampled at
/// `SAMPLE_STEP_S`; the reported position is the final sample.
pub fn sample_odometry(timestamp: DateTime<Utc>) -> VehicleOdometry {
    let mut x = Vec::with_capacity(TRAJECTORY_SAMPLES);
    let mut y = Vec::with_capacity(TRAJECTORY_SAMPLES);
    let mut z = Vec::with_capacity(TRAJECTORY_SAMPLES);

    for i in 0..TRAJECTORY_SAMPLES {
        let t = i as f64 * SAMPLE_STEP_S;
        x.push(t);
        y.push(t.sin());
        z.push(0.5 * (t * 0.7).cos());
    }

    let tip = TRAJECTORY_SAMPLES - 1;
    let position = Vec3 {
        x: x[tip],
        y: y[tip],
        z: z[tip],
    };

    VehicleOdometry {
        position,
        heading_rpy: AttitudeRpy {
            roll: 0.1,
            pitch: -0.05,
            yaw: 1.2,
        },
        velocity: BodyVelocity {
            vx: 0.9,
            vy: 0.0,
            vz: -0.02,
        },
        accel: BodyAccel {
            ax: 0.01,
            ay: -0.02,
            az: 0.0,
        },
        timestamp,
        trajectory: Trajectory { x, y, z },
    }
}
