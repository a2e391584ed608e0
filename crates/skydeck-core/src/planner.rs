//! Boustrophedon coverage planning over a rectangular survey area.
//!
//! The planner sweeps the area with back-and-forth passes across the width,
//! stepping along the length by the configured gap, and shapes the altitude
//! profile with linear ramps at both ends of the path.

use crate::models::{CoveragePath, PathMetadata, PlanningParameters};
use thiserror::Error;

/// Fraction of the normalized path length spent ramping altitude up at the
/// start and back down at the end.
pub const RAMP_FRACTION: f64 = 0.1;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    #[error("invalid planning parameter {field}: {value}")]
    InvalidParameter { field: &'static str, value: f64 },
}

/// Plan a zig-zag coverage path for the given area and parameters.
///
/// The result has `2 * (passes + 1)` waypoints with
/// `passes = max(1, round(length_m / gap_m))`. Ties in the rounding follow
/// `f64::round`, i.e. half away from zero. The function is pure: equal
/// parameters always produce an identical path.
pub fn plan_coverage(params: &PlanningParameters) -> Result<CoveragePath, PlanError> {
    validate(params)?;

    let PlanningParameters {
        width_m: width,
        length_m: length,
        gap_m: gap,
        max_altitude_m: max_alt,
        ..
    } = *params;

    let passes = (length / gap).round().max(1.0) as usize;

    let count = 2 * (passes + 1);
    let mut x = Vec::with_capacity(count);
    let mut y = Vec::with_capacity(count);

    for i in 0..=passes {
        // Clamped so the final pass never overshoots the area.
        let yy = (i as f64 * gap).min(length);
        if i % 2 == 0 {
            x.push(0.0);
            x.push(width);
        } else {
            x.push(width);
            x.push(0.0);
        }
        y.push(yy);
        y.push(yy);
    }

    let z = altitude_profile(x.len(), max_alt);

    Ok(CoveragePath { x, y, z })
}

/// Altitude for each of `count` waypoints: linear ramp up over the first
/// `RAMP_FRACTION` of the path, cruise, then a symmetric ramp down.
fn altitude_profile(count: usize, max_alt: f64) -> Vec<f64> {
    let span = (count.saturating_sub(1)).max(1) as f64;
    (0..count)
        .map(|k| {
            let t = k as f64 / span;
            let alt = if t < RAMP_FRACTION {
                max_alt * (t / RAMP_FRACTION)
            } else if t > 1.0 - RAMP_FRACTION {
                max_alt * ((1.0 - t) / RAMP_FRACTION)
            } else {
                max_alt
            };
            // Guard against floating-point undershoot near the endpoints.
            alt.max(0.0)
        })
        .collect()
}

/// Summarize a planned path: waypoint/pass counts, 3D polyline length and,
/// when a positive speed was supplied, the estimated flight time.
pub fn summarize(params: &PlanningParameters, path: &CoveragePath) -> PathMetadata {
    let mut total_distance_m = 0.0;
    for i in 1..path.len() {
        let dx = path.x[i] - path.x[i - 1];
        let dy = path.y[i] - path.y[i - 1];
        let dz = path.z[i] - path.z[i - 1];
        total_distance_m += (dx * dx + dy * dy + dz * dz).sqrt();
    }

    let est_flight_time_s = params
        .speed_mps
        .filter(|speed| *speed > 0.0)
        .map(|speed| total_distance_m / speed);

    PathMetadata {
        waypoint_count: path.len(),
        passes: path.len() / 2 - 1,
        total_distance_m,
        est_flight_time_s,
    }
}

fn validate(params: &PlanningParameters) -> Result<(), PlanError> {
    let positive = [
        ("width_m", params.width_m),
        ("length_m", params.length_m),
        ("gap_m", params.gap_m),
    ];
    for (field, value) in positive {
        if !value.is_finite() || value <= 0.0 {
            return Err(PlanError::InvalidParameter { field, value });
        }
    }

    let max_alt = params.max_altitude_m;
    if !max_alt.is_finite() || max_alt < 0.0 {
        return Err(PlanError::InvalidParameter {
            field: "max_altitude_m",
            value: max_alt,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(width: f64, length: f64, gap: f64, max_alt: f64) -> PlanningParameters {
        PlanningParameters {
            width_m: width,
            length_m: length,
            gap_m: gap,
            max_altitude_m: max_alt,
            height_m: None,
            speed_mps: None,
        }
    }

    #[test]
    fn example_area_produces_fourteen_waypoints() {
        let path = plan_coverage(&params(20.0, 12.0, 2.0, 3.0)).unwrap();

        assert_eq!(path.len(), 14);
        assert_eq!(
            path.y,
            vec![0.0, 0.0, 2.0, 2.0, 4.0, 4.0, 6.0, 6.0, 8.0, 8.0, 10.0, 10.0, 12.0, 12.0]
        );
        // Alternating sweep directions.
        assert_eq!(
            path.x,
            vec![0.0, 20.0, 20.0, 0.0, 0.0, 20.0, 20.0, 0.0, 0.0, 20.0, 20.0, 0.0, 0.0, 20.0]
        );
    }

    #[test]
    fn altitude_ramps_touch_ground_at_both_ends() {
        let path = plan_coverage(&params(20.0, 12.0, 2.0, 3.0)).unwrap();

        assert_eq!(path.z[0], 0.0);
        assert_eq!(*path.z.last().unwrap(), 0.0);
        // Second point sits on the ramp: t = 1/13, z = 3 * t / 0.1.
        let expected = 3.0 * (1.0 / 13.0) / RAMP_FRACTION;
        assert!((path.z[1] - expected).abs() < 1e-12);
        // Mid-path cruises at max altitude.
        assert_eq!(path.z[7], 3.0);
    }

    #[test]
    fn waypoints_stay_inside_the_area_and_altitude_band() {
        let p = params(35.0, 17.5, 3.0, 4.2);
        let path = plan_coverage(&p).unwrap();

        for i in 0..path.len() {
            let (x, y, z) = path.waypoint(i).unwrap();
            assert!((0.0..=p.width_m).contains(&x));
            assert!((0.0..=p.length_m).contains(&y));
            assert!((0.0..=p.max_altitude_m).contains(&z));
        }
    }

    #[test]
    fn y_values_are_non_decreasing_adjacent_pairs() {
        let path = plan_coverage(&params(10.0, 9.0, 2.0, 1.0)).unwrap();

        for pair in path.y.chunks(2) {
            assert_eq!(pair[0], pair[1]);
        }
        for w in path.y.windows(2) {
            assert!(w[0] <= w[1]);
        }
        // The final pass is clamped to the area length.
        assert_eq!(*path.y.last().unwrap(), 9.0);
    }

    #[test]
    fn waypoint_count_matches_pass_formula() {
        for (length, gap) in [(12.0, 2.0), (10.0, 3.0), (7.0, 7.0), (100.0, 1.0)] {
            let path = plan_coverage(&params(5.0, length, gap, 1.0)).unwrap();
            let passes = (length / gap).round().max(1.0) as usize;
            assert_eq!(path.len(), 2 * (passes + 1));
        }
    }

    #[test]
    fn degenerate_area_still_yields_one_pass() {
        // length/gap = 0.5 rounds half away from zero to 1.
        let path = plan_coverage(&params(5.0, 1.0, 2.0, 1.0)).unwrap();

        assert_eq!(path.len(), 4);
        assert_eq!(path.y, vec![0.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn gap_larger_than_length_clamps_to_single_pass() {
        let path = plan_coverage(&params(5.0, 1.0, 10.0, 1.0)).unwrap();

        assert_eq!(path.len(), 4);
        assert_eq!(path.y, vec![0.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn zero_altitude_degenerates_to_ground_level() {
        let path = plan_coverage(&params(5.0, 5.0, 1.0, 0.0)).unwrap();
        assert!(path.z.iter().all(|&z| z == 0.0));
    }

    #[test]
    fn planning_is_deterministic() {
        let p = params(20.0, 12.0, 2.0, 3.0);
        assert_eq!(plan_coverage(&p).unwrap(), plan_coverage(&p).unwrap());
    }

    #[test]
    fn non_positive_dimensions_are_rejected() {
        let err = plan_coverage(&params(10.0, 10.0, 0.0, 1.0)).unwrap_err();
        assert_eq!(
            err,
            PlanError::InvalidParameter { field: "gap_m", value: 0.0 }
        );

        assert!(plan_coverage(&params(-1.0, 10.0, 1.0, 1.0)).is_err());
        assert!(plan_coverage(&params(10.0, 0.0, 1.0, 1.0)).is_err());
        assert!(plan_coverage(&params(10.0, 10.0, -2.0, 1.0)).is_err());
    }

    #[test]
    fn non_finite_parameters_are_rejected() {
        assert!(plan_coverage(&params(f64::NAN, 10.0, 1.0, 1.0)).is_err());
        assert!(plan_coverage(&params(10.0, f64::INFINITY, 1.0, 1.0)).is_err());
        assert!(plan_coverage(&params(10.0, 10.0, 1.0, f64::NAN)).is_err());
    }

    #[test]
    fn negative_altitude_is_rejected() {
        let err = plan_coverage(&params(10.0, 10.0, 1.0, -3.0)).unwrap_err();
        assert_eq!(
            err,
            PlanError::InvalidParameter { field: "max_altitude_m", value: -3.0 }
        );
    }

    #[test]
    fn summary_reports_distance_and_flight_time() {
        let mut p = params(20.0, 12.0, 2.0, 0.0);
        p.speed_mps = Some(2.0);

        let path = plan_coverage(&p).unwrap();
        let meta = summarize(&p, &path);

        assert_eq!(meta.waypoint_count, 14);
        assert_eq!(meta.passes, 6);
        // Ground-level path: 7 sweeps of 20 m plus 6 steps of 2 m.
        assert!((meta.total_distance_m - 152.0).abs() < 1e-9);
        assert!((meta.est_flight_time_s.unwrap() - 76.0).abs() < 1e-9);
    }

    #[test]
    fn summary_omits_flight_time_without_speed() {
        let p = params(20.0, 12.0, 2.0, 3.0);
        let path = plan_coverage(&p).unwrap();
        assert_eq!(summarize(&p, &path).est_flight_time_s, None);
    }
}
