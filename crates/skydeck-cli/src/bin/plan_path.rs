//! Offline coverage-path planner.
//!
//! Computes the zig-zag path locally and prints the record JSON, or writes
//! it to a timestamped file like the dashboard's export button.

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use skydeck_cli::export::export_filename;
use skydeck_core::{plan_coverage, summarize, PathRecord, PlanningParameters};

#[derive(Parser, Debug)]
#[command(name = "plan_path", about = "Generate a zig-zag coverage path")]
struct Args {
    /// Area width in meters
    #[arg(long, default_value_t = 20.0)]
    width_m: f64,

    /// Area length in meters
    #[arg(long, default_value_t = 12.0)]
    length_m: f64,

    /// Spacing between passes in meters
    #[arg(long, default_value_t = 2.0)]
    gap_m: f64,

    /// Cruise altitude in meters
    #[arg(long, default_value_t = 3.0)]
    max_altitude_m: f64,

    /// Surveyed ceiling in meters, recorded with the request
    #[arg(long)]
    height_m: Option<f64>,

    /// Average speed in m/s, used for the flight-time estimate
    #[arg(long)]
    speed_mps: Option<f64>,

    /// Write the record to a `path-<timestamp>.json` file instead of stdout
    #[arg(long)]
    export: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let params = PlanningParameters {
        width_m: args.width_m,
        length_m: args.length_m,
        gap_m: args.gap_m,
        max_altitude_m: args.max_altitude_m,
        height_m: args.height_m,
        speed_mps: args.speed_mps,
    };

    let path = plan_coverage(&params)?;
    let metadata = summarize(&params, &path);

    let record = PathRecord {
        id: uuid::Uuid::new_v4().to_string(),
        created_at: Utc::now(),
        params,
        path,
        metadata,
    };

    let json = serde_json::to_string_pretty(&record)?;
    if args.export {
        let filename = export_filename(record.created_at);
        std::fs::write(&filename, json)?;
        println!("Wrote {}", filename);
    } else {
        println!("{}", json);
    }

    Ok(())
}
