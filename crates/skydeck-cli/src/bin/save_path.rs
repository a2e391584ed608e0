//! Plan a coverage path via a running Skydeck server and save it to the
//! server-side history, optionally downloading the record like the
//! dashboard's Save & Export button.

use anyhow::Result;
use clap::Parser;
use skydeck_cli::export::export_filename;
use skydeck_cli::DashboardClient;
use skydeck_core::PlanningParameters;

#[derive(Parser, Debug)]
#[command(name = "save_path", about = "Plan and save a coverage path on the server")]
struct Args {
    /// Server base URL
    #[arg(long, default_value = "http://localhost:3000")]
    server: String,

    /// Login email for the demo session
    #[arg(long, default_value = "operator@example.com")]
    email: String,

    /// Login password
    #[arg(long, default_value = "demo-pass")]
    password: String,

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

    /// Also write the saved record to a `path-<timestamp>.json` file
    #[arg(long)]
    export: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut client = DashboardClient::new(&args.server);
    client.login(&args.email, &args.password)?;

    let params = PlanningParameters {
        width_m: args.width_m,
        length_m: args.length_m,
        gap_m: args.gap_m,
        max_altitude_m: args.max_altitude_m,
        height_m: args.height_m,
        speed_mps: args.speed_mps,
    };

    let record = client.save(&params)?;
    println!(
        "Saved record {} ({} waypoints, {:.1} m)",
        record.id, record.metadata.waypoint_count, record.metadata.total_distance_m
    );

    if args.export {
        let filename = export_filename(record.created_at);
        std::fs::write(&filename, serde_json::to_string_pretty(&record)?)?;
        println!("Wrote {}", filename);
    }

    Ok(())
}
