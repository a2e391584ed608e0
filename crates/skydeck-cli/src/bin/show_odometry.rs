//! Print the current vehicle odometry from a running Skydeck server.

use anyhow::Result;
use clap::Parser;
use skydeck_cli::DashboardClient;

#[derive(Parser, Debug)]
#[command(name = "show_odometry", about = "Fetch and print the vehicle odometry snapshot")]
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
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut client = DashboardClient::new(&args.server);
    client.login(&args.email, &args.password)?;

    let odometry = client.vehicle_odometry()?;
    let p = odometry.position;
    let h = odometry.heading_rpy;
    let v = odometry.velocity;
    let a = odometry.accel;

    println!("position:  x {:.3}, y {:.3}, z {:.3}", p.x, p.y, p.z);
    println!("heading:   roll {:.2}, pitch {:.2}, yaw {:.2}", h.roll, h.pitch, h.yaw);
    println!("velocity:  vx {:.2}, vy {:.2}, vz {:.2}", v.vx, v.vy, v.vz);
    println!("accel:     ax {:.2}, ay {:.2}, az {:.2}", a.ax, a.ay, a.az);
    println!("timestamp: {}", odometry.timestamp.to_rfc3339());
    println!("trajectory samples: {}", odometry.trajectory.x.len());

    Ok(())
}
