//! Skydeck CLI - operator tools for the dashboard backend.
//!
//! This crate provides the command line binaries:
//! - plan_path: offline coverage-path planner with JSON export
//! - save_path: plan via a running server and append to its history
//! - show_odometry: print the current vehicle odometry snapshot

pub mod client;
pub mod export;

pub use client::DashboardClient;
