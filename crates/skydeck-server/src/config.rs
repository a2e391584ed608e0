//! Server configuration from environment.

use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    /// Maximum number of records kept in the path history
    pub history_capacity: usize,
    /// Per-IP request budget for the login endpoint
    pub login_rate_limit_rps: u32,
    pub rate_limit_enabled: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SKYDECK_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3000),
            history_capacity: env::var("SKYDECK_HISTORY_CAPACITY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(50),
            login_rate_limit_rps: env::var("SKYDECK_LOGIN_RATE_LIMIT_RPS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5),
            rate_limit_enabled: env::var("SKYDECK_RATE_LIMIT_ENABLED")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(true),
        }
    }
}
