//! Mock login and session middleware for protected endpoints.
//!
//! The login endpoint validates credential shape only and issues an opaque
//! session token; there is no account store behind it.

use axum::{
    extract::{ConnectInfo, Request, State},
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use dashmap::DashMap;
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Validate credentials and issue a session token.
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> (StatusCode, Json<serde_json::Value>) {
    if !is_valid_email(&req.email) {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": "Invalid email" })),
        );
    }
    if req.password.chars().count() < 6 {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": "Password too short" })),
        );
    }

    let token = state.create_session(&req.email);
    tracing::info!("Issued session token for {}", req.email);

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "ok": true,
            "token": token,
        })),
    )
}

/// Credential-shape check: `local@domain.tld` with no whitespace, a single
/// `@`, and a dot splitting the domain into non-empty parts.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

/// Extract the session token from `Authorization: Bearer <token>`.
pub fn extract_session_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?;
    let text = value.to_str().ok()?;
    let token = text.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

/// Middleware that requires a valid session token on every request.
pub async fn require_session(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    match extract_session_token(request.headers()) {
        Some(token) if state.validate_session(&token) => next.run(request).await,
        Some(_) => (
            StatusCode::FORBIDDEN,
            Json(serde_json::json!({
                "error": "Invalid session token",
                "hint": "Log in again via /v1/auth/login"
            })),
        )
            .into_response(),
        None => (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({
                "error": "Authorization required",
                "hint": "Add header: Authorization: Bearer <token>"
            })),
        )
            .into_response(),
    }
}

/// Simple per-IP rate limiter for the login endpoint.
#[derive(Clone)]
pub struct RateLimiter {
    requests: Arc<DashMap<String, Vec<Instant>>>,
    max_rps: u32,
    enabled: bool,
}

impl RateLimiter {
    pub fn new(max_rps: u32, enabled: bool) -> Self {
        Self {
            requests: Arc::new(DashMap::new()),
            max_rps,
            enabled,
        }
    }

    /// Check if a request from `ip` should be allowed. Returns true if allowed.
    pub fn check(&self, ip: &str) -> bool {
        if !self.enabled {
            return true;
        }

        let now = Instant::now();
        let window = Duration::from_secs(1);

        let mut entry = self.requests.entry(ip.to_string()).or_default();
        let timestamps = entry.value_mut();
        timestamps.retain(|t| now.duration_since(*t) < window);

        if timestamps.len() < self.max_rps as usize {
            timestamps.push(now);
            true
        } else {
            false
        }
    }
}

/// Rate limiting middleware for the login endpoint.
pub async fn rate_limit(
    State(limiter): State<RateLimiter>,
    request: Request,
    next: Next,
) -> Response {
    let ip = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    if limiter.check(&ip) {
        next.run(request).await
    } else {
        (
            StatusCode::TOO_MANY_REQUESTS,
            Json(serde_json::json!({
                "error": "Rate limit exceeded",
                "retry_after": "1 second"
            })),
        )
            .into_response()
    }
}
