//! Blocking HTTP client for the Skydeck server.

use anyhow::{anyhow, Result};
use serde::Deserialize;
use serde_json::json;
use skydeck_core::{CoveragePath, PathMetadata, PathRecord, PlanningParameters, VehicleOdometry};

/// Client for the dashboard backend, holding one login session.
pub struct DashboardClient {
    base_url: String,
    session_token: Option<String>,
    client: reqwest::blocking::Client,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: String,
}

#[derive(Debug, Deserialize)]
pub struct PlanResponse {
    pub ok: bool,
    pub path: CoveragePath,
    pub metadata: PathMetadata,
}

impl DashboardClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            session_token: None,
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Log in with the mock credentials and keep the session token.
    pub fn login(&mut self, email: &str, password: &str) -> Result<()> {
        let url = format!("{}/v1/auth/login", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&json!({ "email": email, "password": password }))
            .send()?;

        if !response.status().is_success() {
            let status = response.status();
            let body: serde_json::Value = response.json().unwrap_or_default();
            return Err(anyhow!(
                "login failed ({}): {}",
                status,
                body["error"].as_str().unwrap_or("unknown error")
            ));
        }

        let login: LoginResponse = response.json()?;
        self.session_token = Some(login.token);
        Ok(())
    }

    /// Compute a coverage path on the server without saving it.
    pub fn plan(&self, params: &PlanningParameters) -> Result<PlanResponse> {
        let url = format!("{}/v1/paths/plan", self.base_url);
        let response = self.authorized(self.client.post(&url))?.json(params).send()?;
        Ok(response.error_for_status()?.json()?)
    }

    /// Plan and append the record to the server-side history.
    pub fn save(&self, params: &PlanningParameters) -> Result<PathRecord> {
        let url = format!("{}/v1/paths", self.base_url);
        let response = self.authorized(self.client.post(&url))?.json(params).send()?;
        Ok(response.error_for_status()?.json()?)
    }

    /// History records, newest first.
    pub fn list_paths(&self) -> Result<Vec<PathRecord>> {
        let url = format!("{}/v1/paths", self.base_url);
        let response = self.authorized(self.client.get(&url))?.send()?;
        Ok(response.error_for_status()?.json()?)
    }

    /// Current odometry snapshot.
    pub fn vehicle_odometry(&self) -> Result<VehicleOdometry> {
        let url = format!("{}/v1/vehicle_odometry", self.base_url);
        let response = self.authorized(self.client.get(&url))?.send()?;
        Ok(response.error_for_status()?.json()?)
    }

    fn authorized(
        &self,
        builder: reqwest::blocking::RequestBuilder,
    ) -> Result<reqwest::blocking::RequestBuilder> {
        let token = self
            .session_token
            .as_deref()
            .ok_or_else(|| anyhow!("not logged in"))?;
        Ok(builder.bearer_auth(token))
    }
}
