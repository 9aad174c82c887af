use std::time::{Duration, Instant};

use anyhow::Context;
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use serde_json::{json, Value};

use crate::account::SyntheticProfile;
use crate::config::TargetConfig;
use crate::error::ApiError;

/// Thin wrapper over a shared `reqwest::Client`, bound to one base URL.
/// Cloning is cheap and shares the connection pool.
#[derive(Clone)]
pub struct LobbyClient {
    http: Client,
    base: String,
}

impl LobbyClient {
    pub fn new(config: &TargetConfig) -> anyhow::Result<Self> {
        let http = Client::builder().build().context("build reqwest client")?;
        Ok(Self {
            http,
            base: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base, path)
    }

    /// POST the profile to `user/create`. Returns the request's wall-clock
    /// duration on 2xx; any other status is a rejection carrying the body.
    pub async fn create_account(&self, profile: &SyntheticProfile) -> Result<Duration, ApiError> {
        let start = Instant::now();
        let resp = self
            .http
            .post(self.url("user/create"))
            .json(profile)
            .send()
            .await?;
        let elapsed = start.elapsed();
        if !resp.status().is_success() {
            return Err(ApiError::Status {
                endpoint: "user/create",
                status: resp.status(),
                body: resp.text().await.unwrap_or_default(),
            });
        }
        Ok(elapsed)
    }

    /// POST credentials to `user/login` and extract the access token.
    /// A 2xx response without a non-empty `access_token` field is an
    /// explicit `MissingToken` error, never an implicit assumption.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, ApiError> {
        let resp = self
            .http
            .post(self.url("user/login"))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(ApiError::Status {
                endpoint: "user/login",
                status: resp.status(),
                body: resp.text().await.unwrap_or_default(),
            });
        }
        let body: Value = resp.json().await?;
        match body.get("access_token").and_then(Value::as_str) {
            Some(token) if !token.is_empty() => Ok(token.to_string()),
            _ => Err(ApiError::MissingToken),
        }
    }

    /// Issue one authenticated GET and return its wall-clock duration.
    /// The response body is read and discarded; status is not asserted.
    pub async fn timed_get(&self, path: &str, auth: &str) -> Result<Duration, ApiError> {
        let start = Instant::now();
        let resp = self
            .http
            .get(self.url(path))
            .header(AUTHORIZATION, auth)
            .send()
            .await?;
        let elapsed = start.elapsed();
        let _ = resp.bytes().await;
        Ok(elapsed)
    }
}
