//! Endpoint and identity configuration.
//!
//! The defaults point at the production Airthings hosts; tests override the
//! two API bases with a local mock server via the `with_*` builders.

use std::time::Duration;

const ACCOUNTS_API_BASE: &str = "https://accounts-api.airthings.com/v1";
const WEB_API_BASE: &str = "https://web-api.airthin.gs/v1";
const ACCOUNTS_ORIGIN: &str = "https://accounts.airthings.com";
const DASHBOARD_ORIGIN: &str = "https://dashboard.airthings.com";
// Fixed secret embedded in the public dashboard web app.
const DASHBOARD_SECRET: &str = "e333140d-4a85-4e3e-8cf2-bd0a6c710aaa";
const USER_AGENT: &str = "Mozilla/5.0 Chrome/87.0";

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Where and how the client talks to Airthings.
#[derive(Debug, Clone)]
pub struct Config {
    pub accounts_api_base: String,
    pub web_api_base: String,
    pub accounts_origin: String,
    pub dashboard_origin: String,
    pub dashboard_secret: String,
    pub user_agent: String,
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            accounts_api_base: ACCOUNTS_API_BASE.to_string(),
            web_api_base: WEB_API_BASE.to_string(),
            accounts_origin: ACCOUNTS_ORIGIN.to_string(),
            dashboard_origin: DASHBOARD_ORIGIN.to_string(),
            dashboard_secret: DASHBOARD_SECRET.to_string(),
            user_agent: USER_AGENT.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl Config {
    pub fn with_accounts_api_base(mut self, base: impl Into<String>) -> Self {
        self.accounts_api_base = base.into();
        self
    }

    pub fn with_web_api_base(mut self, base: impl Into<String>) -> Self {
        self.web_api_base = base.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// URL of an accounts-API resource, e.g. `token` or `authorize?...`.
    pub fn accounts_url(&self, resource: &str) -> String {
        format!("{}/{}", self.accounts_api_base.trim_end_matches('/'), resource)
    }

    /// URL of a web-API resource, e.g. `locations` or `me/`.
    pub fn web_url(&self, resource: &str) -> String {
        format!("{}/{}", self.web_api_base.trim_end_matches('/'), resource)
    }
}
