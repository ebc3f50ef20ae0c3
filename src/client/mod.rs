//! The Manager facade: four read-only poll operations gated by the
//! authentication state machine.

use chrono::Utc;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use tracing::{error, warn};

use crate::auth::{evaluate_advice, flow, AuthAdvice, Credentials, TokenSet};
use crate::config::Config;
use crate::error::{AirthingsError, Result};
use crate::responses::{Locations, Me, RelayDevices, Thresholds};

/// Client for the Airthings web dashboard API.
///
/// Owns the credentials, the token state, and a single connection-pooled
/// HTTP transport. Each `get_*` operation asks the state machine whether the
/// client is ready (logging in or refreshing as needed) before polling.
///
/// Poll failures are logged and suppressed: the operations return `Ok(None)`
/// so a caller can retry later. The one hard failure is
/// [`AirthingsError::InvalidCredentials`], raised when the vendor rejects the
/// supplied username/password outright.
///
/// # Example
/// ```no_run
/// use airthings_web::{AirthingsClient, Credentials};
///
/// # async fn example() -> airthings_web::error::Result<()> {
/// let client = AirthingsClient::new(Credentials::new("user@example.com", "hunter2"));
/// if let Some(locations) = client.get_locations().await? {
///     for location in &locations.locations {
///         println!("{}: {} devices", location.name, location.device_count);
///     }
/// }
/// # Ok(())
/// # }
/// ```
pub struct AirthingsClient {
    http: reqwest::Client,
    config: Config,
    credentials: Credentials,
    // Single-writer lock: held across ensure_ready so only one login or
    // refresh sequence runs at a time.
    tokens: Mutex<Option<TokenSet>>,
}

impl AirthingsClient {
    /// Build a client against the production Airthings hosts.
    pub fn new(credentials: Credentials) -> Self {
        Self::with_config(credentials, Config::default())
    }

    /// Build a client with explicit endpoint configuration.
    pub fn with_config(credentials: Credentials, config: Config) -> Self {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .expect("Failed to build HTTP client");
        Self::with_transport(credentials, config, http)
    }

    /// Build a client around an externally supplied transport handle.
    pub fn with_transport(
        credentials: Credentials,
        config: Config,
        http: reqwest::Client,
    ) -> Self {
        Self {
            http,
            config,
            credentials,
            tokens: Mutex::new(None),
        }
    }

    pub async fn get_relay_devices(&self) -> Result<Option<RelayDevices>> {
        self.execute_poll("get_relay_devices", "relay-devices").await
    }

    pub async fn get_locations(&self) -> Result<Option<Locations>> {
        self.execute_poll("get_locations", "locations").await
    }

    pub async fn get_thresholds(&self) -> Result<Option<Thresholds>> {
        self.execute_poll("get_thresholds", "thresholds").await
    }

    pub async fn get_me(&self) -> Result<Option<Me>> {
        self.execute_poll("get_me", "me/").await
    }

    /// Cheaply check login viability without polling a resource.
    ///
    /// Runs the same readiness gate as the poll operations and reports
    /// whether it ended in the ready state.
    pub async fn validate_credentials(&self) -> bool {
        self.ensure_ready().await == AuthAdvice::ShouldReady
    }

    /// Evaluate the current token state and perform at most one network
    /// round of work (login or refresh) to improve it.
    ///
    /// A failed refresh reports [`AuthAdvice::ShouldLogin`] without itself
    /// attempting the login; the next call performs it.
    async fn ensure_ready(&self) -> AuthAdvice {
        let mut tokens = self.tokens.lock().await;
        match evaluate_advice(tokens.as_ref(), Utc::now()) {
            AuthAdvice::ShouldLogin => self.perform_login(&mut tokens).await,
            AuthAdvice::ShouldRefreshToken => self.perform_refresh(&mut tokens).await,
            advice => advice,
        }
    }

    async fn perform_login(&self, tokens: &mut Option<TokenSet>) -> AuthAdvice {
        match flow::login(&self.http, &self.config, &self.credentials).await {
            Ok(fresh) => {
                *tokens = Some(fresh);
                AuthAdvice::ShouldReady
            }
            Err(err) if err.is_unauthorized() => {
                error!(
                    method = "perform_login",
                    error_code = err.status().unwrap_or(0),
                    error_details = %err.details(),
                    "login rejected"
                );
                *tokens = None;
                AuthAdvice::ShouldCheckCredentials
            }
            Err(err) => {
                error!(
                    method = "perform_login",
                    error_code = err.status().unwrap_or(0),
                    error_details = %err.details(),
                    "login failed"
                );
                *tokens = None;
                AuthAdvice::ShouldWait
            }
        }
    }

    async fn perform_refresh(&self, tokens: &mut Option<TokenSet>) -> AuthAdvice {
        let refresh_token = match tokens.as_ref().and_then(|t| t.refresh_token.clone()) {
            Some(token) => token,
            None => return AuthAdvice::ShouldLogin,
        };
        match flow::refresh(&self.http, &self.config, &refresh_token).await {
            Ok(fresh) => {
                *tokens = Some(fresh);
                AuthAdvice::ShouldReady
            }
            Err(err) if err.is_unauthorized() => {
                error!(
                    method = "perform_refresh",
                    error_code = err.status().unwrap_or(0),
                    error_details = %err.details(),
                    "refresh rejected"
                );
                *tokens = None;
                AuthAdvice::ShouldLogin
            }
            Err(err) => {
                error!(
                    method = "perform_refresh",
                    error_code = err.status().unwrap_or(0),
                    error_details = %err.details(),
                    "refresh failed"
                );
                *tokens = None;
                AuthAdvice::ShouldWait
            }
        }
    }

    /// Gate a poll behind the readiness check, decode on success, and
    /// suppress (but log) everything except invalid credentials.
    async fn execute_poll<T: DeserializeOwned>(
        &self,
        method: &'static str,
        resource: &'static str,
    ) -> Result<Option<T>> {
        let advice = self.ensure_ready().await;
        match advice {
            AuthAdvice::ShouldReady => match self.poll_resource(resource).await {
                Ok(body) => match serde_json::from_str::<T>(&body) {
                    Ok(decoded) => Ok(Some(decoded)),
                    Err(err) => {
                        error!(method, error_code = 0_u16, error_details = %err, "decode failed");
                        Ok(None)
                    }
                },
                Err(err) => {
                    error!(
                        method,
                        error_code = err.status().unwrap_or(0),
                        error_details = %err.details(),
                        "poll failed"
                    );
                    if err.is_unauthorized() {
                        // Drop the stale tokens so the next call re-authenticates.
                        self.tokens.lock().await.take();
                    }
                    Ok(None)
                }
            },
            AuthAdvice::ShouldCheckCredentials => {
                warn!(method, advise = ?advice, message = "invalid credentials");
                Err(AirthingsError::InvalidCredentials)
            }
            advice => {
                warn!(method, advise = ?advice, message = "cannot execute poll");
                Ok(None)
            }
        }
    }

    /// Authenticated GET against the web API.
    async fn poll_resource(&self, resource: &str) -> Result<String> {
        let access_token = self
            .tokens
            .lock()
            .await
            .as_ref()
            .map(|t| t.access_token.clone())
            .ok_or_else(|| {
                AirthingsError::InvalidResponse("no access token available".to_string())
            })?;
        let response = self
            .http
            .get(self.config.web_url(resource))
            .header("origin", &self.config.dashboard_origin)
            .header("accept", "application/json")
            .header("user-agent", &self.config.user_agent)
            .header("sec-fetch-dest", "empty")
            .header("sec-fetch-mode", "cors")
            .header("sec-fetch-site", "cross-site")
            .bearer_auth(&access_token)
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        crate::error::classify_status(status, body)
    }
}
