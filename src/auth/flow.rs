//! The browser-emulating login and refresh sequences.
//!
//! Login is four dependent network steps against the accounts service:
//! password grant, consent fetch, authorization-code exchange, and the final
//! token exchange. Each step fails fast; any 4xx is surfaced as
//! [`AirthingsError::Unauthorized`] so the driver can translate it into
//! advice.

use chrono::Utc;
use reqwest::Url;
use serde::Deserialize;
use tracing::debug;

use crate::config::Config;
use crate::error::{classify_status, AirthingsError, Result};

use super::token::{Credentials, TokenSet};

#[derive(Debug, Deserialize)]
struct PasswordGrantResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct AuthorizeResponse {
    redirect_uri: String,
}

#[derive(Debug, Deserialize)]
struct TokenExchangeResponse {
    access_token: String,
    refresh_token: Option<String>,
    expires_in: u64,
}

/// Run the full login sequence, producing a freshly stamped [`TokenSet`].
pub(crate) async fn login(
    http: &reqwest::Client,
    config: &Config,
    credentials: &Credentials,
) -> Result<TokenSet> {
    let token = password_grant(http, config, credentials).await?;
    let consent = fetch_consent(http, config, &token).await?;
    let code = exchange_authorization_code(http, config, &token, &consent).await?;
    exchange_code_for_tokens(http, config, &code).await
}

/// Redeem a refresh token for a new [`TokenSet`].
pub(crate) async fn refresh(
    http: &reqwest::Client,
    config: &Config,
    refresh_token: &str,
) -> Result<TokenSet> {
    debug!(grant_type = "refresh_token", "requesting token refresh");
    let body = send_classified(
        http.post(config.accounts_url("token"))
            .header("origin", &config.dashboard_origin)
            .header("accept", "application/json")
            .header("user-agent", &config.user_agent)
            .header("sec-fetch-dest", "empty")
            .header("sec-fetch-mode", "cors")
            .header("sec-fetch-site", "cross-site")
            .json(&serde_json::json!({
                "client_id": "dashboard",
                "client_secret": config.dashboard_secret,
                "refresh_token": refresh_token,
                "grant_type": "refresh_token",
            })),
    )
    .await?;
    assemble_token_set(&body)
}

/// Step 1: username/password against the accounts token endpoint.
async fn password_grant(
    http: &reqwest::Client,
    config: &Config,
    credentials: &Credentials,
) -> Result<String> {
    debug!(grant_type = "password", "requesting accounts token");
    let body = send_classified(
        http.post(config.accounts_url("token"))
            .header("origin", &config.accounts_origin)
            .header("accept", "application/json")
            .header("user-agent", &config.user_agent)
            .json(&serde_json::json!({
                "username": credentials.username,
                "password": credentials.password,
                "grant_type": "password",
                "client_id": "accounts",
            })),
    )
    .await?;
    let parsed: PasswordGrantResponse = serde_json::from_str(&body)?;
    Ok(parsed.access_token)
}

/// Step 2: fetch the opaque consent payload, echoed back in step 3.
async fn fetch_consent(
    http: &reqwest::Client,
    config: &Config,
    token: &str,
) -> Result<serde_json::Value> {
    let resource = format!(
        "consents/dashboard?client_id=dashboard&redirect_uri={}",
        config.dashboard_origin
    );
    let body = send_classified(
        http.get(config.accounts_url(&resource))
            .header("origin", &config.accounts_origin)
            .header("accept", "application/json")
            .header("user-agent", &config.user_agent)
            .bearer_auth(token),
    )
    .await?;
    Ok(serde_json::from_str(&body)?)
}

/// Step 3: post the consent back and pull the authorization `code` out of
/// the returned redirect URI's query string.
async fn exchange_authorization_code(
    http: &reqwest::Client,
    config: &Config,
    token: &str,
    consent: &serde_json::Value,
) -> Result<String> {
    let resource = format!(
        "authorize?client_id=dashboard&redirect_uri={}",
        config.dashboard_origin
    );
    let body = send_classified(
        http.post(config.accounts_url(&resource))
            .header("origin", &config.accounts_origin)
            .header("accept", "application/json")
            .header("user-agent", &config.user_agent)
            .bearer_auth(token)
            .json(consent),
    )
    .await?;
    let parsed: AuthorizeResponse = serde_json::from_str(&body)?;
    extract_authorization_code(&parsed.redirect_uri)
}

/// Step 4: redeem the authorization code for the access/refresh token pair.
async fn exchange_code_for_tokens(
    http: &reqwest::Client,
    config: &Config,
    code: &str,
) -> Result<TokenSet> {
    let body = send_classified(
        http.post(config.accounts_url("token"))
            .header("origin", &config.dashboard_origin)
            .header("accept", "application/json")
            .header("user-agent", &config.user_agent)
            .header("sec-fetch-dest", "empty")
            .header("sec-fetch-mode", "cors")
            .header("sec-fetch-site", "cross-site")
            .json(&serde_json::json!({
                "client_id": "dashboard",
                "client_secret": config.dashboard_secret,
                "code": code,
                "grant_type": "authorization_code",
                "redirect_uri": config.dashboard_origin,
            })),
    )
    .await?;
    assemble_token_set(&body)
}

/// Send a request and classify the answer by status family.
async fn send_classified(request: reqwest::RequestBuilder) -> Result<String> {
    let response = request.send().await?;
    let status = response.status().as_u16();
    let body = response.text().await?;
    classify_status(status, body)
}

fn assemble_token_set(body: &str) -> Result<TokenSet> {
    let parsed: TokenExchangeResponse = serde_json::from_str(body)?;
    Ok(TokenSet {
        access_token: parsed.access_token,
        refresh_token: parsed.refresh_token,
        expires_in: parsed.expires_in,
        issued_at: Utc::now(),
    })
}

fn extract_authorization_code(redirect_uri: &str) -> Result<String> {
    let url = Url::parse(redirect_uri)
        .map_err(|err| AirthingsError::InvalidResponse(format!("bad redirect_uri: {err}")))?;
    url.query_pairs()
        .find(|(key, _)| key == "code")
        .map(|(_, value)| value.into_owned())
        .ok_or_else(|| {
            AirthingsError::InvalidResponse(format!(
                "redirect_uri carries no code query parameter: {redirect_uri}"
            ))
        })
}
