use chrono::{DateTime, Utc};

use super::token::TokenSet;

/// The state machine's recommendation for what the caller should do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthAdvice {
    /// Transient failure; retry later.
    ShouldWait,
    /// No usable token; a full login is required.
    ShouldLogin,
    /// Token expired but a refresh token is available.
    ShouldRefreshToken,
    /// Token is valid; polls may proceed.
    ShouldReady,
    /// Login itself was rejected; only new credentials can help.
    ShouldCheckCredentials,
}

/// Pure classification of the current token state against `now`.
///
/// Performs no I/O; the driver in [`crate::client`] executes whatever this
/// recommends.
pub fn evaluate_advice(tokens: Option<&TokenSet>, now: DateTime<Utc>) -> AuthAdvice {
    let tokens = match tokens {
        Some(tokens) => tokens,
        None => return AuthAdvice::ShouldLogin,
    };
    if tokens.access_token.is_empty() {
        return AuthAdvice::ShouldLogin;
    }
    if tokens.is_expired(now) {
        if tokens.refresh_token.is_none() {
            AuthAdvice::ShouldLogin
        } else {
            AuthAdvice::ShouldRefreshToken
        }
    } else {
        AuthAdvice::ShouldReady
    }
}
