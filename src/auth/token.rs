use chrono::{DateTime, Utc};

/// Username/password pair supplied at construction.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Access/refresh token pair plus issuance metadata.
///
/// A `TokenSet` is always fully populated: it is created whole by a
/// successful login, replaced whole by a successful refresh, and cleared
/// (back to `None`) on any authentication failure. `expires_in` and
/// `issued_at` are always written together.
#[derive(Debug, Clone)]
pub struct TokenSet {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_in: u64,
    pub issued_at: DateTime<Utc>,
}

impl TokenSet {
    /// Whether `now - issued_at >= expires_in`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now - self.issued_at >= chrono::Duration::seconds(self.expires_in as i64)
    }
}
