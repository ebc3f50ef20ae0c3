//! airthings-web — client for the Airthings web dashboard API.
//!
//! Authenticates against the Airthings accounts service with the same
//! browser-emulating OAuth flow the dashboard web app uses, then polls four
//! read-only JSON resources: relay devices, locations, thresholds, and the
//! account profile.
//!
//! # Quick Start
//!
//! ```no_run
//! use airthings_web::{AirthingsClient, Credentials};
//!
//! # async fn example() -> airthings_web::error::Result<()> {
//! let client = AirthingsClient::new(Credentials::new("user@example.com", "hunter2"));
//! if let Some(me) = client.get_me().await? {
//!     println!("logged in as {}", me.email);
//! }
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod responses;

pub use auth::{AuthAdvice, Credentials, TokenSet};
pub use client::AirthingsClient;
pub use config::Config;
pub use error::AirthingsError;
