//! Minimal client for the BitMEX testnet REST trading API.
//!
//! This crate intentionally covers only the signed REST flow:
//! - build a form- or JSON-encoded parameter body
//! - sign it with HMAC-SHA256 (`api-key` / `api-expires` / `api-signature`)
//! - submit it through a minimum-interval rate limiter
//!
//! Responses are returned as raw body text; the exchange reports failures
//! inside the payload rather than through the transport.

mod auth;
mod client;
mod config;
mod error;
mod limiter;
mod params;
pub mod types;

pub use auth::Credentials;
pub use client::{BitmexClient, Encoding};
pub use config::{BitmexConfig, DEFAULT_RATE_LIMIT_MS, TESTNET_HOST};
pub use error::{Error, Kind as ErrorKind};
pub use limiter::RateLimiter;
pub use params::Params;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Unix timestamp in whole seconds.
pub type Timestamp = i64;
