use std::time::Duration;

use url::Url;

use crate::Result;
use crate::auth::Credentials;

/// BitMEX testnet REST host.
pub const TESTNET_HOST: &str = "https://testnet.bitmex.com";

/// Default minimum spacing between REST calls, in milliseconds.
pub const DEFAULT_RATE_LIMIT_MS: u64 = 5000;

/// Client bootstrap configuration.
#[derive(Clone, Debug)]
pub struct BitmexConfig {
    pub host: Url,
    pub credentials: Option<Credentials>,
    pub rate_limit: Duration,
}

impl BitmexConfig {
    /// Testnet host with the default request spacing.
    pub fn testnet(credentials: Option<Credentials>) -> Result<Self> {
        Self::from_raw(TESTNET_HOST, credentials, DEFAULT_RATE_LIMIT_MS)
    }

    /// Builds a configuration from app-level string values.
    pub fn from_raw(
        host: &str,
        credentials: Option<Credentials>,
        rate_limit_ms: u64,
    ) -> Result<Self> {
        let host = Url::parse(host)?;
        Ok(Self::new(host, credentials, Duration::from_millis(rate_limit_ms)))
    }

    #[must_use]
    pub fn new(host: Url, credentials: Option<Credentials>, rate_limit: Duration) -> Self {
        Self {
            host,
            credentials,
            rate_limit,
        }
    }
}
