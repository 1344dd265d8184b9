use reqwest::header::CONTENT_TYPE;
use reqwest::{Client as ReqwestClient, Method};
use tracing::{debug, warn};
use url::Url;

use crate::Result;
use crate::auth;
use crate::auth::Credentials;
use crate::config::BitmexConfig;
use crate::error::Error;
use crate::limiter::RateLimiter;
use crate::params::Params;

/// Versioned prefix every REST endpoint lives under.
const API_PREFIX: &str = "/api/v1";

/// Body encoding for non-GET requests.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Encoding {
    /// `application/x-www-form-urlencoded`
    Form,
    /// `application/json`
    Json,
}

impl Encoding {
    fn content_type(self) -> &'static str {
        match self {
            Encoding::Form => "application/x-www-form-urlencoded",
            Encoding::Json => "application/json",
        }
    }
}

/// REST client for the BitMEX testnet trading API.
///
/// Every call is throttled by the client-owned [`RateLimiter`] and, when
/// authenticated, signed with the configured [`Credentials`].
#[derive(Clone, Debug)]
pub struct BitmexClient {
    host: Url,
    credentials: Option<Credentials>,
    limiter: RateLimiter,
    client: ReqwestClient,
}

impl BitmexClient {
    #[must_use]
    pub fn new(config: BitmexConfig) -> Self {
        Self::with_client(config, ReqwestClient::new())
    }

    /// Uses a caller-supplied HTTP client, e.g. one with custom TLS or
    /// proxy settings.
    #[must_use]
    pub fn with_client(config: BitmexConfig, client: ReqwestClient) -> Self {
        Self {
            host: config.host,
            credentials: config.credentials,
            limiter: RateLimiter::new(config.rate_limit),
            client,
        }
    }

    #[must_use]
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    #[must_use]
    pub fn limiter(&self) -> &RateLimiter {
        &self.limiter
    }

    /// Open orders for `symbol`.
    pub async fn orders(&self, symbol: &str) -> Result<String> {
        let params = Params::new().with("symbol", symbol);
        self.request(Method::GET, "/order", &params, true, Encoding::Form)
            .await
    }

    /// Submits a market order. `side` is the exchange-side literal,
    /// `Buy` or `Sell`.
    pub async fn place_market_order(
        &self,
        symbol: &str,
        side: &str,
        order_qty: u64,
    ) -> Result<String> {
        let params = Params::new()
            .with("symbol", symbol)
            .with("side", side)
            .with("orderQty", order_qty.to_string())
            .with("ordType", "Market");
        self.request(Method::POST, "/order", &params, true, Encoding::Form)
            .await
    }

    /// Cancels an order by its server-assigned ID.
    pub async fn cancel_order(&self, order_id: &str) -> Result<String> {
        let params = Params::new()
            .with("orderID", order_id)
            .with("text", "cancel order by ID");
        self.request(Method::DELETE, "/order", &params, true, Encoding::Json)
            .await
    }

    /// Signs and sends one REST request, returning the raw response body.
    ///
    /// GET parameters travel in the query string; for other methods the
    /// encoded parameters become the request body. The signed message covers
    /// the full path including any query string.
    ///
    /// An HTTP error status is not an `Err`: the exchange reports failures
    /// as a JSON payload, which is returned as the body text like any other
    /// response. Only the absence of an HTTP response (DNS failure, refused
    /// connection, interrupted read) maps to [`crate::ErrorKind::Transport`].
    pub async fn request(
        &self,
        method: Method,
        endpoint: &str,
        params: &Params,
        authenticated: bool,
        encoding: Encoding,
    ) -> Result<String> {
        self.limiter.acquire().await;

        let encoded = match encoding {
            Encoding::Form => params.to_query()?,
            Encoding::Json => params.to_json()?,
        };

        let mut path = format!("{API_PREFIX}{endpoint}");
        let body = if method == Method::GET {
            if !params.is_empty() {
                path.push('?');
                path.push_str(&encoded);
            }
            String::new()
        } else {
            encoded
        };

        let url = self.host.join(&path)?;
        let mut builder = self.client.request(method.clone(), url);

        if authenticated {
            let credentials = self
                .credentials
                .as_ref()
                .ok_or_else(|| Error::validation("authenticated endpoint requires credentials"))?;
            let headers = auth::create_headers(credentials, &method, &path, &body)?;
            builder = builder.headers(headers);
        }

        if !body.is_empty() {
            builder = builder
                .header(CONTENT_TYPE, encoding.content_type())
                .body(body);
        }

        debug!(method = %method, path, "sending REST request");
        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            warn!(status = %status, path, "exchange returned an error payload");
        }
        Ok(text)
    }
}
