//! Credentials and HMAC-SHA256 request signing.
//!
//! BitMEX authenticates each REST call with three headers: the API key, a
//! Unix expiry timestamp, and a hex HMAC-SHA256 signature over
//! `verb + path + expiry + body`.

use chrono::Utc;
use hmac::{Hmac, Mac as _};
use reqwest::Method;
use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::{ExposeSecret as _, SecretString};
use sha2::Sha256;

use crate::error::Error;
use crate::{Result, Timestamp};

/// Seconds a signed request stays valid after its expiry header is set.
const EXPIRES_WINDOW_SECS: Timestamp = 3600;

pub(crate) const HEADER_EXPIRES: &str = "api-expires";
pub(crate) const HEADER_KEY: &str = "api-key";
pub(crate) const HEADER_SIGNATURE: &str = "api-signature";

/// API key pair, supplied at client construction and immutable afterwards.
#[derive(Clone, Debug)]
pub struct Credentials {
    key: String,
    secret: SecretString,
}

impl Credentials {
    #[must_use]
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            secret: SecretString::from(secret.into()),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Lowercase hex HMAC-SHA256 of `message` keyed by the API secret.
    pub(crate) fn sign(&self, message: &str) -> Result<String> {
        let mut mac = Hmac::<Sha256>::new_from_slice(self.secret.expose_secret().as_bytes())
            .map_err(|e| Error::validation(format!("invalid API secret: {e}")))?;
        mac.update(message.as_bytes());
        Ok(hex::encode(mac.finalize().into_bytes()))
    }
}

pub(crate) fn expires_at(now: Timestamp) -> Timestamp {
    now + EXPIRES_WINDOW_SECS
}

/// Message the signature is computed over: verb, path with query, expiry,
/// body, concatenated in that order with no separators.
pub(crate) fn signing_message(
    method: &Method,
    path_and_query: &str,
    expires: Timestamp,
    body: &str,
) -> String {
    format!("{method}{path_and_query}{expires}{body}")
}

/// Signs one request with a fresh expiry and returns its auth headers.
pub(crate) fn create_headers(
    credentials: &Credentials,
    method: &Method,
    path_and_query: &str,
    body: &str,
) -> Result<HeaderMap> {
    let expires = expires_at(Utc::now().timestamp());
    create_headers_at(credentials, method, path_and_query, body, expires)
}

pub(crate) fn create_headers_at(
    credentials: &Credentials,
    method: &Method,
    path_and_query: &str,
    body: &str,
    expires: Timestamp,
) -> Result<HeaderMap> {
    let message = signing_message(method, path_and_query, expires, body);
    let signature = credentials.sign(&message)?;

    let mut headers = HeaderMap::new();
    headers.insert(HEADER_EXPIRES, HeaderValue::from(expires));
    headers.insert(
        HEADER_KEY,
        HeaderValue::from_str(credentials.key())
            .map_err(|e| Error::validation(format!("API key is not a valid header value: {e}")))?,
    );
    headers.insert(
        HEADER_SIGNATURE,
        HeaderValue::from_str(&signature)
            .map_err(|e| Error::validation(format!("signature is not a valid header value: {e}")))?,
    );
    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_matches_rfc_4231_case_2() {
        let credentials = Credentials::new("unused", "Jefe");
        let signature = credentials.sign("what do ya want for nothing?").unwrap();
        assert_eq!(
            signature,
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn sign_is_deterministic() {
        let credentials = Credentials::new("key", "secret");
        let message = signing_message(&Method::POST, "/api/v1/order", 1_700_000_000, "a=b");
        assert_eq!(
            credentials.sign(&message).unwrap(),
            credentials.sign(&message).unwrap()
        );
    }

    #[test]
    fn sign_changes_when_any_input_changes() {
        let credentials = Credentials::new("key", "secret");
        let base = signing_message(&Method::POST, "/api/v1/order", 1_700_000_000, "a=b");
        let baseline = credentials.sign(&base).unwrap();

        let variants = [
            signing_message(&Method::GET, "/api/v1/order", 1_700_000_000, "a=b"),
            signing_message(&Method::POST, "/api/v1/position", 1_700_000_000, "a=b"),
            signing_message(&Method::POST, "/api/v1/order", 1_700_000_001, "a=b"),
            signing_message(&Method::POST, "/api/v1/order", 1_700_000_000, "a=c"),
        ];
        for variant in variants {
            assert_ne!(
                credentials.sign(&variant).unwrap(),
                baseline,
                "changing an input must change the signature"
            );
        }

        let other_secret = Credentials::new("key", "secret2");
        assert_ne!(other_secret.sign(&base).unwrap(), baseline, "secret ignored");
    }

    #[test]
    fn signing_message_concatenates_without_separators() {
        let message = signing_message(&Method::POST, "/api/v1/order", 1_700_000_000, "a=b");
        assert_eq!(message, "POST/api/v1/order1700000000a=b");
    }

    #[test]
    fn expires_is_one_hour_out() {
        assert_eq!(expires_at(1_700_000_000), 1_700_003_600);
    }

    #[test]
    fn headers_carry_key_expiry_and_hex_signature() {
        let credentials = Credentials::new("my-key", "my-secret");
        let headers =
            create_headers_at(&credentials, &Method::GET, "/api/v1/order", "", 1_700_003_600)
                .unwrap();

        assert_eq!(headers.get(HEADER_KEY).unwrap(), "my-key");
        assert_eq!(headers.get(HEADER_EXPIRES).unwrap(), "1700003600");

        let signature = headers.get(HEADER_SIGNATURE).unwrap().to_str().unwrap();
        assert_eq!(signature.len(), 64, "hex SHA-256 digest length");
        assert!(
            signature.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()),
            "signature must be lowercase hex"
        );
    }
}
