//! API token formatting, parsing, and hashing.

use std::fmt;

use rand::{RngCore, rngs::OsRng};
use sha2::{Digest, Sha256};
use thiserror::Error;
use zeroize::Zeroize;

/// API token identifier prefix.
pub const API_TOKEN_PREFIX: &str = "bk";

/// Number of secret bytes encoded in a token.
pub const API_TOKEN_SECRET_BYTES: usize = 32;

#[derive(Clone)]
pub struct ApiTokenSecret {
    bytes: [u8; API_TOKEN_SECRET_BYTES],
}

impl ApiTokenSecret {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; API_TOKEN_SECRET_BYTES]) -> Self {
        Self { bytes }
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; API_TOKEN_SECRET_BYTES] {
        &self.bytes
    }
}

impl fmt::Debug for ApiTokenSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiTokenSecret(**redacted**)")
    }
}

impl Drop for ApiTokenSecret {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

#[derive(Debug, Error)]
pub enum ApiTokenError {
    #[error("api token format is invalid")]
    InvalidFormat,

    #[error("api token secret encoding is invalid")]
    InvalidSecretEncoding,
}

#[must_use]
pub fn generate_api_token_secret() -> ApiTokenSecret {
    let mut secret = [0_u8; API_TOKEN_SECRET_BYTES];

    OsRng.fill_bytes(&mut secret);

    ApiTokenSecret::from_bytes(secret)
}

#[must_use]
pub fn format_api_token(secret: &ApiTokenSecret) -> String {
    format!("{API_TOKEN_PREFIX}_{}", hex::encode(secret.as_bytes()))
}

/// Parse a bearer token of the form `bk_{64 hex chars}`.
///
/// # Errors
///
/// Returns an [`ApiTokenError`] when the prefix or secret encoding is wrong.
pub fn parse_api_token(token: &str) -> Result<ApiTokenSecret, ApiTokenError> {
    let (prefix, secret_hex) = token.split_once('_').ok_or(ApiTokenError::InvalidFormat)?;

    if prefix != API_TOKEN_PREFIX {
        return Err(ApiTokenError::InvalidFormat);
    }

    let mut secret = [0_u8; API_TOKEN_SECRET_BYTES];

    hex::decode_to_slice(secret_hex, &mut secret)
        .map_err(|_decode_error| ApiTokenError::InvalidSecretEncoding)?;

    Ok(ApiTokenSecret::from_bytes(secret))
}

/// Storage verifier for a token: lowercase hex SHA-256 of the secret bytes.
#[must_use]
pub fn hash_api_token(secret: &ApiTokenSecret) -> String {
    hex::encode(Sha256::digest(secret.as_bytes()))
}
