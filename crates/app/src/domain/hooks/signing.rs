//! Hook signing keys.

use std::fmt;

use hmac::{Hmac, Mac};
use rand::{Rng, distributions::Alphanumeric, rngs::OsRng};
use sha2::Sha256;
use thiserror::Error;
use zeroize::Zeroize;

/// Number of characters in a generated signing key.
pub const SIGNING_KEY_LENGTH: usize = 32;

type HmacSha256 = Hmac<Sha256>;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("signing key cannot be used as an HMAC key")]
pub struct InvalidSigningKey;

/// Secret shared with a hook receiver to authenticate deliveries.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningKey(String);

impl SigningKey {
    /// Generate a fresh random key.
    #[must_use]
    pub fn generate() -> Self {
        let key = OsRng
            .sample_iter(&Alphanumeric)
            .take(SIGNING_KEY_LENGTH)
            .map(char::from)
            .collect();

        Self(key)
    }

    /// Generate a replacement that is guaranteed to differ from `previous`.
    #[must_use]
    pub fn rotate_from(previous: &Self) -> Self {
        loop {
            let candidate = Self::generate();

            if candidate != *previous {
                return candidate;
            }
        }
    }

    /// Wrap a key loaded from storage.
    #[must_use]
    pub fn from_stored(key: String) -> Self {
        Self(key)
    }

    /// Reveal the raw key for serialization or persistence.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Lowercase hex HMAC-SHA256 of `payload` under this key.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSigningKey`] when HMAC rejects the key.
    pub fn sign(&self, payload: &[u8]) -> Result<String, InvalidSigningKey> {
        Ok(hex::encode(self.mac(payload)?.finalize().into_bytes()))
    }

    /// Check a hex signature produced by [`SigningKey::sign`].
    #[must_use]
    pub fn verify(&self, payload: &[u8], signature: &str) -> bool {
        let Ok(signature) = hex::decode(signature) else {
            return false;
        };

        self.mac(payload)
            .is_ok_and(|mac| mac.verify_slice(&signature).is_ok())
    }

    fn mac(&self, payload: &[u8]) -> Result<HmacSha256, InvalidSigningKey> {
        let mut mac = <HmacSha256 as Mac>::new_from_slice(self.0.as_bytes())
            .map_err(|_invalid_length| InvalidSigningKey)?;

        mac.update(payload);

        Ok(mac)
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningKey(**redacted**)")
    }
}

impl Drop for SigningKey {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}
