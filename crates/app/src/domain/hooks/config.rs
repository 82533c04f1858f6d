//! Hook delivery configuration.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use url::Url;

/// Keys a config must never carry, whatever the caller sends.
pub const DENIED_CONFIG_KEYS: &[&str] = &["signingKey"];

/// Upper bound for the `retries` key.
pub const MAX_RETRIES: u64 = 3;

const URL_KEY: &str = "url";
const HEADERS_KEY: &str = "headers";
const RETRIES_KEY: &str = "retries";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HookConfigError {
    #[error("hook config must include a `url`")]
    MissingUrl,

    #[error("hook config `url` must be an absolute http(s) URL")]
    InvalidUrl,

    #[error("hook config `headers` must be an object of string values")]
    InvalidHeaders,

    #[error("hook config `retries` must be an integer between 0 and {MAX_RETRIES}")]
    InvalidRetries,
}

/// Validated, insertion-ordered delivery configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct HookConfig {
    entries: Map<String, Value>,
}

impl HookConfig {
    /// Validate and build a config, dropping denied keys.
    ///
    /// # Errors
    ///
    /// Returns a [`HookConfigError`] when a known key is missing or malformed.
    pub fn new(mut entries: Map<String, Value>) -> Result<Self, HookConfigError> {
        for key in DENIED_CONFIG_KEYS {
            entries.shift_remove(*key);
        }

        validate(&entries)?;

        Ok(Self { entries })
    }

    /// Target URL for deliveries.
    #[must_use]
    pub fn url(&self) -> &str {
        self.entries
            .get(URL_KEY)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// Extra request headers, in configured order.
    pub fn headers(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .get(HEADERS_KEY)
            .and_then(Value::as_object)
            .into_iter()
            .flat_map(|headers| {
                headers
                    .iter()
                    .filter_map(|(name, value)| Some((name.as_str(), value.as_str()?)))
            })
    }

    #[must_use]
    pub fn retries(&self) -> Option<u64> {
        self.entries.get(RETRIES_KEY).and_then(Value::as_u64)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.entries
    }

    #[must_use]
    pub fn into_map(self) -> Map<String, Value> {
        self.entries
    }

    /// Shallow-merge `patch` over this config.
    ///
    /// Patch keys overwrite existing ones, absent keys are kept, and denied
    /// keys in the patch are skipped. The result is validated again.
    ///
    /// # Errors
    ///
    /// Returns a [`HookConfigError`] when the merged config is invalid.
    pub fn merge(&self, patch: HookConfigPatch) -> Result<Self, HookConfigError> {
        let mut merged = self.entries.clone();

        for (key, value) in patch.into_map() {
            if DENIED_CONFIG_KEYS.contains(&key.as_str()) {
                continue;
            }

            merged.insert(key, value);
        }

        Self::new(merged)
    }
}

impl TryFrom<Value> for HookConfig {
    type Error = HookConfigError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(entries) => Self::new(entries),
            _ => Err(HookConfigError::MissingUrl),
        }
    }
}

impl<'de> Deserialize<'de> for HookConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = Map::<String, Value>::deserialize(deserializer)?;

        Self::new(entries).map_err(serde::de::Error::custom)
    }
}

/// Unvalidated partial config sent with an update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HookConfigPatch(Map<String, Value>);

impl HookConfigPatch {
    #[must_use]
    pub fn new(entries: Map<String, Value>) -> Self {
        Self(entries)
    }

    #[must_use]
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

fn validate(entries: &Map<String, Value>) -> Result<(), HookConfigError> {
    let url = entries
        .get(URL_KEY)
        .ok_or(HookConfigError::MissingUrl)?
        .as_str()
        .ok_or(HookConfigError::InvalidUrl)?;

    let parsed = Url::parse(url).map_err(|_parse_error| HookConfigError::InvalidUrl)?;

    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
        return Err(HookConfigError::InvalidUrl);
    }

    if let Some(headers) = entries.get(HEADERS_KEY) {
        let valid = headers
            .as_object()
            .is_some_and(|headers| headers.values().all(Value::is_string));

        if !valid {
            return Err(HookConfigError::InvalidHeaders);
        }
    }

    if let Some(retries) = entries.get(RETRIES_KEY) {
        let valid = retries.as_u64().is_some_and(|retries| retries <= MAX_RETRIES);

        if !valid {
            return Err(HookConfigError::InvalidRetries);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    fn config(value: Value) -> Result<HookConfig, HookConfigError> {
        HookConfig::try_from(value)
    }

    fn patch(value: Value) -> HookConfigPatch {
        match value {
            Value::Object(entries) => HookConfigPatch::new(entries),
            _ => HookConfigPatch::default(),
        }
    }

    #[test]
    fn accepts_minimal_config() -> TestResult {
        let config = config(json!({ "url": "https://example.com" }))?;

        assert_eq!(config.url(), "https://example.com");
        assert_eq!(config.retries(), None);

        Ok(())
    }

    #[test]
    fn missing_url_is_rejected() {
        assert_eq!(
            config(json!({ "retries": 1 })),
            Err(HookConfigError::MissingUrl)
        );
    }

    #[test]
    fn non_http_url_is_rejected() {
        assert_eq!(
            config(json!({ "url": "ftp://example.com" })),
            Err(HookConfigError::InvalidUrl)
        );
        assert_eq!(
            config(json!({ "url": "not a url" })),
            Err(HookConfigError::InvalidUrl)
        );
    }

    #[test]
    fn header_values_must_be_strings() {
        assert_eq!(
            config(json!({ "url": "https://example.com", "headers": { "x-count": 1 } })),
            Err(HookConfigError::InvalidHeaders)
        );
    }

    #[test]
    fn retries_are_bounded() {
        assert_eq!(
            config(json!({ "url": "https://example.com", "retries": 4 })),
            Err(HookConfigError::InvalidRetries)
        );
    }

    #[test]
    fn signing_key_is_stripped_on_construction() -> TestResult {
        let config = config(json!({ "url": "https://example.com", "signingKey": "sneaky" }))?;

        assert!(config.get("signingKey").is_none());

        Ok(())
    }

    #[test]
    fn merge_overwrites_patched_keys_and_keeps_the_rest() -> TestResult {
        let current = config(json!({
            "url": "https://example.com",
            "headers": { "x-tenant": "acme" },
            "retries": 2,
        }))?;

        let merged = current.merge(patch(json!({ "url": "https://new.example.com" })))?;

        assert_eq!(merged.url(), "https://new.example.com");
        assert_eq!(merged.retries(), Some(2));
        assert_eq!(merged.headers().collect::<Vec<_>>(), vec![("x-tenant", "acme")]);

        Ok(())
    }

    #[test]
    fn merge_never_applies_signing_key() -> TestResult {
        let current = config(json!({ "url": "https://example.com" }))?;

        let merged = current.merge(patch(json!({ "signingKey": "New-key" })))?;

        assert_eq!(merged, current);

        Ok(())
    }

    #[test]
    fn merge_keeps_insertion_order() -> TestResult {
        let current = config(json!({ "url": "https://example.com", "retries": 1 }))?;

        let merged = current.merge(patch(json!({ "custom": true })))?;

        let keys: Vec<&str> = merged.as_map().keys().map(String::as_str).collect();

        assert_eq!(keys, vec!["url", "retries", "custom"]);

        Ok(())
    }

    #[test]
    fn merge_revalidates_the_result() -> TestResult {
        let current = config(json!({ "url": "https://example.com" }))?;

        assert_eq!(
            current.merge(patch(json!({ "url": 42 }))),
            Err(HookConfigError::InvalidUrl)
        );

        Ok(())
    }
}
