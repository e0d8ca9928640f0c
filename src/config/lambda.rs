use crate::config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECONDS, MAX_TIMEOUT_SECONDS};
use crate::utils::error::{BridgeError, Result};
use crate::utils::validation::{validate_range, validate_url, Validate};
use std::env;
use std::time::Duration;

/// Lambda 只處理單筆查詢，所以只需要遠端服務的設定
#[derive(Debug, Clone)]
pub struct LambdaConfig {
    pub service_base_url: String,
    pub timeout_seconds: u64,
}

impl LambdaConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let timeout_seconds = match lookup("REQUEST_TIMEOUT_SECONDS") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| BridgeError::InvalidConfigValueError {
                    field: "REQUEST_TIMEOUT_SECONDS".to_string(),
                    value: raw.clone(),
                    reason: "must be a whole number of seconds".to_string(),
                })?,
            None => DEFAULT_TIMEOUT_SECONDS,
        };

        Ok(Self {
            service_base_url: lookup("SERVICE_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout_seconds,
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        validate_url("SERVICE_BASE_URL", &self.service_base_url)?;
        validate_range(
            "REQUEST_TIMEOUT_SECONDS",
            self.timeout_seconds,
            1,
            MAX_TIMEOUT_SECONDS,
        )?;

        tracing::info!("✅ Lambda configuration validation passed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = LambdaConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.service_base_url, DEFAULT_BASE_URL);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_values_from_environment() {
        let config = LambdaConfig::from_lookup(lookup_from(&[
            ("SERVICE_BASE_URL", "http://internal:9000/customer/"),
            ("REQUEST_TIMEOUT_SECONDS", "12"),
        ]))
        .unwrap();

        assert_eq!(config.service_base_url, "http://internal:9000/customer/");
        assert_eq!(config.timeout_seconds, 12);
    }

    #[test]
    fn test_invalid_timeout_is_rejected() {
        let err = LambdaConfig::from_lookup(lookup_from(&[("REQUEST_TIMEOUT_SECONDS", "soon")]))
            .unwrap_err();
        assert!(matches!(err, BridgeError::InvalidConfigValueError { .. }));
    }
}
