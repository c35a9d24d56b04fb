#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

use crate::utils::error::ConfigError;
use crate::utils::validation::{self, Validate};
use secrecy::SecretString;
use std::env;
use std::path::Path;

pub const DEFAULT_API_BASE: &str = "https://api.stripe.com";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

pub const SECRET_KEY_VAR: &str = "STRIPE_SECRET_KEY";
pub const API_BASE_VAR: &str = "STRIPE_API_BASE";
pub const TIMEOUT_VAR: &str = "STRIPE_TIMEOUT_SECONDS";

/// Process-wide settings, loaded once at startup and handed to the adapters by
/// reference. The secret key is only ever read from the environment.
#[derive(Debug)]
pub struct FunctionConfig {
    secret_key: SecretString,
    pub api_base: String,
    pub timeout_seconds: u64,
}

impl FunctionConfig {
    pub fn new(secret_key: SecretString, api_base: String, timeout_seconds: u64) -> Self {
        Self {
            secret_key,
            api_base,
            timeout_seconds,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// 先讀 TOML 檔，再以環境變數覆寫
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file = TomlConfig::from_file(path)?;
        Self::from_sources(Some(&file), |name| env::var(name).ok())
    }

    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_sources(None, lookup)
    }

    pub fn from_sources<F>(file: Option<&TomlConfig>, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret_key = lookup(SECRET_KEY_VAR);
        let secret_key = validation::validate_required_field(SECRET_KEY_VAR, &secret_key)?;

        let stripe = file.map(|f| &f.stripe);

        let api_base = lookup(API_BASE_VAR)
            .or_else(|| stripe.and_then(|s| s.api_base.clone()))
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let timeout_seconds = match lookup(TIMEOUT_VAR) {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidConfigValueError {
                    field: TIMEOUT_VAR.to_string(),
                    value: raw.clone(),
                    reason: "Expected a whole number of seconds".to_string(),
                })?,
            None => stripe
                .and_then(|s| s.timeout_seconds)
                .unwrap_or(DEFAULT_TIMEOUT_SECONDS),
        };

        Ok(Self {
            secret_key: SecretString::from(secret_key.clone()),
            api_base,
            timeout_seconds,
        })
    }

    pub fn secret_key(&self) -> &SecretString {
        &self.secret_key
    }
}

impl Validate for FunctionConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        use secrecy::ExposeSecret;

        validation::validate_non_empty_string("secret_key", self.secret_key.expose_secret())
            .map_err(|_| ConfigError::MissingConfigError {
                field: SECRET_KEY_VAR.to_string(),
            })?;
        validation::validate_secret_key("secret_key", self.secret_key.expose_secret())?;
        validation::validate_url("api_base", &self.api_base)?;
        validation::validate_range("timeout_seconds", self.timeout_seconds, 1, 300)?;

        tracing::debug!("✅ Function configuration validation passed");
        Ok(())
    }
}
