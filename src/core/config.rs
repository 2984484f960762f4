use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::env;

pub const DEFAULT_BASE_URL: &str = "https://api.upbit.com";

#[derive(Debug, Clone)]
pub struct ExchangeConfig {
    pub access_key: Secret<String>,
    pub secret_key: Secret<String>,
    pub base_url: Option<String>,
}

// Custom Serialize implementation - never expose secrets in serialization
impl Serialize for ExchangeConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("ExchangeConfig", 3)?;
        state.serialize_field("access_key", "[REDACTED]")?;
        state.serialize_field("secret_key", "[REDACTED]")?;
        state.serialize_field("base_url", &self.base_url)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for ExchangeConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct ExchangeConfigHelper {
            access_key: String,
            secret_key: String,
            base_url: Option<String>,
        }

        let helper = ExchangeConfigHelper::deserialize(deserializer)?;
        Ok(Self {
            access_key: Secret::new(helper.access_key),
            secret_key: Secret::new(helper.secret_key),
            base_url: helper.base_url,
        })
    }
}

impl ExchangeConfig {
    /// Create a new configuration with API credentials
    #[must_use]
    pub fn new(access_key: String, secret_key: String) -> Self {
        Self {
            access_key: Secret::new(access_key),
            secret_key: Secret::new(secret_key),
            base_url: None,
        }
    }

    /// Create configuration from environment variables
    ///
    /// Expected environment variables:
    /// - `{PREFIX}_ACCESS_KEY` (e.g., `UPBIT_ACCESS_KEY`)
    /// - `{PREFIX}_SECRET_KEY` (e.g., `UPBIT_SECRET_KEY`)
    /// - `{PREFIX}_BASE_URL` (optional)
    pub fn from_env(prefix: &str) -> Result<Self, ConfigError> {
        let prefix = prefix.to_uppercase();
        let access_key_var = format!("{}_ACCESS_KEY", prefix);
        let secret_key_var = format!("{}_SECRET_KEY", prefix);
        let base_url_var = format!("{}_BASE_URL", prefix);

        let access_key = env::var(&access_key_var)
            .map_err(|_| ConfigError::MissingEnvironmentVariable(access_key_var))?;

        let secret_key = env::var(&secret_key_var)
            .map_err(|_| ConfigError::MissingEnvironmentVariable(secret_key_var))?;

        let base_url = env::var(&base_url_var).ok();

        Ok(Self {
            access_key: Secret::new(access_key),
            secret_key: Secret::new(secret_key),
            base_url,
        })
    }

    /// Create configuration from .env file and environment variables
    ///
    /// Loads `.env` (if it exists) and then reads the standard variables.
    ///
    /// **Security Warning**: Never commit .env files to version control!
    #[cfg(feature = "env-file")]
    pub fn from_env_file(prefix: &str) -> Result<Self, ConfigError> {
        Self::from_env_file_with_path(prefix, ".env")
    }

    /// Create configuration from a specific .env file path
    #[cfg(feature = "env-file")]
    pub fn from_env_file_with_path(prefix: &str, env_file_path: &str) -> Result<Self, ConfigError> {
        match dotenv::from_path(env_file_path) {
            Ok(()) => {}
            Err(dotenv::Error::Io(io_err)) if io_err.kind() == std::io::ErrorKind::NotFound => {
                // no file, fall back to the process environment
            }
            Err(e) => {
                return Err(ConfigError::InvalidConfiguration(format!(
                    "Failed to load .env file '{}': {}",
                    env_file_path, e
                )));
            }
        }

        Self::from_env(prefix)
    }

    /// Configuration for public market data only
    #[must_use]
    pub fn read_only() -> Self {
        Self {
            access_key: Secret::new(String::new()),
            secret_key: Secret::new(String::new()),
            base_url: None,
        }
    }

    /// Check if this configuration has credentials for authenticated operations
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        !self.access_key.expose_secret().is_empty() && !self.secret_key.expose_secret().is_empty()
    }

    /// Set custom base URL
    #[must_use]
    pub fn base_url(mut self, base_url: String) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Base URL requests are sent to
    pub fn resolved_base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// Get access key (use carefully - exposes secret)
    pub fn access_key(&self) -> &str {
        self.access_key.expose_secret()
    }

    /// Get secret key (use carefully - exposes secret)
    pub fn secret_key(&self) -> &str {
        self.secret_key.expose_secret()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvironmentVariable(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}
