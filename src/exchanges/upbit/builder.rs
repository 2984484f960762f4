use crate::core::config::ExchangeConfig;
use crate::core::errors::ExchangeError;
use crate::core::kernel::{ReqwestRest, RestClientBuilder, RestClientConfig};
use crate::exchanges::upbit::{connector::UpbitConnector, signer::UpbitSigner};
use std::sync::Arc;
use tracing::debug;

/// Builder for Upbit connectors
///
/// Without credentials the connector can still reach every public endpoint.
pub struct UpbitBuilder {
    config: ExchangeConfig,
    http_client: Option<reqwest::Client>,
    rest_timeout: u64,
    user_agent: Option<String>,
}

impl Default for UpbitBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl UpbitBuilder {
    pub fn new() -> Self {
        Self {
            config: ExchangeConfig::read_only(),
            http_client: None,
            rest_timeout: 30,
            user_agent: None,
        }
    }

    pub fn with_config(mut self, config: ExchangeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set API credentials, keeping any base URL already configured
    pub fn with_credentials(mut self, access_key: String, secret_key: String) -> Self {
        let base_url = self.config.base_url.take();
        self.config = ExchangeConfig::new(access_key, secret_key);
        self.config.base_url = base_url;
        self
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.config.base_url = Some(base_url);
        self
    }

    /// Share an existing HTTP client, e.g. one connection pool across connectors
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Request timeout in seconds, ignored when a shared client is supplied
    pub fn with_rest_timeout(mut self, timeout: u64) -> Self {
        self.rest_timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = Some(user_agent);
        self
    }

    pub fn build(self) -> Result<UpbitConnector<ReqwestRest>, ExchangeError> {
        let base_url = self.config.resolved_base_url().to_string();
        let mut rest_config =
            RestClientConfig::new(base_url, "upbit".to_string()).with_timeout(self.rest_timeout);
        if let Some(user_agent) = self.user_agent {
            rest_config = rest_config.with_user_agent(user_agent);
        }

        let mut rest_builder = RestClientBuilder::new(rest_config);

        if self.config.has_credentials() {
            let signer = UpbitSigner::new(
                self.config.access_key().to_string(),
                self.config.secret_key().to_string(),
            )?;
            rest_builder = rest_builder.with_signer(Arc::new(signer));
        }

        if let Some(client) = self.http_client {
            rest_builder = rest_builder.with_http_client(client);
        }

        let rest = rest_builder.build()?;
        debug!(
            base_url = %rest.config().base_url,
            authenticated = rest.has_signer(),
            "built upbit connector"
        );

        Ok(UpbitConnector::new(rest))
    }
}

/// Build a connector straight from a configuration
pub fn build_connector(
    config: ExchangeConfig,
) -> Result<UpbitConnector<ReqwestRest>, ExchangeError> {
    UpbitBuilder::new().with_config(config).build()
}
