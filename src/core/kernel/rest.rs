use crate::core::config::ConfigError;
use crate::core::errors::ExchangeError;
use crate::core::kernel::signer::Signer;
use async_trait::async_trait;
use reqwest::{Client, Method, Response};
use serde_json::Value;
use std::sync::Arc;
use tracing::{instrument, trace};

/// REST client trait for making HTTP requests
///
/// Query parameters are ordered pairs; implementations must send them in the
/// given order and must sign exactly the query string they send.
#[async_trait]
pub trait RestClient: Send + Sync {
    /// Make a GET request
    ///
    /// # Arguments
    /// * `endpoint` - The API endpoint path
    /// * `query_params` - Query parameters as key-value pairs
    /// * `authenticated` - Whether to sign the request
    ///
    /// # Returns
    /// The response body as a JSON value
    async fn get(
        &self,
        endpoint: &str,
        query_params: &[(&str, &str)],
        authenticated: bool,
    ) -> Result<Value, ExchangeError>;

    /// Make a DELETE request
    ///
    /// # Arguments
    /// * `endpoint` - The API endpoint path
    /// * `query_params` - Query parameters as key-value pairs
    /// * `authenticated` - Whether to sign the request
    ///
    /// # Returns
    /// The response body as a JSON value
    async fn delete(
        &self,
        endpoint: &str,
        query_params: &[(&str, &str)],
        authenticated: bool,
    ) -> Result<Value, ExchangeError>;
}

/// Configuration for the REST client
#[derive(Clone, Debug)]
pub struct RestClientConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Exchange name for logging and tracing
    pub exchange_name: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// User agent string to include in requests
    pub user_agent: String,
}

impl RestClientConfig {
    /// Create a new configuration
    ///
    /// # Arguments
    /// * `base_url` - Base URL for the API
    /// * `exchange_name` - Name of the exchange
    pub fn new(base_url: String, exchange_name: String) -> Self {
        Self {
            base_url,
            exchange_name,
            timeout_seconds: 30,
            user_agent: concat!("upbitx/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// Set the user agent string
    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = user_agent;
        self
    }
}

/// Builder for creating REST client instances
pub struct RestClientBuilder {
    config: RestClientConfig,
    signer: Option<Arc<dyn Signer>>,
    http_client: Option<Client>,
}

impl RestClientBuilder {
    /// Create a new builder with the given configuration
    pub fn new(config: RestClientConfig) -> Self {
        Self {
            config,
            signer: None,
            http_client: None,
        }
    }

    /// Set the signer for authenticated requests
    pub fn with_signer(mut self, signer: Arc<dyn Signer>) -> Self {
        self.signer = Some(signer);
        self
    }

    /// Reuse an existing `reqwest::Client` and its connection pool
    ///
    /// The shared client's own timeout and user agent apply; the ones in
    /// `RestClientConfig` are only used when the builder creates the client.
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Build the REST client
    pub fn build(self) -> Result<ReqwestRest, ExchangeError> {
        let client = match self.http_client {
            Some(client) => client,
            None => Client::builder()
                .timeout(std::time::Duration::from_secs(self.config.timeout_seconds))
                .user_agent(&self.config.user_agent)
                .build()
                .map_err(|e| {
                    ConfigError::InvalidConfiguration(format!(
                        "Failed to build HTTP client: {}",
                        e
                    ))
                })?,
        };

        Ok(ReqwestRest {
            client,
            config: self.config,
            signer: self.signer,
        })
    }
}

/// Implementation of `RestClient` using reqwest
#[derive(Clone)]
pub struct ReqwestRest {
    client: Client,
    config: RestClientConfig,
    signer: Option<Arc<dyn Signer>>,
}

impl std::fmt::Debug for ReqwestRest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestRest")
            .field("config", &self.config)
            .field("has_signer", &self.signer.is_some())
            .finish_non_exhaustive()
    }
}

impl ReqwestRest {
    pub fn config(&self) -> &RestClientConfig {
        &self.config
    }

    pub fn has_signer(&self) -> bool {
        self.signer.is_some()
    }

    /// Build the full URL for an endpoint and canonical query string
    fn build_url(&self, endpoint: &str, query_string: &str) -> String {
        if query_string.is_empty() {
            format!("{}{}", self.config.base_url, endpoint)
        } else {
            format!("{}{}?{}", self.config.base_url, endpoint, query_string)
        }
    }

    /// Handle the response and extract JSON
    #[instrument(skip(self, response), fields(exchange = %self.config.exchange_name, status = %response.status()))]
    async fn handle_response(&self, response: Response) -> Result<Value, ExchangeError> {
        let status = response.status();
        let response_text = response.text().await?;

        trace!("Response body: {}", response_text);

        if status.is_success() {
            Ok(serde_json::from_str(&response_text)?)
        } else {
            Err(ExchangeError::ApiError {
                code: i32::from(status.as_u16()),
                message: response_text,
            })
        }
    }

    /// Make a request with the given parameters
    #[instrument(skip(self, query_params), fields(exchange = %self.config.exchange_name, method = %method, endpoint = %endpoint, param_count = query_params.len()))]
    async fn make_request(
        &self,
        method: Method,
        endpoint: &str,
        query_params: &[(&str, &str)],
        authenticated: bool,
    ) -> Result<Value, ExchangeError> {
        let query_string = create_query_string(query_params);
        let url = self.build_url(endpoint, &query_string);
        let mut request = self.client.request(method.clone(), &url);

        if authenticated {
            let signer = self.signer.as_ref().ok_or_else(|| {
                ExchangeError::AuthError(
                    "Authentication required but no signer provided".to_string(),
                )
            })?;

            let headers = signer.sign_request(method.as_str(), endpoint, &query_string)?;
            for (key, value) in headers {
                request = request.header(&key, &value);
            }
        }

        let response = request.send().await.map_err(transport_error)?;

        self.handle_response(response).await
    }
}

/// Connection and timeout failures are `NetworkError`; any other reqwest
/// failure (malformed URL or broken body) stays an `HttpError`.
fn transport_error(error: reqwest::Error) -> ExchangeError {
    if error.is_connect() || error.is_timeout() {
        ExchangeError::NetworkError(format!("Request failed: {}", error))
    } else {
        ExchangeError::from(error)
    }
}

/// Canonical query string: `key=value` pairs joined with `&`, in caller order
///
/// Values are percent-encoded outside the unreserved set; keys are written
/// as given so `states[]` style array keys stay literal. The output contains
/// nothing the URL parser re-encodes, so this exact string is both sent and
/// signed.
pub fn create_query_string(params: &[(&str, &str)]) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

#[async_trait]
impl RestClient for ReqwestRest {
    async fn get(
        &self,
        endpoint: &str,
        query_params: &[(&str, &str)],
        authenticated: bool,
    ) -> Result<Value, ExchangeError> {
        self.make_request(Method::GET, endpoint, query_params, authenticated)
            .await
    }

    async fn delete(
        &self,
        endpoint: &str,
        query_params: &[(&str, &str)],
        authenticated: bool,
    ) -> Result<Value, ExchangeError> {
        self.make_request(Method::DELETE, endpoint, query_params, authenticated)
            .await
    }
}
