/// Transport layer shared by the exchange clients
///
/// The kernel contains only transport and authentication plumbing, no
/// exchange-specific payload handling.
///
/// - `RestClient`: HTTP interface, implemented by `ReqwestRest`
/// - `Signer`: pluggable request authentication
///
/// # Example
/// ```rust,no_run
/// use upbitx::core::kernel::*;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let rest_config = RestClientConfig::new("https://api.upbit.com".to_string(), "upbit".to_string());
/// let rest = RestClientBuilder::new(rest_config).build()?;
///
/// let markets = rest.get("/v1/market/all", &[("isDetails", "true")], false).await?;
/// println!("{}", markets);
/// # Ok(())
/// # }
/// ```
pub mod rest;
pub mod signer;

pub use rest::{create_query_string, ReqwestRest, RestClient, RestClientBuilder, RestClientConfig};
pub use signer::{SignatureResult, Signer};
