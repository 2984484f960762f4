use crate::core::decode::decode_array;
use crate::core::errors::ExchangeError;
use crate::core::kernel::RestClient;
use crate::core::traits::AccountInfo;
use crate::core::types::{Account as AccountBalance, MarketWithAccount};
use crate::exchanges::upbit::{conversions, rest::UpbitRest};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Upbit account implementation
#[derive(Debug)]
pub struct Account<R: RestClient> {
    rest: UpbitRest<R>,
}

impl<R: RestClient + Clone> Account<R> {
    pub fn new(rest: &R) -> Self {
        Self {
            rest: UpbitRest::new(rest.clone()),
        }
    }
}

#[async_trait]
impl<R: RestClient> AccountInfo for Account<R> {
    #[instrument(skip(self), fields(exchange = "upbit"))]
    async fn get_accounts(&self) -> Result<Vec<AccountBalance>, ExchangeError> {
        let response = self.rest.get_accounts().await?;
        let accounts = decode_array(&response, "accounts", conversions::decode_account)?;
        debug!(count = accounts.len(), "decoded accounts");
        Ok(accounts)
    }

    #[instrument(skip(self), fields(exchange = "upbit"))]
    async fn get_market_with_account(
        &self,
        ticker: &str,
    ) -> Result<MarketWithAccount, ExchangeError> {
        if ticker.is_empty() {
            return Err(ExchangeError::InvalidParameters(
                "ticker must not be empty".to_string(),
            ));
        }

        let response = self.rest.get_order_chance(ticker).await?;
        Ok(conversions::decode_market_with_account(&response)?)
    }
}
