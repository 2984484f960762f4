use crate::core::errors::ExchangeError;
use crate::core::kernel::RestClient;
use crate::core::traits::{AccountInfo, ExchangeConnector, MarketDataSource, OrderManager};
use crate::core::types::{
    Account as AccountBalance, Candle, EndTime, MarketListing, MarketWithAccount, MinuteUnit,
    Order, OrderBook, OrderFilter, OrderLookup, OrderWithFills, TickerSummary, Trade, TradeQuery,
};
use async_trait::async_trait;

pub mod account;
pub mod market_data;
pub mod trading;

pub use account::Account;
pub use market_data::MarketData;
pub use trading::Trading;

/// Upbit connector that composes all sub-trait implementations
///
/// All parts share one transport. Public calls work without credentials;
/// private ones fail with `AuthError` when the transport has no signer.
#[derive(Debug)]
pub struct UpbitConnector<R: RestClient> {
    pub market: MarketData<R>,
    pub account: Account<R>,
    pub trading: Trading<R>,
}

impl<R: RestClient + Clone> UpbitConnector<R> {
    pub fn new(rest: R) -> Self {
        Self {
            market: MarketData::new(&rest),
            account: Account::new(&rest),
            trading: Trading::new(&rest),
        }
    }
}

#[async_trait]
impl<R: RestClient> MarketDataSource for UpbitConnector<R> {
    async fn get_markets(&self) -> Result<Vec<MarketListing>, ExchangeError> {
        self.market.get_markets().await
    }

    async fn get_minute_candles(
        &self,
        ticker: &str,
        unit: MinuteUnit,
        count: u32,
        to: Option<EndTime>,
    ) -> Result<Vec<Candle>, ExchangeError> {
        self.market.get_minute_candles(ticker, unit, count, to).await
    }

    async fn get_day_candles(
        &self,
        ticker: &str,
        count: u32,
        to: Option<EndTime>,
        converting_price_unit: Option<&str>,
    ) -> Result<Vec<Candle>, ExchangeError> {
        self.market
            .get_day_candles(ticker, count, to, converting_price_unit)
            .await
    }

    async fn get_week_candles(
        &self,
        ticker: &str,
        count: u32,
        to: Option<EndTime>,
    ) -> Result<Vec<Candle>, ExchangeError> {
        self.market.get_week_candles(ticker, count, to).await
    }

    async fn get_month_candles(
        &self,
        ticker: &str,
        count: u32,
        to: Option<EndTime>,
    ) -> Result<Vec<Candle>, ExchangeError> {
        self.market.get_month_candles(ticker, count, to).await
    }

    async fn get_trades(&self, ticker: &str, query: TradeQuery) -> Result<Vec<Trade>, ExchangeError> {
        self.market.get_trades(ticker, query).await
    }

    async fn get_ticker_summaries(
        &self,
        tickers: &[&str],
    ) -> Result<Vec<TickerSummary>, ExchangeError> {
        self.market.get_ticker_summaries(tickers).await
    }

    async fn get_order_books(&self, tickers: &[&str]) -> Result<Vec<OrderBook>, ExchangeError> {
        self.market.get_order_books(tickers).await
    }
}

#[async_trait]
impl<R: RestClient> AccountInfo for UpbitConnector<R> {
    async fn get_accounts(&self) -> Result<Vec<AccountBalance>, ExchangeError> {
        self.account.get_accounts().await
    }

    async fn get_market_with_account(
        &self,
        ticker: &str,
    ) -> Result<MarketWithAccount, ExchangeError> {
        self.account.get_market_with_account(ticker).await
    }
}

#[async_trait]
impl<R: RestClient> OrderManager for UpbitConnector<R> {
    async fn get_order(&self, lookup: &OrderLookup) -> Result<OrderWithFills, ExchangeError> {
        self.trading.get_order(lookup).await
    }

    async fn get_orders(&self, filter: &OrderFilter) -> Result<Vec<Order>, ExchangeError> {
        self.trading.get_orders(filter).await
    }

    async fn cancel_order(&self, lookup: &OrderLookup) -> Result<Order, ExchangeError> {
        self.trading.cancel_order(lookup).await
    }
}

impl<R: RestClient> ExchangeConnector for UpbitConnector<R> {}
