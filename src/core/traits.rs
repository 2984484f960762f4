use crate::core::{
    errors::ExchangeError,
    types::{
        Account, Candle, EndTime, MarketListing, MarketWithAccount, MinuteUnit, Order, OrderBook,
        OrderFilter, OrderLookup, OrderWithFills, TickerSummary, Trade, TradeQuery,
    },
};
use async_trait::async_trait;

/// Public market data, no credentials required
#[async_trait]
pub trait MarketDataSource {
    /// Get all listed markets
    async fn get_markets(&self) -> Result<Vec<MarketListing>, ExchangeError>;

    /// Get minute candles, newest first, ending at `to` (now if `None`)
    async fn get_minute_candles(
        &self,
        ticker: &str,
        unit: MinuteUnit,
        count: u32,
        to: Option<EndTime>,
    ) -> Result<Vec<Candle>, ExchangeError>;

    /// Get day candles, optionally with prices converted into another currency
    async fn get_day_candles(
        &self,
        ticker: &str,
        count: u32,
        to: Option<EndTime>,
        converting_price_unit: Option<&str>,
    ) -> Result<Vec<Candle>, ExchangeError>;

    async fn get_week_candles(
        &self,
        ticker: &str,
        count: u32,
        to: Option<EndTime>,
    ) -> Result<Vec<Candle>, ExchangeError>;

    async fn get_month_candles(
        &self,
        ticker: &str,
        count: u32,
        to: Option<EndTime>,
    ) -> Result<Vec<Candle>, ExchangeError>;

    /// Get recent trades for a market
    async fn get_trades(&self, ticker: &str, query: TradeQuery) -> Result<Vec<Trade>, ExchangeError>;

    /// Get ticker snapshots for several markets in one request
    ///
    /// The response order is the server's, not the order of `tickers`.
    async fn get_ticker_summaries(
        &self,
        tickers: &[&str],
    ) -> Result<Vec<TickerSummary>, ExchangeError>;

    /// Get order books for several markets in one request
    ///
    /// The response order is the server's, not the order of `tickers`.
    async fn get_order_books(&self, tickers: &[&str]) -> Result<Vec<OrderBook>, ExchangeError>;
}

#[async_trait]
pub trait AccountInfo {
    /// Get balances for every currency held
    async fn get_accounts(&self) -> Result<Vec<Account>, ExchangeError>;

    /// Get order constraints for a market together with both affected accounts
    async fn get_market_with_account(&self, ticker: &str)
        -> Result<MarketWithAccount, ExchangeError>;
}

#[async_trait]
pub trait OrderManager {
    /// Get one order with its fills
    async fn get_order(&self, lookup: &OrderLookup) -> Result<OrderWithFills, ExchangeError>;

    /// List orders matching a filter
    async fn get_orders(&self, filter: &OrderFilter) -> Result<Vec<Order>, ExchangeError>;

    /// Cancel an order, returning the server's snapshot of it
    async fn cancel_order(&self, lookup: &OrderLookup) -> Result<Order, ExchangeError>;
}

// Composite trait for callers that need the whole API surface
#[async_trait]
pub trait ExchangeConnector: MarketDataSource + AccountInfo + OrderManager {}
