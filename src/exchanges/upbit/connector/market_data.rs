use crate::core::decode::decode_array;
use crate::core::errors::ExchangeError;
use crate::core::kernel::RestClient;
use crate::core::traits::MarketDataSource;
use crate::core::types::{
    Candle, EndTime, MarketListing, MinuteUnit, OrderBook, TickerSummary, Trade, TradeQuery,
};
use crate::exchanges::upbit::{conversions, rest::UpbitRest};
use async_trait::async_trait;
use tracing::{debug, instrument};

pub const MAX_CANDLE_COUNT: u32 = 200;
pub const MAX_TRADE_COUNT: u32 = 500;

/// Upbit public market data
#[derive(Debug)]
pub struct MarketData<R: RestClient> {
    rest: UpbitRest<R>,
}

impl<R: RestClient + Clone> MarketData<R> {
    pub fn new(rest: &R) -> Self {
        Self {
            rest: UpbitRest::new(rest.clone()),
        }
    }
}

fn check_ticker(ticker: &str) -> Result<(), ExchangeError> {
    if ticker.is_empty() {
        return Err(ExchangeError::InvalidParameters(
            "ticker must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn check_count(count: u32, max: u32) -> Result<(), ExchangeError> {
    if count == 0 || count > max {
        return Err(ExchangeError::InvalidParameters(format!(
            "count must be within 1..={}, got {}",
            max, count
        )));
    }
    Ok(())
}

/// Comma-joined ticker list for the batched endpoints
fn join_tickers(tickers: &[&str]) -> Result<String, ExchangeError> {
    if tickers.is_empty() {
        return Err(ExchangeError::InvalidParameters(
            "at least one ticker is required".to_string(),
        ));
    }
    for ticker in tickers {
        check_ticker(ticker)?;
    }
    Ok(tickers.join(","))
}

#[async_trait]
impl<R: RestClient> MarketDataSource for MarketData<R> {
    #[instrument(skip(self), fields(exchange = "upbit"))]
    async fn get_markets(&self) -> Result<Vec<MarketListing>, ExchangeError> {
        let response = self.rest.get_markets().await?;
        let markets = decode_array(&response, "markets", conversions::decode_market_listing)?;
        debug!(count = markets.len(), "decoded markets");
        Ok(markets)
    }

    #[instrument(skip(self), fields(exchange = "upbit"))]
    async fn get_minute_candles(
        &self,
        ticker: &str,
        unit: MinuteUnit,
        count: u32,
        to: Option<EndTime>,
    ) -> Result<Vec<Candle>, ExchangeError> {
        check_ticker(ticker)?;
        check_count(count, MAX_CANDLE_COUNT)?;

        let response = self
            .rest
            .get_minute_candles(ticker, unit, count, to.as_ref())
            .await?;
        let candles = decode_array(&response, "candles", conversions::decode_minute_candle)?;
        debug!(count = candles.len(), "decoded minute candles");
        Ok(candles)
    }

    #[instrument(skip(self), fields(exchange = "upbit"))]
    async fn get_day_candles(
        &self,
        ticker: &str,
        count: u32,
        to: Option<EndTime>,
        converting_price_unit: Option<&str>,
    ) -> Result<Vec<Candle>, ExchangeError> {
        check_ticker(ticker)?;
        check_count(count, MAX_CANDLE_COUNT)?;

        let response = self
            .rest
            .get_day_candles(ticker, count, to.as_ref(), converting_price_unit)
            .await?;
        let candles = decode_array(&response, "candles", conversions::decode_day_candle)?;
        debug!(count = candles.len(), "decoded day candles");
        Ok(candles)
    }

    #[instrument(skip(self), fields(exchange = "upbit"))]
    async fn get_week_candles(
        &self,
        ticker: &str,
        count: u32,
        to: Option<EndTime>,
    ) -> Result<Vec<Candle>, ExchangeError> {
        check_ticker(ticker)?;
        check_count(count, MAX_CANDLE_COUNT)?;

        let response = self
            .rest
            .get_week_candles(ticker, count, to.as_ref())
            .await?;
        Ok(decode_array(
            &response,
            "candles",
            conversions::decode_week_candle,
        )?)
    }

    #[instrument(skip(self), fields(exchange = "upbit"))]
    async fn get_month_candles(
        &self,
        ticker: &str,
        count: u32,
        to: Option<EndTime>,
    ) -> Result<Vec<Candle>, ExchangeError> {
        check_ticker(ticker)?;
        check_count(count, MAX_CANDLE_COUNT)?;

        let response = self
            .rest
            .get_month_candles(ticker, count, to.as_ref())
            .await?;
        Ok(decode_array(
            &response,
            "candles",
            conversions::decode_month_candle,
        )?)
    }

    #[instrument(skip(self), fields(exchange = "upbit"))]
    async fn get_trades(&self, ticker: &str, query: TradeQuery) -> Result<Vec<Trade>, ExchangeError> {
        check_ticker(ticker)?;
        check_count(query.count, MAX_TRADE_COUNT)?;

        let response = self.rest.get_trades(ticker, &query).await?;
        let trades = decode_array(&response, "trades", conversions::decode_trade)?;
        debug!(count = trades.len(), "decoded trades");
        Ok(trades)
    }

    #[instrument(skip(self), fields(exchange = "upbit"))]
    async fn get_ticker_summaries(
        &self,
        tickers: &[&str],
    ) -> Result<Vec<TickerSummary>, ExchangeError> {
        let markets = join_tickers(tickers)?;

        let response = self.rest.get_tickers(&markets).await?;
        Ok(decode_array(
            &response,
            "tickers",
            conversions::decode_ticker_summary,
        )?)
    }

    #[instrument(skip(self), fields(exchange = "upbit"))]
    async fn get_order_books(&self, tickers: &[&str]) -> Result<Vec<OrderBook>, ExchangeError> {
        let markets = join_tickers(tickers)?;

        let response = self.rest.get_order_books(&markets).await?;
        let books = decode_array(&response, "orderbooks", conversions::decode_order_book)?;
        debug!(count = books.len(), "decoded order books");
        Ok(books)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_bounds() {
        assert!(check_count(1, MAX_CANDLE_COUNT).is_ok());
        assert!(check_count(200, MAX_CANDLE_COUNT).is_ok());
        assert!(check_count(0, MAX_CANDLE_COUNT).is_err());
        assert!(check_count(201, MAX_CANDLE_COUNT).is_err());
        assert!(check_count(500, MAX_TRADE_COUNT).is_ok());
    }

    #[test]
    fn test_join_tickers() {
        assert_eq!(join_tickers(&["KRW-BTC", "KRW-ETH"]).unwrap(), "KRW-BTC,KRW-ETH");
        assert!(matches!(
            join_tickers(&[]),
            Err(ExchangeError::InvalidParameters(_))
        ));
        assert!(join_tickers(&["KRW-BTC", ""]).is_err());
    }
}
