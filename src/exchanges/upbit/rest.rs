use crate::core::errors::ExchangeError;
use crate::core::kernel::RestClient;
use crate::core::types::{EndTime, MinuteUnit, OrderFilter, OrderLookup, TradeQuery};
use serde_json::Value;

type Params = Vec<(&'static str, String)>;

/// Upbit REST endpoints, returning raw JSON
///
/// Parameters are pushed in the order they appear on the wire, which is also
/// the order the query hash is computed over.
#[derive(Debug, Clone)]
pub struct UpbitRest<R: RestClient> {
    rest_client: R,
}

impl<R: RestClient> UpbitRest<R> {
    pub fn new(rest_client: R) -> Self {
        Self { rest_client }
    }

    async fn get(
        &self,
        endpoint: &str,
        params: &[(&'static str, String)],
        authenticated: bool,
    ) -> Result<Value, ExchangeError> {
        let pairs: Vec<(&str, &str)> = params.iter().map(|(k, v)| (*k, v.as_str())).collect();
        self.rest_client.get(endpoint, &pairs, authenticated).await
    }

    pub async fn get_markets(&self) -> Result<Value, ExchangeError> {
        self.get("/v1/market/all", &[("isDetails", "true".to_string())], false)
            .await
    }

    pub async fn get_minute_candles(
        &self,
        ticker: &str,
        unit: MinuteUnit,
        count: u32,
        to: Option<&EndTime>,
    ) -> Result<Value, ExchangeError> {
        let endpoint = format!("/v1/candles/minutes/{}", unit.minutes());
        self.get(&endpoint, &candle_params(ticker, count, to), false)
            .await
    }

    pub async fn get_day_candles(
        &self,
        ticker: &str,
        count: u32,
        to: Option<&EndTime>,
        converting_price_unit: Option<&str>,
    ) -> Result<Value, ExchangeError> {
        let mut params = candle_params(ticker, count, to);
        if let Some(unit) = converting_price_unit {
            params.push(("convertingPriceUnit", unit.to_string()));
        }
        self.get("/v1/candles/days", &params, false).await
    }

    pub async fn get_week_candles(
        &self,
        ticker: &str,
        count: u32,
        to: Option<&EndTime>,
    ) -> Result<Value, ExchangeError> {
        self.get("/v1/candles/weeks", &candle_params(ticker, count, to), false)
            .await
    }

    pub async fn get_month_candles(
        &self,
        ticker: &str,
        count: u32,
        to: Option<&EndTime>,
    ) -> Result<Value, ExchangeError> {
        self.get("/v1/candles/months", &candle_params(ticker, count, to), false)
            .await
    }

    pub async fn get_trades(&self, ticker: &str, query: &TradeQuery) -> Result<Value, ExchangeError> {
        let mut params: Params = vec![
            ("market", ticker.to_string()),
            ("count", query.count.to_string()),
        ];
        if let Some(to) = query.to {
            params.push(("to", to.format("%H:%M:%S").to_string()));
        }
        if let Some(cursor) = query.cursor {
            params.push(("cursor", cursor.to_string()));
        }
        // zero means today, which is also the server default
        if query.days_ago.get() > 0 {
            params.push(("daysAgo", query.days_ago.get().to_string()));
        }
        self.get("/v1/trades/ticks", &params, false).await
    }

    /// `markets` is the comma-joined ticker list
    pub async fn get_tickers(&self, markets: &str) -> Result<Value, ExchangeError> {
        self.get("/v1/ticker", &[("markets", markets.to_string())], false)
            .await
    }

    /// `markets` is the comma-joined ticker list
    pub async fn get_order_books(&self, markets: &str) -> Result<Value, ExchangeError> {
        self.get("/v1/orderbook", &[("markets", markets.to_string())], false)
            .await
    }

    pub async fn get_accounts(&self) -> Result<Value, ExchangeError> {
        self.get("/v1/accounts", &[], true).await
    }

    pub async fn get_order_chance(&self, ticker: &str) -> Result<Value, ExchangeError> {
        self.get("/v1/orders/chance", &[("market", ticker.to_string())], true)
            .await
    }

    pub async fn get_order(&self, lookup: &OrderLookup) -> Result<Value, ExchangeError> {
        let param = lookup.to_query()?;
        self.get("/v1/order", &[param], true).await
    }

    pub async fn get_orders(&self, filter: &OrderFilter) -> Result<Value, ExchangeError> {
        let params = filter.to_query()?;
        self.get("/v1/orders", &params, true).await
    }

    pub async fn cancel_order(&self, lookup: &OrderLookup) -> Result<Value, ExchangeError> {
        let (key, value) = lookup.to_query()?;
        self.rest_client
            .delete("/v1/order", &[(key, value.as_str())], true)
            .await
    }
}

fn candle_params(ticker: &str, count: u32, to: Option<&EndTime>) -> Params {
    let mut params: Params = vec![
        ("market", ticker.to_string()),
        ("count", count.to_string()),
    ];
    if let Some(to) = to {
        params.push(("to", to.to_query()));
    }
    params
}
