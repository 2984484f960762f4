use crate::core::errors::ExchangeError;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use uuid::Uuid;

/// Offset of the exchange's civil time (Asia/Seoul, no DST)
pub const EXCHANGE_UTC_OFFSET_SECS: i32 = 9 * 3600;

/// Fixed `+09:00` offset used for exchange-local timestamps
pub const EXCHANGE_OFFSET: FixedOffset = match FixedOffset::east_opt(EXCHANGE_UTC_OFFSET_SECS) {
    Some(offset) => offset,
    None => panic!("exchange offset out of range"),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum MarketWarning {
    None,
    Caution,
}

impl MarketWarning {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Caution => "CAUTION",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "NONE" => Some(Self::None),
            "CAUTION" => Some(Self::Caution),
            _ => None,
        }
    }
}

/// Ask (sell) or bid (buy)
///
/// The trade feed spells these `ASK`/`BID`, order endpoints spell them
/// `ask`/`bid`. Each table is matched exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Side {
    Ask,
    Bid,
}

impl Side {
    pub fn from_trade_code(code: &str) -> Option<Self> {
        match code {
            "ASK" => Some(Self::Ask),
            "BID" => Some(Self::Bid),
            _ => None,
        }
    }

    pub fn from_order_code(code: &str) -> Option<Self> {
        match code {
            "ask" => Some(Self::Ask),
            "bid" => Some(Self::Bid),
            _ => None,
        }
    }

    pub const fn as_trade_code(self) -> &'static str {
        match self {
            Self::Ask => "ASK",
            Self::Bid => "BID",
        }
    }

    pub const fn as_order_code(self) -> &'static str {
        match self {
            Self::Ask => "ask",
            Self::Bid => "bid",
        }
    }
}

/// Price trend relative to the previous close
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Change {
    Even,
    Rise,
    Fall,
}

impl Change {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Even => "EVEN",
            Self::Rise => "RISE",
            Self::Fall => "FALL",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "EVEN" => Some(Self::Even),
            "RISE" => Some(Self::Rise),
            "FALL" => Some(Self::Fall),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum OrderType {
    /// Limit order
    Limit,
    /// Market buy, sized by total price
    Price,
    /// Market sell, sized by volume
    Market,
}

impl OrderType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Limit => "limit",
            Self::Price => "price",
            Self::Market => "market",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "limit" => Some(Self::Limit),
            "price" => Some(Self::Price),
            "market" => Some(Self::Market),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum OrderState {
    Wait,
    Watch,
    Done,
    Cancel,
}

impl OrderState {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Wait => "wait",
            Self::Watch => "watch",
            Self::Done => "done",
            Self::Cancel => "cancel",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "wait" => Some(Self::Wait),
            "watch" => Some(Self::Watch),
            "done" => Some(Self::Done),
            "cancel" => Some(Self::Cancel),
            _ => None,
        }
    }

    /// Done and cancelled orders no longer change
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Cancel)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum OrderBy {
    Asc,
    #[default]
    Desc,
}

impl OrderBy {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Width of a minute candle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum MinuteUnit {
    Minutes1,
    Minutes3,
    Minutes5,
    Minutes10,
    Minutes15,
    Minutes30,
    Minutes60,
    Minutes240,
}

impl MinuteUnit {
    pub const fn minutes(self) -> u16 {
        match self {
            Self::Minutes1 => 1,
            Self::Minutes3 => 3,
            Self::Minutes5 => 5,
            Self::Minutes10 => 10,
            Self::Minutes15 => 15,
            Self::Minutes30 => 30,
            Self::Minutes60 => 60,
            Self::Minutes240 => 240,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::Minutes1),
            3 => Some(Self::Minutes3),
            5 => Some(Self::Minutes5),
            10 => Some(Self::Minutes10),
            15 => Some(Self::Minutes15),
            30 => Some(Self::Minutes30),
            60 => Some(Self::Minutes60),
            240 => Some(Self::Minutes240),
            _ => None,
        }
    }
}

macro_rules! impl_display_as_str {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

impl_display_as_str!(MarketWarning, Change, OrderType, OrderState, OrderBy);

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_order_code())
    }
}

impl fmt::Display for MinuteUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.minutes())
    }
}

/// How many days back the trade history starts, 0 (today) through 7
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct DaysAgo(u8);

impl DaysAgo {
    pub const MAX: u8 = 7;

    pub fn new(days: u8) -> Result<Self, ExchangeError> {
        if days > Self::MAX {
            return Err(ExchangeError::InvalidParameters(format!(
                "days_ago must be within 0..={}, got {}",
                Self::MAX,
                days
            )));
        }
        Ok(Self(days))
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for DaysAgo {
    type Error = ExchangeError;

    fn try_from(days: u8) -> Result<Self, Self::Error> {
        Self::new(days)
    }
}

/// Upper bound for candle queries, always carried in UTC
///
/// Zoned datetimes are converted; naive datetimes are taken to be UTC already.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EndTime(DateTime<Utc>);

impl EndTime {
    pub const fn as_utc(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Value sent in the `to` query parameter
    pub fn to_query(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for EndTime {
    fn from(value: DateTime<Tz>) -> Self {
        Self(value.with_timezone(&Utc))
    }
}

impl From<NaiveDateTime> for EndTime {
    fn from(value: NaiveDateTime) -> Self {
        Self(value.and_utc())
    }
}

/// A tradable pair as listed by the exchange
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarketListing {
    /// `QUOTE-BASE`, e.g. `KRW-BTC`
    pub ticker: String,
    pub korean_name: String,
    pub english_name: String,
    pub warning: MarketWarning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candle {
    pub ticker: String,
    /// Start of the candle period
    pub period_start: DateTime<Utc>,
    pub opening_price: Decimal,
    pub high_price: Decimal,
    pub low_price: Decimal,
    pub trade_price: Decimal,
    /// Time of the last trade that went into this candle
    pub latest_trade_at: DateTime<Utc>,
    pub acc_trade_price: Decimal,
    pub acc_trade_volume: Decimal,
    pub kind: CandleKind,
}

/// Fields specific to the endpoint the candle came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum CandleKind {
    Minute {
        unit: MinuteUnit,
    },
    Day {
        prev_closing_price: Decimal,
        change_price: Decimal,
        change_rate: Decimal,
        converted_trade_price: Option<Decimal>,
    },
    Week {
        first_day_of_period: NaiveDate,
    },
    Month {
        first_day_of_period: NaiveDate,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trade {
    pub ticker: String,
    pub timestamp: DateTime<Utc>,
    pub trade_price: Decimal,
    pub trade_volume: Decimal,
    pub prev_closing_price: Decimal,
    pub change_price: Decimal,
    pub side: Side,
    /// Orders trades that share a timestamp
    pub sequential_id: u64,
}

/// Latest ticker snapshot for one market
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TickerSummary {
    pub ticker: String,
    /// Last trade, in exchange-local time
    pub trade_date_time: DateTime<FixedOffset>,
    pub opening_price: Decimal,
    pub high_price: Decimal,
    pub low_price: Decimal,
    pub trade_price: Decimal,
    pub prev_closing_price: Decimal,
    pub change: Change,
    pub change_price: Decimal,
    pub change_rate: Decimal,
    pub signed_change_price: Decimal,
    pub signed_change_rate: Decimal,
    pub trade_volume: Decimal,
    pub acc_trade_price: Decimal,
    pub acc_trade_price_24h: Decimal,
    pub acc_trade_volume: Decimal,
    pub acc_trade_volume_24h: Decimal,
    pub highest_52_week_price: Decimal,
    pub highest_52_week_date: NaiveDate,
    pub lowest_52_week_price: Decimal,
    pub lowest_52_week_date: NaiveDate,
    /// When the snapshot was taken
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderBookLevel {
    pub ask_price: Decimal,
    pub bid_price: Decimal,
    pub ask_size: Decimal,
    pub bid_size: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderBook {
    pub ticker: String,
    pub timestamp: DateTime<FixedOffset>,
    pub total_ask_size: Decimal,
    pub total_bid_size: Decimal,
    /// Best price first, exactly as returned by the server
    pub levels: Vec<OrderBookLevel>,
}

impl OrderBook {
    pub fn best_level(&self) -> Option<&OrderBookLevel> {
        self.levels.first()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    pub currency: String,
    pub balance: Decimal,
    pub locked: Decimal,
    pub avg_buy_price: Decimal,
    pub avg_buy_price_modified: bool,
    pub unit_currency: String,
}

impl Account {
    /// Balance not tied up in open orders
    pub fn available(&self) -> Decimal {
        self.balance - self.locked
    }
}

/// Order constraints for one side of a market
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderConfig {
    pub fee: Decimal,
    pub minimum: Decimal,
    pub maximum: Decimal,
    pub unit_price: Option<Decimal>,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderMarket {
    pub ticker: String,
    /// Bid side
    pub buy: OrderConfig,
    /// Ask side
    pub sell: OrderConfig,
    pub order_types: BTreeSet<OrderType>,
    pub order_sides: BTreeSet<Side>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarketWithAccount {
    pub market: OrderMarket,
    pub bid_account: Account,
    pub ask_account: Account,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    pub uuid: Uuid,
    pub side: Side,
    pub order_type: OrderType,
    /// Absent for market sells
    pub price: Option<Decimal>,
    pub state: OrderState,
    pub ticker: String,
    pub created_at: DateTime<Utc>,
    /// Absent for market buys sized by price
    pub volume: Option<Decimal>,
    pub remaining_volume: Option<Decimal>,
    pub reserved_fee: Decimal,
    pub remaining_fee: Decimal,
    pub paid_fee: Decimal,
    pub locked: Decimal,
    pub executed_volume: Decimal,
    pub trade_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fill {
    pub ticker: String,
    pub uuid: Uuid,
    pub price: Decimal,
    pub volume: Decimal,
    pub funds: Decimal,
    pub side: Side,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderWithFills {
    pub order: Order,
    /// In execution order
    pub fills: Vec<Fill>,
}

/// Selects a single order either by exchange UUID or by the caller's identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderLookup {
    Uuid(Uuid),
    Identifier(String),
}

impl OrderLookup {
    /// Build a lookup from optional parts, exactly one of which must be set
    pub fn from_parts(uuid: Option<Uuid>, identifier: Option<String>) -> Result<Self, ExchangeError> {
        match (uuid, identifier) {
            (Some(uuid), None) => Ok(Self::Uuid(uuid)),
            (None, Some(identifier)) => Ok(Self::Identifier(identifier)),
            (Some(_), Some(_)) => Err(ExchangeError::InvalidParameters(
                "specify either an order uuid or an identifier, not both".to_string(),
            )),
            (None, None) => Err(ExchangeError::InvalidParameters(
                "an order uuid or an identifier is required".to_string(),
            )),
        }
    }

    /// Query pair identifying the order
    pub fn to_query(&self) -> Result<(&'static str, String), ExchangeError> {
        match self {
            Self::Uuid(uuid) => Ok(("uuid", uuid.to_string())),
            Self::Identifier(identifier) if identifier.is_empty() => Err(
                ExchangeError::InvalidParameters("order identifier must not be empty".to_string()),
            ),
            Self::Identifier(identifier) => Ok(("identifier", identifier.clone())),
        }
    }
}

impl From<Uuid> for OrderLookup {
    fn from(uuid: Uuid) -> Self {
        Self::Uuid(uuid)
    }
}

/// Filter for the order listing endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderFilter {
    pub ticker: Option<String>,
    pub uuids: Vec<Uuid>,
    pub identifiers: Vec<String>,
    pub states: Vec<OrderState>,
    pub page: u32,
    pub limit: u32,
    pub order_by: OrderBy,
}

impl Default for OrderFilter {
    fn default() -> Self {
        Self {
            ticker: None,
            uuids: Vec::new(),
            identifiers: Vec::new(),
            states: vec![OrderState::Wait],
            page: 1,
            limit: Self::MAX_LIMIT,
            order_by: OrderBy::Desc,
        }
    }
}

impl OrderFilter {
    pub const MAX_LIMIT: u32 = 100;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ticker(mut self, ticker: impl Into<String>) -> Self {
        self.ticker = Some(ticker.into());
        self
    }

    pub fn with_uuids(mut self, uuids: impl IntoIterator<Item = Uuid>) -> Self {
        self.uuids = uuids.into_iter().collect();
        self
    }

    pub fn with_identifiers<S: Into<String>>(mut self, identifiers: impl IntoIterator<Item = S>) -> Self {
        self.identifiers = identifiers.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_states(mut self, states: impl IntoIterator<Item = OrderState>) -> Self {
        self.states = states.into_iter().collect();
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_order_by(mut self, order_by: OrderBy) -> Self {
        self.order_by = order_by;
        self
    }

    pub fn validate(&self) -> Result<(), ExchangeError> {
        if self.states.is_empty() {
            return Err(ExchangeError::InvalidParameters(
                "at least one order state is required".to_string(),
            ));
        }
        if self.page == 0 {
            return Err(ExchangeError::InvalidParameters(
                "page numbers start at 1".to_string(),
            ));
        }
        if self.limit == 0 || self.limit > Self::MAX_LIMIT {
            return Err(ExchangeError::InvalidParameters(format!(
                "limit must be within 1..={}, got {}",
                Self::MAX_LIMIT,
                self.limit
            )));
        }
        Ok(())
    }

    /// Query pairs in wire order
    ///
    /// A single state is sent as `state`, several as repeated `states[]`.
    pub fn to_query(&self) -> Result<Vec<(&'static str, String)>, ExchangeError> {
        self.validate()?;

        let mut params = Vec::new();
        if let Some(ticker) = &self.ticker {
            params.push(("market", ticker.clone()));
        }
        for uuid in &self.uuids {
            params.push(("uuids[]", uuid.to_string()));
        }
        for identifier in &self.identifiers {
            params.push(("identifiers[]", identifier.clone()));
        }
        if let [state] = self.states.as_slice() {
            params.push(("state", state.as_str().to_string()));
        } else {
            for state in &self.states {
                params.push(("states[]", state.as_str().to_string()));
            }
        }
        params.push(("page", self.page.to_string()));
        params.push(("limit", self.limit.to_string()));
        params.push(("order_by", self.order_by.as_str().to_string()));
        Ok(params)
    }
}

/// Parameters for the recent trades endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeQuery {
    pub count: u32,
    /// Latest trade time of day to return, UTC
    pub to: Option<NaiveTime>,
    /// Pagination cursor, a `sequential_id` from a previous page
    pub cursor: Option<u64>,
    pub days_ago: DaysAgo,
}

impl Default for TradeQuery {
    fn default() -> Self {
        Self {
            count: 1,
            to: None,
            cursor: None,
            days_ago: DaysAgo::default(),
        }
    }
}

impl TradeQuery {
    pub fn new(count: u32) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }

    pub fn with_to(mut self, to: NaiveTime) -> Self {
        self.to = Some(to);
        self
    }

    pub fn with_cursor(mut self, cursor: u64) -> Self {
        self.cursor = Some(cursor);
        self
    }

    pub fn with_days_ago(mut self, days_ago: DaysAgo) -> Self {
        self.days_ago = days_ago;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_codes_round_trip_exactly() {
        for warning in [MarketWarning::None, MarketWarning::Caution] {
            assert_eq!(MarketWarning::from_code(warning.as_str()), Some(warning));
        }
        for state in [
            OrderState::Wait,
            OrderState::Watch,
            OrderState::Done,
            OrderState::Cancel,
        ] {
            assert_eq!(OrderState::from_code(state.as_str()), Some(state));
        }
        assert_eq!(MarketWarning::from_code("none"), None);
        assert_eq!(OrderState::from_code("WAIT"), None);
        assert_eq!(Change::from_code(" RISE"), None);
    }

    #[test]
    fn test_side_tables_are_distinct() {
        assert_eq!(Side::from_trade_code("ASK"), Some(Side::Ask));
        assert_eq!(Side::from_trade_code("ask"), None);
        assert_eq!(Side::from_order_code("bid"), Some(Side::Bid));
        assert_eq!(Side::from_order_code("BID"), None);
    }

    #[test]
    fn test_terminal_states() {
        assert!(OrderState::Done.is_terminal());
        assert!(OrderState::Cancel.is_terminal());
        assert!(!OrderState::Wait.is_terminal());
        assert!(!OrderState::Watch.is_terminal());
    }

    #[test]
    fn test_minute_unit_codes() {
        assert_eq!(MinuteUnit::from_code(240), Some(MinuteUnit::Minutes240));
        assert_eq!(MinuteUnit::from_code(2), None);
        assert_eq!(MinuteUnit::Minutes15.to_string(), "15");
    }

    #[test]
    fn test_days_ago_range() {
        assert_eq!(DaysAgo::new(7).unwrap().get(), 7);
        assert!(matches!(
            DaysAgo::try_from(8),
            Err(ExchangeError::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_end_time_naive_is_utc() {
        let naive = NaiveDate::from_ymd_opt(2022, 2, 6)
            .unwrap()
            .and_hms_opt(9, 22, 0)
            .unwrap();
        assert_eq!(EndTime::from(naive).to_query(), "2022-02-06T09:22:00Z");

        let seoul = EXCHANGE_OFFSET
            .with_ymd_and_hms(2022, 2, 6, 18, 22, 0)
            .unwrap();
        assert_eq!(EndTime::from(seoul).to_query(), "2022-02-06T09:22:00Z");
    }

    #[test]
    fn test_exchange_offset_is_seoul() {
        assert_eq!(EXCHANGE_OFFSET.local_minus_utc(), EXCHANGE_UTC_OFFSET_SECS);
        assert_eq!(EXCHANGE_OFFSET.to_string(), "+09:00");
    }

    #[test]
    fn test_account_available() {
        let account = Account {
            currency: "BTC".to_string(),
            balance: Decimal::from_str("1.5").unwrap(),
            locked: Decimal::from_str("0.25").unwrap(),
            avg_buy_price: Decimal::ZERO,
            avg_buy_price_modified: false,
            unit_currency: "KRW".to_string(),
        };
        assert_eq!(account.available(), Decimal::from_str("1.25").unwrap());
    }

    #[test]
    fn test_order_lookup_requires_exactly_one() {
        let uuid = Uuid::new_v4();
        assert_eq!(
            OrderLookup::from_parts(Some(uuid), None).unwrap(),
            OrderLookup::Uuid(uuid)
        );
        assert!(matches!(
            OrderLookup::from_parts(Some(uuid), Some("mine".to_string())),
            Err(ExchangeError::InvalidParameters(_))
        ));
        assert!(matches!(
            OrderLookup::from_parts(None, None),
            Err(ExchangeError::InvalidParameters(_))
        ));
        assert!(OrderLookup::Identifier(String::new()).to_query().is_err());
    }

    #[test]
    fn test_order_filter_query_single_state() {
        let params = OrderFilter::new().with_ticker("KRW-BTC").to_query().unwrap();
        assert_eq!(
            params,
            vec![
                ("market", "KRW-BTC".to_string()),
                ("state", "wait".to_string()),
                ("page", "1".to_string()),
                ("limit", "100".to_string()),
                ("order_by", "desc".to_string()),
            ]
        );
    }

    #[test]
    fn test_order_filter_query_multiple_states() {
        let params = OrderFilter::new()
            .with_identifiers(["a", "b"])
            .with_states([OrderState::Done, OrderState::Cancel])
            .with_order_by(OrderBy::Asc)
            .to_query()
            .unwrap();
        assert_eq!(params[0], ("identifiers[]", "a".to_string()));
        assert_eq!(params[1], ("identifiers[]", "b".to_string()));
        assert_eq!(params[2], ("states[]", "done".to_string()));
        assert_eq!(params[3], ("states[]", "cancel".to_string()));
        assert_eq!(params.last().unwrap(), &("order_by", "asc".to_string()));
    }

    #[test]
    fn test_order_filter_rejects_bad_input() {
        assert!(OrderFilter::new().with_states(Vec::<OrderState>::new()).validate().is_err());
        assert!(OrderFilter::new().with_page(0).validate().is_err());
        assert!(OrderFilter::new().with_limit(101).validate().is_err());
        assert!(OrderFilter::new().with_limit(0).validate().is_err());
    }
}
