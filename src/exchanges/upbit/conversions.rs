use crate::core::decode::{decode_array, JsonObject};
use crate::core::errors::DecodeError;
use crate::core::types::{
    Account, Candle, CandleKind, Change, Fill, MarketListing, MarketWarning,
    MarketWithAccount, MinuteUnit, Order, OrderBook, OrderBookLevel, OrderConfig, OrderMarket,
    OrderState, OrderType, OrderWithFills, Side, TickerSummary, Trade, EXCHANGE_OFFSET,
};
use serde_json::Value;
use std::collections::BTreeSet;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Convert an entry of `/v1/market/all`
pub fn decode_market_listing(value: &Value) -> Result<MarketListing, DecodeError> {
    let obj = JsonObject::new(value, "market")?;
    Ok(MarketListing {
        ticker: obj.string("market")?,
        korean_name: obj.string("korean_name")?,
        english_name: obj.string("english_name")?,
        warning: obj.code("market_warning", MarketWarning::from_code)?,
    })
}

pub fn decode_minute_candle(value: &Value) -> Result<Candle, DecodeError> {
    let obj = JsonObject::new(value, "candle")?;
    let raw_unit = obj.required("unit")?;
    let unit = raw_unit
        .as_i64()
        .and_then(MinuteUnit::from_code)
        .ok_or_else(|| DecodeError::UnknownCode {
            field: "unit".to_string(),
            raw: raw_unit.to_string(),
        })?;

    decode_candle(obj, CandleKind::Minute { unit })
}

pub fn decode_day_candle(value: &Value) -> Result<Candle, DecodeError> {
    let obj = JsonObject::new(value, "candle")?;
    let kind = CandleKind::Day {
        prev_closing_price: obj.decimal("prev_closing_price")?,
        change_price: obj.decimal("change_price")?,
        change_rate: obj.decimal("change_rate")?,
        // only present when convertingPriceUnit was requested
        converted_trade_price: obj.opt_decimal("converted_trade_price")?,
    };

    decode_candle(obj, kind)
}

pub fn decode_week_candle(value: &Value) -> Result<Candle, DecodeError> {
    let obj = JsonObject::new(value, "candle")?;
    let kind = CandleKind::Week {
        first_day_of_period: obj.date("first_day_of_period", DATE_FORMAT)?,
    };

    decode_candle(obj, kind)
}

pub fn decode_month_candle(value: &Value) -> Result<Candle, DecodeError> {
    let obj = JsonObject::new(value, "candle")?;
    let kind = CandleKind::Month {
        first_day_of_period: obj.date("first_day_of_period", DATE_FORMAT)?,
    };

    decode_candle(obj, kind)
}

fn decode_candle(obj: JsonObject<'_>, kind: CandleKind) -> Result<Candle, DecodeError> {
    Ok(Candle {
        ticker: obj.string("market")?,
        period_start: obj.utc_datetime("candle_date_time_utc")?,
        opening_price: obj.decimal("opening_price")?,
        high_price: obj.decimal("high_price")?,
        low_price: obj.decimal("low_price")?,
        trade_price: obj.decimal("trade_price")?,
        latest_trade_at: obj.epoch_millis("timestamp")?,
        acc_trade_price: obj.decimal("candle_acc_trade_price")?,
        acc_trade_volume: obj.decimal("candle_acc_trade_volume")?,
        kind,
    })
}

pub fn decode_trade(value: &Value) -> Result<Trade, DecodeError> {
    let obj = JsonObject::new(value, "trade")?;
    Ok(Trade {
        ticker: obj.string("market")?,
        timestamp: obj.epoch_millis("timestamp")?,
        trade_price: obj.decimal("trade_price")?,
        trade_volume: obj.decimal("trade_volume")?,
        prev_closing_price: obj.decimal("prev_closing_price")?,
        change_price: obj.decimal("change_price")?,
        side: obj.code("ask_bid", Side::from_trade_code)?,
        sequential_id: obj.u64("sequential_id")?,
    })
}

pub fn decode_ticker_summary(value: &Value) -> Result<TickerSummary, DecodeError> {
    let obj = JsonObject::new(value, "ticker")?;
    Ok(TickerSummary {
        ticker: obj.string("market")?,
        trade_date_time: obj.local_datetime(
            "trade_date_kst",
            "%Y%m%d",
            "trade_time_kst",
            "%H%M%S",
            &EXCHANGE_OFFSET,
        )?,
        opening_price: obj.decimal("opening_price")?,
        high_price: obj.decimal("high_price")?,
        low_price: obj.decimal("low_price")?,
        trade_price: obj.decimal("trade_price")?,
        prev_closing_price: obj.decimal("prev_closing_price")?,
        change: obj.code("change", Change::from_code)?,
        change_price: obj.decimal("change_price")?,
        change_rate: obj.decimal("change_rate")?,
        signed_change_price: obj.decimal("signed_change_price")?,
        signed_change_rate: obj.decimal("signed_change_rate")?,
        trade_volume: obj.decimal("trade_volume")?,
        acc_trade_price: obj.decimal("acc_trade_price")?,
        acc_trade_price_24h: obj.decimal("acc_trade_price_24h")?,
        acc_trade_volume: obj.decimal("acc_trade_volume")?,
        acc_trade_volume_24h: obj.decimal("acc_trade_volume_24h")?,
        highest_52_week_price: obj.decimal("highest_52_week_price")?,
        highest_52_week_date: obj.date("highest_52_week_date", DATE_FORMAT)?,
        lowest_52_week_price: obj.decimal("lowest_52_week_price")?,
        lowest_52_week_date: obj.date("lowest_52_week_date", DATE_FORMAT)?,
        timestamp: obj.epoch_millis("timestamp")?,
    })
}

pub fn decode_order_book(value: &Value) -> Result<OrderBook, DecodeError> {
    let obj = JsonObject::new(value, "orderbook")?;
    let levels = obj
        .array("orderbook_units")?
        .iter()
        .map(decode_order_book_level)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(OrderBook {
        ticker: obj.string("market")?,
        timestamp: obj.epoch_millis_in("timestamp", &EXCHANGE_OFFSET)?,
        total_ask_size: obj.decimal("total_ask_size")?,
        total_bid_size: obj.decimal("total_bid_size")?,
        levels,
    })
}

fn decode_order_book_level(value: &Value) -> Result<OrderBookLevel, DecodeError> {
    let obj = JsonObject::new(value, "orderbook_units")?;
    Ok(OrderBookLevel {
        ask_price: obj.decimal("ask_price")?,
        bid_price: obj.decimal("bid_price")?,
        ask_size: obj.decimal("ask_size")?,
        bid_size: obj.decimal("bid_size")?,
    })
}

pub fn decode_account(value: &Value) -> Result<Account, DecodeError> {
    let obj = JsonObject::new(value, "account")?;
    Ok(Account {
        currency: obj.string("currency")?,
        balance: obj.decimal("balance")?,
        locked: obj.decimal("locked")?,
        avg_buy_price: obj.decimal("avg_buy_price")?,
        avg_buy_price_modified: obj.bool("avg_buy_price_modified")?,
        unit_currency: obj.string("unit_currency")?,
    })
}

/// Convert the `/v1/orders/chance` payload
///
/// Fees live at the top level, the order size cap on the market, and the
/// remaining per-side limits in `market.bid` / `market.ask`.
pub fn decode_market_with_account(value: &Value) -> Result<MarketWithAccount, DecodeError> {
    let obj = JsonObject::new(value, "chance")?;
    let market = obj.object("market")?;

    let bid = market.object("bid")?;
    let ask = market.object("ask")?;
    let maximum = market.decimal("max_total")?;

    let order_market = OrderMarket {
        ticker: market.string("id")?,
        buy: OrderConfig {
            fee: obj.decimal("bid_fee")?,
            minimum: bid.decimal("min_total")?,
            maximum,
            unit_price: bid.opt_decimal("price_unit")?,
            currency: bid.string("currency")?,
        },
        sell: OrderConfig {
            fee: obj.decimal("ask_fee")?,
            minimum: ask.decimal("min_total")?,
            maximum,
            unit_price: ask.opt_decimal("price_unit")?,
            currency: ask.string("currency")?,
        },
        order_types: decode_code_set(&market, "order_types", OrderType::from_code)?,
        order_sides: decode_code_set(&market, "order_sides", Side::from_order_code)?,
    };

    Ok(MarketWithAccount {
        market: order_market,
        bid_account: decode_account(obj.required("bid_account")?)?,
        ask_account: decode_account(obj.required("ask_account")?)?,
    })
}

fn decode_code_set<T: Ord>(
    obj: &JsonObject<'_>,
    field: &str,
    lookup: fn(&str) -> Option<T>,
) -> Result<BTreeSet<T>, DecodeError> {
    obj.array(field)?
        .iter()
        .map(|value| {
            value
                .as_str()
                .and_then(lookup)
                .ok_or_else(|| DecodeError::UnknownCode {
                    field: field.to_string(),
                    raw: value.to_string(),
                })
        })
        .collect()
}

pub fn decode_order(value: &Value) -> Result<Order, DecodeError> {
    let obj = JsonObject::new(value, "order")?;
    decode_order_fields(obj)
}

fn decode_order_fields(obj: JsonObject<'_>) -> Result<Order, DecodeError> {
    Ok(Order {
        uuid: obj.parse("uuid")?,
        side: obj.code("side", Side::from_order_code)?,
        order_type: obj.code("ord_type", OrderType::from_code)?,
        price: obj.opt_decimal("price")?,
        state: obj.code("state", OrderState::from_code)?,
        ticker: obj.string("market")?,
        created_at: obj.utc_datetime("created_at")?,
        volume: obj.opt_decimal("volume")?,
        remaining_volume: obj.opt_decimal("remaining_volume")?,
        reserved_fee: obj.decimal("reserved_fee")?,
        remaining_fee: obj.decimal("remaining_fee")?,
        paid_fee: obj.decimal("paid_fee")?,
        locked: obj.decimal("locked")?,
        executed_volume: obj.decimal("executed_volume")?,
        trade_count: obj.u64("trades_count")?,
    })
}

/// Convert a single-order response, which carries its fills under `trades`
pub fn decode_order_with_fills(value: &Value) -> Result<OrderWithFills, DecodeError> {
    let obj = JsonObject::new(value, "order")?;
    let fills = decode_array(obj.required("trades")?, "trades", decode_fill)?;

    Ok(OrderWithFills {
        order: decode_order_fields(obj)?,
        fills,
    })
}

fn decode_fill(value: &Value) -> Result<Fill, DecodeError> {
    let obj = JsonObject::new(value, "trades")?;
    Ok(Fill {
        ticker: obj.string("market")?,
        uuid: obj.parse("uuid")?,
        price: obj.decimal("price")?,
        volume: obj.decimal("volume")?,
        funds: obj.decimal("funds")?,
        side: obj.code("side", Side::from_order_code)?,
        created_at: obj.utc_datetime("created_at")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn json(text: &str) -> Value {
        serde_json::from_str(text).unwrap()
    }

    fn dec(text: &str) -> Decimal {
        Decimal::from_str(text).unwrap()
    }

    #[test]
    fn test_decode_market_listing() {
        let value = json(
            r#"{"market": "KRW-BTC", "korean_name": "비트코인", "english_name": "Bitcoin", "market_warning": "NONE"}"#,
        );
        let listing = decode_market_listing(&value).unwrap();
        assert_eq!(
            listing,
            MarketListing {
                ticker: "KRW-BTC".to_string(),
                korean_name: "비트코인".to_string(),
                english_name: "Bitcoin".to_string(),
                warning: MarketWarning::None,
            }
        );
    }

    #[test]
    fn test_unknown_market_warning() {
        let value = json(
            r#"{"market": "KRW-BTC", "korean_name": "비트코인", "english_name": "Bitcoin", "market_warning": "UNKNOWN_X"}"#,
        );
        assert_eq!(
            decode_market_listing(&value).unwrap_err(),
            DecodeError::UnknownCode {
                field: "market_warning".to_string(),
                raw: "\"UNKNOWN_X\"".to_string(),
            }
        );
    }

    #[test]
    fn test_decode_minute_candle() {
        let value = json(
            r#"{
                "market": "KRW-BTC",
                "candle_date_time_utc": "2022-02-06T09:22:00",
                "candle_date_time_kst": "2022-02-06T18:22:00",
                "opening_price": 51031000.00000000,
                "high_price": 51031000.00000000,
                "low_price": 51016000.00000000,
                "trade_price": 51016000.00000000,
                "timestamp": 1644139333892,
                "candle_acc_trade_price": 6425464.41727000,
                "candle_acc_trade_volume": 0.12593089,
                "unit": 1
            }"#,
        );
        let candle = decode_minute_candle(&value).unwrap();

        assert_eq!(candle.ticker, "KRW-BTC");
        assert_eq!(
            candle.period_start,
            Utc.with_ymd_and_hms(2022, 2, 6, 9, 22, 0).unwrap()
        );
        assert_eq!(
            candle.latest_trade_at.to_rfc3339(),
            "2022-02-06T09:22:13.892+00:00"
        );
        assert_eq!(candle.opening_price, dec("51031000"));
        assert_eq!(candle.acc_trade_price, dec("6425464.41727"));
        assert_eq!(candle.acc_trade_volume.to_string(), "0.12593089");
        assert_eq!(
            candle.kind,
            CandleKind::Minute {
                unit: MinuteUnit::Minutes1
            }
        );
    }

    #[test]
    fn test_unsupported_minute_unit() {
        let value = json(
            r#"{
                "market": "KRW-BTC",
                "candle_date_time_utc": "2022-02-06T09:22:00",
                "opening_price": 1, "high_price": 1, "low_price": 1, "trade_price": 1,
                "timestamp": 1644139333892,
                "candle_acc_trade_price": 1, "candle_acc_trade_volume": 1,
                "unit": 2
            }"#,
        );
        assert!(matches!(
            decode_minute_candle(&value),
            Err(DecodeError::UnknownCode { field, .. }) if field == "unit"
        ));
    }

    #[test]
    fn test_decode_day_candle_without_conversion() {
        let value = json(
            r#"{
                "market": "BTC-ETC",
                "candle_date_time_utc": "2022-02-06T00:00:00",
                "candle_date_time_kst": "2022-02-06T09:00:00",
                "opening_price": 0.00070964,
                "high_price": 0.00071469,
                "low_price": 0.00070141,
                "trade_price": 0.00071096,
                "timestamp": 1644137563018,
                "candle_acc_trade_price": 0.23636389,
                "candle_acc_trade_volume": 335.04845034,
                "prev_closing_price": 0.00070756,
                "change_price": 0.00000340,
                "change_rate": 0.0048052462
            }"#,
        );
        let candle = decode_day_candle(&value).unwrap();

        assert_eq!(
            candle.latest_trade_at.to_rfc3339(),
            "2022-02-06T08:52:43.018+00:00"
        );
        assert_eq!(
            candle.kind,
            CandleKind::Day {
                prev_closing_price: dec("0.00070756"),
                change_price: dec("0.00000340"),
                change_rate: dec("0.0048052462"),
                converted_trade_price: None,
            }
        );
    }

    #[test]
    fn test_decode_day_candle_with_conversion() {
        let value = json(
            r#"{
                "market": "BTC-ETC",
                "candle_date_time_utc": "2022-02-06T00:00:00",
                "opening_price": 0.00070964, "high_price": 0.00071469,
                "low_price": 0.00070141, "trade_price": 0.00071096,
                "timestamp": 1644137563018,
                "candle_acc_trade_price": 0.23636389,
                "candle_acc_trade_volume": 335.04845034,
                "prev_closing_price": 0.00070756,
                "change_price": 0.00000340,
                "change_rate": 0.0048052462,
                "converted_trade_price": 36265.5
            }"#,
        );
        match decode_day_candle(&value).unwrap().kind {
            CandleKind::Day {
                converted_trade_price,
                ..
            } => assert_eq!(converted_trade_price, Some(dec("36265.5"))),
            other => panic!("unexpected kind: {other:?}"),
        }
    }

    #[test]
    fn test_week_and_month_candles_stay_distinct() {
        let text = r#"{
            "market": "KRW-BTC",
            "candle_date_time_utc": "2022-01-31T00:00:00",
            "candle_date_time_kst": "2022-01-31T09:00:00",
            "opening_price": 47208000.00000000,
            "high_price": 51488000.00000000,
            "low_price": 44770000.00000000,
            "trade_price": 50986000.00000000,
            "timestamp": 1644140812758,
            "candle_acc_trade_price": 1482350834631.18899000,
            "candle_acc_trade_volume": 30992.13725501,
            "first_day_of_period": "2022-01-31"
        }"#;
        let week = decode_week_candle(&json(text)).unwrap();
        let month = decode_month_candle(&json(text)).unwrap();

        let first_day = NaiveDate::from_ymd_opt(2022, 1, 31).unwrap();
        assert_eq!(
            week.kind,
            CandleKind::Week {
                first_day_of_period: first_day
            }
        );
        assert_eq!(
            month.kind,
            CandleKind::Month {
                first_day_of_period: first_day
            }
        );
        assert_ne!(week, month);
        assert_eq!(week.acc_trade_price, dec("1482350834631.18899"));
        assert_eq!(
            week.latest_trade_at.to_rfc3339(),
            "2022-02-06T09:46:52.758+00:00"
        );
    }

    #[test]
    fn test_decode_trade() {
        let value = json(
            r#"{
                "market": "BTC-ETC",
                "trade_date_utc": "2022-02-06",
                "trade_time_utc": "08:52:42",
                "timestamp": 1644137562000,
                "trade_price": 0.00071096,
                "trade_volume": 3.11909372,
                "prev_closing_price": 0.00070756,
                "change_price": 0.00000340,
                "ask_bid": "ASK",
                "sequential_id": 16441375620000000
            }"#,
        );
        let trade = decode_trade(&value).unwrap();

        assert_eq!(
            trade,
            Trade {
                ticker: "BTC-ETC".to_string(),
                timestamp: Utc.with_ymd_and_hms(2022, 2, 6, 8, 52, 42).unwrap(),
                trade_price: dec("0.00071096"),
                trade_volume: dec("3.11909372"),
                prev_closing_price: dec("0.00070756"),
                change_price: dec("0.00000340"),
                side: Side::Ask,
                sequential_id: 16_441_375_620_000_000,
            }
        );
    }

    #[test]
    fn test_trade_side_uses_upper_case_table() {
        let value = json(
            r#"{
                "market": "BTC-ETC", "timestamp": 1644137562000,
                "trade_price": 1, "trade_volume": 1, "prev_closing_price": 1, "change_price": 0,
                "ask_bid": "ask", "sequential_id": 1
            }"#,
        );
        assert!(matches!(
            decode_trade(&value),
            Err(DecodeError::UnknownCode { field, .. }) if field == "ask_bid"
        ));
    }

    #[test]
    fn test_decode_ticker_summary() {
        let value = json(
            r#"{
                "market": "BTC-ETC",
                "trade_date": "20220206",
                "trade_time": "085242",
                "trade_date_kst": "20220206",
                "trade_time_kst": "175242",
                "trade_timestamp": 1644137562000,
                "opening_price": 0.00070964,
                "high_price": 0.00071469,
                "low_price": 0.00070141,
                "trade_price": 0.00071096,
                "prev_closing_price": 0.00070756,
                "change": "RISE",
                "change_price": 0.00000340,
                "change_rate": 0.0048052462,
                "signed_change_price": 0.00000340,
                "signed_change_rate": 0.0048052462,
                "trade_volume": 3.11909372,
                "acc_trade_price": 0.2363638731829693,
                "acc_trade_price_24h": 0.52252394,
                "acc_trade_volume": 335.04845034,
                "acc_trade_volume_24h": 737.38449855,
                "highest_52_week_price": 0.00295594,
                "highest_52_week_date": "2021-05-06",
                "lowest_52_week_price": 0.00018202,
                "lowest_52_week_date": "2021-02-09",
                "timestamp": 1644138600066
            }"#,
        );
        let summary = decode_ticker_summary(&value).unwrap();

        assert_eq!(
            summary.trade_date_time.to_rfc3339(),
            "2022-02-06T17:52:42+09:00"
        );
        assert_eq!(
            summary.trade_date_time,
            Utc.with_ymd_and_hms(2022, 2, 6, 8, 52, 42).unwrap()
        );
        assert_eq!(summary.change, Change::Rise);
        assert_eq!(summary.acc_trade_price, dec("0.2363638731829693"));
        assert_eq!(
            summary.highest_52_week_date,
            NaiveDate::from_ymd_opt(2021, 5, 6).unwrap()
        );
        assert_eq!(
            summary.lowest_52_week_date,
            NaiveDate::from_ymd_opt(2021, 2, 9).unwrap()
        );
        assert_eq!(
            summary.timestamp.to_rfc3339(),
            "2022-02-06T09:10:00.066+00:00"
        );
    }

    #[test]
    fn test_decode_order_book_keeps_level_order() {
        let units = [
            ("0.00071889", "0.00071148", "33.45127908", "227.26683564"),
            ("0.00071971", "0.00071147", "48.58807316", "46.19031266"),
            ("0.00072496", "0.00071146", "107.635", "111.8351165"),
            ("0.00072497", "0.00071111", "1.0", "1.33439195"),
            ("0.00072501", "0.00070748", "7.92527829", "34.486"),
            ("0.00072991", "0.00070747", "23.85387225", "154.070137"),
            ("0.00073571", "0.00070464", "9.3283582", "0.83967983"),
            ("0.00073587", "0.00070212", "4.61469724", "1.0"),
            ("0.00073591", "0.00069919", "9.28217823", "1.0"),
            ("0.00073654", "0.0006965", "8.34028358", "86.14501076"),
            ("0.00074785", "0.00069498", "0.68", "1.0"),
            ("0.00075285", "0.00069045", "174.2812843", "27.72678129"),
            ("0.00075998", "0.00069027", "32.63849113", "72.18387217"),
            ("0.00076", "0.00068945", "14.47647597", "91.6395041"),
            ("0.00076001", "0.00068927", "1.9650935", "8.33206187"),
        ];
        let body = units
            .iter()
            .map(|(ap, bp, asz, bsz)| {
                format!(
                    r#"{{"ask_price": {ap}, "bid_price": {bp}, "ask_size": {asz}, "bid_size": {bsz}}}"#
                )
            })
            .collect::<Vec<_>>()
            .join(",");
        let value = json(&format!(
            r#"{{"market": "BTC-ETC", "timestamp": 1644141846608,
                "total_ask_size": 478.06036493, "total_bid_size": 865.04970377,
                "orderbook_units": [{body}]}}"#
        ));

        let book = decode_order_book(&value).unwrap();
        assert_eq!(book.ticker, "BTC-ETC");
        assert_eq!(book.timestamp.to_rfc3339(), "2022-02-06T19:04:06.608+09:00");
        assert_eq!(book.total_ask_size, dec("478.06036493"));
        assert_eq!(book.levels.len(), 15);
        for (level, (ap, bp, asz, bsz)) in book.levels.iter().zip(units) {
            assert_eq!(level.ask_price, dec(ap));
            assert_eq!(level.bid_price, dec(bp));
            assert_eq!(level.ask_size, dec(asz));
            assert_eq!(level.bid_size, dec(bsz));
        }
        assert_eq!(book.best_level(), book.levels.first());
    }

    #[test]
    fn test_order_book_bad_level_fails_whole_book() {
        let value = json(
            r#"{"market": "BTC-ETC", "timestamp": 1644141846608,
                "total_ask_size": 1, "total_bid_size": 1,
                "orderbook_units": [
                    {"ask_price": 1, "bid_price": 1, "ask_size": 1, "bid_size": 1},
                    {"ask_price": 1, "bid_price": 1, "ask_size": 1}
                ]}"#,
        );
        assert_eq!(
            decode_order_book(&value).unwrap_err(),
            DecodeError::MissingField {
                field: "bid_size".to_string()
            }
        );
    }

    const ACCOUNT: &str = r#"{
        "currency": "KRW",
        "balance": "1000000.0",
        "locked": "0.0",
        "avg_buy_price": "0",
        "avg_buy_price_modified": false,
        "unit_currency": "KRW"
    }"#;

    #[test]
    fn test_decode_account() {
        let account = decode_account(&json(ACCOUNT)).unwrap();
        assert_eq!(account.currency, "KRW");
        assert_eq!(account.balance, dec("1000000"));
        assert_eq!(account.locked, Decimal::ZERO);
        assert!(!account.avg_buy_price_modified);
    }

    #[test]
    fn test_decode_market_with_account() {
        let value = json(&format!(
            r#"{{
                "bid_fee": "0.0005",
                "ask_fee": "0.0005",
                "market": {{
                    "id": "KRW-BTC",
                    "name": "BTC/KRW",
                    "order_types": ["limit"],
                    "order_sides": ["ask", "bid"],
                    "bid": {{"currency": "KRW", "price_unit": null, "min_total": 5000}},
                    "ask": {{"currency": "BTC", "price_unit": null, "min_total": 5000}},
                    "max_total": "100000000.0",
                    "state": "active"
                }},
                "bid_account": {ACCOUNT},
                "ask_account": {{
                    "currency": "BTC",
                    "balance": "10.0",
                    "locked": "0.0",
                    "avg_buy_price": "8042000",
                    "avg_buy_price_modified": false,
                    "unit_currency": "KRW"
                }}
            }}"#
        ));
        let chance = decode_market_with_account(&value).unwrap();

        assert_eq!(chance.market.ticker, "KRW-BTC");
        assert_eq!(chance.market.buy.fee, dec("0.0005"));
        assert_eq!(chance.market.buy.minimum, dec("5000"));
        assert_eq!(chance.market.buy.maximum, dec("100000000"));
        assert_eq!(chance.market.buy.unit_price, None);
        assert_eq!(chance.market.sell.currency, "BTC");
        assert_eq!(
            chance.market.order_types,
            BTreeSet::from([OrderType::Limit])
        );
        assert_eq!(
            chance.market.order_sides,
            BTreeSet::from([Side::Ask, Side::Bid])
        );
        assert_eq!(chance.bid_account.currency, "KRW");
        assert_eq!(chance.ask_account.avg_buy_price, dec("8042000"));
    }

    const ORDER: &str = r#"{
        "uuid": "9ca023a5-851b-4fec-9f0a-48cd83c2eaae",
        "side": "ask",
        "ord_type": "limit",
        "price": "4280000.0",
        "state": "done",
        "market": "KRW-BTC",
        "created_at": "2019-01-04T13:48:09+09:00",
        "volume": "1.0",
        "remaining_volume": "0.0",
        "reserved_fee": "0.0",
        "remaining_fee": "0.0",
        "paid_fee": "2140.0",
        "locked": "0.0",
        "executed_volume": "1.0",
        "trades_count": 1"#;

    #[test]
    fn test_decode_order() {
        let order = decode_order(&json(&format!("{ORDER}}}"))).unwrap();

        assert_eq!(
            order.uuid.to_string(),
            "9ca023a5-851b-4fec-9f0a-48cd83c2eaae"
        );
        assert_eq!(order.side, Side::Ask);
        assert_eq!(order.order_type, OrderType::Limit);
        assert_eq!(order.price, Some(dec("4280000")));
        assert_eq!(order.state, OrderState::Done);
        assert_eq!(
            order.created_at,
            Utc.with_ymd_and_hms(2019, 1, 4, 4, 48, 9).unwrap()
        );
        assert_eq!(order.paid_fee, dec("2140"));
        assert_eq!(order.trade_count, 1);
    }

    #[test]
    fn test_market_order_without_price() {
        let value = json(
            r#"{
                "uuid": "cdd92199-2897-4e14-9448-f923320408ad",
                "side": "ask",
                "ord_type": "market",
                "price": null,
                "state": "wait",
                "market": "KRW-BTC",
                "created_at": "2018-04-10T15:42:23+09:00",
                "volume": "0.01",
                "remaining_volume": "0.01",
                "reserved_fee": "0.0",
                "remaining_fee": "0.0",
                "paid_fee": "0.0",
                "locked": "0.01",
                "executed_volume": "0.0",
                "trades_count": 0
            }"#,
        );
        let order = decode_order(&value).unwrap();
        assert_eq!(order.price, None);
        assert_eq!(order.order_type, OrderType::Market);
        assert!(!order.state.is_terminal());
    }

    #[test]
    fn test_decode_order_with_fills() {
        let value = json(&format!(
            r#"{ORDER},
            "trades": [{{
                "market": "KRW-BTC",
                "uuid": "9e8f8eba-7050-4837-8969-cfc272cbe083",
                "price": "4280000.0",
                "volume": "1.0",
                "funds": "4280000.0",
                "side": "ask",
                "created_at": "2019-01-04T13:48:15+09:00"
            }}]}}"#
        ));
        let order = decode_order_with_fills(&value).unwrap();

        assert_eq!(order.order.trade_count, 1);
        assert_eq!(order.fills.len(), 1);
        let fill = &order.fills[0];
        assert_eq!(fill.funds, dec("4280000"));
        assert_eq!(fill.side, Side::Ask);
        assert_eq!(
            fill.created_at,
            Utc.with_ymd_and_hms(2019, 1, 4, 4, 48, 15).unwrap()
        );
    }

    #[test]
    fn test_decoding_is_deterministic() {
        let value = json(&format!("{ORDER}}}"));
        assert_eq!(decode_order(&value).unwrap(), decode_order(&value).unwrap());
    }

    #[test]
    fn test_array_fails_on_first_bad_element() {
        let value = json(&format!("[{ACCOUNT}, {{\"currency\": \"BTC\"}}]"));
        assert!(decode_array(&value, "accounts", decode_account).is_err());

        let value = json(&format!("[{ACCOUNT}, {ACCOUNT}]"));
        assert_eq!(
            decode_array(&value, "accounts", decode_account).unwrap().len(),
            2
        );
    }
}
