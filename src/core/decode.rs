//! Typed field access over loosely-typed JSON payloads.
//!
//! Every accessor either returns a fully typed value or a [`DecodeError`]
//! naming the field. Nothing is defaulted: a missing required field is an
//! error, and only the `opt_*` accessors map absent or `null` to `None`.

use crate::core::errors::DecodeError;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use rust_decimal::Decimal;
use serde_json::{Map, Value};
use std::str::FromStr;

/// Borrowed view of a JSON object
#[derive(Debug, Clone, Copy)]
pub struct JsonObject<'a> {
    map: &'a Map<String, Value>,
}

impl<'a> JsonObject<'a> {
    /// Wrap `value`, which must be a JSON object. `context` names it in errors.
    pub fn new(value: &'a Value, context: &str) -> Result<Self, DecodeError> {
        value.as_object().map(|map| Self { map }).ok_or_else(|| {
            DecodeError::NotAnObject {
                field: context.to_string(),
                raw: value.to_string(),
            }
        })
    }

    /// Raw value, `None` when the key is absent
    pub fn get(&self, field: &str) -> Option<&'a Value> {
        self.map.get(field)
    }

    /// Raw value of a required field
    pub fn required(&self, field: &str) -> Result<&'a Value, DecodeError> {
        self.map.get(field).ok_or_else(|| DecodeError::MissingField {
            field: field.to_string(),
        })
    }

    /// Raw value of an optional field, with `null` treated as absent
    fn optional(&self, field: &str) -> Option<&'a Value> {
        self.map.get(field).filter(|value| !value.is_null())
    }

    pub fn str(&self, field: &str) -> Result<&'a str, DecodeError> {
        let value = self.required(field)?;
        value
            .as_str()
            .ok_or_else(|| invalid(field, value, "expected a string"))
    }

    pub fn string(&self, field: &str) -> Result<String, DecodeError> {
        self.str(field).map(str::to_string)
    }

    pub fn bool(&self, field: &str) -> Result<bool, DecodeError> {
        let value = self.required(field)?;
        value
            .as_bool()
            .ok_or_else(|| invalid(field, value, "expected a boolean"))
    }

    pub fn i64(&self, field: &str) -> Result<i64, DecodeError> {
        let value = self.required(field)?;
        value
            .as_i64()
            .ok_or_else(|| invalid(field, value, "expected an integer"))
    }

    pub fn u64(&self, field: &str) -> Result<u64, DecodeError> {
        let value = self.required(field)?;
        value
            .as_u64()
            .ok_or_else(|| invalid(field, value, "expected a non-negative integer"))
    }

    /// Decimal from a JSON number or numeric string
    pub fn decimal(&self, field: &str) -> Result<Decimal, DecodeError> {
        decimal_from_value(field, self.required(field)?)
    }

    pub fn opt_decimal(&self, field: &str) -> Result<Option<Decimal>, DecodeError> {
        self.optional(field)
            .map(|value| decimal_from_value(field, value))
            .transpose()
    }

    /// UTC instant from epoch milliseconds
    pub fn epoch_millis(&self, field: &str) -> Result<DateTime<Utc>, DecodeError> {
        let value = self.required(field)?;
        let millis = value
            .as_i64()
            .ok_or_else(|| invalid(field, value, "expected epoch milliseconds"))?;
        DateTime::<Utc>::from_timestamp_millis(millis)
            .ok_or_else(|| invalid(field, value, "epoch milliseconds out of range"))
    }

    /// Epoch milliseconds rendered in `offset`
    pub fn epoch_millis_in(
        &self,
        field: &str,
        offset: &FixedOffset,
    ) -> Result<DateTime<FixedOffset>, DecodeError> {
        self.epoch_millis(field)
            .map(|instant| instant.with_timezone(offset))
    }

    /// UTC instant from a datetime string
    ///
    /// A string without an offset (`2022-02-06T09:22:00`) is taken as UTC;
    /// one that carries an offset is converted.
    pub fn utc_datetime(&self, field: &str) -> Result<DateTime<Utc>, DecodeError> {
        let value = self.required(field)?;
        let text = value
            .as_str()
            .ok_or_else(|| invalid(field, value, "expected a datetime string"))?;

        if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
            return Ok(naive.and_utc());
        }
        DateTime::parse_from_rfc3339(text)
            .map(|instant| instant.with_timezone(&Utc))
            .map_err(|e| invalid(field, value, &e.to_string()))
    }

    /// Calendar date in the given `chrono` format
    pub fn date(&self, field: &str, format: &str) -> Result<NaiveDate, DecodeError> {
        let value = self.required(field)?;
        let text = value
            .as_str()
            .ok_or_else(|| invalid(field, value, "expected a date string"))?;
        NaiveDate::parse_from_str(text, format).map_err(|e| invalid(field, value, &e.to_string()))
    }

    /// Local instant assembled from separate date and time-of-day fields
    pub fn local_datetime(
        &self,
        date_field: &str,
        date_format: &str,
        time_field: &str,
        time_format: &str,
        offset: &FixedOffset,
    ) -> Result<DateTime<FixedOffset>, DecodeError> {
        let date = self.date(date_field, date_format)?;

        let value = self.required(time_field)?;
        let text = value
            .as_str()
            .ok_or_else(|| invalid(time_field, value, "expected a time string"))?;
        let time = NaiveTime::parse_from_str(text, time_format)
            .map_err(|e| invalid(time_field, value, &e.to_string()))?;

        offset
            .from_local_datetime(&date.and_time(time))
            .single()
            .ok_or_else(|| invalid(time_field, value, "ambiguous local time"))
    }

    /// Code looked up in a closed table; unknown codes are rejected
    pub fn code<T>(&self, field: &str, lookup: impl FnOnce(&str) -> Option<T>) -> Result<T, DecodeError> {
        let value = self.required(field)?;
        let text = value
            .as_str()
            .ok_or_else(|| invalid(field, value, "expected a string code"))?;
        lookup(text).ok_or_else(|| DecodeError::UnknownCode {
            field: field.to_string(),
            raw: value.to_string(),
        })
    }

    /// Any value parsed through `FromStr`, e.g. a UUID
    pub fn parse<T>(&self, field: &str) -> Result<T, DecodeError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let value = self.required(field)?;
        let text = value
            .as_str()
            .ok_or_else(|| invalid(field, value, "expected a string"))?;
        text.parse().map_err(|e: T::Err| invalid(field, value, &e.to_string()))
    }

    pub fn array(&self, field: &str) -> Result<&'a [Value], DecodeError> {
        let value = self.required(field)?;
        value
            .as_array()
            .map(Vec::as_slice)
            .ok_or_else(|| invalid(field, value, "expected an array"))
    }

    pub fn object(&self, field: &str) -> Result<JsonObject<'a>, DecodeError> {
        Self::new(self.required(field)?, field)
    }
}

/// Decode a JSON array element-wise, preserving order
///
/// The first element that fails aborts the whole decode.
pub fn decode_array<T>(
    value: &Value,
    context: &str,
    decode: impl Fn(&Value) -> Result<T, DecodeError>,
) -> Result<Vec<T>, DecodeError> {
    value
        .as_array()
        .ok_or_else(|| invalid(context, value, "expected an array"))?
        .iter()
        .map(decode)
        .collect()
}

fn decimal_from_value(field: &str, value: &Value) -> Result<Decimal, DecodeError> {
    // With `arbitrary_precision` a number's Display is its literal text
    let text = match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        _ => return Err(invalid(field, value, "expected a decimal")),
    };

    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|e| invalid(field, value, &e.to_string()))
}

fn invalid(field: &str, value: &Value, reason: &str) -> DecodeError {
    DecodeError::InvalidValue {
        field: field.to_string(),
        raw: value.to_string(),
        reason: reason.to_string(),
    }
}
