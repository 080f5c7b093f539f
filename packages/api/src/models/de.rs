//! Lenient field decoders for values the backend sends in more than one form.
//!
//! Numbers may arrive as JSON numbers or as numeric strings (`"12"`,
//! `"4000.00"`), dates as `YYYY-MM-DD` or as full ISO timestamps. A value that
//! cannot be read in any form decodes as `None` instead of failing the whole
//! record.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub fn opt_u64<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u64>, D::Error> {
    let value = Value::deserialize(d)?;
    Ok(match &value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

pub fn u64_or_zero<'de, D: Deserializer<'de>>(d: D) -> Result<u64, D::Error> {
    Ok(opt_u64(d)?.unwrap_or_default())
}

pub fn opt_i64<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i64>, D::Error> {
    let value = Value::deserialize(d)?;
    Ok(match &value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

pub fn i64_or_zero<'de, D: Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
    Ok(opt_i64(d)?.unwrap_or_default())
}

pub fn f64_or_zero<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    let value = Value::deserialize(d)?;
    Ok(number(&value).unwrap_or_default())
}

pub fn opt_f64<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    let value = Value::deserialize(d)?;
    Ok(number(&value))
}

/// Parse a calendar date from `YYYY-MM-DD`, RFC 3339 or `YYYY-MM-DD HH:MM:SS`.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        })
        .or_else(|| s.get(..10).and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok()))
}

pub fn opt_date<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDate>, D::Error> {
    let value = Value::deserialize(d)?;
    Ok(value.as_str().and_then(parse_date))
}

/// Strings that may be `null`.
pub fn string_or_empty<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    let value = Value::deserialize(d)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "opt_u64")]
        id: Option<u64>,
        #[serde(default, deserialize_with = "f64_or_zero")]
        amount: f64,
        #[serde(default, deserialize_with = "opt_date")]
        due_at: Option<NaiveDate>,
        #[serde(default, deserialize_with = "string_or_empty")]
        note: String,
    }

    fn probe(json: &str) -> Probe {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_numbers_from_strings() {
        let p = probe(r#"{"id": "12", "amount": "4000.50"}"#);
        assert_eq!(p.id, Some(12));
        assert_eq!(p.amount, 4000.5);
        let p = probe(r#"{"id": 3, "amount": 1500}"#);
        assert_eq!(p.id, Some(3));
        assert_eq!(p.amount, 1500.0);
    }

    #[test]
    fn test_dates_in_several_forms() {
        let day = NaiveDate::from_ymd_opt(2025, 2, 4);
        assert_eq!(probe(r#"{"due_at": "2025-02-04"}"#).due_at, day);
        assert_eq!(probe(r#"{"due_at": "2025-02-04T10:00:00Z"}"#).due_at, day);
        assert_eq!(probe(r#"{"due_at": "2025-02-04T10:00:00.000000Z"}"#).due_at, day);
        assert_eq!(probe(r#"{"due_at": "2025-02-04 10:00:00"}"#).due_at, day);
        assert_eq!(probe(r#"{"due_at": null}"#).due_at, None);
        assert_eq!(probe(r#"{"due_at": "soon"}"#).due_at, None);
    }

    #[test]
    fn test_null_and_missing_fields() {
        let p = probe(r#"{"note": null}"#);
        assert_eq!(p.id, None);
        assert_eq!(p.amount, 0.0);
        assert_eq!(p.note, "");
    }
}
