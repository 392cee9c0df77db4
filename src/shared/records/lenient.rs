//! Field deserializers tolerant of spreadsheet-backed payloads.
//!
//! The script host hands back cells as whatever type the sheet inferred: ids
//! and receipt numbers may be numbers, blank cells are empty strings, and
//! dates arrive either as `YYYY-MM-DD` or as full timestamps.

use chrono::{DateTime, Local, NaiveDate, TimeZone};
use serde::{Deserialize, Deserializer, Serializer};
use serde_json::Value;

const DATE_FORMAT: &str = "%Y-%m-%d";

fn value_to_string(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

/// A string cell that may have been stored as a number
pub fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_string(value).unwrap_or_default())
}

/// An optional string cell; blanks read as `None`
pub fn optional_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_string(value).filter(|s| !s.trim().is_empty()))
}

/// Read a date cell as a calendar day in `tz`. Timestamps name an instant,
/// so the day is the one that instant falls on in `tz`.
pub fn parse_date_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok().or_else(|| {
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.with_timezone(tz).date_naive())
    })
}

/// [`parse_date_in`] the local time zone
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    parse_date_in(raw, &Local)
}

/// Calendar dates, written back as `YYYY-MM-DD`
pub mod date {
    use super::*;

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format(DATE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_date(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid date '{}'", raw)))
    }
}

/// Date cells that may be blank or unreadable. Either reads as `None` so one
/// bad row does not sink the rest of the sheet.
pub mod optional_date {
    use super::*;

    pub fn serialize<S: Serializer>(
        date: &Option<NaiveDate>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match date {
            Some(date) => super::date::serialize(date, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let Some(raw) = value_to_string(value).filter(|s| !s.trim().is_empty()) else {
            return Ok(None);
        };
        let date = parse_date(&raw);
        if date.is_none() {
            tracing::warn!("Unreadable date cell '{}'", raw);
        }
        Ok(date)
    }
}
