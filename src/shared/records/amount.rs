//! Money amounts held as whole cents

use crate::shared::error::ClientError;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};

/// A non-negative currency amount in cents.
///
/// Sums are exact, so totals do not depend on the order receipts arrive in.
/// On the wire the amount is a plain JSON number such as `12.5`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(i64);

impl Amount {
    pub const ZERO: Self = Self(0);

    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Round a decimal value to the nearest cent
    pub fn from_decimal(value: f64) -> Option<Self> {
        let cents = (value * 100.0).round();
        if !cents.is_finite() || cents.abs() >= i64::MAX as f64 {
            return None;
        }
        Some(Self(cents as i64))
    }

    pub fn as_decimal(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Parse user input such as `"12.50"` or `"$7.25"`
    pub fn parse(input: &str) -> Result<Self, ClientError> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('$').unwrap_or(trimmed).trim();
        if digits.is_empty() {
            return Err(ClientError::validation("amount", "Amount is required"));
        }
        let value: f64 = digits
            .parse()
            .map_err(|_| ClientError::validation("amount", format!("'{}' is not a number", trimmed)))?;
        let amount = Self::from_decimal(value)
            .ok_or_else(|| ClientError::validation("amount", "Amount must be a finite number"))?;
        if amount.0 < 0 {
            return Err(ClientError::validation("amount", "Amount must not be negative"));
        }
        Ok(amount)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}${}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Amount {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_decimal())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(AmountVisitor)
    }
}

struct AmountVisitor;

impl<'de> Visitor<'de> for AmountVisitor {
    type Value = Amount;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number or numeric string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Amount, E> {
        v.checked_mul(100)
            .map(Amount)
            .ok_or_else(|| E::custom("amount out of range"))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Amount, E> {
        i64::try_from(v)
            .map_err(|_| E::custom("amount out of range"))
            .and_then(|v| self.visit_i64(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Amount, E> {
        Amount::from_decimal(v).ok_or_else(|| E::custom("amount out of range"))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Amount, E> {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            return Ok(Amount::ZERO);
        }
        trimmed
            .parse::<f64>()
            .ok()
            .and_then(Amount::from_decimal)
            .ok_or_else(|| E::custom(format!("invalid amount '{}'", v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_two_decimals() {
        assert_eq!(Amount::from_cents(1975).to_string(), "$19.75");
        assert_eq!(Amount::from_cents(5).to_string(), "$0.05");
        assert_eq!(Amount::ZERO.to_string(), "$0.00");
        assert_eq!(Amount::from_cents(-250).to_string(), "-$2.50");
    }

    #[test]
    fn test_sum_is_exact() {
        let total: Amount = [0.1, 0.2, 0.3]
            .iter()
            .filter_map(|v| Amount::from_decimal(*v))
            .sum();
        assert_eq!(total, Amount::from_cents(60));
    }

    #[test]
    fn test_parse_user_input() {
        assert_eq!(Amount::parse("12.5").unwrap(), Amount::from_cents(1250));
        assert_eq!(Amount::parse(" $7.25 ").unwrap(), Amount::from_cents(725));
        assert_eq!(Amount::parse("3").unwrap(), Amount::from_cents(300));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(Amount::parse("").is_err());
        assert!(Amount::parse("twelve").is_err());
        assert!(Amount::parse("-1").is_err());
        assert!(Amount::parse("inf").is_err());
    }

    #[test]
    fn test_deserialize_number_and_string() {
        let from_float: Amount = serde_json::from_str("12.5").unwrap();
        let from_int: Amount = serde_json::from_str("7").unwrap();
        let from_str: Amount = serde_json::from_str("\"19.99\"").unwrap();
        assert_eq!(from_float, Amount::from_cents(1250));
        assert_eq!(from_int, Amount::from_cents(700));
        assert_eq!(from_str, Amount::from_cents(1999));
        assert!(serde_json::from_str::<Amount>("\"abc\"").is_err());
    }

    #[test]
    fn test_huge_amounts_are_rejected() {
        assert!(serde_json::from_str::<Amount>("100000000000000000").is_err());
        assert!(serde_json::from_str::<Amount>("18446744073709551615").is_err());
        assert!(serde_json::from_str::<Amount>("-100000000000000000").is_err());
        assert!(serde_json::from_str::<Amount>("1e300").is_err());
        let largest: Amount = serde_json::from_str("92233720368547758").unwrap();
        assert_eq!(largest.cents(), 9_223_372_036_854_775_800);
    }

    #[test]
    fn test_serialize_as_number() {
        let json = serde_json::to_string(&Amount::from_cents(1250)).unwrap();
        assert_eq!(json, "12.5");
    }
}
