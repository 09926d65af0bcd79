//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Provides safe arithmetic operations, even splitting and formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Largest magnitude an amount may have, in cents (ten trillion units)
    ///
    /// Sums of many such amounts still fit in an `i64`.
    pub const MAX_CENTS: i64 = 1_000_000_000_000_000;

    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use splitbill::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole currency units
    ///
    /// # Examples
    /// ```
    /// use splitbill::models::Money;
    /// assert_eq!(Money::from_units(18).cents(), 1800);
    /// ```
    pub const fn from_units(units: i64) -> Self {
        Self(units * 100)
    }

    /// Convert a decimal major-unit value, rounding to the nearest cent
    ///
    /// Non-finite values and values beyond [`Money::MAX_CENTS`] become zero.
    pub fn from_major(value: f64) -> Self {
        let cents = (value * 100.0).round();
        if cents.is_finite() && cents.abs() <= Self::MAX_CENTS as f64 {
            Self(cents as i64)
        } else {
            tracing::warn!(value, "amount out of range; treating as 0");
            Self::zero()
        }
    }

    /// Check if the amount is within [`Money::MAX_CENTS`]
    pub const fn is_in_range(&self) -> bool {
        self.0 >= -Self::MAX_CENTS && self.0 <= Self::MAX_CENTS
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Whole units, rounded toward positive infinity
    pub const fn ceil_units(&self) -> i64 {
        let units = self.0 / 100;
        if self.0 % 100 > 0 {
            units + 1
        } else {
            units
        }
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Split into `parts` shares that sum exactly to `self`
    ///
    /// Leftover cents go one each to the leading shares. Returns an empty
    /// vector when `parts` is zero.
    pub fn split_evenly(&self, parts: usize) -> Vec<Money> {
        if parts == 0 {
            return Vec::new();
        }
        let n = parts as i64;
        let base = self.0 / n;
        let remainder = self.0 % n;
        let step = remainder.signum();
        (0..n)
            .map(|i| {
                if i < remainder.abs() {
                    Self(base + step)
                } else {
                    Self(base)
                }
            })
            .collect()
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "10"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        let s = s.strip_prefix('$').unwrap_or(s);

        let cents = if s.contains('.') {
            let parts: Vec<&str> = s.split('.').collect();
            if parts.len() != 2 {
                return Err(MoneyParseError::InvalidFormat(s.to_string()));
            }

            let units: i64 = if parts[0].is_empty() {
                0
            } else {
                parts[0]
                    .parse()
                    .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
            };

            // Pad or truncate cents to 2 digits
            let cents_str = parts[1];
            if !cents_str.chars().all(|c| c.is_ascii_digit()) {
                return Err(MoneyParseError::InvalidFormat(s.to_string()));
            }
            let cents: i64 = match cents_str.len() {
                0 => 0,
                1 => {
                    cents_str
                        .parse::<i64>()
                        .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                        * 10
                }
                _ => cents_str[..2]
                    .parse()
                    .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?,
            };

            units
                .checked_mul(100)
                .and_then(|c| c.checked_add(cents))
                .ok_or_else(|| MoneyParseError::OutOfRange(s.to_string()))?
        } else {
            s.parse::<i64>()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                .checked_mul(100)
                .ok_or_else(|| MoneyParseError::OutOfRange(s.to_string()))?
        };

        let amount = Self(if negative { -cents } else { cents });
        if !amount.is_in_range() {
            return Err(MoneyParseError::OutOfRange(s.to_string()));
        }
        Ok(amount)
    }

    /// Parse a money amount, coercing anything malformed to zero
    pub fn parse_lenient(s: &str) -> Self {
        match Self::parse(s) {
            Ok(amount) => amount,
            Err(err) => {
                tracing::warn!("{err}; treating amount as 0");
                Self::zero()
            }
        }
    }

    /// Format with a currency symbol and two decimals
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.units().abs(), self.cents_part())
        } else {
            format!("{}{}.{:02}", symbol, self.units(), self.cents_part())
        }
    }

    /// Format as whole units rounded up, with a currency symbol
    pub fn format_rounded_up(&self, symbol: &str) -> String {
        let units = self.ceil_units();
        if units < 0 {
            format!("-{}{}", symbol, units.abs())
        } else {
            format!("{}{}", symbol, units)
        }
    }

    /// Plain decimal rendering without a symbol ("1800.00")
    pub fn to_decimal_string(&self) -> String {
        if self.is_negative() {
            format!("-{}.{:02}", self.units().abs(), self.cents_part())
        } else {
            format!("{}.{:02}", self.units(), self.cents_part())
        }
    }

    /// Value in major units as a float, for wire formats that use numbers
    pub fn to_major(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::OutOfRange(s) => write!(f, "Amount out of range: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.units(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_from_major() {
        assert_eq!(Money::from_major(1800.0).cents(), 180000);
        assert_eq!(Money::from_major(0.1 + 0.2).cents(), 30);
        assert_eq!(Money::from_major(f64::NAN), Money::zero());
        assert_eq!(Money::from_major(1e300), Money::zero());
        assert_eq!(Money::from_major(-1e300), Money::zero());
        assert_eq!(
            Money::from_major(10_000_000_000_000.0).cents(),
            Money::MAX_CENTS
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "$10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-$10.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "$0.05");
    }

    #[test]
    fn test_ceil_units() {
        assert_eq!(Money::from_cents(80000).ceil_units(), 800);
        assert_eq!(Money::from_cents(80001).ceil_units(), 801);
        assert_eq!(Money::from_cents(33333).ceil_units(), 334);
        assert_eq!(Money::from_cents(-150).ceil_units(), -1);
        assert_eq!(Money::zero().ceil_units(), 0);
    }

    #[test]
    fn test_format_rounded_up() {
        assert_eq!(Money::from_cents(66667).format_rounded_up("$"), "$667");
        assert_eq!(Money::from_cents(20000).format_rounded_up("€"), "€200");
    }

    #[test]
    fn test_split_evenly() {
        let shares = Money::from_cents(100).split_evenly(3);
        assert_eq!(
            shares,
            vec![
                Money::from_cents(34),
                Money::from_cents(33),
                Money::from_cents(33)
            ]
        );
        assert_eq!(shares.iter().sum::<Money>(), Money::from_cents(100));

        let negative = Money::from_cents(-5).split_evenly(2);
        assert_eq!(negative, vec![Money::from_cents(-3), Money::from_cents(-2)]);

        assert!(Money::from_cents(100).split_evenly(0).is_empty());
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((-a).cents(), -1000);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse(".75").unwrap().cents(), 75);
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("1.2.3").is_err());
    }

    #[test]
    fn test_parse_huge_amounts_is_an_error() {
        assert_eq!(
            Money::parse("99999999999999999"),
            Err(MoneyParseError::OutOfRange("99999999999999999".into()))
        );
        assert!(matches!(
            Money::parse("92233720368547758.07"),
            Err(MoneyParseError::OutOfRange(_))
        ));
        assert!(Money::parse("-99999999999999999").is_err());
        assert!(Money::parse("10000000000001").is_err());
        assert_eq!(Money::parse("10000000000000").unwrap().cents(), Money::MAX_CENTS);
    }

    #[test]
    fn test_parse_lenient() {
        assert_eq!(Money::parse_lenient("12.34").cents(), 1234);
        assert_eq!(Money::parse_lenient("twelve"), Money::zero());
        assert_eq!(Money::parse_lenient(""), Money::zero());
        assert_eq!(Money::parse_lenient("99999999999999999"), Money::zero());
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let total: Money = amounts.iter().sum();
        assert_eq!(total.cents(), 600);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
