//! Rate type for price entries
//!
//! Internally stores amounts in hundredths (i64) to avoid floating-point
//! precision issues in exported price columns.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A price rate stored as hundredths of the currency unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rate(i64);

impl Rate {
    /// Create a rate from hundredths
    ///
    /// # Examples
    /// ```
    /// use itemplus::models::Rate;
    /// let rate = Rate::from_cents(1050); // 10.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Get the amount in hundredths
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Whole units (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Hundredths portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parse a rate from a string
    ///
    /// Accepts formats: "10.50", "10.5", "10", "-3.25". Digits past the second
    /// decimal place are truncated.
    pub fn parse(s: &str) -> Result<Self, RateParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(RateParseError::InvalidFormat(s.to_string()));
        }

        let (negative, digits) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, s),
        };

        let invalid = || RateParseError::InvalidFormat(s.to_string());

        // Only a single leading '-' is allowed as a sign
        let parse_whole = |whole: &str| -> Result<i64, RateParseError> {
            if !whole.chars().all(|c| c.is_ascii_digit()) {
                return Err(invalid());
            }
            whole.parse::<i64>().map_err(|_| invalid())
        };

        let cents = match digits.split_once('.') {
            Some((whole, frac)) => {
                if frac.contains('.') || !frac.chars().all(|c| c.is_ascii_digit()) {
                    return Err(invalid());
                }
                let whole: i64 = if whole.is_empty() { 0 } else { parse_whole(whole)? };
                let frac: i64 = match frac.len() {
                    0 => 0,
                    1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
                    _ => frac[..2].parse().map_err(|_| invalid())?,
                };
                whole
                    .checked_mul(100)
                    .and_then(|c| c.checked_add(frac))
                    .ok_or_else(invalid)?
            }
            None => parse_whole(digits)?.checked_mul(100).ok_or_else(invalid)?,
        };

        Ok(Self(if negative { -cents } else { cents }))
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}.{:02}", self.units().abs(), self.cents_part())
        } else {
            write!(f, "{}.{:02}", self.units(), self.cents_part())
        }
    }
}

impl std::str::FromStr for Rate {
    type Err = RateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Error type for rate parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RateParseError {
    InvalidFormat(String),
}

impl fmt::Display for RateParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RateParseError::InvalidFormat(s) => write!(f, "Invalid rate format: {}", s),
        }
    }
}

impl std::error::Error for RateParseError {}
