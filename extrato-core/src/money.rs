//! Fixed-point money amounts and the formats used to display them.
//!
//! Amounts are always held at scale 2. Display conventions are an explicit
//! [`MoneyFormat`] value handed to whoever renders them; nothing here reads or
//! changes process-wide locale state.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("malformed amount: {0:?}")]
    Malformed(String),
    #[error("amount out of range: {0:?}")]
    OutOfRange(String),
}

/// Signed monetary value with exactly two fractional digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    pub fn zero() -> Self {
        Self(Decimal::new(0, 2))
    }

    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Round half away from zero to two places and pin the scale.
    pub fn from_decimal(value: Decimal) -> Self {
        let mut value =
            value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero);
        value.rescale(2);
        if value.is_zero() {
            return Self::zero();
        }
        Self(value)
    }

    /// Parse an unsigned Brazilian numeral: `.` thousands groups, `,` and
    /// exactly two decimal digits (`1.234,56`, `1234,56`, `0,00`).
    pub fn from_brazilian(numeral: &str) -> Result<Self, AmountError> {
        let numeral = numeral.trim();
        let (integer, fraction) = numeral
            .split_once(',')
            .ok_or_else(|| AmountError::Malformed(numeral.to_string()))?;

        if integer.is_empty()
            || fraction.len() != 2
            || !fraction.chars().all(|c| c.is_ascii_digit())
            || !integer.chars().all(|c| c.is_ascii_digit() || c == '.')
            || integer.starts_with('.')
            || integer.ends_with('.')
        {
            return Err(AmountError::Malformed(numeral.to_string()));
        }

        let digits: String = integer.chars().filter(|c| *c != '.').collect();
        let canonical = format!("{digits}.{fraction}");
        let value = Decimal::from_str(&canonical)
            .map_err(|_| AmountError::OutOfRange(numeral.to_string()))?;
        Ok(Self::from_decimal(value))
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Debits are negative
    pub fn is_debit(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    pub fn is_credit(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    pub fn negate(&self) -> Self {
        if self.is_zero() {
            return *self;
        }
        Self(-self.0)
    }

    /// Force the amount negative regardless of how it was printed.
    pub fn as_debit(&self) -> Self {
        self.abs().negate()
    }

    /// Render with an explicit display convention.
    pub fn format(&self, format: &MoneyFormat) -> String {
        let canonical = self.abs().0.to_string();
        let (integer, fraction) = canonical.split_once('.').unwrap_or((canonical.as_str(), "00"));

        let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
        for (i, ch) in integer.chars().enumerate() {
            if i > 0 && (integer.len() - i) % 3 == 0 {
                if let Some(sep) = format.thousands_separator {
                    grouped.push(sep);
                }
            }
            grouped.push(ch);
        }

        let mut out = String::new();
        if self.is_debit() {
            out.push('-');
        }
        if let Some(symbol) = &format.symbol {
            out.push_str(symbol);
            out.push(' ');
        }
        out.push_str(&grouped);
        out.push(format.decimal_separator);
        out.push_str(fraction);
        out
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self::from_decimal(value)
    }
}

impl From<Amount> for Decimal {
    fn from(value: Amount) -> Self {
        value.0
    }
}

/// Canonical form: optional `-`, digits, `.`, exactly two digits.
impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s.strip_prefix('-').unwrap_or(s);
        let well_formed = body
            .split_once('.')
            .map(|(int, frac)| {
                !int.is_empty()
                    && int.chars().all(|c| c.is_ascii_digit())
                    && frac.len() == 2
                    && frac.chars().all(|c| c.is_ascii_digit())
            })
            .unwrap_or(false);
        if !well_formed {
            return Err(AmountError::Malformed(s.to_string()));
        }
        let value = Decimal::from_str(s).map_err(|_| AmountError::OutOfRange(s.to_string()))?;
        Ok(Self::from_decimal(value))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How amounts are rendered for people and spreadsheets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoneyFormat {
    pub decimal_separator: char,
    pub thousands_separator: Option<char>,
    pub symbol: Option<String>,
}

impl MoneyFormat {
    /// `R$ 1.234,56`
    pub fn brl() -> Self {
        Self {
            decimal_separator: ',',
            thousands_separator: Some('.'),
            symbol: Some("R$".to_string()),
        }
    }

    /// `1.234,56`
    pub fn brazilian_numeral() -> Self {
        Self {
            symbol: None,
            ..Self::brl()
        }
    }
}

/// Canonical machine form: `1234.56`
impl Default for MoneyFormat {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
            thousands_separator: None,
            symbol: None,
        }
    }
}
