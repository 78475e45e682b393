//! Integer money amounts.
//!
//! Prices are kept in minor units (paise for INR) so totals never drift.
//! Catalog display strings such as `₹89` are parsed once with [`Money::parse`].

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::ops::Add;
use thiserror::Error;

/// Currencies the storefront can price in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Currency {
    /// Indian rupee.
    #[default]
    #[serde(rename = "INR")]
    Inr,
}

impl Currency {
    /// The prefix used in display strings.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Inr => "₹",
        }
    }

    /// ISO 4217 code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Inr => "INR",
        }
    }

    /// Minor units in one major unit.
    pub fn minor_per_major(&self) -> i64 {
        match self {
            Currency::Inr => 100,
        }
    }
}

/// Errors raised while parsing a display price.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PriceError {
    /// The text does not start with the currency symbol.
    #[error("Price {input:?} is missing the {symbol} prefix")]
    MissingSymbol { input: String, symbol: &'static str },

    /// Nothing follows the currency symbol.
    #[error("Price {0:?} has no amount")]
    Empty(String),

    /// The amount is not a plain decimal number.
    #[error("Price {0:?} is not a number")]
    NotANumber(String),

    /// More fractional digits than the currency has minor units for.
    #[error("Price {0:?} has more than two decimal places")]
    TooPrecise(String),

    /// The amount does not fit in minor units.
    #[error("Price {0:?} is too large")]
    Overflow(String),
}

/// An amount of money in minor units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    minor: i64,
    currency: Currency,
}

impl Money {
    pub fn new(minor: i64, currency: Currency) -> Self {
        Self { minor, currency }
    }

    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Whole major units, e.g. `Money::from_major(89, Currency::Inr)` is ₹89.
    pub fn from_major(major: i64, currency: Currency) -> Self {
        Self::new(major.saturating_mul(currency.minor_per_major()), currency)
    }

    pub fn minor(&self) -> i64 {
        self.minor
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn is_zero(&self) -> bool {
        self.minor == 0
    }

    /// The amount multiplied by a line quantity.
    pub fn times(&self, quantity: u32) -> Self {
        Self::new(self.minor.saturating_mul(i64::from(quantity)), self.currency)
    }

    /// Parses a display price such as `₹89` or `₹12.50`.
    ///
    /// The currency symbol must prefix the amount. Up to two fractional
    /// digits are accepted; signs, separators and exponents are not.
    pub fn parse(text: &str, currency: Currency) -> Result<Self, PriceError> {
        let trimmed = text.trim();
        let amount = trimmed
            .strip_prefix(currency.symbol())
            .ok_or_else(|| PriceError::MissingSymbol {
                input: text.to_string(),
                symbol: currency.symbol(),
            })?
            .trim();

        if amount.is_empty() {
            return Err(PriceError::Empty(text.to_string()));
        }

        let (whole, fraction) = amount.split_once('.').unwrap_or((amount, ""));
        let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction) {
            return Err(PriceError::NotANumber(text.to_string()));
        }
        if fraction.len() > 2 {
            return Err(PriceError::TooPrecise(text.to_string()));
        }

        let major: i64 = if whole.is_empty() {
            0
        } else {
            whole
                .parse()
                .map_err(|_| PriceError::Overflow(text.to_string()))?
        };
        // "5" means 50 paise, "05" means 5
        let fraction_minor: i64 = format!("{:0<2}", fraction)
            .parse()
            .map_err(|_| PriceError::NotANumber(text.to_string()))?;

        major
            .checked_mul(currency.minor_per_major())
            .and_then(|m| m.checked_add(fraction_minor))
            .map(|minor| Self::new(minor, currency))
            .ok_or_else(|| PriceError::Overflow(text.to_string()))
    }

    /// Menu form: `₹89`, or `₹89.50` when there are paise.
    pub fn display_compact(&self) -> String {
        let per = self.currency.minor_per_major();
        if self.minor % per == 0 {
            format!("{}{}", self.currency.symbol(), self.minor / per)
        } else {
            self.to_string()
        }
    }
}

/// Totals form: always two decimals, e.g. `₹277.00`.
impl Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let per = self.currency.minor_per_major();
        let sign = if self.minor < 0 { "-" } else { "" };
        let abs = self.minor.unsigned_abs();
        let per = per.unsigned_abs();
        write!(
            f,
            "{}{}{}.{:02}",
            sign,
            self.currency.symbol(),
            abs / per,
            abs % per
        )
    }
}

/// Same-currency addition. Every catalog price is INR.
///
/// Only INR amounts may be added. The currency check runs in debug builds
/// only; in release builds a mismatch keeps the left-hand currency.
impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        debug_assert_eq!(self.currency, rhs.currency, "mixed currencies");
        Money::new(self.minor.saturating_add(rhs.minor), self.currency)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(Currency::default()), Add::add)
    }
}
