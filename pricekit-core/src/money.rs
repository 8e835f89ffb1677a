//! Money display formatting
//!
//! [`MoneyFormatter`] validates the currency and precision once and then
//! formats any number of amounts:
//!
//! ```rust
//! use pricekit_core::build_formatter;
//!
//! let eur = build_formatter("EUR", 2).unwrap();
//! assert_eq!(eur.format_f64(1000.0), "€1,000.00");
//! assert_eq!(eur.format_f64(-100.0), "-€100.00");
//! assert!(build_formatter("INVALID", 0).is_err());
//! ```
//!
//! Rounding is half away from zero at the last retained digit, applied to
//! the decimal value (so `99.995` rounds to `100.00`).

use crate::{Amount, PricingError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Largest accepted `fractional_digits`.
pub const MAX_FRACTIONAL_DIGITS: u32 = 20;

const NBSP: char = '\u{a0}';
const NARROW_NBSP: char = '\u{202f}';

/// Minor units for codes missing from [`NARROW_SYMBOLS`].
const DEFAULT_MINOR_UNITS: u32 = 2;

/// Narrow symbol and minor units for commonly priced currencies.
const NARROW_SYMBOLS: &[(&str, &str, u32)] = &[
    ("ARS", "$", 2),
    ("AUD", "$", 2),
    ("BRL", "R$", 2),
    ("CAD", "$", 2),
    ("CHF", "CHF", 2),
    ("CLP", "$", 0),
    ("CNY", "¥", 2),
    ("COP", "$", 2),
    ("CZK", "Kč", 2),
    ("DKK", "kr", 2),
    ("EGP", "E£", 2),
    ("EUR", "€", 2),
    ("GBP", "£", 2),
    ("GEL", "₾", 2),
    ("HKD", "$", 2),
    ("HUF", "Ft", 2),
    ("ILS", "₪", 2),
    ("INR", "₹", 2),
    ("ISK", "kr", 0),
    ("JPY", "¥", 0),
    ("KRW", "₩", 0),
    ("KZT", "₸", 2),
    ("MXN", "$", 2),
    ("NGN", "₦", 2),
    ("NOK", "kr", 2),
    ("NZD", "$", 2),
    ("PHP", "₱", 2),
    ("PLN", "zł", 2),
    ("RUB", "₽", 2),
    ("SEK", "kr", 2),
    ("SGD", "$", 2),
    ("THB", "฿", 2),
    ("TRY", "₺", 2),
    ("UAH", "₴", 2),
    ("USD", "$", 2),
    ("VND", "₫", 0),
    ("ZAR", "R", 2),
];

/// Validate and normalize a currency code.
///
/// A code is well formed when it is exactly three ASCII letters; case is
/// normalized to upper.
pub fn normalize_currency(code: &str) -> Result<String> {
    if code.len() == 3 && code.bytes().all(|b| b.is_ascii_alphabetic()) {
        Ok(code.to_ascii_uppercase())
    } else {
        Err(PricingError::InvalidCurrency(code.to_string()))
    }
}

fn lookup(code: &str) -> Option<&'static (&'static str, &'static str, u32)> {
    NARROW_SYMBOLS
        .binary_search_by(|(listed, _, _)| listed.cmp(&code))
        .ok()
        .map(|idx| &NARROW_SYMBOLS[idx])
}

/// Narrow symbol for a normalized code, if the code is listed.
pub fn narrow_symbol(code: &str) -> Option<&'static str> {
    lookup(code).map(|(_, symbol, _)| *symbol)
}

/// Digits the currency's minor unit uses (`2` for USD, `0` for JPY).
pub fn minor_units(code: &str) -> u32 {
    lookup(code).map_or(DEFAULT_MINOR_UNITS, |(_, _, units)| *units)
}

/// Number display conventions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    /// `$1,234.50`
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    /// `1.234,50 $`
    #[serde(rename = "de-DE")]
    DeDe,
    /// `1 234,50 $` (narrow no-break space grouping)
    #[serde(rename = "fr-FR")]
    FrFr,
}

impl Locale {
    pub fn as_tag(&self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::DeDe => "de-DE",
            Self::FrFr => "fr-FR",
        }
    }

    fn group_separator(&self) -> char {
        match self {
            Self::EnUs => ',',
            Self::DeDe => '.',
            Self::FrFr => NARROW_NBSP,
        }
    }

    fn decimal_separator(&self) -> char {
        match self {
            Self::EnUs => '.',
            Self::DeDe | Self::FrFr => ',',
        }
    }

    fn symbol_first(&self) -> bool {
        matches!(self, Self::EnUs)
    }
}

impl FromStr for Locale {
    type Err = PricingError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "en" | "en-us" => Ok(Self::EnUs),
            "de" | "de-de" => Ok(Self::DeDe),
            "fr" | "fr-fr" => Ok(Self::FrFr),
            _ => Err(PricingError::InvalidLocale(s.to_string())),
        }
    }
}

/// Display settings that apply to every currency on a page.
///
/// Each price is formatted in its own currency, so a page keeps one style
/// and asks it for a [`MoneyFormatter`] per currency code.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoneyStyle {
    /// Maximum digits after the decimal separator.
    pub fractional_digits: u32,
    pub locale: Locale,
}

impl MoneyStyle {
    pub fn new(fractional_digits: u32, locale: Locale) -> Self {
        Self {
            fractional_digits,
            locale,
        }
    }

    /// Formatter for `currency` in this style.
    pub fn formatter(&self, currency: &str) -> Result<MoneyFormatter> {
        Ok(MoneyFormatter::new(currency, self.fractional_digits)?.with_locale(self.locale))
    }
}

/// Formats amounts in one currency.
///
/// `fractional_digits` is the maximum precision. Amounts are padded with
/// zeros up to the currency's minor units when that is smaller, so USD at
/// 4 digits prints `$1.50` and JPY at 2 digits prints `¥1,000`.
///
/// Construct once per (currency, precision) pair and reuse it; formatting
/// does no validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoneyFormatter {
    currency: String,
    symbol: String,
    /// Unlisted codes print the code itself, separated by a space.
    spaced_symbol: bool,
    fractional_digits: u32,
    min_fractional_digits: u32,
    locale: Locale,
}

impl MoneyFormatter {
    /// Build a formatter.
    ///
    /// # Errors
    ///
    /// [`PricingError::InvalidCurrency`] for a malformed code and
    /// [`PricingError::InvalidPrecision`] above [`MAX_FRACTIONAL_DIGITS`].
    pub fn new(currency: &str, fractional_digits: u32) -> Result<Self> {
        let currency = normalize_currency(currency)?;
        if fractional_digits > MAX_FRACTIONAL_DIGITS {
            return Err(PricingError::InvalidPrecision(fractional_digits));
        }

        let (symbol, spaced_symbol) = match narrow_symbol(&currency) {
            Some(symbol) => (symbol.to_string(), false),
            None => {
                tracing::debug!(%currency, "no narrow symbol, displaying currency code");
                (currency.clone(), true)
            }
        };

        let min_fractional_digits = minor_units(&currency).min(fractional_digits);
        Ok(Self {
            currency,
            symbol,
            spaced_symbol,
            fractional_digits,
            min_fractional_digits,
            locale: Locale::default(),
        })
    }

    /// Set the display locale.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn fractional_digits(&self) -> u32 {
        self.fractional_digits
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Fraction digits always shown, the smaller of the precision and the
    /// currency's minor units.
    pub fn min_fractional_digits(&self) -> u32 {
        self.min_fractional_digits
    }

    /// Format a decimal amount.
    pub fn format(&self, amount: impl Into<Amount>) -> String {
        let amount = amount.into();
        let mut shown = amount
            .abs()
            .round_half_up(self.fractional_digits)
            .as_decimal()
            .normalize();
        if shown.scale() < self.min_fractional_digits {
            shown.rescale(self.min_fractional_digits);
        }
        self.decorate(amount.is_negative(), &self.group(&shown.to_string()))
    }

    /// Format a floating point amount.
    ///
    /// NaN prints as `NaN` and infinities as the symbol followed by `∞`.
    /// Finite values beyond the [`Amount`] range are printed in full.
    pub fn format_f64(&self, amount: f64) -> String {
        if amount.is_nan() {
            return "NaN".to_string();
        }
        if amount.is_infinite() {
            return self.decorate(amount < 0.0, "∞");
        }
        match Amount::try_from_f64(amount) {
            Some(value) => self.format(value),
            None => self.decorate(amount < 0.0, &self.group(&self.plain_f64(amount.abs()))),
        }
    }

    /// Plain digits for a finite `abs` that does not fit an [`Amount`].
    ///
    /// Such values are either integral (above `2^53`) or round to zero at
    /// every supported precision.
    fn plain_f64(&self, abs: f64) -> String {
        if abs >= 1.0 {
            let mut plain = abs.to_string();
            if self.min_fractional_digits > 0 {
                plain.push('.');
                plain.push_str(&"0".repeat(self.min_fractional_digits as usize));
            }
            plain
        } else {
            format!("{:.*}", self.min_fractional_digits as usize, 0.0)
        }
    }

    /// Consume the formatter into a plain closure over `f64`.
    pub fn into_fn(self) -> impl Fn(f64) -> String + Send + Sync {
        move |amount| self.format_f64(amount)
    }

    /// Insert locale separators into a plain `1234.50` string.
    fn group(&self, plain: &str) -> String {
        let (int_part, frac_part) = match plain.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (plain, None),
        };

        let sep = self.locale.group_separator();
        let len = int_part.len();
        let mut out = String::with_capacity(plain.len() + len / 3 * sep.len_utf8());
        for (i, digit) in int_part.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                out.push(sep);
            }
            out.push(digit);
        }

        if let Some(frac_part) = frac_part {
            out.push(self.locale.decimal_separator());
            out.push_str(frac_part);
        }
        out
    }

    fn decorate(&self, negative: bool, number: &str) -> String {
        let sign = if negative { "-" } else { "" };
        if self.locale.symbol_first() {
            let gap = if self.spaced_symbol { NBSP.to_string() } else { String::new() };
            format!("{sign}{}{gap}{number}", self.symbol)
        } else {
            format!("{sign}{number}{NBSP}{}", self.symbol)
        }
    }
}

/// Build a formatter for `currency` with `fractional_digits` decimals.
pub fn build_formatter(currency: &str, fractional_digits: u32) -> Result<MoneyFormatter> {
    MoneyFormatter::new(currency, fractional_digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usd(digits: u32) -> MoneyFormatter {
        build_formatter("USD", digits).unwrap()
    }

    #[test]
    fn test_symbol_table_is_sorted() {
        assert!(NARROW_SYMBOLS.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn test_whole_dollars() {
        let f = usd(0);
        assert_eq!(f.format_f64(0.0), "$0");
        assert_eq!(f.format_f64(100.0), "$100");
        assert_eq!(f.format_f64(1000.0), "$1,000");
        assert_eq!(f.format_f64(1234567.0), "$1,234,567");
    }

    #[test]
    fn test_rounding_without_fraction() {
        let f = usd(0);
        assert_eq!(f.format_f64(99.99), "$100");
        assert_eq!(f.format_f64(99.49), "$99");
        assert_eq!(f.format_f64(0.01), "$0");
        assert_eq!(f.format_f64(123.45), "$123");
        assert_eq!(f.format_f64(999.5), "$1,000");
    }

    #[test]
    fn test_cents() {
        let f = usd(2);
        assert_eq!(f.format_f64(99.99), "$99.99");
        assert_eq!(f.format_f64(0.01), "$0.01");
        assert_eq!(f.format_f64(-100.0), "-$100.00");
        assert_eq!(f.format_f64(-99.99), "-$99.99");
        assert_eq!(f.format_f64(0.001), "$0.00");
        assert_eq!(f.format_f64(0.005), "$0.01");
        assert_eq!(f.format_f64(99.994), "$99.99");
        assert_eq!(f.format_f64(99.995), "$100.00");
        assert_eq!(f.format_f64(99.999), "$100.00");
        assert_eq!(f.format_f64(999999999.99), "$999,999,999.99");
        assert_eq!(f.format_f64(1000000000.0), "$1,000,000,000.00");
    }

    #[test]
    fn test_negative_whole_units() {
        let f = usd(0);
        assert_eq!(f.format_f64(-100.0), "-$100");
        assert_eq!(f.format_f64(-99.99), "-$100");
    }

    #[test]
    fn test_other_currencies() {
        assert_eq!(build_formatter("EUR", 2).unwrap().format_f64(1000.0), "€1,000.00");
        assert_eq!(build_formatter("GBP", 2).unwrap().format_f64(100.0), "£100.00");
        assert_eq!(build_formatter("JPY", 0).unwrap().format_f64(100.0), "¥100");
        assert_eq!(build_formatter("eur", 2).unwrap().currency(), "EUR");
    }

    #[test]
    fn test_unlisted_code_prints_code() {
        let f = build_formatter("XYZ", 0).unwrap();
        assert_eq!(f.format_f64(100.0), "XYZ\u{a0}100");
        assert_eq!(f.format_f64(-5.0), "-XYZ\u{a0}5");
    }

    #[test]
    fn test_invalid_construction() {
        assert!(matches!(
            build_formatter("INVALID", 0),
            Err(PricingError::InvalidCurrency(code)) if code == "INVALID"
        ));
        assert!(build_formatter("US", 0).is_err());
        assert!(build_formatter("U$D", 0).is_err());
        assert!(build_formatter("", 0).is_err());
        assert!(matches!(
            build_formatter("USD", 21),
            Err(PricingError::InvalidPrecision(21))
        ));
    }

    #[test]
    fn test_decimal_input() {
        let f = usd(2);
        assert_eq!(f.format(Amount::from_units(419)), "$419.00");
        assert_eq!(f.format(Amount::from_str_checked("99.995").unwrap()), "$100.00");
        assert_eq!(f.format(1234_i64), "$1,234.00");
    }

    #[test]
    fn test_precision_is_a_maximum() {
        let f = usd(4);
        assert_eq!(f.min_fractional_digits(), 2);
        assert_eq!(f.format_f64(1.5), "$1.50");
        assert_eq!(f.format_f64(1.23456), "$1.2346");
        assert_eq!(f.format_f64(1.001), "$1.001");
        assert_eq!(f.format_f64(0.0), "$0.00");

        let jpy = build_formatter("JPY", 2).unwrap();
        assert_eq!(jpy.format_f64(1000.0), "¥1,000");
        assert_eq!(jpy.format_f64(1000.25), "¥1,000.25");
        assert_eq!(jpy.format_f64(1000.5), "¥1,000.5");

        assert_eq!(build_formatter("XYZ", 3).unwrap().format_f64(7.0), "XYZ\u{a0}7.00");
        assert_eq!(minor_units("KRW"), 0);
        assert_eq!(minor_units("EUR"), 2);
        assert_eq!(minor_units("XYZ"), 2);
    }

    #[test]
    fn test_large_finite_values_print_in_full() {
        let f = usd(0);
        assert_eq!(
            f.format_f64(1e30),
            "$1,000,000,000,000,000,000,000,000,000,000"
        );
        assert_eq!(
            f.format_f64(-1e30),
            "-$1,000,000,000,000,000,000,000,000,000,000"
        );
        assert_eq!(
            usd(2).format_f64(1e29),
            "$100,000,000,000,000,000,000,000,000,000.00"
        );
        assert!(!f.format_f64(f64::MAX).contains('∞'));
    }

    #[test]
    fn test_style_builds_per_currency_formatters() {
        let style = MoneyStyle::new(2, Locale::DeDe);
        let eur = style.formatter("EUR").unwrap();
        assert_eq!(eur.format_f64(1234.5), "1.234,50\u{a0}€");
        assert_eq!(eur.locale(), Locale::DeDe);
        assert_eq!(style.formatter("JPY").unwrap().format_f64(1234.0), "1.234\u{a0}¥");
        assert!(style.formatter("EURO").is_err());
    }

    #[test]
    fn test_non_finite() {
        let f = usd(2);
        assert_eq!(f.format_f64(f64::NAN), "NaN");
        assert_eq!(f.format_f64(f64::INFINITY), "$∞");
        assert_eq!(f.format_f64(f64::NEG_INFINITY), "-$∞");
    }

    #[test]
    fn test_locales() {
        let de = usd(2).with_locale(Locale::DeDe);
        assert_eq!(de.format_f64(1234.5), "1.234,50\u{a0}$");
        assert_eq!(de.format_f64(-1234.5), "-1.234,50\u{a0}$");

        let fr = build_formatter("EUR", 0).unwrap().with_locale(Locale::FrFr);
        assert_eq!(fr.format_f64(1234567.0), "1\u{202f}234\u{202f}567\u{a0}€");

        assert_eq!("de_DE".parse::<Locale>().unwrap(), Locale::DeDe);
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::EnUs);
        assert!("xx-YY".parse::<Locale>().is_err());
    }

    #[test]
    fn test_into_fn() {
        let format = usd(0).into_fn();
        assert_eq!(format(419.0), "$419");
        assert_eq!(format(1500.0), "$1,500");
    }
}
