//! Currency codes, exchange rates, and price display.
//!
//! The catalog quotes prices in AMD; the site displays them in the
//! visitor's chosen currency. Conversion pivots through AMD using
//! `Decimal` arithmetic so repeated conversions never accumulate float
//! drift.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::Locale;

/// Supported display currencies.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    /// Armenian dram, the catalog's base currency.
    #[default]
    Amd,
    Usd,
    Rub,
    Eur,
}

impl CurrencyCode {
    pub fn symbol(&self) -> &'static str {
        match self {
            CurrencyCode::Amd => "֏",
            CurrencyCode::Usd => "$",
            CurrencyCode::Rub => "₽",
            CurrencyCode::Eur => "€",
        }
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CurrencyCode::Amd => write!(f, "AMD"),
            CurrencyCode::Usd => write!(f, "USD"),
            CurrencyCode::Rub => write!(f, "RUB"),
            CurrencyCode::Eur => write!(f, "EUR"),
        }
    }
}

impl std::str::FromStr for CurrencyCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "AMD" => Ok(CurrencyCode::Amd),
            "USD" => Ok(CurrencyCode::Usd),
            "RUB" => Ok(CurrencyCode::Rub),
            "EUR" => Ok(CurrencyCode::Eur),
            _ => Err(format!("invalid currency code: {}", s)),
        }
    }
}

/// Exchange rates quoted as AMD per one unit of each currency.
#[derive(Debug, Clone)]
pub struct ExchangeRates {
    amd_per_unit: HashMap<CurrencyCode, Decimal>,
}

impl ExchangeRates {
    /// Rates with only the identity AMD quote.
    pub fn new() -> Self {
        let mut amd_per_unit = HashMap::new();
        amd_per_unit.insert(CurrencyCode::Amd, Decimal::ONE);
        Self { amd_per_unit }
    }

    /// Add a quote: one unit of `code` is worth `amd_per_unit` dram.
    pub fn with_rate(mut self, code: CurrencyCode, amd_per_unit: Decimal) -> Self {
        self.amd_per_unit.insert(code, amd_per_unit);
        self
    }

    /// Convert between currencies through the AMD pivot.
    ///
    /// Returns `None` when either quote is missing or degenerate; the
    /// display layer falls back to the original currency rather than
    /// showing a made-up number.
    pub fn convert(&self, amount: Decimal, from: CurrencyCode, to: CurrencyCode) -> Option<Decimal> {
        if from == to {
            return Some(amount);
        }
        let from_rate = self.amd_per_unit.get(&from)?;
        let to_rate = self.amd_per_unit.get(&to)?;
        if to_rate.is_zero() {
            return None;
        }
        Some((amount * from_rate / to_rate).round_dp(2))
    }
}

impl Default for ExchangeRates {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a price for display: grouped integer amount plus symbol.
///
/// Armenian and Russian locales group with thin spaces, English with
/// commas. Western currencies put the symbol first, AMD and RUB after.
pub fn format_price(amount: Decimal, code: CurrencyCode, locale: Locale) -> String {
    let separator = match locale {
        Locale::En => ',',
        Locale::Hy | Locale::Ru => ' ',
    };
    let grouped = group_thousands(amount.round(), separator);
    match code {
        CurrencyCode::Usd | CurrencyCode::Eur => format!("{}{}", code.symbol(), grouped),
        CurrencyCode::Amd | CurrencyCode::Rub => format!("{} {}", grouped, code.symbol()),
    }
}

fn group_thousands(amount: Decimal, separator: char) -> String {
    let raw = amount.abs().trunc().to_string();
    let mut grouped = String::with_capacity(raw.len() + raw.len() / 3 + 1);
    for (i, ch) in raw.chars().enumerate() {
        if i > 0 && (raw.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    if amount.is_sign_negative() {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::prelude::FromPrimitive;

    fn rates() -> ExchangeRates {
        ExchangeRates::new()
            .with_rate(CurrencyCode::Usd, Decimal::from(387))
            .with_rate(CurrencyCode::Eur, Decimal::from(420))
    }

    #[test]
    fn test_convert_identity() {
        let amount = Decimal::from(1000);
        assert_eq!(
            rates().convert(amount, CurrencyCode::Amd, CurrencyCode::Amd),
            Some(amount)
        );
    }

    #[test]
    fn test_convert_amd_to_usd() {
        let converted = rates()
            .convert(Decimal::from(38_700_000), CurrencyCode::Amd, CurrencyCode::Usd)
            .unwrap();
        assert_eq!(converted, Decimal::from(100_000));
    }

    #[test]
    fn test_convert_usd_to_eur_via_pivot() {
        let converted = rates()
            .convert(Decimal::from(420), CurrencyCode::Usd, CurrencyCode::Eur)
            .unwrap();
        assert_eq!(converted, Decimal::from_f64(387.0).unwrap().round_dp(2));
    }

    #[test]
    fn test_missing_quote_returns_none() {
        let result = rates().convert(Decimal::ONE, CurrencyCode::Rub, CurrencyCode::Usd);
        assert!(result.is_none());
    }

    #[test]
    fn test_format_price_locale_separators() {
        let amount = Decimal::from(45_000_000);
        assert_eq!(format_price(amount, CurrencyCode::Amd, Locale::Hy), "45 000 000 ֏");
        assert_eq!(format_price(amount, CurrencyCode::Amd, Locale::En), "45,000,000 ֏");
    }

    #[test]
    fn test_format_price_symbol_placement() {
        let amount = Decimal::from(120_000);
        assert_eq!(format_price(amount, CurrencyCode::Usd, Locale::En), "$120,000");
        assert_eq!(format_price(amount, CurrencyCode::Rub, Locale::Ru), "120 000 ₽");
    }

    #[test]
    fn test_currency_code_round_trip() {
        for code in [CurrencyCode::Amd, CurrencyCode::Usd, CurrencyCode::Rub, CurrencyCode::Eur] {
            let parsed: CurrencyCode = code.to_string().parse().unwrap();
            assert_eq!(parsed, code);
        }
        assert_eq!("usd".parse::<CurrencyCode>().unwrap(), CurrencyCode::Usd);
    }
}
