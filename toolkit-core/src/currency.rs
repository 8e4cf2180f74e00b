use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::CurrencyError;

/// Currency every rate is expressed against.
pub const BASE_CURRENCY: &str = "USD";

/// Converts `amount` with a plain multiplicative `rate`.
///
/// `convert(0.0, rate)` is always `0.0`; decimals are kept as is
/// (`convert(10.5, 1.35)` is `14.175` up to float rounding).
pub fn convert(amount: f64, rate: f64) -> f64 {
	amount * rate
}

/// Exchange-rate table against [`BASE_CURRENCY`].
///
/// Each rate is the number of units of that currency for one unit of the
/// base currency. Codes are stored upper-case; lookups are case-insensitive.
///
/// # Invariants
/// - The base currency is always present with a rate of 1
/// - Every rate is strictly positive and finite
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExchangeRates {
	base: String,
	rates: BTreeMap<String, f64>,
}

impl Default for ExchangeRates {
	/// USD base with the SGD and CNY rates the converter ships with.
	fn default() -> Self {
		let rates = BTreeMap::from([
			(BASE_CURRENCY.to_owned(), 1.0),
			("SGD".to_owned(), 1.35),
			("CNY".to_owned(), 7.08),
		]);
		Self { base: BASE_CURRENCY.to_owned(), rates }
	}
}

impl ExchangeRates {
	/// Builds a table from `(code, rate)` pairs. The base currency is added if missing.
	///
	/// # Errors
	/// `InvalidRate` if a rate is not strictly positive and finite, or if the
	/// base currency is given a rate other than 1.
	pub fn new<I, S>(rates: I) -> Result<Self, CurrencyError>
	where
		I: IntoIterator<Item = (S, f64)>,
		S: AsRef<str>,
	{
		let mut table = BTreeMap::from([(BASE_CURRENCY.to_owned(), 1.0)]);
		for (code, rate) in rates {
			let code = code.as_ref().trim().to_ascii_uppercase();
			if !rate.is_finite() || rate <= 0.0 {
				return Err(CurrencyError::InvalidRate { currency: code, reason: format!("{rate} is not > 0") });
			}
			if code == BASE_CURRENCY && rate != 1.0 {
				return Err(CurrencyError::InvalidRate { currency: code, reason: "base currency rate must be 1".to_owned() });
			}
			table.insert(code, rate);
		}
		Ok(Self { base: BASE_CURRENCY.to_owned(), rates: table })
	}

	/// Parses a `CODE=rate` list separated by commas, e.g. `"SGD=1.35,CNY=7.08"`.
	///
	/// Blank entries are ignored.
	pub fn parse(input: &str) -> Result<Self, CurrencyError> {
		let mut pairs = Vec::new();
		for entry in input.split(',').map(str::trim).filter(|s| !s.is_empty()) {
			let (code, rate) = entry.split_once('=').ok_or_else(|| CurrencyError::InvalidRate {
				currency: entry.to_owned(),
				reason: "expected CODE=rate".to_owned(),
			})?;
			let rate: f64 = rate.trim().parse().map_err(|_| CurrencyError::InvalidRate {
				currency: code.trim().to_owned(),
				reason: format!("'{}' is not a number", rate.trim()),
			})?;
			pairs.push((code.to_owned(), rate));
		}
		Self::new(pairs)
	}

	pub fn base(&self) -> &str {
		&self.base
	}

	/// Rate of `code` against the base currency.
	pub fn rate(&self, code: &str) -> Result<f64, CurrencyError> {
		let code = code.trim().to_ascii_uppercase();
		self.rates.get(&code).copied().ok_or(CurrencyError::UnknownCurrency(code))
	}

	/// Known currency codes, sorted.
	pub fn currencies(&self) -> impl Iterator<Item = &str> {
		self.rates.keys().map(String::as_str)
	}

	/// Converts `amount` from one currency to another through the base currency.
	///
	/// # Errors
	/// - `InvalidAmount` for a negative, NaN or infinite amount
	/// - `UnknownCurrency` if either code is missing from the table
	pub fn convert(&self, amount: f64, from: &str, to: &str) -> Result<f64, CurrencyError> {
		if !amount.is_finite() || amount < 0.0 {
			return Err(CurrencyError::InvalidAmount(amount));
		}
		let from_rate = self.rate(from)?;
		let to_rate = self.rate(to)?;
		Ok(convert(amount / from_rate, to_rate))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn close(a: f64, b: f64, tolerance: f64) -> bool {
		(a - b).abs() < tolerance
	}

	#[test]
	fn plain_conversion_preserves_scale() {
		assert_eq!(convert(0.0, 1.35), 0.0);
		assert!(close(convert(10.5, 1.35), 14.175, 1e-9));
		assert!(close(convert(100.0, 7.08), 708.0, 1e-9));
	}

	#[test]
	fn converts_from_base_currency() {
		let rates = ExchangeRates::default();
		assert!(close(rates.convert(100.0, "USD", "SGD").unwrap(), 135.0, 1e-9));
		assert!(close(rates.convert(100.0, "usd", "cny").unwrap(), 708.0, 1e-9));
	}

	#[test]
	fn converts_between_two_foreign_currencies() {
		let rates = ExchangeRates::default();
		assert!(close(rates.convert(135.0, "SGD", "USD").unwrap(), 100.0, 1e-9));
		assert!(close(rates.convert(1.35, "SGD", "CNY").unwrap(), 7.08, 1e-9));
		assert_eq!(rates.convert(0.0, "CNY", "SGD").unwrap(), 0.0);
	}

	#[test]
	fn rejects_unknown_currency_and_bad_amounts() {
		let rates = ExchangeRates::default();
		assert_eq!(rates.convert(1.0, "EUR", "USD"), Err(CurrencyError::UnknownCurrency("EUR".to_owned())));
		assert_eq!(rates.convert(-1.0, "USD", "SGD"), Err(CurrencyError::InvalidAmount(-1.0)));
		assert!(matches!(rates.convert(f64::NAN, "USD", "SGD"), Err(CurrencyError::InvalidAmount(_))));
	}

	#[test]
	fn parse_builds_table_with_base() {
		let rates = ExchangeRates::parse(" sgd=1.35, EUR = 0.92 ,").unwrap();
		assert_eq!(rates.currencies().collect::<Vec<_>>(), vec!["EUR", "SGD", "USD"]);
		assert_eq!(rates.rate("eur").unwrap(), 0.92);
		assert_eq!(rates.base(), "USD");
	}

	#[test]
	fn parse_rejects_bad_entries() {
		assert!(matches!(ExchangeRates::parse("SGD"), Err(CurrencyError::InvalidRate { .. })));
		assert!(matches!(ExchangeRates::parse("SGD=abc"), Err(CurrencyError::InvalidRate { .. })));
		assert!(matches!(ExchangeRates::parse("SGD=0"), Err(CurrencyError::InvalidRate { .. })));
		assert!(matches!(ExchangeRates::parse("USD=2"), Err(CurrencyError::InvalidRate { .. })));
	}
}
