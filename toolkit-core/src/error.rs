//! Error types shared by the toolkit modules.

use thiserror::Error;

/// Errors raised while validating, spinning or sharing a wheel.
///
/// Every variant is returned synchronously to the caller. Nothing is retried
/// internally: the host decides whether to ask the user to fix the wheel.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum WheelError {
	/// No enabled option is left, even after relaxing recent-winner exclusion.
	#[error("no eligible options: enable at least one option before spinning")]
	NoEligibleOptions,

	/// An option carries a non-finite weight, or a non-positive one while enabled.
	#[error("invalid weight {weight} on option {index}: weights must be finite, and > 0 when enabled")]
	InvalidWeight { index: usize, weight: f64 },

	/// The weights of the candidates are valid one by one but their sum is not finite.
	#[error("total weight of the enabled options is too large")]
	TotalWeightOverflow,

	/// An option has an empty (or blank) label.
	#[error("option {index} has an empty label")]
	EmptyText { index: usize },

	/// An edit referred to a position outside the option list.
	#[error("no option at position {0}")]
	UnknownOption(usize),

	/// A shared state string could not be decoded into a valid wheel.
	#[error("malformed wheel state: {0}")]
	MalformedState(String),
}

impl WheelError {
	/// Create a new "malformed state" error.
	pub fn malformed(reason: impl Into<String>) -> Self {
		Self::MalformedState(reason.into())
	}
}

/// Errors raised by the currency converter.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CurrencyError {
	/// The currency code is not in the exchange-rate table.
	#[error("unknown currency: {0}")]
	UnknownCurrency(String),

	/// The amount is negative, NaN or infinite.
	#[error("invalid amount: {0}")]
	InvalidAmount(f64),

	/// A rate entry is unparsable, non-positive or non-finite.
	#[error("invalid rate for {currency}: {reason}")]
	InvalidRate { currency: String, reason: String },
}
