use rand::Rng;
use serde::{Deserialize, Serialize};

use super::history::SelectionHistory;
use super::selection::{self, Selected};
use crate::error::WheelError;

fn default_weight() -> f64 {
	1.0
}

fn default_enabled() -> bool {
	true
}

/// A single candidate on the wheel.
///
/// Options have no explicit id: their identity is their position in
/// [`WheelConfig::options`]. Labels do not need to be unique.
///
/// # Invariants
/// - `text` is not blank
/// - `weight` is finite, and strictly positive whenever `enabled` is true
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WheelOption {
	/// User-defined label.
	pub text: String,
	/// Relative weight of the option in the lottery.
	#[serde(default = "default_weight")]
	pub weight: f64,
	/// Disabled options stay on the wheel but are never drawn.
	#[serde(default = "default_enabled")]
	pub enabled: bool,
}

impl WheelOption {
	/// Creates an enabled option with the default weight of 1.
	pub fn new(text: impl Into<String>) -> Self {
		Self { text: text.into(), weight: default_weight(), enabled: true }
	}

	/// Returns the same option with another weight.
	pub fn with_weight(mut self, weight: f64) -> Self {
		self.weight = weight;
		self
	}

	/// Returns the same option, disabled.
	pub fn disabled(mut self) -> Self {
		self.enabled = false;
		self
	}

	/// Checks the option invariants, `index` being its position on the wheel.
	///
	/// A disabled option is never considered for selection, so its weight
	/// only has to be a finite number.
	pub fn validate(&self, index: usize) -> Result<(), WheelError> {
		if self.text.trim().is_empty() {
			return Err(WheelError::EmptyText { index });
		}
		if !self.weight.is_finite() || (self.enabled && !is_valid_weight(self.weight)) {
			return Err(WheelError::InvalidWeight { index, weight: self.weight });
		}
		Ok(())
	}
}

/// A weight is valid when strictly positive and finite.
pub(crate) fn is_valid_weight(weight: f64) -> bool {
	weight.is_finite() && weight > 0.0
}

/// The full, shareable configuration of a spin wheel.
///
/// # Responsibilities
/// - Hold the ordered option list and the recent-winner window (`recent_n`)
/// - Validate user edits (add, remove, enable/disable, re-weight)
/// - Spin: draw an option while threading a [`SelectionHistory`] through
///
/// The serialized field names (`options`, `recentN`) are the ones shared
/// URLs have always carried.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WheelConfig {
	/// Options in display order.
	pub options: Vec<WheelOption>,
	/// How many previous winners are excluded from the next draw (0 disables it).
	#[serde(rename = "recentN")]
	pub recent_n: usize,
}

impl Default for WheelConfig {
	/// Three enabled options of weight 1 and no recent-winner exclusion.
	fn default() -> Self {
		Self {
			options: (1..=3).map(|i| WheelOption::new(format!("Option {i}"))).collect(),
			recent_n: 0,
		}
	}
}

impl WheelConfig {
	/// Creates a configuration from existing options.
	pub fn new(options: Vec<WheelOption>, recent_n: usize) -> Self {
		Self { options, recent_n }
	}

	/// Validates every option.
	///
	/// # Errors
	/// - `EmptyText` for a blank label
	/// - `InvalidWeight` for a non-finite weight, or a non-positive one on an enabled option
	///
	/// An empty or fully disabled wheel is a valid configuration; it only
	/// fails when spun.
	pub fn validate(&self) -> Result<(), WheelError> {
		for (index, option) in self.options.iter().enumerate() {
			option.validate(index)?;
		}
		Ok(())
	}

	/// Appends an option and returns its position.
	///
	/// # Errors
	/// Returns the validation error of the option; the wheel is left untouched.
	pub fn add_option(&mut self, option: WheelOption) -> Result<usize, WheelError> {
		let index = self.options.len();
		option.validate(index)?;
		self.options.push(option);
		Ok(index)
	}

	/// Removes the option at `index` and returns it.
	///
	/// Positions of the following options shift down by one, so any history
	/// kept for this wheel must go through [`SelectionHistory::forget`].
	pub fn remove_option(&mut self, index: usize) -> Result<WheelOption, WheelError> {
		if index >= self.options.len() {
			return Err(WheelError::UnknownOption(index));
		}
		Ok(self.options.remove(index))
	}

	/// Enables or disables the option at `index`.
	///
	/// Enabling an option re-checks its weight: disabled options may carry
	/// a zero or negative one.
	pub fn set_enabled(&mut self, index: usize, enabled: bool) -> Result<(), WheelError> {
		let option = self.options.get_mut(index).ok_or(WheelError::UnknownOption(index))?;
		if enabled && !is_valid_weight(option.weight) {
			return Err(WheelError::InvalidWeight { index, weight: option.weight });
		}
		option.enabled = enabled;
		Ok(())
	}

	/// Changes the weight of the option at `index`.
	///
	/// # Errors
	/// - `UnknownOption` if `index` is out of range
	/// - `InvalidWeight` if the weight is not strictly positive and finite
	pub fn set_weight(&mut self, index: usize, weight: f64) -> Result<(), WheelError> {
		let option = self.options.get_mut(index).ok_or(WheelError::UnknownOption(index))?;
		if !is_valid_weight(weight) {
			return Err(WheelError::InvalidWeight { index, weight });
		}
		option.weight = weight;
		Ok(())
	}

	/// Returns an empty history sized for this wheel.
	pub fn new_history(&self) -> SelectionHistory {
		SelectionHistory::new(self.recent_n)
	}

	/// Spins the wheel once.
	///
	/// Draws an option while excluding the winners remembered in `history`,
	/// then records the winner. The history is resized to `recent_n` first,
	/// so a history kept across a `recentN` edit stays consistent.
	///
	/// # Returns
	/// The selected option and the history to pass to the next spin.
	pub fn spin<R: Rng>(
		&self,
		history: &SelectionHistory,
		rng: &mut R,
	) -> Result<(Selected<'_>, SelectionHistory), WheelError> {
		let history = history.with_recent_n(self.recent_n);
		let selected = selection::select(&self.options, &history.excluded_set(), rng)?;
		let history = history.record(selected.index);
		Ok((selected, history))
	}
}
