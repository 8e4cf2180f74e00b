use std::collections::HashSet;

use log::debug;
use rand::Rng;

use super::config::WheelOption;
use crate::error::WheelError;

/// The outcome of a draw: the winning option and its position on the wheel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selected<'a> {
	pub index: usize,
	pub option: &'a WheelOption,
}

/// Picks one option pseudo-randomly, in proportion to its weight.
///
/// # Parameters
/// - `options`: the wheel, in display order
/// - `excluded`: positions that should not win this time (recent winners)
/// - `rng`: the random source; the draw is deterministic for a seeded source
///
/// # Behavior
/// - Only enabled options are candidates.
/// - Candidates whose position is in `excluded` are removed, unless that
///   would remove every candidate: the exclusion is then ignored.
/// - A value is drawn uniformly in `[0, total_weight)` and the first
///   candidate whose cumulative weight exceeds it wins (O(n) scan).
///
/// # Errors
/// - `InvalidWeight` if an enabled option has a non-positive or non-finite
///   weight (the same check as [`WheelOption::validate`], run before drawing)
/// - `NoEligibleOptions` if no option is enabled
/// - `TotalWeightOverflow` if the candidate weights sum to infinity
///
/// The input is never mutated; recording the winner is up to the caller.
pub fn select<'a, R: Rng>(
	options: &'a [WheelOption],
	excluded: &HashSet<usize>,
	rng: &mut R,
) -> Result<Selected<'a>, WheelError> {
	for (index, option) in options.iter().enumerate().filter(|(_, o)| o.enabled) {
		if !super::config::is_valid_weight(option.weight) {
			return Err(WheelError::InvalidWeight { index, weight: option.weight });
		}
	}

	let enabled: Vec<(usize, &WheelOption)> = options.iter().enumerate().filter(|(_, o)| o.enabled).collect();
	if enabled.is_empty() {
		return Err(WheelError::NoEligibleOptions);
	}

	let allowed: Vec<(usize, &WheelOption)> =
		enabled.iter().copied().filter(|(index, _)| !excluded.contains(index)).collect();
	let candidates = if allowed.is_empty() {
		debug!("every enabled option is excluded, relaxing exclusion of {} positions", excluded.len());
		enabled
	} else {
		allowed
	};

	if let [(index, option)] = candidates.as_slice() {
		return Ok(Selected { index: *index, option: *option });
	}

	let total: f64 = candidates.iter().map(|(_, option)| option.weight).sum();
	if !total.is_finite() {
		return Err(WheelError::TotalWeightOverflow);
	}

	let draw = rng.random_range(0.0..total);
	let mut cumulative = 0.0;
	for (index, option) in &candidates {
		cumulative += option.weight;
		if draw < cumulative {
			debug!("drew {draw:.4} of {total:.4}, option {index} wins");
			return Ok(Selected { index: *index, option: *option });
		}
	}

	// Rounding can leave the draw just above the last cumulative sum
	let (index, option) = candidates[candidates.len() - 1];
	Ok(Selected { index, option })
}
