use base64::Engine;
use base64::engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD};
use log::debug;

use super::config::WheelConfig;
use crate::error::WheelError;

/// Encodes a wheel into a string that can be put in a URL as is.
///
/// The config is serialized to canonical JSON
/// (`{"options":[{"text":..,"weight":..,"enabled":..}],"recentN":..}`)
/// and then to base64 with the URL-safe alphabet and no padding.
///
/// # Errors
/// Returns the validation error of the config: only valid wheels are shared,
/// so every encoded string decodes back to an equal config.
pub fn encode(config: &WheelConfig) -> Result<String, WheelError> {
	config.validate()?;
	let json = serde_json::to_vec(config).map_err(|e| WheelError::malformed(e.to_string()))?;
	Ok(URL_SAFE_NO_PAD.encode(json))
}

/// Decodes a string produced by [`encode`].
///
/// Strings produced by the standard base64 alphabet, padded or not, are
/// accepted too (older share links were built with `btoa`).
///
/// # Errors
/// `MalformedState` when the input is not base64, is truncated, is not a
/// JSON wheel, or decodes to a wheel that fails validation. Nothing is
/// guessed or repaired.
pub fn decode(input: &str) -> Result<WheelConfig, WheelError> {
	let trimmed = input.trim().trim_end_matches('=');
	if trimmed.is_empty() {
		return Err(WheelError::malformed("empty state"));
	}

	let engine = if trimmed.contains(['+', '/']) { &STANDARD_NO_PAD } else { &URL_SAFE_NO_PAD };
	let bytes = engine.decode(trimmed).map_err(|e| {
		debug!("rejecting wheel state, base64: {e}");
		WheelError::malformed(format!("invalid base64: {e}"))
	})?;

	let config: WheelConfig = serde_json::from_slice(&bytes).map_err(|e| {
		debug!("rejecting wheel state, json: {e}");
		WheelError::malformed(format!("invalid wheel: {e}"))
	})?;

	config.validate().map_err(|e| WheelError::malformed(e.to_string()))?;
	Ok(config)
}
