//! Server configuration, read from the environment.

use log::warn;
use toolkit_core::currency::ExchangeRates;

/// Runtime settings of the HTTP server.
#[derive(Debug, Clone)]
pub struct Config {
	/// Interface to bind (`TOOLKIT_HOST`).
	pub host: String,
	/// Port to bind (`TOOLKIT_PORT`).
	pub port: u16,
	/// Rates used by the currency tool (`TOOLKIT_RATES`, `CODE=rate,...`).
	pub rates: ExchangeRates,
	/// Allowed browser origin (`TOOLKIT_CORS_ORIGIN`); any origin when unset.
	pub cors_origin: Option<String>,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			host: "127.0.0.1".to_owned(),
			port: 5000,
			rates: ExchangeRates::default(),
			cors_origin: None,
		}
	}
}

impl Config {
	/// Loads the configuration from environment variables (and `.env` if present).
	///
	/// Invalid values are reported and replaced by their default.
	pub fn from_env() -> Self {
		dotenvy::dotenv().ok();
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	/// Builds the configuration from any key lookup.
	pub(crate) fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
		let mut config = Self::default();

		if let Some(host) = lookup("TOOLKIT_HOST").filter(|h| !h.trim().is_empty()) {
			config.host = host.trim().to_owned();
		}

		if let Some(port) = lookup("TOOLKIT_PORT") {
			match port.trim().parse::<u16>() {
				Ok(port) => config.port = port,
				Err(_) => warn!("TOOLKIT_PORT '{port}' is not a valid port, using {}", config.port),
			}
		}

		if let Some(rates) = lookup("TOOLKIT_RATES") {
			match ExchangeRates::parse(&rates) {
				Ok(rates) => config.rates = rates,
				Err(e) => warn!("TOOLKIT_RATES ignored: {e}"),
			}
		}

		config.cors_origin = lookup("TOOLKIT_CORS_ORIGIN").filter(|o| !o.trim().is_empty());

		config
	}
}
