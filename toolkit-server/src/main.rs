use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use log::info;

mod config;
mod error;
mod routes;

use config::Config;

/// Builds the CORS policy for the frontend.
///
/// A configured origin is the only one allowed; otherwise any origin is
/// accepted, which is what the frontend dev server needs.
fn cors(origin: Option<&str>) -> Cors {
	let cors = match origin {
		Some(origin) => Cors::default().allowed_origin(origin),
		None => Cors::default().allow_any_origin(),
	};
	cors.allowed_methods(vec!["GET", "POST"]).allow_any_header().max_age(3600)
}

/// Main entry point for the server.
///
/// Reads the configuration from the environment, shares the read-only
/// exchange-rate table with every worker and serves the tool API under `/api`.
///
/// # Notes
/// - Logging is configured with `RUST_LOG` from the process environment
///   (defaults to `info`); `.env` is loaded afterwards by `Config::from_env`.
/// - The server binds to `TOOLKIT_HOST:TOOLKIT_PORT` (127.0.0.1:5000 by default).
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
	let config = Config::from_env();

	info!(
		"starting toolkit-server v{} on {}:{} ({} currencies)",
		env!("CARGO_PKG_VERSION"),
		config.host,
		config.port,
		config.rates.currencies().count()
	);

	let rates = web::Data::new(config.rates.clone());
	let cors_origin = config.cors_origin.clone();

	HttpServer::new(move || {
		App::new()
			.wrap(middleware::Logger::default())
			.wrap(cors(cors_origin.as_deref()))
			.app_data(rates.clone())
			.configure(routes::configure)
	})
		.bind((config.host.as_str(), config.port))?
		.run()
		.await
}
