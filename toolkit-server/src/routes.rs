//! HTTP endpoints.
//!
//! Every handler is stateless: the wheel and its history travel with each
//! request, and the only shared data is the read-only exchange-rate table.

use actix_web::{HttpResponse, Responder, get, post, web};
use log::debug;
use serde::{Deserialize, Serialize};

use toolkit_core::catalog::{self, Tool};
use toolkit_core::currency::ExchangeRates;
use toolkit_core::hiking;
use toolkit_core::wheel::{self, SelectionHistory, WheelConfig, WheelOption};

use crate::error::ApiError;

/// Body of `POST /api/tools/spin-wheel/spin`.
///
/// Exactly one of `config` and `state` must be given; `history` holds the
/// positions returned by the previous spin, oldest first.
#[derive(Deserialize)]
struct SpinRequest {
	config: Option<WheelConfig>,
	state: Option<String>,
	#[serde(default)]
	history: Vec<usize>,
}

impl SpinRequest {
	/// Resolves the wheel to spin, decoding a shared state if needed.
	fn wheel(self) -> Result<(WheelConfig, Vec<usize>), ApiError> {
		let config = match (self.config, self.state) {
			(Some(config), None) => {
				config.validate()?;
				config
			}
			(None, Some(state)) => wheel::decode(&state)?,
			_ => return Err(ApiError::bad_request("provide either 'config' or 'state'")),
		};
		Ok((config, self.history))
	}
}

#[derive(Serialize)]
struct SpinResponse {
	index: usize,
	option: WheelOption,
	history: Vec<usize>,
}

#[derive(Serialize)]
struct ToolList {
	tools: Vec<Tool>,
}

#[derive(Serialize)]
struct EncodedState {
	state: String,
}

#[derive(Deserialize)]
struct DecodeQuery {
	state: String,
}

#[derive(Deserialize)]
struct ConvertQuery {
	amount: f64,
	from: String,
	to: String,
}

#[derive(Serialize)]
struct Conversion {
	amount: f64,
	from: String,
	to: String,
	result: f64,
}

/// `GET /api/tools`: the whole catalog.
#[get("/tools")]
async fn list_tools() -> impl Responder {
	HttpResponse::Ok().json(ToolList { tools: catalog::catalog() })
}

/// `GET /api/tools/{id}`
#[get("/tools/{id}")]
async fn get_tool(id: web::Path<String>) -> Result<HttpResponse, ApiError> {
	let id = id.into_inner();
	match catalog::find(&id) {
		Some(tool) => Ok(HttpResponse::Ok().json(tool)),
		None => Err(ApiError::ToolNotFound(id)),
	}
}

/// `POST /api/tools/spin-wheel/spin`
///
/// Spins the wheel once and returns the winner with the history to send
/// back on the next spin.
#[post("/tools/spin-wheel/spin")]
async fn spin(request: web::Json<SpinRequest>) -> Result<HttpResponse, ApiError> {
	let (config, history) = request.into_inner().wheel()?;
	let history = SelectionHistory::from_recent(config.recent_n, history);

	let (selected, history) = config.spin(&history, &mut rand::rng())?;
	debug!("spin: option {} '{}' out of {}", selected.index, selected.option.text, config.options.len());

	Ok(HttpResponse::Ok().json(SpinResponse {
		index: selected.index,
		option: selected.option.clone(),
		history: history.recent().collect(),
	}))
}

/// `POST /api/tools/spin-wheel/encode`: builds a share string for a wheel.
#[post("/tools/spin-wheel/encode")]
async fn encode_state(config: web::Json<WheelConfig>) -> Result<HttpResponse, ApiError> {
	let state = wheel::encode(&config)?;
	Ok(HttpResponse::Ok().json(EncodedState { state }))
}

/// `GET /api/tools/spin-wheel/decode?state=...`
///
/// Share strings never contain spaces, so a space is a `+` of a standard
/// base64 string that was put in the query without percent-encoding.
#[get("/tools/spin-wheel/decode")]
async fn decode_state(query: web::Query<DecodeQuery>) -> Result<HttpResponse, ApiError> {
	let config = wheel::decode(&query.state.replace(' ', "+"))?;
	Ok(HttpResponse::Ok().json(config))
}

/// `GET /api/tools/currency/rates`
#[get("/tools/currency/rates")]
async fn get_rates(rates: web::Data<ExchangeRates>) -> impl Responder {
	HttpResponse::Ok().json(rates.get_ref())
}

/// `GET /api/tools/currency/convert?amount=&from=&to=`
#[get("/tools/currency/convert")]
async fn convert(rates: web::Data<ExchangeRates>, query: web::Query<ConvertQuery>) -> Result<HttpResponse, ApiError> {
	let result = rates.convert(query.amount, &query.from, &query.to)?;
	Ok(HttpResponse::Ok().json(Conversion {
		amount: query.amount,
		from: query.from.trim().to_ascii_uppercase(),
		to: query.to.trim().to_ascii_uppercase(),
		result,
	}))
}

/// `GET /api/tools/hiking-guide/guide`
#[get("/tools/hiking-guide/guide")]
async fn get_guide() -> impl Responder {
	HttpResponse::Ok().json(hiking::guide())
}

/// Registers every endpoint under `/api`.
///
/// Extractor failures (bad JSON, missing query fields) are reported with
/// the same JSON error body as the handlers.
pub fn configure(cfg: &mut web::ServiceConfig) {
	cfg.service(
		web::scope("/api")
			.app_data(web::JsonConfig::default().error_handler(|err, _| ApiError::bad_request(err.to_string()).into()))
			.app_data(web::QueryConfig::default().error_handler(|err, _| ApiError::bad_request(err.to_string()).into()))
			.service(list_tools)
			.service(spin)
			.service(encode_state)
			.service(decode_state)
			.service(get_rates)
			.service(convert)
			.service(get_guide)
			.service(get_tool),
	);
}

#[cfg(test)]
mod tests {
	use super::*;
	use actix_web::http::StatusCode;
	use actix_web::{App, test};
	use serde_json::{Value, json};

	macro_rules! app {
		() => {
			test::init_service(
				App::new().app_data(web::Data::new(ExchangeRates::default())).configure(configure),
			)
			.await
		};
	}

	#[actix_web::test]
	async fn lists_the_three_tools() {
		let app = app!();
		let req = test::TestRequest::get().uri("/api/tools").to_request();
		let body: Value = test::call_and_read_body_json(&app, req).await;

		let tools = body["tools"].as_array().unwrap();
		assert_eq!(tools.len(), 3);
		assert_eq!(tools[0]["id"], "spin-wheel");
		for tool in tools {
			assert!(tool.get("id").is_some() && tool.get("name").is_some() && tool.get("category").is_some());
		}
	}

	#[actix_web::test]
	async fn tool_details_and_unknown_tool() {
		let app = app!();
		let req = test::TestRequest::get().uri("/api/tools/currency").to_request();
		let body: Value = test::call_and_read_body_json(&app, req).await;
		assert_eq!(body["name"], "Currency Converter");

		let req = test::TestRequest::get().uri("/api/tools/nope").to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), StatusCode::NOT_FOUND);
		let body: Value = test::read_body_json(resp).await;
		assert!(body["error"].as_str().unwrap().contains("nope"));
	}

	#[actix_web::test]
	async fn spin_returns_enabled_option_and_history() {
		let app = app!();
		let wheel = json!({
			"options": [
				{ "text": "A", "weight": 1, "enabled": true },
				{ "text": "B", "weight": 1, "enabled": true }
			],
			"recentN": 1
		});
		let req = test::TestRequest::post()
			.uri("/api/tools/spin-wheel/spin")
			.set_json(json!({ "config": wheel, "history": [0] }))
			.to_request();
		let body: Value = test::call_and_read_body_json(&app, req).await;

		assert_eq!(body["index"], 1);
		assert_eq!(body["option"]["text"], "B");
		assert_eq!(body["history"], json!([1]));
	}

	#[actix_web::test]
	async fn spin_from_shared_state() {
		let app = app!();
		let config = WheelConfig::new(vec![WheelOption::new("Only"), WheelOption::new("Off").disabled()], 2);
		let state = wheel::encode(&config).unwrap();

		let req = test::TestRequest::post()
			.uri("/api/tools/spin-wheel/spin")
			.set_json(json!({ "state": state, "history": [0, 0, 0] }))
			.to_request();
		let body: Value = test::call_and_read_body_json(&app, req).await;

		assert_eq!(body["index"], 0);
		assert_eq!(body["history"], json!([0, 0]));
	}

	#[actix_web::test]
	async fn spin_errors() {
		let app = app!();

		let disabled = json!({ "config": { "options": [{ "text": "Option 1", "weight": 1, "enabled": false }], "recentN": 0 } });
		let req = test::TestRequest::post().uri("/api/tools/spin-wheel/spin").set_json(disabled).to_request();
		assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNPROCESSABLE_ENTITY);

		let zero = json!({ "config": { "options": [{ "text": "a", "weight": 0, "enabled": true }], "recentN": 0 } });
		let req = test::TestRequest::post().uri("/api/tools/spin-wheel/spin").set_json(zero).to_request();
		assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

		let neither = json!({ "history": [] });
		let req = test::TestRequest::post().uri("/api/tools/spin-wheel/spin").set_json(neither).to_request();
		assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

		let req = test::TestRequest::post()
			.uri("/api/tools/spin-wheel/spin")
			.set_json(json!({ "state": "not-a-wheel" }))
			.to_request();
		assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
	}

	#[actix_web::test]
	async fn encode_then_decode() {
		let app = app!();
		let config = WheelConfig::default();

		let req = test::TestRequest::post().uri("/api/tools/spin-wheel/encode").set_json(&config).to_request();
		let body: Value = test::call_and_read_body_json(&app, req).await;
		let state = body["state"].as_str().unwrap().to_owned();

		let req = test::TestRequest::get().uri(&format!("/api/tools/spin-wheel/decode?state={state}")).to_request();
		let decoded: WheelConfig = test::call_and_read_body_json(&app, req).await;
		assert_eq!(decoded, config);

		let req = test::TestRequest::get().uri("/api/tools/spin-wheel/decode?state=abc").to_request();
		assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
	}

	#[actix_web::test]
	async fn decode_accepts_unescaped_standard_base64() {
		let app = app!();
		// `Pj4+` is ">>>" in the standard alphabet
		let legacy = "eyJvcHRpb25zIjpbeyJ0ZXh0IjoiPj4+Iiwid2VpZ2h0IjoxLCJlbmFibGVkIjp0cnVlfV0sInJlY2VudE4iOjN9";
		let req = test::TestRequest::get().uri(&format!("/api/tools/spin-wheel/decode?state={legacy}")).to_request();
		let decoded: WheelConfig = test::call_and_read_body_json(&app, req).await;
		assert_eq!(decoded.options[0].text, ">>>");
		assert_eq!(decoded.recent_n, 3);
	}

	#[actix_web::test]
	async fn spin_with_unbounded_recent_n() {
		let app = app!();
		let config = WheelConfig::new(vec![WheelOption::new("a"), WheelOption::new("b")], usize::MAX);
		let state = wheel::encode(&config).unwrap();

		let req = test::TestRequest::post()
			.uri("/api/tools/spin-wheel/spin")
			.set_json(json!({ "state": state, "history": [0] }))
			.to_request();
		let body: Value = test::call_and_read_body_json(&app, req).await;
		assert_eq!(body["index"], 1);
		assert_eq!(body["history"], json!([0, 1]));

		let req = test::TestRequest::post()
			.uri("/api/tools/spin-wheel/spin")
			.set_json(json!({ "config": { "options": [{ "text": "a" }, { "text": "b" }], "recentN": usize::MAX }, "history": [1] }))
			.to_request();
		let body: Value = test::call_and_read_body_json(&app, req).await;
		assert_eq!(body["index"], 0);
	}

	#[actix_web::test]
	async fn currency_conversion() {
		let app = app!();
		let req = test::TestRequest::get().uri("/api/tools/currency/convert?amount=10.5&from=usd&to=SGD").to_request();
		let body: Value = test::call_and_read_body_json(&app, req).await;
		assert_eq!(body["from"], "USD");
		assert!((body["result"].as_f64().unwrap() - 14.175).abs() < 1e-9);

		let req = test::TestRequest::get().uri("/api/tools/currency/convert?amount=1&from=EUR&to=SGD").to_request();
		assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

		let req = test::TestRequest::get().uri("/api/tools/currency/convert?amount=abc&from=USD&to=SGD").to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
		let body: Value = test::read_body_json(resp).await;
		assert!(body["error"].is_string());

		let req = test::TestRequest::get().uri("/api/tools/currency/rates").to_request();
		let body: Value = test::call_and_read_body_json(&app, req).await;
		assert_eq!(body["base"], "USD");
		assert_eq!(body["rates"]["CNY"], 7.08);
	}

	#[actix_web::test]
	async fn hiking_guide() {
		let app = app!();
		let req = test::TestRequest::get().uri("/api/tools/hiking-guide/guide").to_request();
		let body: Value = test::call_and_read_body_json(&app, req).await;
		assert_eq!(body["emergencySteps"][0], "stay calm");
		assert_eq!(body["categories"].as_array().map(Vec::len), Some(7));
	}
}
