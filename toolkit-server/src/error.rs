//! API errors and their HTTP mapping.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;
use toolkit_core::{CurrencyError, WheelError};

/// Every error an endpoint can return.
#[derive(Debug, Error)]
pub enum ApiError {
	#[error(transparent)]
	Wheel(#[from] WheelError),

	#[error(transparent)]
	Currency(#[from] CurrencyError),

	#[error("tool not found: {0}")]
	ToolNotFound(String),

	#[error("bad request: {0}")]
	BadRequest(String),
}

impl ApiError {
	pub fn bad_request(msg: impl Into<String>) -> Self {
		Self::BadRequest(msg.into())
	}
}

impl ResponseError for ApiError {
	fn status_code(&self) -> StatusCode {
		match self {
			Self::Wheel(WheelError::NoEligibleOptions) => StatusCode::UNPROCESSABLE_ENTITY,
			Self::ToolNotFound(_) => StatusCode::NOT_FOUND,
			_ => StatusCode::BAD_REQUEST,
		}
	}

	fn error_response(&self) -> HttpResponse {
		HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn status_codes() {
		assert_eq!(ApiError::from(WheelError::NoEligibleOptions).status_code(), StatusCode::UNPROCESSABLE_ENTITY);
		assert_eq!(ApiError::from(WheelError::malformed("x")).status_code(), StatusCode::BAD_REQUEST);
		assert_eq!(
			ApiError::from(CurrencyError::UnknownCurrency("EUR".into())).status_code(),
			StatusCode::BAD_REQUEST
		);
		assert_eq!(ApiError::ToolNotFound("x".into()).status_code(), StatusCode::NOT_FOUND);
	}
}
