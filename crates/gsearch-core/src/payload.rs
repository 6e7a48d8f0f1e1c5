//! Classification of decoded search bodies.

use serde_json::Value;

use crate::model::SearchResponse;

const RESULT_KEYS: [&str; 3] = [
	"main_products",
	"main_product_categories",
	"main_product_category_groups",
];

/// What a decoded JSON body turned out to be.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchPayload {
	/// All three result lists were present and decoded.
	Results(SearchResponse),
	/// The endpoint reported an error (`{ "errors": ... }`).
	ApiError(Value),
	/// Anything else: missing lists, wrong types, not an object.
	Malformed(String),
}

impl SearchPayload {
	/// Classify an already parsed JSON value.
	#[must_use]
	pub fn classify(value: Value) -> Self {
		let Value::Object(map) = value else {
			return Self::Malformed(format!("expected a JSON object, found {}", kind_of(&value)));
		};

		if let Some(errors) = map.get("errors") {
			return Self::ApiError(errors.clone());
		}

		if let Some(missing) = RESULT_KEYS.iter().find(|key| !map.contains_key(**key)) {
			return Self::Malformed(format!("missing `{missing}`"));
		}

		match serde_json::from_value::<SearchResponse>(Value::Object(map)) {
			Ok(response) => Self::Results(response),
			Err(err) => Self::Malformed(err.to_string()),
		}
	}

	/// Parse and classify a response body.
	///
	/// Bodies that are not JSON at all are reported as an error so callers can
	/// treat them like a failed transport rather than an empty result.
	pub fn from_body(body: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str::<Value>(body).map(Self::classify)
	}

	/// Short label used in log lines.
	#[must_use]
	pub fn describe(&self) -> &'static str {
		match self {
			Self::Results(response) if response.is_empty() => "empty",
			Self::Results(_) => "results",
			Self::ApiError(_) => "api-error",
			Self::Malformed(_) => "malformed",
		}
	}
}

fn kind_of(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}
