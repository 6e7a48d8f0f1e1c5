//! Transport to the catalogue search endpoint.

use std::time::Duration;

use thiserror::Error;
use tracing::debug;

use crate::payload::SearchPayload;

/// Default endpoint queried by the widget.
pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://api.trydownstream.com/explore/v1/search/";

/// A failure to obtain a decodable body. The widget logs these and leaves
/// its current rows on screen.
#[derive(Debug, Error)]
pub enum ClientError {
	#[error("failed to build HTTP client: {0}")]
	Setup(#[source] reqwest::Error),
	#[error("request to {url} failed: {source}")]
	Request {
		url: String,
		#[source]
		source: reqwest::Error,
	},
	#[error("response from {url} is not valid JSON: {source}")]
	Decode {
		url: String,
		#[source]
		source: serde_json::Error,
	},
}

/// Anything able to answer a search query.
///
/// Implementations run on the background worker thread, one query at a time.
pub trait SearchClient: Send + 'static {
	fn search(&self, query: &str) -> Result<SearchPayload, ClientError>;
}

impl<F> SearchClient for F
where
	F: Fn(&str) -> Result<SearchPayload, ClientError> + Send + 'static,
{
	fn search(&self, query: &str) -> Result<SearchPayload, ClientError> {
		self(query)
	}
}

/// Blocking HTTP client issuing `GET <endpoint>?q=<query>`.
#[derive(Debug, Clone)]
pub struct HttpSearchClient {
	http: reqwest::blocking::Client,
	endpoint: String,
}

impl HttpSearchClient {
	/// Build a client for `endpoint`, optionally bounding each request by
	/// `timeout`.
	pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self, ClientError> {
		let mut builder = reqwest::blocking::Client::builder()
			.user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")));
		if let Some(timeout) = timeout {
			builder = builder.timeout(timeout);
		}
		let http = builder.build().map_err(ClientError::Setup)?;
		Ok(Self {
			http,
			endpoint: endpoint.into(),
		})
	}

	#[must_use]
	pub fn endpoint(&self) -> &str {
		&self.endpoint
	}

	/// Full request URL for `query`.
	#[must_use]
	pub fn url_for(&self, query: &str) -> String {
		query_url(&self.endpoint, query)
	}
}

impl SearchClient for HttpSearchClient {
	fn search(&self, query: &str) -> Result<SearchPayload, ClientError> {
		let url = self.url_for(query);
		let response = self
			.http
			.get(&url)
			.send()
			.map_err(|source| ClientError::Request {
				url: url.clone(),
				source,
			})?;
		let status = response.status();
		// Error statuses still carry a JSON body worth classifying.
		let body = response.text().map_err(|source| ClientError::Request {
			url: url.clone(),
			source,
		})?;
		debug!(%status, bytes = body.len(), "search response received");
		SearchPayload::from_body(&body).map_err(|source| ClientError::Decode { url, source })
	}
}

#[cfg(test)]
pub(crate) fn decode_failure(url: &str) -> ClientError {
	let source = serde_json::from_str::<serde_json::Value>("<html>").expect_err("not JSON");
	ClientError::Decode {
		url: url.to_string(),
		source,
	}
}

/// Append the URL-encoded query to `endpoint`.
#[must_use]
pub fn query_url(endpoint: &str, query: &str) -> String {
	let separator = if endpoint.contains('?') { '&' } else { '?' };
	format!("{endpoint}{separator}q={}", urlencoding::encode(query))
}

#[cfg(test)]
mod tests {
	use std::io::{BufRead, BufReader, Write};
	use std::net::TcpListener;
	use std::thread::{self, JoinHandle};

	use serde_json::json;

	use super::*;

	/// Answer a single request on a local port with a canned response. The
	/// handle yields the request line the server received.
	fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
		let listener = TcpListener::bind("127.0.0.1:0").expect("bind local port");
		let endpoint = format!("http://{}/search/", listener.local_addr().expect("local addr"));
		let handle = thread::spawn(move || {
			let (mut stream, _) = listener.accept().expect("accept");
			let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));
			let mut request_line = String::new();
			reader.read_line(&mut request_line).expect("request line");
			loop {
				let mut header = String::new();
				let read = reader.read_line(&mut header).expect("header");
				if read == 0 || header == "\r\n" {
					break;
				}
			}
			write!(
				stream,
				"HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
				body.len()
			)
			.expect("write response");
			request_line.trim_end().to_string()
		});
		(endpoint, handle)
	}

	fn local_client(endpoint: String) -> HttpSearchClient {
		let http = reqwest::blocking::Client::builder()
			.no_proxy()
			.build()
			.expect("http client");
		HttpSearchClient { http, endpoint }
	}

	#[test]
	fn error_status_with_errors_body_is_an_api_error() {
		let (endpoint, server) = serve_once("400 Bad Request", r#"{"errors":["bad"]}"#);
		let client = local_client(endpoint);

		let payload = client.search("roll off & more").expect("body decodes");
		assert_eq!(payload, SearchPayload::ApiError(json!(["bad"])));
		assert_eq!(
			server.join().expect("server thread"),
			"GET /search/?q=roll%20off%20%26%20more HTTP/1.1"
		);
	}

	#[test]
	fn non_json_body_is_a_decode_error() {
		let (endpoint, server) = serve_once("200 OK", "<html>maintenance</html>");
		let client = local_client(endpoint.clone());

		let err = client.search("tools").expect_err("html is rejected");
		match err {
			ClientError::Decode { url, .. } => assert_eq!(url, format!("{endpoint}?q=tools")),
			other => panic!("expected a decode error, got {other:?}"),
		}
		server.join().expect("server thread");
	}

	#[test]
	fn result_lists_are_decoded() {
		let (endpoint, server) = serve_once(
			"200 OK",
			r#"{"main_products":[],"main_product_categories":[{"id":7,"name":"Tools"}],"main_product_category_groups":[]}"#,
		);
		let client = local_client(endpoint);

		let response = match client.search("tools").expect("body decodes") {
			SearchPayload::Results(response) => response,
			other => panic!("expected results, got {other:?}"),
		};
		assert_eq!(response.main_product_categories.len(), 1);
		assert_eq!(response.main_product_categories[0].name, "Tools");
		assert_eq!(server.join().expect("server thread"), "GET /search/?q=tools HTTP/1.1");
	}

	#[test]
	fn query_is_percent_encoded() {
		assert_eq!(
			query_url(DEFAULT_SEARCH_ENDPOINT, "roll off & more"),
			"https://api.trydownstream.com/explore/v1/search/?q=roll%20off%20%26%20more"
		);
	}

	#[test]
	fn existing_query_string_is_extended() {
		assert_eq!(
			query_url("https://search.example/find?lang=en", "tools"),
			"https://search.example/find?lang=en&q=tools"
		);
	}

	#[test]
	fn closures_act_as_clients() {
		let client = |query: &str| -> Result<SearchPayload, ClientError> {
			Err(decode_failure(&format!("http://offline/?q={query}")))
		};
		let err = client.search("tools").expect_err("closure error");
		assert!(err.to_string().starts_with("response from http://offline/?q=tools is not valid JSON"));
	}
}
