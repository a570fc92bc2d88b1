//! Tavily search API probe.
//!
//! Sends a single minimal search request to check that the configured key
//! is accepted. Only the status code of the response is looked at.

use std::error::Error as StdError;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Serialize;
use tracing::debug;

use crate::config::{ApiKey, DoctorSettings};
use crate::error::{DoctorError, Result};

/// Body of a Tavily search request.
#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    api_key: &'a str,
    query: &'a str,
    max_results: u32,
}

/// Blocking client for the Tavily search endpoint.
pub struct TavilyClient {
    client: Client,
    url: String,
    timeout: Duration,
}

impl TavilyClient {
    /// Create a client for `url` with the given request timeout.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("tavily-doctor/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            client,
            url: url.into(),
            timeout,
        })
    }

    /// Create a client from the diagnostic settings.
    pub fn from_settings(settings: &DoctorSettings) -> Result<Self> {
        Self::new(settings.api_url.clone(), settings.api_timeout)
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Get the endpoint URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send one search request with `key` and classify the response.
    ///
    /// Exactly one attempt is made.
    pub fn probe(&self, key: &ApiKey, query: &str, max_results: u32) -> Result<()> {
        let body = SearchRequest {
            api_key: key.expose(),
            query,
            max_results,
        };

        debug!(url = %self.url, key = %key.preview(), "Probing Tavily API");

        let response = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .map_err(|e| DoctorError::ApiUnreachable {
                message: error_chain(&e),
            })?;

        let status = response.status();
        debug!(status = status.as_u16(), "Tavily API responded");
        classify_status(status)
    }
}

/// Map a response status to the probe outcome.
pub fn classify_status(status: StatusCode) -> Result<()> {
    match status {
        StatusCode::OK => Ok(()),
        StatusCode::UNAUTHORIZED => Err(DoctorError::CredentialRejected),
        other => Err(DoctorError::UnexpectedResponse {
            status: other.as_u16(),
        }),
    }
}

/// Render an error with its sources, so a bare "error sending request"
/// carries the underlying connect/DNS/timeout reason.
fn error_chain(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;
    use std::net::TcpListener;

    fn client_for(server: &MockServer) -> TavilyClient {
        TavilyClient::new(server.url("/search"), Duration::from_secs(5)).unwrap()
    }

    fn key() -> ApiKey {
        ApiKey::new("tvly-test-key")
    }

    #[test]
    fn status_200_is_success() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path("/search");
            then.status(200).json_body(json!({"results": []}));
        });

        let result = client_for(&server).probe(&key(), "test", 1);

        assert!(result.is_ok());
        mock.assert_calls(1);
    }

    #[test]
    fn request_body_carries_key_query_and_limit() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/search")
                .header("content-type", "application/json")
                .json_body(json!({
                    "api_key": "tvly-test-key",
                    "query": "test",
                    "max_results": 1
                }));
            then.status(200);
        });

        client_for(&server).probe(&key(), "test", 1).unwrap();

        mock.assert();
    }

    #[test]
    fn status_401_is_invalid_credential() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/search");
            then.status(401).body("Unauthorized");
        });

        let err = client_for(&server).probe(&key(), "test", 1).unwrap_err();

        assert!(matches!(err, DoctorError::CredentialRejected));
        assert!(err.to_string().contains("Invalid Tavily API key"));
    }

    #[test]
    fn status_500_is_unexpected_response() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path("/search");
            then.status(500).body("Internal Server Error");
        });

        let err = client_for(&server).probe(&key(), "test", 1).unwrap_err();

        assert!(matches!(err, DoctorError::UnexpectedResponse { status: 500 }));
        assert!(err.is_warning());
        assert!(err.to_string().contains("500"));
        // No retry on failure.
        mock.assert_calls(1);
    }

    #[test]
    fn slow_server_is_connection_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/search");
            then.status(200).delay(Duration::from_secs(3));
        });

        let client = TavilyClient::new(server.url("/search"), Duration::from_millis(200)).unwrap();
        let err = client.probe(&key(), "test", 1).unwrap_err();

        assert!(matches!(err, DoctorError::ApiUnreachable { .. }));
        assert!(err.to_string().contains("Failed to connect to the Tavily API"));
    }

    #[test]
    fn refused_connection_is_connection_error() {
        // Grab a free port, then release it so nothing is listening.
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let url = format!("http://127.0.0.1:{}/search", port);

        let client = TavilyClient::new(url, Duration::from_secs(2)).unwrap();
        let err = client.probe(&key(), "test", 1).unwrap_err();

        assert!(matches!(err, DoctorError::ApiUnreachable { .. }));
    }

    #[test]
    fn classify_other_statuses() {
        assert!(classify_status(StatusCode::OK).is_ok());
        assert!(matches!(
            classify_status(StatusCode::FORBIDDEN),
            Err(DoctorError::UnexpectedResponse { status: 403 })
        ));
        assert!(matches!(
            classify_status(StatusCode::CREATED),
            Err(DoctorError::UnexpectedResponse { status: 201 })
        ));
    }

    #[test]
    fn from_settings_uses_api_timeout() {
        let settings = DoctorSettings::default();
        let client = TavilyClient::from_settings(&settings).unwrap();
        assert_eq!(client.timeout(), Duration::from_secs(10));
        assert_eq!(client.url(), "https://api.tavily.com/search");
    }

    #[test]
    fn error_chain_includes_sources() {
        let inner = std::io::Error::new(std::io::ErrorKind::TimedOut, "operation timed out");
        let outer = anyhow::Error::new(inner).context("error sending request");
        let rendered = error_chain(outer.as_ref());
        assert!(rendered.contains("error sending request"));
        assert!(rendered.contains("operation timed out"));
    }
}
