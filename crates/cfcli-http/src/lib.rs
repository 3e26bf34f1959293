// # reqwest HTTP Transport
//
// This crate provides the production `HttpTransport` for cf-cli.
//
// ## Behaviour
//
// - One `execute` call is one HTTP exchange
// - No retry, no backoff, no status-code handling (the API's error bodies
//   are forwarded like any other body)
// - No timeout unless one is configured explicitly
// - The `X-Auth-Key` header value never appears in logs
//
// ## Error Mapping
//
// - Failure to send (DNS, connection refused, timeout, bad URL) → `Error::Transport`
// - Failure while reading the body → `Error::Read`

use async_trait::async_trait;
use cfcli_core::request::{Method, PreparedRequest};
use cfcli_core::traits::{HttpTransport, RawResponse};
use cfcli_core::{Error, Result};
use std::time::Duration;

/// Transport settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransportSettings {
    /// Whole-exchange timeout; `None` leaves the client's defaults in place
    pub timeout: Option<Duration>,
}

impl TransportSettings {
    /// Settings with an explicit timeout
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }
}

/// reqwest-backed transport
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    /// HTTP client for API requests
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport
    ///
    /// Fails with `Error::Configuration` if the HTTP client cannot be built
    /// (for example when no TLS backend is available).
    pub fn new(settings: &TransportSettings) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("cf-cli/", env!("CARGO_PKG_VERSION")));

        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| Error::config(format!("failed to build HTTP client: {}", describe(&e))))?;

        Ok(Self { client })
    }

    /// Wrap an existing client
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

fn to_reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
    }
}

/// Render an error with its full source chain
///
/// reqwest's top-level message ("error sending request for url ...") hides
/// the interesting part (e.g. "Connection refused") in its sources.
fn describe(err: &dyn std::error::Error) -> String {
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

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: &PreparedRequest) -> Result<RawResponse> {
        let mut builder = self
            .client
            .request(to_reqwest_method(request.method), &request.url);

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder
            .send()
            .await
            .map_err(|e| Error::transport(describe(&e)))?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        if !response.status().is_success() {
            tracing::debug!("Upstream answered {}; forwarding body as-is", status);
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::read(describe(&e)))?;

        Ok(RawResponse {
            status,
            content_type,
            body: body.to_vec(),
        })
    }

    fn transport_name(&self) -> &'static str {
        "reqwest"
    }
}
