//! Request dispatcher
//!
//! The Dispatcher is responsible for:
//! - Joining a built request with the API origin
//! - Performing exactly one exchange through the [`HttpTransport`]
//! - Classifying the response as pass-through JSON or plain text
//!
//! ## Flow
//!
//! ```text
//! ┌─────────────┐   prepare    ┌──────────────┐   execute   ┌───────────────┐
//! │ ApiRequest  │────────────▶ │  Dispatcher  │───────────▶ │ HttpTransport │
//! └─────────────┘              └──────────────┘             └───────────────┘
//!                                     │
//!                                     ▼
//!                        Outcome::Passthrough | Outcome::PlainText
//! ```
//!
//! The status code is never inspected: a 4xx/5xx body is forwarded exactly
//! like a 2xx body. Nothing is retried.

use crate::config::DEFAULT_API_BASE;
use crate::error::Result;
use crate::request::ApiRequest;
use crate::traits::HttpTransport;
use tracing::debug;

/// The only content type that is wrapped instead of passed through
pub const PLAIN_TEXT_CONTENT_TYPE: &str = "text/plain";

/// Successful result of a dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Upstream body, to be written unmodified
    Passthrough(Vec<u8>),
    /// Upstream `text/plain` body, to be wrapped in a success envelope
    PlainText(String),
}

/// Sends built requests and classifies the responses
pub struct Dispatcher {
    /// API origin every path is joined to
    base_url: String,

    /// Network seam
    transport: Box<dyn HttpTransport>,
}

impl Dispatcher {
    /// Create a dispatcher against the Cloudflare API v4 origin
    pub fn new(transport: Box<dyn HttpTransport>) -> Self {
        Self::with_base_url(transport, DEFAULT_API_BASE)
    }

    /// Create a dispatcher against a custom origin
    pub fn with_base_url(transport: Box<dyn HttpTransport>, base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
        }
    }

    /// API origin
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send `request` and classify the response
    ///
    /// # Returns
    ///
    /// - `Ok(Outcome::PlainText)`: content type was exactly `text/plain`
    /// - `Ok(Outcome::Passthrough)`: anything else, body untouched
    /// - `Err(Error::Transport)`: the exchange could not be completed
    /// - `Err(Error::Read)`: the body could not be read
    pub async fn dispatch(&self, request: &ApiRequest) -> Result<Outcome> {
        let prepared = request.prepare(&self.base_url)?;
        debug!(
            "Dispatching via {}: {} {}",
            self.transport.transport_name(),
            prepared.method,
            prepared.url
        );
        tracing::trace!("Request:\n{}", prepared);

        let response = self.transport.execute(&prepared).await?;

        debug!(
            "Response: status {} content-type {:?} ({} bytes)",
            response.status,
            response.content_type,
            response.body.len()
        );

        if response.content_type.as_deref() == Some(PLAIN_TEXT_CONTENT_TYPE) {
            let text = String::from_utf8_lossy(&response.body).into_owned();
            return Ok(Outcome::PlainText(text));
        }

        Ok(Outcome::Passthrough(response.body))
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("base_url", &self.base_url)
            .field("transport", &self.transport.transport_name())
            .finish()
    }
}
