// # HTTP Transport Trait
//
// Defines the single network seam of cf-cli.
//
// ## Contract
//
// - One call to `execute` performs exactly one HTTP exchange
// - No retries, no status-code interpretation
// - Failures to complete the exchange map to `Error::Transport`
// - Failures while reading the body map to `Error::Read`
//
// ## Implementations
//
// - reqwest: `cfcli-http` crate
// - Test doubles: `tests/common`

use async_trait::async_trait;

use crate::request::PreparedRequest;

/// Raw response as received from the wire
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code (informational only)
    pub status: u16,
    /// Value of the `Content-Type` header, if present
    pub content_type: Option<String>,
    /// Response body, unmodified
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Create a response
    pub fn new(status: u16, content_type: Option<&str>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            content_type: content_type.map(str::to_string),
            body: body.into(),
        }
    }
}

/// Trait for HTTP transport implementations
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Perform the exchange described by `request`
    ///
    /// # Returns
    ///
    /// - `Ok(RawResponse)`: The exchange completed, whatever the status
    /// - `Err(Error::Transport)`: The exchange could not be completed
    /// - `Err(Error::Read)`: The body could not be read
    async fn execute(&self, request: &PreparedRequest) -> Result<RawResponse, crate::Error>;

    /// Get the transport name (for logging/debugging)
    fn transport_name(&self) -> &'static str;
}
