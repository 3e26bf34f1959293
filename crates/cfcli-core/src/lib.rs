// # cfcli-core
//
// Request construction and dispatch for the cf-cli Cloudflare DNS records
// client.
//
// ## Architecture Overview
//
// - **CredentialStore**: Loads/saves the `X-Auth-Email` / `X-Auth-Key` pair
// - **RequestBuilder**: Method + path template + ordered options → request
// - **Dispatcher**: One HTTP exchange through an `HttpTransport`
// - **Envelope**: Renders the result as the single JSON output document
// - **Handler**: Readiness gate in front of every network command
//
// ## Design Principles
//
// 1. **Transparent pass-through**: API responses are never validated or re-encoded
// 2. **Single exchange**: At most one request per invocation, no retries
// 3. **Explicit context**: The loaded credential travels in a value, not a global

pub mod config;
pub mod dispatch;
pub mod envelope;
pub mod error;
pub mod handler;
pub mod request;
pub mod store;
pub mod traits;

// Re-export core types for convenience
pub use config::Credential;
pub use dispatch::{Dispatcher, Outcome};
pub use envelope::Envelope;
pub use error::{Error, Result};
pub use handler::{ApiCommand, Context, Handler};
pub use request::{Method, RequestBuilder, RequestOption};
pub use store::{FileCredentialStore, MemoryCredentialStore};
pub use traits::{CredentialStore, HttpTransport, RawResponse};
