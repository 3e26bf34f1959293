//! Core traits for cf-cli
//!
//! - [`HttpTransport`]: Perform one HTTP exchange
//! - [`CredentialStore`]: Load and save the authentication record

pub mod credential_store;
pub mod transport;

pub use credential_store::CredentialStore;
pub use transport::{HttpTransport, RawResponse};
