//! Configuration types for cf-cli
//!
//! The only persisted configuration is the [`Credential`]: the account email
//! and global API key sent with every request.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Error, Result};

/// File name of the credential file under the user's home directory
pub const CREDENTIAL_FILE_NAME: &str = ".cf_cli_config";

/// Cloudflare API v4 base origin
pub const DEFAULT_API_BASE: &str = "https://api.cloudflare.com/client/v4";

/// Authentication record for the Cloudflare API
///
/// Serialized as `{"x_auth_email": "...", "x_auth_key": "..."}`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    /// Value of the `X-Auth-Email` header
    #[serde(rename = "x_auth_email")]
    pub auth_email: String,

    /// Value of the `X-Auth-Key` header
    /// ⚠️ NEVER log this value
    #[serde(rename = "x_auth_key")]
    pub auth_key: String,
}

// Custom Debug implementation that hides the auth key
impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("auth_email", &self.auth_email)
            .field("auth_key", &"<REDACTED>")
            .finish()
    }
}

impl Credential {
    /// Create a new credential
    pub fn new(auth_email: impl Into<String>, auth_key: impl Into<String>) -> Self {
        Self {
            auth_email: auth_email.into(),
            auth_key: auth_key.into(),
        }
    }

    /// Validate the credential
    ///
    /// Only presence is checked; the API is the authority on whether the
    /// values are actually accepted.
    pub fn validate(&self) -> Result<()> {
        if self.auth_email.is_empty() || self.auth_key.is_empty() {
            return Err(Error::config("Invalid configuration"));
        }
        Ok(())
    }
}

/// Default location of the credential file: `$HOME/.cf_cli_config`
pub fn default_credential_path() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| Error::io("failed to get user home dir, cause: home directory unknown"))?;
    Ok(home.join(CREDENTIAL_FILE_NAME))
}
