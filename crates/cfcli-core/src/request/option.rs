//! Request options
//!
//! Each [`RequestOption`] is one mutation of an in-progress [`ApiRequest`].
//! Options are applied in the order they were supplied.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde::Serialize;

use super::ApiRequest;
use crate::config::Credential;
use crate::error::Result;

/// Header carrying the account email
pub const HEADER_AUTH_EMAIL: &str = "X-Auth-Email";

/// Header carrying the global API key
pub const HEADER_AUTH_KEY: &str = "X-Auth-Key";

/// Header set by [`RequestOption::JsonBody`]
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";

const JSON_CONTENT_TYPE: &str = "application/json";

/// URL path-segment encode set; `/` is included so a value stays one segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

/// A mutation applied to an in-progress request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOption {
    /// Replace every `{name}` in the path with `value`, percent-encoded
    PathParameter {
        /// Placeholder name, without braces
        name: String,
        /// Replacement text
        value: String,
    },

    /// Set a single query parameter; skipped if key or value is empty
    QueryParameter {
        /// Query key
        key: String,
        /// Query value
        value: String,
    },

    /// Set many query parameters; empty keys or values are skipped
    QueryParameters(Vec<(String, String)>),

    /// Overwrite the two authentication headers
    Security(Credential),

    /// Attach a raw body
    Body(Vec<u8>),

    /// Attach an already-serialized JSON body and set the JSON content type
    JsonBody(Vec<u8>),
}

impl RequestOption {
    /// Path substitution for the `{name}` placeholder
    pub fn path_parameter(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::PathParameter {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Single query parameter
    pub fn query_parameter(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::QueryParameter {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Bulk query parameters from any mapping or pair sequence
    pub fn query_parameters<I, K, V>(sets: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::QueryParameters(
            sets.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Authentication headers from the stored credential
    pub fn security(credential: &Credential) -> Self {
        Self::Security(credential.clone())
    }

    /// Raw body bytes
    pub fn body(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Body(bytes.into())
    }

    /// JSON body; `value` is serialized now, at build time
    pub fn json_body<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        Ok(Self::JsonBody(serde_json::to_vec(value)?))
    }

    /// Apply this option to `request`
    pub(crate) fn apply(&self, request: &mut ApiRequest) {
        match self {
            Self::PathParameter { name, value } => {
                let encoded = utf8_percent_encode(value, PATH_SEGMENT).to_string();
                request.path = request.path.replace(&format!("{{{}}}", name), &encoded);
            }
            Self::QueryParameter { key, value } => {
                set_query(request, key, value);
            }
            Self::QueryParameters(sets) => {
                for (key, value) in sets {
                    set_query(request, key, value);
                }
            }
            Self::Security(credential) => {
                request.set_header(HEADER_AUTH_EMAIL, &credential.auth_email);
                request.set_header(HEADER_AUTH_KEY, &credential.auth_key);
            }
            Self::Body(bytes) => {
                request.body = Some(bytes.clone());
            }
            Self::JsonBody(bytes) => {
                request.set_header(HEADER_CONTENT_TYPE, JSON_CONTENT_TYPE);
                request.body = Some(bytes.clone());
            }
        }
    }
}

// Empty means "not supplied by the user", not "clear this parameter".
fn set_query(request: &mut ApiRequest, key: &str, value: &str) {
    if key.is_empty() || value.is_empty() {
        return;
    }
    request.query.insert(key.to_string(), value.to_string());
}
