//! Request construction
//!
//! A [`RequestBuilder`] holds a method, a path template and an ordered list
//! of [`RequestOption`]s. [`RequestBuilder::build`] applies the options to a
//! fresh [`ApiRequest`] without touching the network; the dispatcher then
//! turns that into a [`PreparedRequest`] by joining it with the API origin.
//!
//! ```text
//! RequestBuilder ── build() ──▶ ApiRequest ── prepare(base) ──▶ PreparedRequest
//!   method                        method                          method
//!   path template                 resolved path                   absolute URL
//!   options                       query / headers / body          headers / body
//! ```
//!
//! Placeholders with no matching path option are sent literally.

pub mod option;

pub use option::{HEADER_AUTH_EMAIL, HEADER_AUTH_KEY, HEADER_CONTENT_TYPE, RequestOption};

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{Error, Result};

/// HTTP methods used by the Cloudflare DNS records API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// GET
    Get,
    /// POST
    Post,
    /// PATCH
    Patch,
    /// DELETE
    Delete,
}

impl Method {
    /// Upper-case wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request relative to the API origin, with every option applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// HTTP method
    pub method: Method,
    /// Path after placeholder substitution
    pub path: String,
    /// Query parameters, keyed and therefore emitted in key order
    pub query: BTreeMap<String, String>,
    /// Headers in insertion order; names compare case-insensitively
    pub headers: Vec<(String, String)>,
    /// Request body
    pub body: Option<Vec<u8>>,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: BTreeMap::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Set a header, replacing any existing header of the same name
    pub fn set_header(&mut self, name: &str, value: &str) {
        match self
            .headers
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
        {
            Some(slot) => *slot = (name.to_string(), value.to_string()),
            None => self.headers.push((name.to_string(), value.to_string())),
        }
    }

    /// Look up a header value by case-insensitive name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Encoded query string (no leading `?`), empty if there are no parameters
    pub fn query_string(&self) -> Result<String> {
        serde_urlencoded::to_string(&self.query)
            .map_err(|e| Error::invalid_input(format!("failed to encode query, cause: {}", e)))
    }

    /// Join with the API origin into a ready-to-send request
    pub fn prepare(&self, base_url: &str) -> Result<PreparedRequest> {
        let mut url = format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            self.path.trim_start_matches('/')
        );

        let query = self.query_string()?;
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query);
        }

        Ok(PreparedRequest {
            method: self.method,
            url,
            headers: self.headers.clone(),
            body: self.body.clone(),
        })
    }
}

/// A fully resolved request, ready for an [`HttpTransport`](crate::traits::HttpTransport)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute URL including the query string
    pub url: String,
    /// Headers in insertion order
    pub headers: Vec<(String, String)>,
    /// Request body
    pub body: Option<Vec<u8>>,
}

// Wire-like rendering for logs; the auth key never appears.
impl fmt::Display for PreparedRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.method, self.url)?;
        for (name, value) in &self.headers {
            if name.eq_ignore_ascii_case(HEADER_AUTH_KEY) {
                writeln!(f, "{}: <REDACTED>", name)?;
            } else {
                writeln!(f, "{}: {}", name, value)?;
            }
        }
        if let Some(body) = &self.body {
            writeln!(f)?;
            write!(f, "{}", String::from_utf8_lossy(body))?;
        }
        Ok(())
    }
}

/// Composes a method, a path template and options into an [`ApiRequest`]
///
/// # Example
///
/// ```rust
/// use cfcli_core::request::{Method, RequestBuilder, RequestOption};
///
/// let request = RequestBuilder::new(Method::Get, "/zones/{zone_id}/dns_records")
///     .option(RequestOption::path_parameter("zone_id", "023e105f"))
///     .option(RequestOption::query_parameter("type", "A"))
///     .build();
///
/// assert_eq!(request.path, "/zones/023e105f/dns_records");
/// assert_eq!(request.query_string().unwrap(), "type=A");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestBuilder {
    method: Method,
    path_template: String,
    options: Vec<RequestOption>,
}

impl RequestBuilder {
    /// Start a request for `method` against `path_template`
    pub fn new(method: Method, path_template: impl Into<String>) -> Self {
        Self {
            method,
            path_template: path_template.into(),
            options: Vec::new(),
        }
    }

    /// Append one option
    pub fn option(mut self, option: RequestOption) -> Self {
        self.options.push(option);
        self
    }

    /// Append several options, preserving their order
    pub fn options(mut self, options: impl IntoIterator<Item = RequestOption>) -> Self {
        self.options.extend(options);
        self
    }

    /// HTTP method
    pub fn method(&self) -> Method {
        self.method
    }

    /// Unresolved path template
    pub fn path_template(&self) -> &str {
        &self.path_template
    }

    /// Options in application order
    pub fn option_list(&self) -> &[RequestOption] {
        &self.options
    }

    /// Apply every option in order; performs no I/O
    pub fn build(&self) -> ApiRequest {
        let mut request = ApiRequest::new(self.method, self.path_template.clone());
        for option in &self.options {
            option.apply(&mut request);
        }

        tracing::debug!(
            "Built {} {} ({} query parameter(s), body: {})",
            request.method,
            request.path,
            request.query.len(),
            request.body.is_some()
        );
        request
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Credential;

    #[test]
    fn method_wire_names() {
        assert_eq!(Method::Get.as_str(), "GET");
        assert_eq!(Method::Post.to_string(), "POST");
        assert_eq!(Method::Patch.as_str(), "PATCH");
        assert_eq!(Method::Delete.to_string(), "DELETE");
    }

    #[test]
    fn options_apply_in_order() {
        let request = RequestBuilder::new(Method::Get, "/")
            .option(RequestOption::query_parameter("order", "type"))
            .option(RequestOption::query_parameter("order", "name"))
            .build();
        assert_eq!(request.query.get("order").map(String::as_str), Some("name"));
    }

    #[test]
    fn prepare_joins_base_and_path() {
        let request = RequestBuilder::new(Method::Get, "/zones/{zone_id}/dns_records")
            .option(RequestOption::path_parameter("zone_id", "abc"))
            .build();

        let prepared = request
            .prepare("https://api.cloudflare.com/client/v4")
            .unwrap();
        assert_eq!(
            prepared.url,
            "https://api.cloudflare.com/client/v4/zones/abc/dns_records"
        );

        let prepared = request.prepare("http://127.0.0.1:8080/").unwrap();
        assert_eq!(prepared.url, "http://127.0.0.1:8080/zones/abc/dns_records");
    }

    #[test]
    fn prepare_appends_encoded_query() {
        let request = RequestBuilder::new(Method::Get, "/zones/z/dns_records")
            .option(RequestOption::query_parameters([
                ("comment.contains", "hello world"),
                ("tag", "team:DNS"),
            ]))
            .build();

        let prepared = request.prepare("https://api.example").unwrap();
        assert_eq!(
            prepared.url,
            "https://api.example/zones/z/dns_records?comment.contains=hello+world&tag=team%3ADNS"
        );
    }

    #[test]
    fn display_redacts_auth_key() {
        let request = RequestBuilder::new(Method::Post, "/zones/z/dns_records")
            .option(RequestOption::security(&Credential::new("user@example.com", "hunter2")))
            .option(RequestOption::body(b"{}".to_vec()))
            .build()
            .prepare("https://api.example")
            .unwrap();

        let rendered = request.to_string();
        assert!(rendered.starts_with("POST https://api.example/zones/z/dns_records\n"));
        assert!(rendered.contains("X-Auth-Email: user@example.com"));
        assert!(rendered.contains("X-Auth-Key: <REDACTED>"));
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.ends_with("{}"));
    }
}
