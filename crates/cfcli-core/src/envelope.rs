//! Response envelope and output rendering
//!
//! Every invocation writes exactly one JSON document to standard output:
//!
//! - the upstream body, byte-for-byte, when the API answered with anything
//!   other than `text/plain`
//! - `{"success":true,"errors":[],"result":"<text>"}` for `text/plain`
//! - `{"success":false,"errors":[{"code":0,"message":"<text>"}]}` for any
//!   local failure
//!
//! Synthesized envelopes are terminated by a single newline; upstream bodies
//! are written untouched.

use serde::{Deserialize, Serialize};
use std::io::{self, Write};

use crate::dispatch::Outcome;
use crate::error::Error;

/// One entry of the `errors` array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvelopeError {
    /// Error code; always 0 for locally synthesized failures
    pub code: i64,
    /// Human-readable description
    pub message: String,
}

/// Locally synthesized response document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    /// Whether the operation succeeded
    pub success: bool,
    /// Errors, empty on success
    pub errors: Vec<EnvelopeError>,
    /// Plain-text result, omitted on failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
}

impl Envelope {
    /// Success envelope wrapping a plain-text body
    pub fn success_text(result: impl Into<String>) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result.into()),
        }
    }

    /// Failure envelope with a single message
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            errors: vec![EnvelopeError {
                code: 0,
                message: message.into(),
            }],
            result: None,
        }
    }

    /// Failure envelope describing `err`
    pub fn from_error(err: &Error) -> Self {
        Self::failure(err.to_string())
    }

    /// Compact JSON encoding, without trailing newline
    pub fn to_json(&self) -> String {
        // Serializing plain strings, bools and integers cannot fail
        serde_json::to_string(self).unwrap_or_else(|_| {
            r#"{"success":false,"errors":[{"code":0,"message":"failed to encode envelope"}]}"#
                .to_string()
        })
    }

    /// Write the envelope followed by a newline
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(self.to_json().as_bytes())?;
        out.write_all(b"\n")?;
        out.flush()
    }
}

/// Write the result of a dispatch as the single output document
pub fn render<W: Write>(result: &Result<Outcome, Error>, out: &mut W) -> io::Result<()> {
    match result {
        Ok(Outcome::Passthrough(body)) => {
            out.write_all(body)?;
            out.flush()
        }
        Ok(Outcome::PlainText(text)) => Envelope::success_text(text.as_str()).write_to(out),
        Err(err) => {
            tracing::debug!("Rendering failure envelope: {}", err);
            Envelope::from_error(err).write_to(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_text_shape() {
        assert_eq!(
            Envelope::success_text("ok").to_json(),
            r#"{"success":true,"errors":[],"result":"ok"}"#
        );
    }

    #[test]
    fn failure_shape_has_no_result() {
        assert_eq!(
            Envelope::failure("Configuration unready").to_json(),
            r#"{"success":false,"errors":[{"code":0,"message":"Configuration unready"}]}"#
        );
    }

    #[test]
    fn render_plain_text_wraps_in_envelope() {
        let mut out = Vec::new();
        render(&Ok(Outcome::PlainText("ok".to_string())), &mut out).unwrap();
        assert_eq!(out, b"{\"success\":true,\"errors\":[],\"result\":\"ok\"}\n");
    }

    #[test]
    fn render_passthrough_is_byte_identical() {
        let body = br#"{"result":[1,2,3]}"#.to_vec();
        let mut out = Vec::new();
        render(&Ok(Outcome::Passthrough(body.clone())), &mut out).unwrap();
        assert_eq!(out, body);
    }

    #[test]
    fn render_error_uses_display_message() {
        let mut out = Vec::new();
        render(&Err(Error::transport("connection refused")), &mut out).unwrap();

        let envelope: Envelope = serde_json::from_slice(&out).unwrap();
        assert!(!envelope.success);
        assert_eq!(envelope.result, None);
        assert_eq!(
            envelope.errors,
            vec![EnvelopeError {
                code: 0,
                message: "failed to request, cause: connection refused".to_string(),
            }]
        );
    }

    #[test]
    fn plain_text_is_escaped_not_parsed() {
        let envelope = Envelope::success_text("example.com.\t3600\tIN\tA\t\"1.2.3.4\"\n");
        let decoded: serde_json::Value = serde_json::from_str(&envelope.to_json()).unwrap();
        assert_eq!(
            decoded["result"],
            "example.com.\t3600\tIN\tA\t\"1.2.3.4\"\n"
        );
    }
}
