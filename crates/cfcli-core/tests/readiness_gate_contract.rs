//! Contract Test: Readiness Gate
//!
//! Constraints verified:
//! - Without a loaded credential no request is built or sent
//! - The unready failure envelope carries the fixed message
//! - With a credential, exactly one request goes out carrying both auth headers

mod common;

use cfcli_core::config::Credential;
use cfcli_core::envelope::Envelope;
use cfcli_core::error::UNREADY_MESSAGE;
use cfcli_core::request::{HEADER_AUTH_EMAIL, HEADER_AUTH_KEY, Method, RequestBuilder, RequestOption};
use cfcli_core::store::MemoryCredentialStore;
use cfcli_core::{Context, Dispatcher, Error, Handler};
use common::*;

fn list_command() -> FixedCommand {
    FixedCommand(
        RequestBuilder::new(Method::Get, "/zones/{zone_id}/dns_records")
            .option(RequestOption::path_parameter("zone_id", "z")),
    )
}

#[tokio::test]
async fn unready_context_sends_nothing() {
    let transport = RecordingTransport::json("{}");
    let handler = Handler::new(
        Context::unready(),
        Dispatcher::new(Box::new(transport.clone())),
    );

    let mut out = Vec::new();
    handler.run_and_render(&list_command(), &mut out).await.unwrap();

    let envelope: Envelope = serde_json::from_slice(&out).unwrap();
    assert_eq!(envelope, Envelope::failure(UNREADY_MESSAGE));
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn unready_error_is_configuration_error() {
    let transport = RecordingTransport::json("{}");
    let handler = Handler::new(
        Context::load(&MemoryCredentialStore::new()).await,
        Dispatcher::new(Box::new(transport.clone())),
    );

    let err = handler.run(&list_command()).await.unwrap_err();
    assert!(matches!(err, Error::Configuration(ref m) if m == "Configuration unready"));
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn ready_context_sends_one_authenticated_request() {
    let transport = RecordingTransport::json(r#"{"success":true}"#);
    let handler = Handler::new(
        Context::ready(Credential::new("user@example.com", "key-123")),
        Dispatcher::new(Box::new(transport.clone())),
    );

    let mut out = Vec::new();
    handler.run_and_render(&list_command(), &mut out).await.unwrap();

    assert_eq!(out, br#"{"success":true}"#);
    assert_eq!(transport.call_count(), 1);

    let sent = &transport.requests()[0];
    let header = |name: &str| {
        sent.headers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
    };
    assert_eq!(header(HEADER_AUTH_EMAIL).as_deref(), Some("user@example.com"));
    assert_eq!(header(HEADER_AUTH_KEY).as_deref(), Some("key-123"));
}
