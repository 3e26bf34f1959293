//! Contract Test: Dispatcher and Output Envelope
//!
//! Constraints verified:
//! - `text/plain` bodies are wrapped in the success envelope
//! - Every other body is forwarded byte-for-byte
//! - Status codes are not interpreted
//! - Transport and read failures become the failure envelope, with no retry

mod common;

use cfcli_core::envelope::{self, Envelope};
use cfcli_core::request::{Method, RequestBuilder, RequestOption};
use cfcli_core::traits::RawResponse;
use cfcli_core::Dispatcher;
use common::*;

async fn dispatch_and_render(transport: &RecordingTransport) -> Vec<u8> {
    let dispatcher = Dispatcher::new(Box::new(transport.clone()));
    let request = RequestBuilder::new(Method::Get, "/zones/{zone_id}/dns_records")
        .option(RequestOption::path_parameter("zone_id", "z"))
        .build();

    let result = dispatcher.dispatch(&request).await;
    let mut out = Vec::new();
    envelope::render(&result, &mut out).unwrap();
    out
}

#[tokio::test]
async fn plain_text_response_is_wrapped() {
    let transport = RecordingTransport::plain_text("ok");
    let out = dispatch_and_render(&transport).await;

    assert_eq!(
        String::from_utf8(out).unwrap().trim_end(),
        r#"{"success":true,"errors":[],"result":"ok"}"#
    );
}

#[tokio::test]
async fn json_response_is_forwarded_unmodified() {
    let body = r#"{"result":[1,2,3]}"#;
    let transport = RecordingTransport::json(body);
    let out = dispatch_and_render(&transport).await;

    assert_eq!(out, body.as_bytes());
}

#[tokio::test]
async fn json_body_whitespace_is_preserved() {
    let body = "{\n  \"success\" : true ,\"result\":[ ]}\n";
    let transport = RecordingTransport::json(body);
    let out = dispatch_and_render(&transport).await;

    assert_eq!(out, body.as_bytes());
}

#[tokio::test]
async fn error_status_is_forwarded_like_success() {
    let body = r#"{"success":false,"errors":[{"code":7003,"message":"Could not route to /zones/z/dns_records"}],"messages":[],"result":null}"#;
    let transport = RecordingTransport::new(Reply::Response(RawResponse::new(
        404,
        Some("application/json"),
        body,
    )));
    let out = dispatch_and_render(&transport).await;

    assert_eq!(out, body.as_bytes());
}

#[tokio::test]
async fn transport_error_becomes_failure_envelope_without_retry() {
    let transport = RecordingTransport::new(Reply::TransportFailure(
        "error trying to connect: tcp connect error: Connection refused (os error 111)".to_string(),
    ));
    let out = dispatch_and_render(&transport).await;

    let envelope: Envelope = serde_json::from_slice(&out).unwrap();
    assert!(!envelope.success);
    assert_eq!(envelope.errors.len(), 1);
    assert!(envelope.errors[0].message.contains("Connection refused"));
    assert_eq!(transport.call_count(), 1, "transport failures must not be retried");
}

#[tokio::test]
async fn read_error_becomes_failure_envelope() {
    let transport = RecordingTransport::new(Reply::ReadFailure("connection reset".to_string()));
    let out = dispatch_and_render(&transport).await;

    let envelope: Envelope = serde_json::from_slice(&out).unwrap();
    assert!(!envelope.success);
    assert_eq!(
        envelope.errors[0].message,
        "failed to read response body, cause: connection reset"
    );
    assert_eq!(transport.call_count(), 1);
}

#[tokio::test]
async fn request_reaches_transport_with_absolute_url() {
    let transport = RecordingTransport::json("{}");
    dispatch_and_render(&transport).await;

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::Get);
    assert_eq!(
        requests[0].url,
        "https://api.cloudflare.com/client/v4/zones/z/dns_records"
    );
}

#[tokio::test]
async fn custom_base_url_is_used() {
    let transport = RecordingTransport::json("{}");
    let dispatcher = Dispatcher::with_base_url(Box::new(transport.clone()), "http://127.0.0.1:9/v4/");
    let request = RequestBuilder::new(Method::Post, "/zones/z/dns_records/scan").build();

    dispatcher.dispatch(&request).await.unwrap();
    assert_eq!(transport.requests()[0].url, "http://127.0.0.1:9/v4/zones/z/dns_records/scan");
}
