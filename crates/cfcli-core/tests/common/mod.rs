//! Test doubles and common utilities for contract tests
//!
//! These doubles stand in for the network so tests can assert how many
//! exchanges were attempted and what was sent.

#![allow(dead_code)]

use async_trait::async_trait;
use cfcli_core::error::{Error, Result};
use cfcli_core::request::{PreparedRequest, RequestBuilder};
use cfcli_core::traits::{HttpTransport, RawResponse};
use cfcli_core::ApiCommand;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// What a [`RecordingTransport`] answers with
#[derive(Clone)]
pub enum Reply {
    /// A completed exchange
    Response(RawResponse),
    /// The exchange could not be completed
    TransportFailure(String),
    /// The body could not be read
    ReadFailure(String),
}

/// A transport that records every request and replies from a script
#[derive(Clone)]
pub struct RecordingTransport {
    reply: Reply,
    call_count: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<PreparedRequest>>>,
}

impl RecordingTransport {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            call_count: Arc::new(AtomicUsize::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Reply with a JSON body
    pub fn json(body: &str) -> Self {
        Self::new(Reply::Response(RawResponse::new(
            200,
            Some("application/json"),
            body,
        )))
    }

    /// Reply with a plain-text body
    pub fn plain_text(body: &str) -> Self {
        Self::new(Reply::Response(RawResponse::new(200, Some("text/plain"), body)))
    }

    /// Get the number of times execute() was called
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Get the requests that were sent
    pub fn requests(&self) -> Vec<PreparedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpTransport for RecordingTransport {
    async fn execute(&self, request: &PreparedRequest) -> Result<RawResponse> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());

        match &self.reply {
            Reply::Response(response) => Ok(response.clone()),
            Reply::TransportFailure(message) => Err(Error::transport(message.clone())),
            Reply::ReadFailure(message) => Err(Error::read(message.clone())),
        }
    }

    fn transport_name(&self) -> &'static str {
        "recording"
    }
}

/// An ApiCommand wrapping a fixed builder
pub struct FixedCommand(pub RequestBuilder);

impl ApiCommand for FixedCommand {
    fn name(&self) -> &'static str {
        "fixed"
    }

    fn request(&self) -> Result<RequestBuilder> {
        Ok(self.0.clone())
    }
}
