//! Scripted in-memory transport shared by the integration tests

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::Mutex;

use alidns_client::config::ClientConfig;
use alidns_client::error::{self, Result};
use alidns_client::{
    CallContext, Client, Credentials, RawResponse, RpcSignature, SignedRequest, Transport,
};
use async_trait::async_trait;
use http::StatusCode;

/// Replays queued responses in order and records every request.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<RawResponse>>>,
    requests: Mutex<Vec<SignedRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: StatusCode, body: serde_json::Value) -> Self {
        self.responses
            .lock()
            .expect("lock responses")
            .push_back(Ok(RawResponse::new(status, body.to_string())));
        self
    }

    pub fn ok(self, body: serde_json::Value) -> Self {
        self.respond(StatusCode::OK, body)
    }

    pub fn fail(self, err: alidns_client::Error) -> Self {
        self.responses
            .lock()
            .expect("lock responses")
            .push_back(Err(err));
        self
    }

    pub fn requests(&self) -> Vec<SignedRequest> {
        self.requests.lock().expect("lock requests").clone()
    }

    /// `PageNumber` sent with each recorded request.
    pub fn pages_requested(&self) -> Vec<u64> {
        self.requests()
            .iter()
            .filter_map(|r| r.query_param("PageNumber"))
            .filter_map(|p| p.parse().ok())
            .collect()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn fetch(&self, request: SignedRequest, _ctx: &CallContext) -> Result<RawResponse> {
        self.requests.lock().expect("lock requests").push(request);
        self.responses
            .lock()
            .expect("lock responses")
            .pop_front()
            .unwrap_or_else(|| Err(error::transport("script exhausted")))
    }
}

/// Fails the test if any request reaches it.
pub struct PanickingTransport;

#[async_trait]
impl Transport for PanickingTransport {
    async fn fetch(&self, request: SignedRequest, _ctx: &CallContext) -> Result<RawResponse> {
        panic!("transport must not be called, got {}", request.url);
    }
}

/// Route `tracing` output to the test harness; `RUST_LOG` selects levels.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn client_with(transport: Arc<dyn Transport>) -> Client {
    let auth = Arc::new(RpcSignature::new(Credentials::new("testid", "testsecret")));
    Client::with_parts(ClientConfig::default(), auth, transport).expect("valid client")
}
