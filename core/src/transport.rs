//! Network execution of `HttpRequest` values.
//!
//! # Design
//! The gateway depends only on `Transport`, so it can be driven by scripted
//! fakes in tests. `UreqTransport` is the blocking implementation: HTTP error
//! statuses come back as ordinary responses (classification is the gateway's
//! job) and every request is bounded by one global timeout.

use std::fmt;
use std::io;
use std::time::Duration;

use tracing::trace;

use crate::error::TransportError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Executes one request. `Err` means no response was received.
pub trait Transport: Send + Sync + fmt::Debug {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

pub struct UreqTransport {
    agent: ureq::Agent,
    timeout: Duration,
}

impl fmt::Debug for UreqTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UreqTransport").field("timeout", &self.timeout).finish()
    }
}

impl UreqTransport {
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(timeout))
            .build()
            .new_agent();
        Self { agent, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        trace!(method = %request.method, url = %request.url, "dispatching");
        let body = request.body.as_ref().map(|b| b.as_bytes());
        let url = request.url.as_str();

        let result = match request.method {
            HttpMethod::Get => with_headers(self.agent.get(url), &request.headers).call(),
            HttpMethod::Delete => with_headers(self.agent.delete(url), &request.headers).call(),
            HttpMethod::Post => send(with_headers(self.agent.post(url), &request.headers), body),
            HttpMethod::Put => send(with_headers(self.agent.put(url), &request.headers), body),
            HttpMethod::Patch => send(with_headers(self.agent.patch(url), &request.headers), body),
        };

        let mut response = result.map_err(classify)?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(k, v)| (k.as_str().to_string(), v.to_str().unwrap_or_default().to_string()))
            .collect();
        let body = response.body_mut().read_to_string().map_err(classify)?;

        Ok(HttpResponse { status, headers, body })
    }
}

fn with_headers<B>(mut builder: ureq::RequestBuilder<B>, headers: &[(String, String)]) -> ureq::RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

fn send(
    builder: ureq::RequestBuilder<ureq::typestate::WithBody>,
    body: Option<&[u8]>,
) -> Result<ureq::http::Response<ureq::Body>, ureq::Error> {
    match body {
        Some(bytes) => builder.send(bytes),
        None => builder.send_empty(),
    }
}

fn classify(err: ureq::Error) -> TransportError {
    match err {
        ureq::Error::Timeout(reason) => TransportError::Timeout(format!("{reason:?}")),
        ureq::Error::Io(e) if matches!(e.kind(), io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock) => {
            TransportError::Timeout(e.to_string())
        }
        other => TransportError::Network(other.to_string()),
    }
}
