//! Execution of `HttpRequest` values against the network.
//!
//! # Design
//! `Transport` is the seam between the pure request/response logic in
//! `GreetClient` and real I/O. `UreqTransport` is the blocking
//! implementation used by the CLI; tests substitute canned transports.

use std::io;

use tracing::trace;
use url::Url;

use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse};

/// Executes a single request and returns the response as data.
///
/// Non-2xx statuses are returned as `Ok`. Only failures below the
/// HTTP-status layer are `Err`.
pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Blocking transport backed by `ureq`.
///
/// A fresh agent is built per call so that the request's own timeout
/// applies and no connection state is shared between invocations.
#[derive(Debug, Clone, Copy, Default)]
pub struct UreqTransport;

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        // Url percent-encodes characters that are illegal in a target (such
        // as spaces) but keeps '/' and '?' structural.
        let url = Url::parse(&request.url)
            .map_err(|e| TransportError::Other(format!("invalid URL '{}': {e}", request.url)))?;
        trace!(wire_url = %url, "executing request");

        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(request.timeout))
            .build()
            .new_agent();

        let mut builder = agent.get(url.as_str());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let mut response = builder.call().map_err(classify)?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    value.to_str().unwrap_or_default().to_string(),
                )
            })
            .collect();
        let body = response.body_mut().read_to_vec().map_err(classify)?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

/// Sort a `ureq` failure into connect, timeout, or other.
fn classify(err: ureq::Error) -> TransportError {
    match err {
        ureq::Error::Io(io_err) => classify_io(io_err),
        err @ ureq::Error::Timeout(_) => TransportError::Timeout(err.to_string()),
        err @ (ureq::Error::HostNotFound | ureq::Error::ConnectionFailed) => {
            TransportError::Connect(err.to_string())
        }
        other => TransportError::Other(other.to_string()),
    }
}

fn classify_io(err: io::Error) -> TransportError {
    match err.kind() {
        io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => {
            TransportError::Timeout(err.to_string())
        }
        io::ErrorKind::ConnectionRefused
        | io::ErrorKind::ConnectionReset
        | io::ErrorKind::ConnectionAborted
        | io::ErrorKind::NotConnected
        | io::ErrorKind::AddrNotAvailable => TransportError::Connect(err.to_string()),
        _ => TransportError::Other(err.to_string()),
    }
}
