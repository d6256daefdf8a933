//! Stateless request builder and response parser for the greeting API.
//!
//! # Design
//! `GreetClient` holds a base URL, a timeout and an observer, and carries no
//! mutable state between calls. The greeting call is split into
//! `build_greet`, which produces an `HttpRequest`, and `parse_greet`, which
//! consumes an `HttpResponse`. `fetch` joins the two around a `Transport` and
//! maps every failure into a `GreetError`; `greeting` flattens that into a
//! printable string.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;

use crate::config::{greeting_path, ClientConfig, DEFAULT_TIMEOUT};
use crate::error::{GreetError, TransportError};
use crate::http::{HttpRequest, HttpResponse};
use crate::observer::{GreetObserver, TracingObserver};
use crate::transport::{Transport, UreqTransport};
use crate::types::GreetingResponse;

/// Client for `GET /greet/{name}`.
#[derive(Clone)]
pub struct GreetClient {
    base_url: String,
    timeout: Duration,
    observer: Arc<dyn GreetObserver>,
}

impl GreetClient {
    /// Client for `base_url`, used exactly as given.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            timeout: DEFAULT_TIMEOUT,
            observer: Arc::new(TracingObserver),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(&config.base_url()).with_timeout(config.timeout)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_observer(mut self, observer: Arc<dyn GreetObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// The base URL shown in connectivity and timeout diagnostics.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_greet(&self, name: &str) -> HttpRequest {
        HttpRequest {
            url: format!("{}{}", self.base_url, greeting_path(name)),
            headers: vec![("accept".to_string(), "application/json".to_string())],
            timeout: self.timeout,
        }
    }

    /// Turn the response to `request` into a greeting, falling back to
    /// `Hello, {name}!` when the body has no `greeting` field.
    pub fn parse_greet(
        &self,
        request: &HttpRequest,
        name: &str,
        response: HttpResponse,
    ) -> Result<String, GreetError> {
        check_status(&response, &request.url)?;

        let body: GreetingResponse = serde_json::from_slice(&response.body)
            .map_err(|e| GreetError::Unexpected(e.to_string()))?;

        Ok(match body.greeting {
            Some(Value::String(greeting)) => greeting,
            None | Some(Value::Null) => default_greeting(name),
            Some(other) => other.to_string(),
        })
    }

    /// Build, execute and parse a greeting request.
    pub fn fetch<T>(&self, transport: &T, name: &str) -> Result<String, GreetError>
    where
        T: Transport + ?Sized,
    {
        let request = self.build_greet(name);
        self.observer.request_started(&request);

        let result = transport
            .execute(&request)
            .map_err(|e| self.transport_failure(e))
            .and_then(|response| {
                self.observer.response_received(&response);
                self.parse_greet(&request, name, response)
            });

        if let Err(err) = &result {
            self.observer.request_failed(err);
        }
        result
    }

    /// Like `fetch`, but never fails: errors become `Error: ...` strings.
    pub fn greeting<T>(&self, transport: &T, name: &str) -> String
    where
        T: Transport + ?Sized,
    {
        self.fetch(transport, name)
            .unwrap_or_else(|err| err.user_message())
    }

    fn transport_failure(&self, err: TransportError) -> GreetError {
        match err {
            TransportError::Connect(detail) => GreetError::Connectivity {
                base_url: self.base_url.clone(),
                detail,
            },
            TransportError::Timeout(_) => GreetError::Timeout {
                base_url: self.base_url.clone(),
            },
            TransportError::Other(detail) => GreetError::Transport(detail),
        }
    }
}

impl fmt::Debug for GreetClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GreetClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

/// Fetch a greeting over the network. Always returns a printable string.
pub fn fetch_greeting(name: &str, config: &ClientConfig) -> String {
    GreetClient::from_config(config).greeting(&UreqTransport, name)
}

fn default_greeting(name: &str) -> String {
    format!("Hello, {name}!")
}

/// Map 4xx and 5xx statuses to `GreetError::Protocol`.
fn check_status(response: &HttpResponse, url: &str) -> Result<(), GreetError> {
    let class = match response.status {
        400..=499 => "Client",
        500..=599 => "Server",
        _ => return Ok(()),
    };
    let reason = ::http::StatusCode::from_u16(response.status)
        .ok()
        .and_then(|status| status.canonical_reason())
        .unwrap_or("Unknown");
    Err(GreetError::Protocol {
        status: response.status,
        detail: format!("{} {class} Error: {reason} for url: {url}", response.status),
    })
}
