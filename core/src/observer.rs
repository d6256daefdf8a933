//! Hooks for observing greeting requests.
//!
//! `GreetClient` reports through an injected `GreetObserver` instead of
//! reaching into process-wide logging state. `TracingObserver` forwards the
//! hooks to `tracing`; whoever owns the process decides where that goes.

use tracing::{debug, error, info};

use crate::error::GreetError;
use crate::http::{HttpRequest, HttpResponse};

/// Receives lifecycle events for a single greeting request.
pub trait GreetObserver: Send + Sync {
    fn request_started(&self, _request: &HttpRequest) {}

    fn response_received(&self, _response: &HttpResponse) {}

    fn request_failed(&self, _error: &GreetError) {}
}

/// Default observer; emits `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl GreetObserver for TracingObserver {
    fn request_started(&self, request: &HttpRequest) {
        info!(url = %request.url, "requesting greeting");
        debug!(timeout = ?request.timeout, headers = ?request.headers, "request details");
    }

    fn response_received(&self, response: &HttpResponse) {
        debug!(
            status = response.status,
            headers = ?response.headers,
            body = %response.body_text(),
            "response received"
        );
    }

    fn request_failed(&self, err: &GreetError) {
        error!(error = ?err, "{err}");
    }
}
