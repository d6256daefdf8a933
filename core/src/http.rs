//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe the single greeting request and its response as
//! plain data. `GreetClient` builds an `HttpRequest` and parses an
//! `HttpResponse` without touching the network; a `Transport` performs the
//! round-trip in between.

use std::borrow::Cow;
use std::time::Duration;

/// An HTTP GET described as plain data.
///
/// `url` is the request target exactly as built, with the name segment left
/// unescaped. Any escaping needed on the wire is the transport's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub timeout: Duration,
}

/// An HTTP response described as plain data.
///
/// `body` holds the raw bytes as received. Decoding them is part of parsing,
/// so a body that is not UTF-8 is a payload problem, not a transport one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Response with the given status and body and no headers.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    /// Body as text for logging; invalid UTF-8 is replaced.
    pub fn body_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}
