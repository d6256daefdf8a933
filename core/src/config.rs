//! Shared configuration defaults for the greeter service and its client.
//!
//! # Design
//! The server and the client each have their own notion of a "default host".
//! The server binds to every interface, while the client connects to
//! loopback. They are kept as two constants and must not be merged.

use std::time::Duration;

use crate::types::Protocol;

/// Interface the server binds to when no `--host` is given.
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";
/// Port the server listens on when no `--port` is given.
pub const DEFAULT_PORT: u16 = 8000;

/// Host the client connects to when no `--host` is given.
pub const DEFAULT_CLIENT_HOST: &str = "localhost";
pub const DEFAULT_CLIENT_PORT: u16 = 8000;
pub const DEFAULT_PROTOCOL: Protocol = Protocol::Http;

/// Per-call client timeout. There is no retry.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

pub const ROOT_ENDPOINT: &str = "/";
/// Axum route pattern for the greeting endpoint.
pub const GREETING_ROUTE: &str = "/greet/{name}";
/// Prefix appended to a base URL when building a greeting request.
pub const GREETING_PREFIX: &str = "/greet/";

/// Path of the greeting endpoint for `name`, without any escaping.
pub fn greeting_path(name: &str) -> String {
    format!("{GREETING_PREFIX}{name}")
}

/// Where and how the client reaches the greeting service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub host: String,
    pub port: u16,
    pub protocol: Protocol,
    /// Full base URL. When set, `host`, `port` and `protocol` are ignored.
    pub server_url: Option<String>,
    pub timeout: Duration,
}

impl ClientConfig {
    /// Base URL requests are built against. `server_url` is returned exactly
    /// as given, with no trailing-slash normalization.
    pub fn base_url(&self) -> String {
        match &self.server_url {
            Some(url) => url.clone(),
            None => format!("{}://{}:{}", self.protocol, self.host, self.port),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_CLIENT_HOST.to_string(),
            port: DEFAULT_CLIENT_PORT,
            protocol: DEFAULT_PROTOCOL,
            server_url: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}
