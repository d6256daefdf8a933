//! Wire DTOs and small value types for the greeter API.
//!
//! # Design
//! These types mirror the server's response schema but are defined
//! independently of the server crate. The end-to-end tests in the CLI crate
//! catch any schema drift between the two.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// URL scheme used when the client builds a target from host and port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Http,
    Https,
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Protocol::Http => write!(f, "http"),
            Protocol::Https => write!(f, "https"),
        }
    }
}

impl FromStr for Protocol {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "http" => Ok(Protocol::Http),
            "https" => Ok(Protocol::Https),
            other => Err(format!("unsupported protocol: {other}")),
        }
    }
}

/// Body of `GET /greet/{name}`.
///
/// Only a JSON object is accepted. `greeting` is absent when the object has
/// no such key; other keys are ignored. The value is kept as raw JSON so the
/// client can decide how to render a non-string greeting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "Map<String, Value>")]
pub struct GreetingResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub greeting: Option<Value>,
}

impl From<Map<String, Value>> for GreetingResponse {
    fn from(mut fields: Map<String, Value>) -> Self {
        Self {
            greeting: fields.remove("greeting"),
        }
    }
}
