//! Client core and shared configuration for the Witty Greeter service.
//!
//! # Overview
//! `GreetClient` builds an `HttpRequest` for `GET /greet/{name}` and parses
//! the `HttpResponse` into a greeting, with a `Transport` doing the I/O in
//! between (host-does-IO pattern). Every failure becomes a typed `GreetError`,
//! and `fetch_greeting` flattens the result into a printable string.
//!
//! # Design
//! - `GreetClient` is stateless. It holds a base URL, a timeout, and an
//!   observer.
//! - `UreqTransport` is the blocking network transport. Tests swap in canned
//!   transports.
//! - `config` holds the constants shared with the server crate; the DTOs in
//!   `types` are defined independently of it.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod observer;
pub mod transport;
pub mod types;

pub use client::{fetch_greeting, GreetClient};
pub use config::ClientConfig;
pub use error::{GreetError, TransportError};
pub use self::http::{HttpRequest, HttpResponse};
pub use observer::{GreetObserver, TracingObserver};
pub use transport::{Transport, UreqTransport};
pub use types::{GreetingResponse, Protocol};
