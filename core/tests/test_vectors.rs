//! Verify `GreetClient` against the JSON vectors in `test-vectors/greet.json`.
//!
//! Each vector gives a client config, a name, the expected request target,
//! and either a simulated response or a simulated transport failure, plus
//! the expected greeting or error class.

use std::cell::RefCell;
use std::time::Duration;

use greeter_core::{
    ClientConfig, GreetClient, GreetError, HttpRequest, HttpResponse, Protocol, Transport,
    TransportError,
};
use serde_json::Value;

/// Replays the case's simulated outcome and remembers the request it saw.
struct VectorTransport {
    outcome: Result<HttpResponse, TransportError>,
    seen: RefCell<Option<HttpRequest>>,
}

impl Transport for VectorTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        *self.seen.borrow_mut() = Some(request.clone());
        self.outcome.clone()
    }
}

fn parse_config(raw: &Value) -> ClientConfig {
    ClientConfig {
        host: raw["host"].as_str().unwrap().to_string(),
        port: raw["port"].as_u64().unwrap() as u16,
        protocol: raw["protocol"].as_str().unwrap().parse::<Protocol>().unwrap(),
        server_url: raw["server_url"].as_str().map(str::to_string),
        timeout: Duration::from_secs(5),
    }
}

fn parse_outcome(case: &Value) -> Result<HttpResponse, TransportError> {
    if let Some(sim) = case.get("simulated_response") {
        return Ok(HttpResponse::new(
            sim["status"].as_u64().unwrap() as u16,
            sim["body"].as_str().unwrap(),
        ));
    }
    let failure = &case["transport_error"];
    let detail = failure["detail"].as_str().unwrap().to_string();
    Err(match failure["kind"].as_str().unwrap() {
        "connect" => TransportError::Connect(detail),
        "timeout" => TransportError::Timeout(detail),
        "other" => TransportError::Other(detail),
        other => panic!("unknown transport error kind: {other}"),
    })
}

fn error_class(err: &GreetError) -> &'static str {
    match err {
        GreetError::Connectivity { .. } => "connectivity",
        GreetError::Timeout { .. } => "timeout",
        GreetError::Protocol { .. } => "protocol",
        GreetError::Transport(_) => "transport",
        GreetError::Unexpected(_) => "unexpected",
    }
}

#[test]
fn greet_test_vectors() {
    let raw = include_str!("../../test-vectors/greet.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let label = case["name"].as_str().unwrap();
        let client = GreetClient::from_config(&parse_config(&case["config"]));
        let name = case["input"].as_str().unwrap();
        let transport = VectorTransport {
            outcome: parse_outcome(case),
            seen: RefCell::new(None),
        };

        let result = client.fetch(&transport, name);

        let request = transport.seen.borrow().clone().unwrap();
        assert_eq!(request.url, case["expected_url"].as_str().unwrap(), "{label}: url");
        assert_eq!(request.timeout, Duration::from_secs(5), "{label}: timeout");

        let expected = &case["expected"];
        match (result, expected["greeting"].as_str()) {
            (Ok(greeting), Some(want)) => assert_eq!(greeting, want, "{label}: greeting"),
            (Err(err), None) => {
                assert_eq!(error_class(&err), expected["error"].as_str().unwrap(), "{label}: class");
                if let Some(message) = expected["message"].as_str() {
                    assert_eq!(err.user_message(), message, "{label}: message");
                }
            }
            (other, _) => panic!("{label}: unexpected outcome {other:?}"),
        }
    }
}
