//! The `greet` binary and client core against the live greeter server.
//!
//! # Design
//! Starts the real server on a random port, then drives it through
//! `fetch_greeting` and through the compiled `greet` binary. The core's DTOs
//! are checked against the server's bodies to catch schema drift.

use std::collections::HashSet;
use std::net::{SocketAddr, TcpListener};
use std::process::Command;

use greeter_core::{fetch_greeting, ClientConfig, GreetingResponse};
use serde_json::Value;
use greeter_server::{templates::render, GREETINGS};

fn spawn_server() -> SocketAddr {
    let std_listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            greeter_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

fn rendered(name: &str) -> HashSet<String> {
    GREETINGS.iter().map(|t| render(t, name)).collect()
}

fn config_for(addr: SocketAddr) -> ClientConfig {
    ClientConfig {
        host: addr.ip().to_string(),
        port: addr.port(),
        ..ClientConfig::default()
    }
}

fn greet_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_greet"))
}

#[test]
fn client_receives_a_rendered_template() {
    let addr = spawn_server();
    let expected = rendered("Test User");

    for _ in 0..20 {
        let greeting = fetch_greeting("Test User", &config_for(addr));
        assert!(expected.contains(&greeting), "{greeting}");
    }
}

#[test]
fn server_url_override_reaches_server() {
    let addr = spawn_server();
    let config = ClientConfig {
        host: "unused.invalid".to_string(),
        port: 1,
        server_url: Some(format!("http://{addr}")),
        ..ClientConfig::default()
    };
    let greeting = fetch_greeting("Ada", &config);
    assert!(rendered("Ada").contains(&greeting), "{greeting}");
}

#[test]
fn response_bodies_match_core_dtos() {
    let addr = spawn_server();

    let body = ureq::get(&format!("http://{addr}/"))
        .call()
        .unwrap()
        .body_mut()
        .read_to_string()
        .unwrap();
    let welcome: Value = serde_json::from_str(&body).unwrap();
    assert!(welcome["message"]
        .as_str()
        .unwrap()
        .starts_with("Welcome to the Witty Greeter API!"));

    let body = ureq::get(&format!("http://{addr}/greet/Ada"))
        .call()
        .unwrap()
        .body_mut()
        .read_to_string()
        .unwrap();
    let greeting: GreetingResponse = serde_json::from_str(&body).unwrap();
    match greeting.greeting {
        Some(Value::String(text)) => assert!(rendered("Ada").contains(&text), "{text}"),
        other => panic!("expected a string greeting, got {other:?}"),
    }
}

#[test]
fn binary_prints_greeting() {
    let addr = spawn_server();
    let output = greet_bin()
        .args(["Test User", "--host", "127.0.0.1", "--port"])
        .arg(addr.port().to_string())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(rendered("Test User").contains(stdout.trim_end()), "{stdout}");
}

#[test]
fn binary_logs_to_console_when_log_file_cannot_open() {
    let addr = spawn_server();
    let output = greet_bin()
        .args(["Ada", "--debug", "--log-file", "/nonexistent-dir/greet.log", "--port"])
        .arg(addr.port().to_string())
        .args(["--host", "127.0.0.1"])
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(rendered("Ada").contains(stdout.trim_end()), "{stdout}");
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("logging to console only"), "{stderr}");
    assert!(stderr.contains("requesting greeting"), "{stderr}");
}

#[test]
fn binary_exits_zero_on_connection_error() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let output = greet_bin()
        .args(["Ada", "--server"])
        .arg(format!("http://127.0.0.1:{port}"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout.trim_end(),
        format!("Error: Could not connect to the server at http://127.0.0.1:{port}. Is it running?")
    );
}

#[test]
fn binary_without_name_fails() {
    let output = greet_bin().output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Error: Please provide a name"));
}
