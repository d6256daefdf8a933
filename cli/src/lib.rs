//! Argument surface of the `greet` command.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use greeter_core::config::{DEFAULT_CLIENT_HOST, DEFAULT_CLIENT_PORT, DEFAULT_TIMEOUT};
use greeter_core::logging::{Console, LogSettings};
use greeter_core::{ClientConfig, Protocol};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProtocolArg {
    Http,
    Https,
}

impl From<ProtocolArg> for Protocol {
    fn from(arg: ProtocolArg) -> Self {
        match arg {
            ProtocolArg::Http => Protocol::Http,
            ProtocolArg::Https => Protocol::Https,
        }
    }
}

/// Get a witty greeting from the server.
#[derive(Debug, Parser)]
#[command(name = "greet", version)]
pub struct Cli {
    /// Your name
    pub name: Option<String>,

    /// Server hostname or IP
    #[arg(long, default_value = DEFAULT_CLIENT_HOST)]
    pub host: String,

    /// Server port
    #[arg(long, default_value_t = DEFAULT_CLIENT_PORT)]
    pub port: u16,

    /// Protocol to use
    #[arg(long, value_enum, default_value_t = ProtocolArg::Http)]
    pub protocol: ProtocolArg,

    /// Full server URL (overrides host, port, and protocol if provided)
    #[arg(short, long)]
    pub server: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Also write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// The name to greet. An empty name counts as missing.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            host: self.host.clone(),
            port: self.port,
            protocol: self.protocol.into(),
            server_url: self.server.clone(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Logs go to stderr so stdout carries only the greeting.
    pub fn log_settings(&self) -> LogSettings {
        LogSettings::new(self.debug, self.log_file.clone(), Console::Stderr)
    }
}
