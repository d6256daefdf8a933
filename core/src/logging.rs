//! Process-wide tracing setup shared by the `greet` and `greeter-server`
//! binaries.
//!
//! Only binaries call `init_tracing`, once, at the start of `main`. Library
//! code emits events and never touches the global subscriber.

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;
use tracing::{debug, warn};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("unable to open log file {path}: {source}")]
    OpenLogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Init(#[from] TryInitError),
}

/// Where console output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Console {
    Stdout,
    /// Keeps stdout free for program output.
    Stderr,
}

#[derive(Debug, Clone)]
pub struct LogSettings {
    /// Level used when `RUST_LOG` is unset.
    pub level: LevelFilter,
    /// Additional file sink, appended to.
    pub log_file: Option<PathBuf>,
    pub console: Console,
}

impl LogSettings {
    /// `debug` selects DEBUG, otherwise INFO.
    pub fn new(debug: bool, log_file: Option<PathBuf>, console: Console) -> Self {
        Self {
            level: if debug { LevelFilter::DEBUG } else { LevelFilter::INFO },
            log_file,
            console,
        }
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::builder()
            .with_default_directive(self.level.into())
            .from_env_lossy()
    }
}

/// Install the global subscriber: a console layer plus an optional file
/// layer, both filtered by `RUST_LOG` or the configured level.
///
/// If the log file cannot be opened the console layer is still installed and
/// `LoggingError::OpenLogFile` is returned afterwards.
pub fn init_tracing(settings: &LogSettings) -> Result<(), LoggingError> {
    let (file_layer, open_error) = match &settings.log_file {
        Some(path) => match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => (
                Some(fmt::layer().with_ansi(false).with_writer(Mutex::new(file))),
                None,
            ),
            Err(source) => (
                None,
                Some(LoggingError::OpenLogFile {
                    path: path.clone(),
                    source,
                }),
            ),
        },
        None => (None, None),
    };

    let registry = tracing_subscriber::registry()
        .with(settings.env_filter())
        .with(file_layer);
    match settings.console {
        Console::Stdout => registry.with(fmt::layer()).try_init()?,
        Console::Stderr => registry
            .with(fmt::layer().with_writer(io::stderr))
            .try_init()?,
    }

    debug!(level = %settings.level, "logging configured");
    if let Some(err) = open_error {
        warn!("{err}; logging to console only");
        return Err(err);
    }
    if let Some(path) = &settings.log_file {
        debug!(path = %path.display(), "logging to file");
    }
    Ok(())
}
