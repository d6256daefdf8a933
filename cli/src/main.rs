use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use greeter_cli::Cli;
use greeter_core::fetch_greeting;
use greeter_core::logging::{init_tracing, LoggingError};
use tracing::{debug, error, info};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match init_tracing(&cli.log_settings()) {
        Ok(()) => {}
        Err(e @ LoggingError::OpenLogFile { .. }) => {
            eprintln!("warning: {e}; logging to console only")
        }
        Err(e) => eprintln!("warning: logging disabled: {e}"),
    }
    debug!(?cli, "parsed arguments");

    let Some(name) = cli.name() else {
        let _ = Cli::command().print_help();
        error!("no name provided");
        eprintln!("\nError: Please provide a name");
        return ExitCode::FAILURE;
    };

    info!(%name, "getting greeting");
    let greeting = fetch_greeting(name, &cli.client_config());
    info!(%greeting, "received greeting");
    println!("{greeting}");
    ExitCode::SUCCESS
}
