//! Strigo CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use strigo::cli::{Cli, CommandDispatcher};
use strigo::ui::{TerminalUI, UserInterface};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr; stdout carries command output and diagnostics.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("strigo=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("strigo=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Strigo starting with args: {:?}", cli);

    let mut ui = TerminalUI::new();
    let dispatcher = CommandDispatcher::new(cli.api_url.clone());

    match dispatcher.dispatch(&cli, &mut ui) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            for line in e.diagnostic_lines() {
                ui.message(&line);
            }
            ExitCode::from(1)
        }
    }
}
