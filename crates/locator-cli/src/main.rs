//! # locator-validate entry point
//!
//! Initializes tracing and hands the process arguments to [`locator_cli::run`].

use std::io::IsTerminal;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    if let Err(e) = init_tracing() {
        eprintln!("{}: logging disabled: {e:#}", locator_cli::BIN_NAME);
    }

    locator_cli::run(std::env::args_os()).into()
}

/// Logs go to stderr and are off unless `RUST_LOG` asks for them, so a
/// valid document leaves stderr empty.
fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}
