//! Rinku CLI binary.

use std::process;

use clap::Parser;
use rinku::cli::{args::RinkuArgs, commands::execute_command};
use tracing_subscriber::EnvFilter;

/// Initialize logging from `RUST_LOG`, defaulting to warnings only.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();

    let args = RinkuArgs::parse();

    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
