//! tzkey - generate, import and inspect Tezos wallet keys.

mod commands;

use clap::Parser;
use commands::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Log to stderr. `RUST_LOG` wins over the `--verbose` default.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::New(cmd) => cmd.execute()?,
        Commands::Import(cmd) => cmd.execute()?,
        Commands::ImportKey(cmd) => cmd.execute()?,
        Commands::Mnemonic(cmd) => cmd.execute()?,
    }
    Ok(())
}
