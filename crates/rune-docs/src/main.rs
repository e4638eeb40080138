//! rune-docs CLI - RuneLang documentation site configuration.
//!
//! Provides commands for:
//! - `build`: Assemble the site definition and write it for the site generator
//! - `check`: Validate the configuration, grammars, and sidebar without writing

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BuildArgs, CheckArgs};
use output::Output;

/// rune-docs - RuneLang documentation site configuration.
#[derive(Parser)]
#[command(name = "rune-docs", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble the site definition and write it to disk.
    Build(BuildArgs),
    /// Validate configuration without writing output.
    Check(CheckArgs),
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Self::Build(args) => args.verbose,
            Self::Check(args) => args.verbose,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.command.verbose() {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Build(args) => args.execute(),
        Commands::Check(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
