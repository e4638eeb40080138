//! `rune-docs check` command implementation.

use std::path::PathBuf;

use clap::Args;
use rune_docs_config::Config;

use super::print_summary;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover rune-docs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl CheckArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = Config::load(self.config.as_deref(), None)?;
        let definition = rune_docs_site::build(&config)?;

        output.success("Configuration is valid");
        print_summary(&output, &definition);
        Ok(())
    }
}
