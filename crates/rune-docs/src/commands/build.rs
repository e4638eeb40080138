//! `rune-docs build` command implementation.

use std::path::PathBuf;

use clap::Args;
use rune_docs_config::{CliSettings, Config};

use super::print_summary;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Output file for the site definition (default: dist/site-config.json).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Canonical site URL (overrides config).
    #[arg(long)]
    site_url: Option<String>,

    /// Path to configuration file (default: auto-discover rune-docs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl BuildArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            site_url: self.site_url,
            output: self.output,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        if let Some(path) = &config.config_path {
            output.info(&format!("Config: {}", path.display()));
        }

        let definition = rune_docs_site::build(&config)?;
        definition.write_to(&config.output_resolved.path)?;

        output.success(&format!(
            "Site definition written to {}",
            config.output_resolved.path.display()
        ));
        print_summary(&output, &definition);
        Ok(())
    }
}
