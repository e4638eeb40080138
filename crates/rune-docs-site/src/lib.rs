//! Site definition assembly for the RuneLang documentation site.
//!
//! This crate provides:
//! - [`SiteIdentity`]: validated title, origin, links, and head tags
//! - [`SiteDefinition`]: the configuration object handed to the site generator
//! - [`build`]: load grammars and assemble a definition from a [`Config`]
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use rune_docs_config::Config;
//!
//! let config = Config::load(None, None)?;
//! let definition = rune_docs_site::build(&config)?;
//! definition.write_to(&config.output_resolved.path)?;
//! # Ok(())
//! # }
//! ```
//!
//! [`Config`]: rune_docs_config::Config

mod assemble;
mod definition;
mod identity;

pub use assemble::{MAX_SIDEBAR_DEPTH, assemble, build, load_languages};
pub use definition::{DocsTheme, ExpressiveCode, Integration, Shiki, SiteDefinition};
pub use identity::SiteIdentity;

use rune_docs_grammar::GrammarError;
use rune_docs_nav::NavigationError;

/// Error returned while assembling a site definition.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// Grammar could not be loaded or registered.
    #[error("{0}")]
    Grammar(#[from] GrammarError),
    /// Sidebar failed validation.
    #[error("Invalid sidebar: {0}")]
    Navigation(#[from] NavigationError),
    /// Site identity is invalid.
    #[error("Invalid site settings: {0}")]
    Validation(String),
    /// Definition could not be rendered as JSON.
    #[error("Failed to serialize site definition: {0}")]
    Serialize(#[from] serde_json::Error),
    /// Definition could not be written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
