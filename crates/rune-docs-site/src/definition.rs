//! Site definition consumed by the external site generator.
//!
//! Serialized as camelCase JSON:
//!
//! ```json
//! {
//!   "site": "https://runelang.com",
//!   "integrations": [
//!     {
//!       "name": "starlight",
//!       "options": {
//!         "title": "RuneLang",
//!         "tagline": "...",
//!         "social": [{ "icon": "github", "label": "GitHub", "href": "..." }],
//!         "customCss": ["./src/styles/custom.css"],
//!         "expressiveCode": { "shiki": { "langs": [{ "name": "rune", "aliases": ["runelang"], "...": "..." }] } },
//!         "head": [{ "tag": "meta", "attrs": { "content": "#7c3aed", "name": "theme-color" } }],
//!         "sidebar": [{ "label": "Getting Started", "items": [{ "label": "Introduction", "slug": "getting-started/introduction" }] }]
//!       }
//!     }
//!   ]
//! }
//! ```

use std::path::Path;

use rune_docs_config::{HeadTag, SocialLink};
use rune_docs_grammar::LanguageRegistry;
use rune_docs_nav::Navigation;
use serde::Serialize;

use crate::SiteError;

/// Complete site configuration, built once per run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SiteDefinition {
    /// Canonical site origin.
    pub site: String,
    /// Generator integrations.
    pub integrations: Vec<Integration>,
}

/// Generator integration.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "name", content = "options")]
pub enum Integration {
    /// Documentation theme.
    #[serde(rename = "starlight")]
    Docs(DocsTheme),
}

/// Documentation theme options.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocsTheme {
    pub title: String,
    pub tagline: String,
    pub social: Vec<SocialLink>,
    pub custom_css: Vec<String>,
    pub expressive_code: ExpressiveCode,
    pub head: Vec<HeadTag>,
    pub sidebar: Navigation,
}

/// Code block renderer options.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExpressiveCode {
    pub shiki: Shiki,
}

/// Highlighter options.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Shiki {
    /// Extra languages loaded by the highlighter.
    pub langs: LanguageRegistry,
}

impl SiteDefinition {
    /// The documentation theme options.
    #[must_use]
    pub fn docs_theme(&self) -> Option<&DocsTheme> {
        self.integrations
            .first()
            .map(|Integration::Docs(theme)| theme)
    }

    /// Serialize to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `SiteError::Serialize` if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, SiteError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the definition as JSON, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns `SiteError::Serialize` or `SiteError::Io` on failure.
    pub fn write_to(&self, path: &Path) -> Result<(), SiteError> {
        let json = self.to_json_pretty()?;
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)?;
        tracing::info!(path = %path.display(), "Site definition written");
        Ok(())
    }
}
