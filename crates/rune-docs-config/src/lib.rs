//! Configuration management for the RuneLang documentation site.
//!
//! Parses `rune-docs.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories. Every section is
//! optional: missing values fall back to the RuneLang site's own settings.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Path Resolution
//!
//! Relative paths are resolved against the directory containing the config
//! file (or the current directory when no file is found):
//! - `grammars[].path`
//! - `output.path`

mod defaults;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use rune_docs_nav::SidebarEntry;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override site origin URL.
    pub site_url: Option<String>,
    /// Override output file path.
    pub output: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "rune-docs.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site identity.
    pub site: SiteConfig,
    /// Grammars to register with the highlighter (paths are relative strings from TOML).
    grammars: Vec<GrammarConfigRaw>,
    /// Output configuration (path is a relative string from TOML).
    output: OutputConfigRaw,
    /// Sidebar entries in rendered order.
    pub sidebar: Vec<SidebarEntry>,

    /// Resolved grammar configuration (set after loading).
    #[serde(skip)]
    pub grammars_resolved: Vec<GrammarConfig>,
    /// Resolved output configuration (set after loading).
    #[serde(skip)]
    pub output_resolved: OutputConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Site identity passed to the docs theme.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Canonical site origin.
    pub url: String,
    /// Display title.
    pub title: String,
    /// Tagline shown under the title.
    pub tagline: String,
    /// External links shown in the header.
    pub social: Vec<SocialLink>,
    /// Stylesheets loaded after the theme's own.
    pub custom_css: Vec<String>,
    /// Extra tags injected into every page's `<head>`.
    pub head: Vec<HeadTag>,
    /// Browser UI accent colour.
    pub theme_color: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            url: defaults::SITE_URL.to_owned(),
            title: defaults::TITLE.to_owned(),
            tagline: defaults::TAGLINE.to_owned(),
            social: defaults::social(),
            custom_css: vec![defaults::CUSTOM_CSS.to_owned()],
            head: Vec::new(),
            theme_color: Some(defaults::THEME_COLOR.to_owned()),
        }
    }
}

/// External link descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Theme icon identifier (e.g. `github`).
    pub icon: String,
    /// Accessible label.
    pub label: String,
    /// Link target.
    pub href: String,
}

/// Tag injected into the document head.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadTag {
    /// Element name (e.g. `meta`, `link`, `script`).
    pub tag: String,
    /// Element attributes.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, String>,
    /// Inner content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl HeadTag {
    /// Create a `<meta name=".." content="..">` tag.
    pub fn meta(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            tag: "meta".to_owned(),
            attrs: BTreeMap::from([
                ("name".to_owned(), name.into()),
                ("content".to_owned(), content.into()),
            ]),
            content: None,
        }
    }
}

/// Raw grammar entry as parsed from TOML (path as string).
#[derive(Debug, Deserialize)]
struct GrammarConfigRaw {
    path: String,
    name: String,
    #[serde(default)]
    aliases: Vec<String>,
}

/// Resolved grammar entry with absolute path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrammarConfig {
    /// Grammar document location.
    pub path: PathBuf,
    /// Canonical language name used on code blocks.
    pub name: String,
    /// Alternate code block identifiers.
    pub aliases: Vec<String>,
}

/// Raw output configuration as parsed from TOML (path as string).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct OutputConfigRaw {
    path: Option<String>,
}

/// Resolved output configuration.
#[derive(Debug, Default)]
pub struct OutputConfig {
    /// Where the assembled site definition is written.
    pub path: PathBuf,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `rune-docs.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(site_url) = &settings.site_url {
            self.site.url.clone_from(site_url);
        }
        if let Some(output) = &settings.output {
            self.output_resolved.path.clone_from(output);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteConfig::default(),
            grammars: Vec::new(),
            output: OutputConfigRaw::default(),
            sidebar: defaults::sidebar(),
            grammars_resolved: vec![GrammarConfig {
                path: base.join(defaults::GRAMMAR_PATH),
                name: defaults::GRAMMAR_NAME.to_owned(),
                aliases: vec![defaults::GRAMMAR_ALIAS.to_owned()],
            }],
            output_resolved: OutputConfig {
                path: base.join(defaults::OUTPUT_PATH),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        // Validate configuration after loading and resolution
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Site identity and sidebar structure are checked during site assembly;
    /// this covers what the loader itself needs.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_grammars()?;
        self.validate_output()?;
        Ok(())
    }

    /// Validate grammar entries.
    fn validate_grammars(&self) -> Result<(), ConfigError> {
        if self.grammars_resolved.is_empty() {
            return Err(ConfigError::Validation(
                "at least one [[grammars]] entry is required".to_owned(),
            ));
        }
        for (index, grammar) in self.grammars_resolved.iter().enumerate() {
            require_non_empty(&grammar.name, &format!("grammars[{index}].name"))?;
            if grammar.path.as_os_str().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "grammars[{index}].path cannot be empty"
                )));
            }
        }
        Ok(())
    }

    /// Validate output configuration.
    fn validate_output(&self) -> Result<(), ConfigError> {
        if self.output_resolved.path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "output.path cannot be empty".to_owned(),
            ));
        }
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    ///
    /// A file without `[[grammars]]` keeps the built-in RuneLang grammar.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.grammars_resolved = if self.grammars.is_empty() {
            Self::default_with_base(config_dir).grammars_resolved
        } else {
            self.grammars
                .iter()
                .map(|raw| GrammarConfig {
                    path: if raw.path.is_empty() {
                        PathBuf::new()
                    } else {
                        config_dir.join(&raw.path)
                    },
                    name: raw.name.clone(),
                    aliases: raw.aliases.clone(),
                })
                .collect()
        };

        self.output_resolved = OutputConfig {
            path: config_dir.join(self.output.path.as_deref().unwrap_or(defaults::OUTPUT_PATH)),
        };
    }
}
