//! Grammar documents and identifier overrides.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::GrammarError;

/// TextMate grammar document as consumed by the highlighter.
///
/// Only the identifier fields are typed. Every other top-level key
/// (`scopeName`, `patterns`, `repository`, ...) is kept verbatim in `rules`,
/// in the order it appeared in the source file.
///
/// Identifier fields of any other shape are read as absent, since they are
/// replaced before registration anyway.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GrammarDocument {
    /// Canonical language identifier.
    #[serde(
        default,
        deserialize_with = "lenient_name",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    /// Alternate identifiers accepted on fenced code blocks.
    #[serde(default, deserialize_with = "lenient_aliases")]
    pub aliases: Vec<String>,
    /// Lexical pattern rules and any other grammar fields.
    #[serde(flatten)]
    pub rules: Map<String, Value>,
}

/// Keep `name` only when it is a string.
fn lenient_name<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(name) => Some(name),
        _ => None,
    })
}

/// Keep `aliases` only when it is an array of strings.
fn lenient_aliases<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Array(values) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };
    Ok(values
        .into_iter()
        .map(|value| match value {
            Value::String(alias) => Some(alias),
            _ => None,
        })
        .collect::<Option<Vec<_>>>()
        .unwrap_or_default())
}

impl GrammarDocument {
    /// Parse a grammar document from JSON content.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not a JSON object.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// TextMate scope name (e.g. `source.rune`), if present.
    #[must_use]
    pub fn scope_name(&self) -> Option<&str> {
        self.rules.get("scopeName").and_then(Value::as_str)
    }

    /// Number of top-level patterns plus repository entries.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        let patterns = self
            .rules
            .get("patterns")
            .and_then(Value::as_array)
            .map_or(0, Vec::len);
        let repository = self
            .rules
            .get("repository")
            .and_then(Value::as_object)
            .map_or(0, Map::len);
        patterns + repository
    }

    /// Canonical name followed by aliases.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.name
            .as_deref()
            .into_iter()
            .chain(self.aliases.iter().map(String::as_str))
    }
}

/// Identifiers a grammar is retagged with before registration.
///
/// These must match the language tags used on code blocks in the content,
/// otherwise the highlighter silently leaves those blocks undecorated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrammarOverrides {
    /// Canonical language name.
    pub name: String,
    /// Ordered alias set.
    pub aliases: Vec<String>,
}

impl GrammarOverrides {
    /// Create overrides from a canonical name and aliases.
    pub fn new(
        name: impl Into<String>,
        aliases: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            aliases: aliases.into_iter().map(Into::into).collect(),
        }
    }

    /// Check that the identifiers can be used as code block language tags.
    ///
    /// # Errors
    ///
    /// Returns `GrammarError::InvalidOverride` if the name is empty, an
    /// identifier is empty or contains whitespace, or an alias repeats the
    /// name or another alias.
    pub fn validate(&self) -> Result<(), GrammarError> {
        if self.name.is_empty() {
            return Err(invalid("canonical name cannot be empty"));
        }
        require_tag(&self.name)?;

        let mut seen = HashSet::with_capacity(self.aliases.len());
        for (index, alias) in self.aliases.iter().enumerate() {
            if alias.is_empty() {
                return Err(invalid(&format!("alias #{} cannot be empty", index + 1)));
            }
            require_tag(alias)?;
            if *alias == self.name {
                return Err(invalid(&format!(
                    "alias '{alias}' duplicates the canonical name"
                )));
            }
            if !seen.insert(alias.as_str()) {
                return Err(invalid(&format!("alias '{alias}' is listed more than once")));
            }
        }

        Ok(())
    }
}

fn invalid(message: &str) -> GrammarError {
    GrammarError::InvalidOverride(message.to_owned())
}

/// Code block tags are split on whitespace by Markdown renderers.
fn require_tag(identifier: &str) -> Result<(), GrammarError> {
    if identifier.chars().any(char::is_whitespace) {
        return Err(invalid(&format!("'{identifier}' contains whitespace")));
    }
    Ok(())
}

/// Retag a grammar with the given identifiers.
///
/// Returns a new document whose `name` and `aliases` are replaced by the
/// overrides. Whatever the source carried for those fields is discarded and
/// all other fields are copied unchanged.
///
/// # Errors
///
/// Returns `GrammarError::InvalidOverride` if the overrides fail validation.
pub fn adapt(
    document: &GrammarDocument,
    overrides: &GrammarOverrides,
) -> Result<GrammarDocument, GrammarError> {
    overrides.validate()?;
    Ok(retag(document, overrides))
}

/// Retag without validating; callers check `overrides` first.
fn retag(document: &GrammarDocument, overrides: &GrammarOverrides) -> GrammarDocument {
    GrammarDocument {
        name: Some(overrides.name.clone()),
        aliases: overrides.aliases.clone(),
        rules: document.rules.clone(),
    }
}

/// Read and parse a grammar document.
///
/// # Errors
///
/// Returns `GrammarError::NotFound` if the file does not exist,
/// `GrammarError::Io` if it cannot be read, and `GrammarError::Parse` if the
/// content is not a grammar document.
pub fn load(path: &Path) -> Result<GrammarDocument, GrammarError> {
    let content = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            GrammarError::NotFound(path.to_path_buf())
        } else {
            GrammarError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let document = GrammarDocument::from_json(&content).map_err(|source| GrammarError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        path = %path.display(),
        scope = document.scope_name().unwrap_or_default(),
        rules = document.rule_count(),
        "Loaded grammar"
    );

    Ok(document)
}

/// Load a grammar from disk and retag it with the given identifiers.
///
/// Overrides are checked before the file is touched so identifier mistakes
/// are reported even when the path is also wrong.
///
/// # Errors
///
/// Returns any error from [`GrammarOverrides::validate`] or [`load`].
pub fn load_and_adapt(
    path: &Path,
    overrides: &GrammarOverrides,
) -> Result<GrammarDocument, GrammarError> {
    overrides.validate()?;
    let document = load(path)?;
    Ok(retag(&document, overrides))
}
