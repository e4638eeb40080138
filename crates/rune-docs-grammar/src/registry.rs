//! Highlighter language list.

use std::collections::HashMap;

use serde::Serialize;

use crate::{GrammarDocument, GrammarError};

/// Ordered list of grammars handed to the highlighter.
///
/// Every identifier (name or alias) maps to exactly one grammar. Registration
/// order is kept because the highlighter loads languages in list order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LanguageRegistry {
    langs: Vec<GrammarDocument>,
    #[serde(skip)]
    by_identifier: HashMap<String, usize>,
}

impl LanguageRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a grammar.
    ///
    /// # Errors
    ///
    /// Returns `GrammarError::InvalidOverride` if the grammar has no name and
    /// `GrammarError::DuplicateIdentifier` if its name or one of its aliases is
    /// already registered.
    pub fn register(&mut self, grammar: GrammarDocument) -> Result<(), GrammarError> {
        let Some(name) = grammar.name.as_deref() else {
            return Err(GrammarError::InvalidOverride(
                "cannot register a grammar without a name".to_owned(),
            ));
        };

        for identifier in grammar.identifiers() {
            if let Some(&idx) = self.by_identifier.get(identifier) {
                return Err(GrammarError::DuplicateIdentifier {
                    identifier: identifier.to_owned(),
                    existing: self.langs[idx].name.clone().unwrap_or_default(),
                });
            }
        }

        tracing::debug!(name, aliases = ?grammar.aliases, "Registered language");

        let idx = self.langs.len();
        for identifier in grammar.identifiers() {
            self.by_identifier.insert(identifier.to_owned(), idx);
        }
        self.langs.push(grammar);
        Ok(())
    }

    /// Find a grammar by canonical name or alias.
    #[must_use]
    pub fn resolve(&self, identifier: &str) -> Option<&GrammarDocument> {
        self.by_identifier
            .get(identifier)
            .map(|&idx| &self.langs[idx])
    }

    /// Registered grammars in registration order.
    #[must_use]
    pub fn languages(&self) -> &[GrammarDocument] {
        &self.langs
    }

    /// Number of registered grammars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.langs.len()
    }

    /// Whether no grammar is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.langs.is_empty()
    }
}
