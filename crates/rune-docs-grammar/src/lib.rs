//! Syntax grammar adaptation for the documentation highlighter.
//!
//! The site highlights RuneLang code blocks with a TextMate grammar stored as
//! JSON. The grammar's own `name` and `aliases` rarely match the identifiers
//! authors put on fenced code blocks, so this crate loads the document and
//! retags it with the canonical identifiers before it is handed to the
//! highlighter's language list.
//!
//! # Example
//!
//! ```no_run
//! # fn main() -> Result<(), rune_docs_grammar::GrammarError> {
//! use std::path::Path;
//! use rune_docs_grammar::{GrammarOverrides, LanguageRegistry, load_and_adapt};
//!
//! let overrides = GrammarOverrides::new("rune", ["runelang"]);
//! let grammar = load_and_adapt(Path::new("src/grammars/runelang.tmLanguage.json"), &overrides)?;
//!
//! let mut registry = LanguageRegistry::new();
//! registry.register(grammar)?;
//! assert!(registry.resolve("runelang").is_some());
//! # Ok(())
//! # }
//! ```

mod document;
mod error;
mod registry;

pub use document::{GrammarDocument, GrammarOverrides, adapt, load, load_and_adapt};
pub use error::GrammarError;
pub use registry::LanguageRegistry;
