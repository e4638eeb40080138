//! Sidebar navigation for the documentation site.
//!
//! The sidebar is an ordered tree of [`NavNode`]s: sections group entries
//! under a label, leaves point a label at a content slug. Authored order is
//! rendered order; nothing here sorts, filters, or deduplicates.
//!
//! Trees are assembled with [`Section`] or read from config as
//! [`SidebarEntry`]s, and validated by
//! [`NavigationBuilder::build`] before they reach the site generator.
//!
//! # Example
//!
//! ```
//! use rune_docs_nav::{NavigationBuilder, Section};
//!
//! let nav = NavigationBuilder::new()
//!     .section(Section::new("Getting Started").leaf("Introduction", "getting-started/introduction"))
//!     .section(Section::new("Guide").leaf("Operators", "guide/operators"))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(nav.sections().len(), 2);
//! assert_eq!(nav.sections()[0].label, "Getting Started");
//! ```

mod builder;
mod entry;
mod node;
mod slug;

pub use builder::{Navigation, NavigationBuilder, NavigationError};
pub use entry::SidebarEntry;
pub use node::{Leaf, NavNode, Section};
pub use slug::{Slug, SlugError};
