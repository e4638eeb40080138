//! Navigation validation.
//!
//! [`NavigationBuilder`] collects top-level entries and checks the whole tree
//! before producing an immutable [`Navigation`]:
//!
//! - every authored entry is either a section or a leaf
//! - the root level holds only sections, and at least one leaf exists
//! - every label is non-empty
//! - every slug is a relative content path and unique across the tree
//! - no entry is nested deeper than the configured maximum
//!
//! Entries are visited depth-first in authored order and the first violation
//! is returned, so the same input always reports the same error.

use std::collections::HashMap;

use serde::Serialize;

use crate::{Leaf, NavNode, Section, SidebarEntry, Slug, SlugError};

/// Separator used when printing the position of an entry.
const PATH_SEPARATOR: &str = " > ";

/// Structural problem in a navigation tree.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    /// No sections, or sections without a single page.
    #[error("Navigation is empty: add at least one section with at least one page")]
    EmptyTree,
    /// Authored entry is neither a section nor a leaf.
    #[error("Malformed navigation entry at {path} ('{label}'): {reason}")]
    MalformedEntry {
        /// Position of the entry, e.g. `Guide > #2`.
        path: String,
        /// Label of the entry, empty when missing.
        label: String,
        /// What is wrong with the entry.
        reason: String,
    },
    /// Section or leaf with a blank label.
    #[error("Navigation entry at {path} has an empty label")]
    EmptyLabel {
        /// Position of the entry, e.g. `Guide > #2`.
        path: String,
    },
    /// Slug is not a relative content path.
    #[error("Invalid slug '{slug}' for '{label}': {reason}")]
    InvalidSlug {
        /// Offending slug.
        slug: String,
        /// Label path of the leaf.
        label: String,
        /// Why the slug was rejected.
        reason: SlugError,
    },
    /// Two leaves point at the same slug.
    #[error("Duplicate slug '{slug}' used by '{first}' and '{second}'")]
    DuplicateSlug {
        /// Shared slug.
        slug: String,
        /// Label path of the leaf that claimed the slug first.
        first: String,
        /// Label path of the conflicting leaf.
        second: String,
    },
    /// Leaf at the root level.
    #[error("Top-level navigation entry '{label}' must be a section")]
    TopLevelLeaf {
        /// Label of the leaf.
        label: String,
    },
    /// Entry nested below the configured maximum depth.
    #[error("Navigation entry '{label}' exceeds the maximum depth of {max_depth}")]
    TooDeep {
        /// Label path of the entry.
        label: String,
        /// Configured limit.
        max_depth: usize,
    },
}

/// Join the labels of enclosing sections with the entry's own label or position.
pub(crate) fn entry_path(trail: &[String], last: &str) -> String {
    let mut path = trail.join(PATH_SEPARATOR);
    if !path.is_empty() {
        path.push_str(PATH_SEPARATOR);
    }
    path.push_str(last);
    path
}

/// Collects top-level entries and validates them into a [`Navigation`].
#[derive(Debug, Default)]
pub struct NavigationBuilder {
    entries: Vec<SidebarEntry>,
    max_depth: Option<usize>,
}

impl NavigationBuilder {
    /// Create an empty builder with unbounded depth.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a top-level section.
    #[must_use]
    pub fn section(mut self, section: Section) -> Self {
        self.entries.push(NavNode::Section(section).into());
        self
    }

    /// Append nodes built in code.
    ///
    /// Top-level leaves are accepted here and rejected by [`build`](Self::build).
    #[must_use]
    pub fn nodes(mut self, nodes: impl IntoIterator<Item = NavNode>) -> Self {
        self.entries.extend(nodes.into_iter().map(SidebarEntry::from));
        self
    }

    /// Append authored entries (e.g. from a config file).
    ///
    /// Malformed entries are accepted here and rejected by [`build`](Self::build).
    #[must_use]
    pub fn entries(mut self, entries: impl IntoIterator<Item = SidebarEntry>) -> Self {
        self.entries.extend(entries);
        self
    }

    /// Limit nesting. Top-level sections are at depth 1, their items at 2.
    #[must_use]
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Validate the tree.
    ///
    /// # Errors
    ///
    /// Returns the first [`NavigationError`] found in depth-first order.
    pub fn build(self) -> Result<Navigation, NavigationError> {
        if self.entries.is_empty() {
            return Err(NavigationError::EmptyTree);
        }

        let mut trail = Vec::new();
        let nodes = self
            .entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| entry.into_node(&mut trail, index))
            .collect::<Result<Vec<_>, _>>()?;

        let mut validator = Validator {
            max_depth: self.max_depth,
            trail: Vec::new(),
            seen: HashMap::new(),
        };

        let mut sections = Vec::with_capacity(nodes.len());
        for (index, node) in nodes.into_iter().enumerate() {
            validator.visit(&node, index, 1)?;
            match node {
                NavNode::Section(section) => sections.push(section),
                NavNode::Leaf(leaf) => {
                    return Err(NavigationError::TopLevelLeaf { label: leaf.label });
                }
            }
        }

        if validator.seen.is_empty() {
            return Err(NavigationError::EmptyTree);
        }

        tracing::debug!(
            sections = sections.len(),
            pages = validator.seen.len(),
            "Navigation validated"
        );

        Ok(Navigation { sections })
    }
}

/// Depth-first walk state.
struct Validator {
    max_depth: Option<usize>,
    /// Labels from the root to the entry being visited.
    trail: Vec<String>,
    /// Slug to label path of the leaf that owns it.
    seen: HashMap<Slug, String>,
}

impl Validator {
    fn visit(&mut self, node: &NavNode, index: usize, depth: usize) -> Result<(), NavigationError> {
        let label = node.label();
        if label.trim().is_empty() {
            return Err(NavigationError::EmptyLabel {
                path: self.path_with(&format!("#{}", index + 1)),
            });
        }
        if self.max_depth.is_some_and(|max| depth > max) {
            return Err(NavigationError::TooDeep {
                label: self.path_with(label),
                max_depth: self.max_depth.unwrap_or_default(),
            });
        }

        match node {
            NavNode::Section(section) => {
                if section.items.is_empty() {
                    tracing::warn!(section = %self.path_with(label), "Navigation section has no entries");
                }
                self.trail.push(section.label.clone());
                for (child_index, child) in section.items.iter().enumerate() {
                    self.visit(child, child_index, depth + 1)?;
                }
                self.trail.pop();
            }
            NavNode::Leaf(leaf) => self.visit_leaf(leaf)?,
        }

        Ok(())
    }

    fn visit_leaf(&mut self, leaf: &Leaf) -> Result<(), NavigationError> {
        let label = self.path_with(&leaf.label);

        leaf.slug
            .validate()
            .map_err(|reason| NavigationError::InvalidSlug {
                slug: leaf.slug.to_string(),
                label: label.clone(),
                reason,
            })?;

        if let Some(first) = self.seen.get(&leaf.slug) {
            return Err(NavigationError::DuplicateSlug {
                slug: leaf.slug.to_string(),
                first: first.clone(),
                second: label,
            });
        }
        self.seen.insert(leaf.slug.clone(), label);
        Ok(())
    }

    fn path_with(&self, last: &str) -> String {
        entry_path(&self.trail, last)
    }
}

/// Validated, immutable navigation tree.
///
/// Serializes as the generator's sidebar array.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Navigation {
    sections: Vec<Section>,
}

impl Navigation {
    /// Top-level sections in rendered order.
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// All leaves, depth-first in rendered order.
    pub fn leaves(&self) -> impl Iterator<Item = &Leaf> {
        Leaves {
            sections: self.sections.iter(),
            stack: Vec::new(),
        }
    }

    /// Find the leaf pointing at `slug`.
    #[must_use]
    pub fn find(&self, slug: &str) -> Option<&Leaf> {
        self.leaves().find(|leaf| leaf.slug.as_str() == slug)
    }

    /// Number of leaves in the tree.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.sections.iter().map(Section::leaf_count).sum()
    }
}

struct Leaves<'a> {
    sections: std::slice::Iter<'a, Section>,
    stack: Vec<std::slice::Iter<'a, NavNode>>,
}

impl<'a> Iterator for Leaves<'a> {
    type Item = &'a Leaf;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let Some(items) = self.stack.last_mut() else {
                self.stack.push(self.sections.next()?.items.iter());
                continue;
            };
            match items.next() {
                Some(NavNode::Leaf(leaf)) => return Some(leaf),
                Some(NavNode::Section(section)) => self.stack.push(section.items.iter()),
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}
