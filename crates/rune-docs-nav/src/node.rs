//! Navigation tree nodes.

use serde::Serialize;

use crate::Slug;

/// Entry in the navigation tree.
///
/// Serialized without a tag, matching the generator's sidebar shape:
/// `{ label, items }` for sections and `{ label, slug }` for leaves.
/// Authored input is read as [`SidebarEntry`](crate::SidebarEntry) instead.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NavNode {
    /// Group of entries under a label.
    Section(Section),
    /// Link to a content document.
    Leaf(Leaf),
}

impl NavNode {
    /// Display label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Section(section) => &section.label,
            Self::Leaf(leaf) => &leaf.label,
        }
    }
}

/// Non-leaf node grouping ordered children.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Display label.
    pub label: String,
    /// Children in rendered order.
    pub items: Vec<NavNode>,
}

impl Section {
    /// Create an empty section.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            items: Vec::new(),
        }
    }

    /// Append a leaf.
    #[must_use]
    pub fn leaf(mut self, label: impl Into<String>, slug: impl Into<Slug>) -> Self {
        self.items.push(NavNode::Leaf(Leaf::new(label, slug)));
        self
    }

    /// Append a nested section.
    #[must_use]
    pub fn group(mut self, section: Section) -> Self {
        self.items.push(NavNode::Section(section));
        self
    }

    /// Number of leaves under this section at any depth.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.items
            .iter()
            .map(|item| match item {
                NavNode::Section(section) => section.leaf_count(),
                NavNode::Leaf(_) => 1,
            })
            .sum()
    }
}

/// Terminal node pairing a label with a content slug.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Leaf {
    /// Display label.
    pub label: String,
    /// Content document location.
    pub slug: Slug,
}

impl Leaf {
    pub fn new(label: impl Into<String>, slug: impl Into<Slug>) -> Self {
        Self {
            label: label.into(),
            slug: slug.into(),
        }
    }
}
