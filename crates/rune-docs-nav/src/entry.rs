//! Authored sidebar entries.
//!
//! Config files describe the sidebar as nested tables. Each table is read as a
//! loose [`SidebarEntry`] and only turned into a [`NavNode`] by
//! [`NavigationBuilder::build`](crate::NavigationBuilder::build), so a bad entry
//! is reported with its position in the tree instead of a generic parse error.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::de::IgnoredAny;

use crate::builder::entry_path;
use crate::{Leaf, NavNode, NavigationError, Section, Slug};

/// Sidebar entry as written in a config file.
///
/// A section has `items`, a leaf has `slug`; any other key is an error.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SidebarEntry {
    /// Display label.
    pub label: Option<String>,
    /// Content slug (leaves only).
    pub slug: Option<Slug>,
    /// Children (sections only).
    pub items: Option<Vec<SidebarEntry>>,
    /// Keys that are not part of an entry.
    #[serde(flatten)]
    unknown: BTreeMap<String, IgnoredAny>,
}

impl SidebarEntry {
    /// Display label, empty when missing.
    #[must_use]
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or_default()
    }

    /// Convert into a node. `trail` holds the labels of the enclosing
    /// sections and `index` is the entry's position among its siblings.
    pub(crate) fn into_node(
        self,
        trail: &mut Vec<String>,
        index: usize,
    ) -> Result<NavNode, NavigationError> {
        let position = entry_path(trail, &format!("#{}", index + 1));
        let malformed = |label: Option<&str>, reason: String| NavigationError::MalformedEntry {
            path: position.clone(),
            label: label.unwrap_or_default().to_owned(),
            reason,
        };

        if !self.unknown.is_empty() {
            let keys: Vec<_> = self.unknown.keys().map(|key| format!("`{key}`")).collect();
            return Err(malformed(
                self.label.as_deref(),
                format!("unknown field {}", keys.join(", ")),
            ));
        }
        let Some(label) = self.label else {
            return Err(malformed(None, "missing `label`".to_owned()));
        };

        match (self.slug, self.items) {
            (Some(slug), None) => Ok(NavNode::Leaf(Leaf { label, slug })),
            (None, Some(items)) => {
                trail.push(label.clone());
                let items = items
                    .into_iter()
                    .enumerate()
                    .map(|(child_index, child)| child.into_node(trail, child_index))
                    .collect::<Result<Vec<_>, _>>();
                trail.pop();
                Ok(NavNode::Section(Section {
                    label,
                    items: items?,
                }))
            }
            (Some(_), Some(_)) => Err(malformed(
                Some(&label),
                "has both `slug` and `items`".to_owned(),
            )),
            (None, None) => Err(malformed(
                Some(&label),
                "needs either `slug` or `items`".to_owned(),
            )),
        }
    }
}

impl From<NavNode> for SidebarEntry {
    fn from(node: NavNode) -> Self {
        match node {
            NavNode::Section(section) => Self {
                label: Some(section.label),
                items: Some(section.items.into_iter().map(Self::from).collect()),
                ..Self::default()
            },
            NavNode::Leaf(leaf) => Self {
                label: Some(leaf.label),
                slug: Some(leaf.slug),
                ..Self::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn convert(entry: SidebarEntry) -> Result<NavNode, NavigationError> {
        entry.into_node(&mut Vec::new(), 0)
    }

    fn from_json(value: serde_json::Value) -> SidebarEntry {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_converts_sections_and_leaves() {
        let entry = from_json(serde_json::json!({
            "label": "Guide",
            "items": [{ "label": "Modules", "slug": "guide/modules" }]
        }));

        let node = convert(entry).unwrap();

        assert_eq!(
            node,
            NavNode::Section(Section::new("Guide").leaf("Modules", "guide/modules"))
        );
    }

    #[test]
    fn test_unknown_key_names_entry_and_position() {
        let entry = from_json(serde_json::json!({
            "label": "Guide",
            "items": [
                { "label": "Operators", "slug": "guide/operators" },
                { "label": "Control Flow", "slg": "guide/control-flow" }
            ]
        }));

        let err = convert(entry).unwrap_err();

        assert_eq!(
            err,
            NavigationError::MalformedEntry {
                path: "Guide > #2".to_owned(),
                label: "Control Flow".to_owned(),
                reason: "unknown field `slg`".to_owned(),
            }
        );
        let msg = err.to_string();
        assert!(msg.contains("Control Flow"), "got: {msg}");
        assert!(msg.contains("Guide > #2"), "got: {msg}");
    }

    #[test]
    fn test_missing_label() {
        let err = convert(from_json(serde_json::json!({ "slug": "guide" }))).unwrap_err();

        assert!(matches!(
            err,
            NavigationError::MalformedEntry { ref path, ref reason, .. }
                if path == "#1" && reason.contains("label")
        ));
    }

    #[test]
    fn test_both_slug_and_items() {
        let err = convert(from_json(serde_json::json!({
            "label": "Guide",
            "slug": "guide",
            "items": []
        })))
        .unwrap_err();

        assert!(matches!(
            err,
            NavigationError::MalformedEntry { ref reason, .. } if reason.contains("both")
        ));
    }

    #[test]
    fn test_neither_slug_nor_items() {
        let err = convert(from_json(serde_json::json!({ "label": "Guide" }))).unwrap_err();

        assert!(matches!(
            err,
            NavigationError::MalformedEntry { ref label, ref reason, .. }
                if label == "Guide" && reason.contains("either")
        ));
    }

    #[test]
    fn test_from_node_round_trips() {
        let node = NavNode::Section(
            Section::new("Guide")
                .leaf("Operators", "guide/operators")
                .group(Section::new("Advanced").leaf("Macros", "guide/macros")),
        );

        assert_eq!(convert(SidebarEntry::from(node.clone())).unwrap(), node);
    }
}
