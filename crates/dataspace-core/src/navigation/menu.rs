// ============================================================================
// Data Space Core - Menu Model
// File: crates/dataspace-core/src/navigation/menu.rs
// Description: Static navigation hierarchy
// ============================================================================

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Menu entry. Nodes without a `path` are pure containers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuNode {
    pub id: String,
    pub label: String,
    /// Opaque icon handle for the renderer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuNode>,
}

impl MenuNode {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
            path: None,
            children: Vec::new(),
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_children(mut self, children: Vec<MenuNode>) -> Self {
        self.children = children;
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Plain string prefix test, no segment boundary: `/system` matches `/system-extra`.
    pub fn prefix_matches(&self, current_path: &str) -> bool {
        self.path
            .as_deref()
            .is_some_and(|path| current_path.starts_with(path))
    }

    /// Exact route equality, used for selection highlighting.
    pub fn is_at(&self, current_path: &str) -> bool {
        self.path.as_deref() == Some(current_path)
    }

    /// This node and its descendants, depth-first pre-order.
    pub fn iter(&self) -> MenuIter<'_> {
        MenuIter { stack: vec![self] }
    }
}

/// Depth-first pre-order traversal over menu nodes.
pub struct MenuIter<'a> {
    stack: Vec<&'a MenuNode>,
}

impl<'a> Iterator for MenuIter<'a> {
    type Item = &'a MenuNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// The whole navigation hierarchy. Ids are unique across the tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MenuTree {
    roots: Vec<MenuNode>,
}

impl MenuTree {
    pub fn new(roots: Vec<MenuNode>) -> Result<Self, DomainError> {
        let tree = Self { roots };
        let mut seen = HashSet::new();
        for node in tree.iter() {
            if !seen.insert(node.id.as_str()) {
                return Err(DomainError::DuplicateMenuId(node.id.clone()));
            }
        }
        Ok(tree)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        let roots: Vec<MenuNode> = serde_json::from_str(json)
            .map_err(|e| DomainError::InvalidMenuConfig(e.to_string()))?;
        Self::new(roots)
    }

    pub fn top_level(&self) -> &[MenuNode] {
        &self.roots
    }

    pub fn first_id(&self) -> Option<&str> {
        self.roots.first().map(|n| n.id.as_str())
    }

    pub fn iter(&self) -> MenuIter<'_> {
        MenuIter {
            stack: self.roots.iter().rev().collect(),
        }
    }

    pub fn find(&self, id: &str) -> Option<&MenuNode> {
        self.iter().find(|n| n.id == id)
    }

    pub fn find_top_level(&self, id: &str) -> Option<&MenuNode> {
        self.roots.iter().find(|n| n.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Total node count at every depth.
    pub fn len(&self) -> usize {
        self.iter().count()
    }
}
