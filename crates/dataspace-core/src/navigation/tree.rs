// ============================================================================
// Data Space Core - Secondary Menu Tree
// File: crates/dataspace-core/src/navigation/tree.rs
// Description: Expand/collapse state and row layout of the side panel
// ============================================================================

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use tracing::debug;

use dataspace_shared::constants::{ROW_BASE_INDENT, ROW_INDENT_STEP};

use super::menu::MenuNode;

/// Result of clicking a secondary menu row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Branch row: its own flag flipped, nothing else changed.
    Toggled { id: String, expanded: bool },
    /// Leaf row with a path.
    Navigate(String),
    /// Leaf row without a path.
    Ignored,
}

/// One visible row of the secondary menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuRow {
    pub id: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub depth: usize,
    /// Left padding in theme spacing units.
    pub indent: u32,
    pub has_children: bool,
    pub expanded: bool,
    pub selected: bool,
    /// False while the sidebar is collapsed to icons.
    pub show_label: bool,
}

/// Per-branch expanded flags, collapsed by default. Not persisted.
#[derive(Debug, Clone, Default)]
pub struct SecondaryMenuTree {
    expansion: HashMap<String, bool>,
}

impl SecondaryMenuTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expansion.get(id).copied().unwrap_or(false)
    }

    /// Number of branches that have been rendered or clicked.
    pub fn tracked(&self) -> usize {
        self.expansion.len()
    }

    /// Branches toggle only themselves; leaves request navigation and leave flags alone.
    pub fn click(&mut self, node: &MenuNode) -> ClickOutcome {
        if node.has_children() {
            let flag = self.expansion.entry(node.id.clone()).or_insert(false);
            *flag = !*flag;
            let expanded = *flag;
            debug!("Menu branch {} expanded: {}", node.id, expanded);
            if !expanded {
                self.forget_descendants(node);
            }
            ClickOutcome::Toggled {
                id: node.id.clone(),
                expanded,
            }
        } else if let Some(path) = &node.path {
            ClickOutcome::Navigate(path.clone())
        } else {
            ClickOutcome::Ignored
        }
    }

    /// Selected iff the node's path equals the current route exactly.
    pub fn is_selected(node: &MenuNode, current_path: Option<&str>) -> bool {
        current_path.is_some_and(|path| node.is_at(path))
    }

    /// Finds a node anywhere under `items`.
    pub fn find<'a>(items: &'a [MenuNode], id: &str) -> Option<&'a MenuNode> {
        items.iter().flat_map(|n| n.iter()).find(|n| n.id == id)
    }

    /// Visible rows in display order. A collapsed sidebar shows only the first level.
    pub fn rows(
        &mut self,
        items: &[MenuNode],
        current_path: Option<&str>,
        sidebar_collapsed: bool,
    ) -> Vec<MenuRow> {
        let mut rows = Vec::new();
        for node in items {
            self.push_rows(node, 0, current_path, sidebar_collapsed, &mut rows);
        }
        rows
    }

    fn push_rows(
        &mut self,
        node: &MenuNode,
        depth: usize,
        current_path: Option<&str>,
        sidebar_collapsed: bool,
        rows: &mut Vec<MenuRow>,
    ) {
        let has_children = node.has_children();
        let expanded = if has_children {
            *self.expansion.entry(node.id.clone()).or_insert(false)
        } else {
            false
        };

        rows.push(MenuRow {
            id: node.id.clone(),
            label: node.label.clone(),
            icon: node.icon.clone(),
            path: node.path.clone(),
            depth,
            indent: ROW_BASE_INDENT + depth as u32 * ROW_INDENT_STEP,
            has_children,
            expanded,
            selected: Self::is_selected(node, current_path),
            show_label: !sidebar_collapsed,
        });

        if expanded && !sidebar_collapsed {
            for child in &node.children {
                self.push_rows(child, depth + 1, current_path, sidebar_collapsed, rows);
            }
        } else if has_children {
            self.forget_descendants(node);
        }
    }

    /// Hidden rows are unmounted: nested branches start collapsed when shown again.
    fn forget_descendants(&mut self, node: &MenuNode) {
        for child in node.iter().skip(1) {
            self.expansion.remove(&child.id);
        }
    }

    /// Sidebar collapsed to icons: only the first level stays mounted.
    pub fn collapse_nested(&mut self, items: &[MenuNode]) {
        for node in items {
            self.forget_descendants(node);
        }
    }

    /// Drops flags for nodes no longer under `items`, as when the panel is remounted
    /// for another top-level menu.
    pub fn retain(&mut self, items: &[MenuNode]) {
        let live: HashSet<&str> = items
            .iter()
            .flat_map(|n| n.iter())
            .map(|n| n.id.as_str())
            .collect();
        self.expansion.retain(|id, _| live.contains(id.as_str()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<MenuNode> {
        vec![
            MenuNode::new("product", "Products").with_path("/linker/product"),
            MenuNode::new("assets", "Assets")
                .with_path("/linker/data-assets")
                .with_children(vec![
                    MenuNode::new("local", "Local").with_path("/linker/data-assets/local"),
                    MenuNode::new("remote", "Remote").with_children(vec![
                        MenuNode::new("s3", "S3").with_path("/linker/data-assets/remote/s3"),
                    ]),
                ]),
            MenuNode::new("group", "Group").with_children(vec![MenuNode::new("g1", "G1")]),
        ]
    }

    fn ids(rows: &[MenuRow]) -> Vec<&str> {
        rows.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_branches_start_collapsed() {
        let mut tree = SecondaryMenuTree::new();
        let rows = tree.rows(&items(), None, false);
        assert_eq!(ids(&rows), vec!["product", "assets", "group"]);
        assert!(rows.iter().all(|r| !r.expanded));
        // Two branches rendered, two lazily tracked entries
        assert_eq!(tree.tracked(), 2);
    }

    #[test]
    fn test_branch_click_toggles_only_itself() {
        let items = items();
        let mut tree = SecondaryMenuTree::new();
        let assets = SecondaryMenuTree::find(&items, "assets").unwrap();
        let group = SecondaryMenuTree::find(&items, "group").unwrap();

        assert_eq!(
            tree.click(assets),
            ClickOutcome::Toggled {
                id: "assets".to_string(),
                expanded: true
            }
        );
        assert!(tree.is_expanded("assets"));
        assert!(!tree.is_expanded("group"));

        tree.click(group);
        tree.click(assets);
        assert!(!tree.is_expanded("assets"));
        assert!(tree.is_expanded("group"));
    }

    #[test]
    fn test_nested_expansion_is_independent_of_ancestors() {
        let items = items();
        let mut tree = SecondaryMenuTree::new();
        tree.click(SecondaryMenuTree::find(&items, "assets").unwrap());
        tree.click(SecondaryMenuTree::find(&items, "remote").unwrap());
        assert!(tree.is_expanded("assets"));

        let rows = tree.rows(&items, None, false);
        assert_eq!(ids(&rows), vec!["product", "assets", "local", "remote", "s3", "group"]);
        let s3 = rows.iter().find(|r| r.id == "s3").unwrap();
        assert_eq!(s3.depth, 2);
        assert_eq!(s3.indent, 6);
    }

    #[test]
    fn test_collapsing_parent_resets_nested_branches() {
        let items = items();
        let assets = SecondaryMenuTree::find(&items, "assets").unwrap();
        let mut tree = SecondaryMenuTree::new();
        tree.click(assets);
        tree.click(SecondaryMenuTree::find(&items, "remote").unwrap());

        tree.click(assets);
        assert!(!tree.is_expanded("remote"));

        tree.click(assets);
        let rows = tree.rows(&items, None, false);
        assert_eq!(ids(&rows), vec!["product", "assets", "local", "remote", "group"]);
    }

    #[test]
    fn test_hidden_branch_expanded_out_of_band_is_dropped_on_render() {
        let items = items();
        let mut tree = SecondaryMenuTree::new();
        tree.click(SecondaryMenuTree::find(&items, "remote").unwrap());

        let rows = tree.rows(&items, None, false);
        assert_eq!(ids(&rows), vec!["product", "assets", "group"]);
        assert!(!tree.is_expanded("remote"));
    }

    #[test]
    fn test_leaf_click_navigates_without_touching_flags() {
        let items = items();
        let mut tree = SecondaryMenuTree::new();
        tree.click(SecondaryMenuTree::find(&items, "assets").unwrap());

        let outcome = tree.click(SecondaryMenuTree::find(&items, "local").unwrap());
        assert_eq!(
            outcome,
            ClickOutcome::Navigate("/linker/data-assets/local".to_string())
        );
        assert!(tree.is_expanded("assets"));
        assert_eq!(tree.click(SecondaryMenuTree::find(&items, "g1").unwrap()), ClickOutcome::Ignored);
    }

    #[test]
    fn test_selection_is_exact_match() {
        let items = items();
        let mut tree = SecondaryMenuTree::new();
        let rows = tree.rows(&items, Some("/linker/data-assets"), false);
        let selected: Vec<&str> = rows.iter().filter(|r| r.selected).map(|r| r.id.as_str()).collect();
        assert_eq!(selected, vec!["assets"]);

        let rows = tree.rows(&items, Some("/linker/product/42"), false);
        assert!(rows.iter().all(|r| !r.selected));
    }

    #[test]
    fn test_collapsed_sidebar_hides_children_and_labels() {
        let items = items();
        let mut tree = SecondaryMenuTree::new();
        tree.click(SecondaryMenuTree::find(&items, "assets").unwrap());

        tree.click(SecondaryMenuTree::find(&items, "remote").unwrap());

        let rows = tree.rows(&items, None, true);
        assert_eq!(ids(&rows), vec!["product", "assets", "group"]);
        assert!(rows.iter().all(|r| !r.show_label));
        assert!(tree.is_expanded("assets"));
        assert!(!tree.is_expanded("remote"));

        let rows = tree.rows(&items, None, false);
        assert_eq!(ids(&rows), vec!["product", "assets", "local", "remote", "group"]);
    }

    #[test]
    fn test_collapse_nested_keeps_first_level() {
        let items = items();
        let mut tree = SecondaryMenuTree::new();
        tree.click(SecondaryMenuTree::find(&items, "assets").unwrap());
        tree.click(SecondaryMenuTree::find(&items, "remote").unwrap());

        tree.collapse_nested(&items);
        assert!(tree.is_expanded("assets"));
        assert!(!tree.is_expanded("remote"));
    }

    #[test]
    fn test_retain_discards_unmounted_entries() {
        let items = items();
        let mut tree = SecondaryMenuTree::new();
        tree.click(SecondaryMenuTree::find(&items, "assets").unwrap());
        tree.click(SecondaryMenuTree::find(&items, "remote").unwrap());

        tree.retain(&items[2..]);
        assert_eq!(tree.tracked(), 0);
        assert!(!tree.is_expanded("assets"));
    }
}
