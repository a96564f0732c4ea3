// ============================================================================
// Data Space Core - Layout State Controller
// File: crates/dataspace-core/src/navigation/layout.rs
// Description: Active top-level menu, sidebar flag, and derived offsets
// ============================================================================

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use dataspace_shared::constants::{
    CONTENT_TOP_OFFSET, SIDEBAR_WIDTH_COLLAPSED, SIDEBAR_WIDTH_EXPANDED,
};

use crate::error::DomainError;

use super::menu::{MenuNode, MenuTree};
use super::resolver::resolve;

/// Everything the controller's outputs depend on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationState {
    /// `None` only for an empty menu tree.
    pub active_top_id: Option<String>,
    pub sidebar_open: bool,
}

/// Owns the navigation state for one session. All transitions are synchronous.
#[derive(Debug, Clone)]
pub struct LayoutController {
    tree: MenuTree,
    state: NavigationState,
}

impl LayoutController {
    pub fn new(tree: MenuTree) -> Self {
        let state = NavigationState {
            active_top_id: tree.first_id().map(str::to_string),
            sidebar_open: true,
        };
        Self { tree, state }
    }

    pub fn tree(&self) -> &MenuTree {
        &self.tree
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn active_top_id(&self) -> Option<&str> {
        self.state.active_top_id.as_deref()
    }

    pub fn sidebar_open(&self) -> bool {
        self.state.sidebar_open
    }

    /// Explicit selection, e.g. a click on a primary tab. Debug builds reject ids
    /// that are not in the tree.
    pub fn set_active_menu(&mut self, id: &str) -> Result<(), DomainError> {
        if cfg!(debug_assertions) && !self.tree.contains(id) {
            return Err(DomainError::InvalidMenuId(id.to_string()));
        }
        info!("Active menu set: {}", id);
        self.state.active_top_id = Some(id.to_string());
        Ok(())
    }

    /// Re-resolves the active menu for `path`; keeps the previous one when nothing matches.
    pub fn on_route_changed(&mut self, path: &str) -> Option<&str> {
        match resolve(path, self.tree.top_level()) {
            Some(id) => {
                if self.state.active_top_id.as_deref() != Some(id) {
                    debug!("Route {} activates menu {}", path, id);
                    self.state.active_top_id = Some(id.to_string());
                }
            }
            None => debug!("Route {} matches no menu, keeping {:?}", path, self.state.active_top_id),
        }
        self.active_top_id()
    }

    pub fn toggle_sidebar(&mut self) {
        self.state.sidebar_open = !self.state.sidebar_open;
        debug!("Sidebar open: {}", self.state.sidebar_open);
    }

    /// Children of the active top-level node; empty if it has none or does not exist.
    pub fn secondary_items(&self) -> &[MenuNode] {
        self.active_top_id()
            .and_then(|id| self.tree.find_top_level(id))
            .map(|node| node.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn has_secondary_menu(&self) -> bool {
        !self.secondary_items().is_empty()
    }

    /// Left offset of the primary bar: the drawer width, or 0 without a secondary menu.
    pub fn primary_bar_offset(&self) -> u32 {
        if !self.has_secondary_menu() {
            0
        } else if self.state.sidebar_open {
            SIDEBAR_WIDTH_EXPANDED
        } else {
            SIDEBAR_WIDTH_COLLAPSED
        }
    }

    pub fn content_top_offset(&self) -> u32 {
        CONTENT_TOP_OFFSET
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> LayoutController {
        let tree = MenuTree::new(vec![
            MenuNode::new("a", "A")
                .with_path("/a")
                .with_children(vec![MenuNode::new("a1", "A1").with_path("/a/x")]),
            MenuNode::new("b", "B").with_path("/b"),
        ])
        .unwrap();
        LayoutController::new(tree)
    }

    #[test]
    fn test_initial_state() {
        let ctl = controller();
        assert_eq!(ctl.active_top_id(), Some("a"));
        assert!(ctl.sidebar_open());
        assert_eq!(ctl.secondary_items().len(), 1);
    }

    #[test]
    fn test_offset_truth_table() {
        let mut ctl = controller();
        assert_eq!(ctl.primary_bar_offset(), 260);
        ctl.toggle_sidebar();
        assert_eq!(ctl.primary_bar_offset(), 64);

        ctl.set_active_menu("b").unwrap();
        assert!(ctl.secondary_items().is_empty());
        assert_eq!(ctl.primary_bar_offset(), 0);
        ctl.toggle_sidebar();
        assert_eq!(ctl.primary_bar_offset(), 0);
    }

    #[test]
    fn test_toggle_sidebar_is_own_inverse() {
        let mut ctl = controller();
        let before = ctl.state().clone();
        let items_before = ctl.secondary_items().to_vec();

        ctl.toggle_sidebar();
        assert_eq!(ctl.secondary_items(), items_before.as_slice());
        ctl.toggle_sidebar();

        assert_eq!(ctl.state(), &before);
        assert_eq!(ctl.secondary_items(), items_before.as_slice());
    }

    #[test]
    fn test_route_change_keeps_previous_on_miss() {
        let mut ctl = controller();
        assert_eq!(ctl.on_route_changed("/b/details"), Some("b"));
        assert_eq!(ctl.on_route_changed("/nowhere"), Some("b"));
        assert_eq!(ctl.on_route_changed("/a/x"), Some("a"));
    }

    #[test]
    fn test_set_active_menu_rejects_unknown_in_debug() {
        let mut ctl = controller();
        let result = ctl.set_active_menu("zzz");
        if cfg!(debug_assertions) {
            assert!(matches!(result, Err(DomainError::InvalidMenuId(_))));
            assert_eq!(ctl.active_top_id(), Some("a"));
        } else {
            assert!(result.is_ok());
            assert!(ctl.secondary_items().is_empty());
        }
    }

    #[test]
    fn test_non_top_level_active_id_has_no_secondary_items() {
        let mut ctl = controller();
        ctl.set_active_menu("a1").unwrap();
        assert!(ctl.secondary_items().is_empty());
        assert_eq!(ctl.primary_bar_offset(), 0);
    }

    #[test]
    fn test_empty_tree() {
        let mut ctl = LayoutController::new(MenuTree::empty());
        assert_eq!(ctl.active_top_id(), None);
        assert_eq!(ctl.on_route_changed("/a"), None);
        assert!(ctl.secondary_items().is_empty());
        assert_eq!(ctl.primary_bar_offset(), 0);
    }
}
