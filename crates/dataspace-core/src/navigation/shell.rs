// ============================================================================
// Data Space Core - Console Shell
// File: crates/dataspace-core/src/navigation/shell.rs
// Description: Banner + primary bar + secondary panel state for one session
// ============================================================================

use serde::Serialize;
use tracing::info;

use crate::domain::CompanyInfo;
use crate::error::DomainError;

use super::layout::LayoutController;
use super::menu::MenuTree;
use super::tree::{ClickOutcome, MenuRow, SecondaryMenuTree};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopMenuTab {
    pub id: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub active: bool,
}

/// Serializable view of the whole layout at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSnapshot {
    pub banner: CompanyInfo,
    pub current_path: Option<String>,
    pub active_top_id: Option<String>,
    pub sidebar_open: bool,
    pub primary_bar_offset: u32,
    pub content_top_offset: u32,
    pub tabs: Vec<TopMenuTab>,
    pub rows: Vec<MenuRow>,
}

/// Session-wide navigation: the layout controller, the secondary tree, and the route.
#[derive(Debug, Clone)]
pub struct ConsoleShell {
    company: CompanyInfo,
    layout: LayoutController,
    secondary: SecondaryMenuTree,
    current_path: Option<String>,
}

impl ConsoleShell {
    pub fn new(company: CompanyInfo, menu: MenuTree) -> Self {
        Self {
            company,
            layout: LayoutController::new(menu),
            secondary: SecondaryMenuTree::new(),
            current_path: None,
        }
    }

    pub fn layout(&self) -> &LayoutController {
        &self.layout
    }

    pub fn secondary(&self) -> &SecondaryMenuTree {
        &self.secondary
    }

    pub fn current_path(&self) -> Option<&str> {
        self.current_path.as_deref()
    }

    /// Route change: records the path and re-resolves the active top-level menu.
    pub fn navigate(&mut self, path: &str) -> Option<&str> {
        info!("Navigate: {}", path);
        self.current_path = Some(path.to_string());
        let before = self.layout.active_top_id().map(str::to_string);
        self.layout.on_route_changed(path);
        self.remount_if_changed(before);
        self.layout.active_top_id()
    }

    pub fn select_top_menu(&mut self, id: &str) -> Result<(), DomainError> {
        let before = self.layout.active_top_id().map(str::to_string);
        self.layout.set_active_menu(id)?;
        self.remount_if_changed(before);
        Ok(())
    }

    pub fn toggle_sidebar(&mut self) {
        self.layout.toggle_sidebar();
        if !self.layout.sidebar_open() {
            self.secondary.collapse_nested(self.layout.secondary_items());
        }
    }

    /// Click on a secondary row by id. Leaf clicks navigate.
    pub fn click(&mut self, id: &str) -> Result<ClickOutcome, DomainError> {
        let node = SecondaryMenuTree::find(self.layout.secondary_items(), id)
            .ok_or_else(|| DomainError::InvalidMenuId(id.to_string()))?;
        let outcome = self.secondary.click(node);
        if let ClickOutcome::Navigate(path) = &outcome {
            let path = path.clone();
            self.navigate(&path);
        }
        Ok(outcome)
    }

    pub fn snapshot(&mut self) -> LayoutSnapshot {
        let active = self.layout.active_top_id();
        let tabs = self
            .layout
            .tree()
            .top_level()
            .iter()
            .map(|node| TopMenuTab {
                id: node.id.clone(),
                label: node.label.clone(),
                icon: node.icon.clone(),
                active: active == Some(node.id.as_str()),
            })
            .collect();

        let rows = self.secondary.rows(
            self.layout.secondary_items(),
            self.current_path.as_deref(),
            !self.layout.sidebar_open(),
        );

        LayoutSnapshot {
            banner: self.company.clone(),
            current_path: self.current_path.clone(),
            active_top_id: self.layout.active_top_id().map(str::to_string),
            sidebar_open: self.layout.sidebar_open(),
            primary_bar_offset: self.layout.primary_bar_offset(),
            content_top_offset: self.layout.content_top_offset(),
            tabs,
            rows,
        }
    }

    fn remount_if_changed(&mut self, before: Option<String>) {
        if self.layout.active_top_id() != before.as_deref() {
            self.secondary.retain(self.layout.secondary_items());
        }
    }
}
