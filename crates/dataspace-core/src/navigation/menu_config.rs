//! Built-in console menu and banner

use crate::domain::{CompanyInfo, CompanyUser};
use crate::error::DomainError;

use super::menu::{MenuNode, MenuTree};

pub fn default_company() -> CompanyInfo {
    CompanyInfo {
        name: "GCL Trusted Data Space".to_string(),
        logo: Some("/img/logo.png".to_string()),
        user_info: Some(CompanyUser {
            name: "Wu Xiyan".to_string(),
            avatar: Some("/avatar.png".to_string()),
            role: Some("System Administrator".to_string()),
        }),
    }
}

pub fn default_menu() -> Result<MenuTree, DomainError> {
    MenuTree::new(vec![
        MenuNode::new("dashboard", "Home")
            .with_icon("dashboard")
            .with_path("/dashboard")
            .with_children(vec![MenuNode::new("trust-space", "Trust Spaces")
                .with_icon("assessment")
                .with_path("/dashboard/trust-space")]),
        MenuNode::new("linker", "Connector")
            .with_icon("people")
            .with_path("/linker")
            .with_children(vec![
                MenuNode::new("product", "Data Products").with_path("/linker/product"),
                MenuNode::new("data-assets", "Data Assets")
                    .with_path("/linker/data-assets")
                    .with_children(vec![MenuNode::new("data-assets-local", "Local Data Sources")
                        .with_path("/linker/data-assets/local")]),
            ]),
        MenuNode::new("orders", "Orders")
            .with_icon("shopping-cart")
            .with_path("/orders")
            .with_children(vec![MenuNode::new("orders-all", "All Orders").with_path("/orders/all")]),
        MenuNode::new("data-processing", "Data Platform")
            .with_icon("account-balance")
            .with_path("/data-processing")
            .with_children(vec![
                MenuNode::new("data-handling", "Data Processing").with_path("/data-processing")
            ]),
        MenuNode::new("system", "System Settings")
            .with_icon("settings")
            .with_path("/system")
            .with_children(vec![
                MenuNode::new("system-users", "Users")
                    .with_icon("people")
                    .with_path("/system/users"),
                MenuNode::new("system-roles", "Roles & Permissions")
                    .with_icon("security")
                    .with_path("/system/roles"),
                MenuNode::new("system-settings", "Configuration")
                    .with_icon("settings")
                    .with_path("/system/settings"),
                MenuNode::new("organizations", "Organizations")
                    .with_icon("description")
                    .with_path("/system/organizations"),
            ]),
        MenuNode::new("help", "Help Center")
            .with_icon("help")
            .with_path("/help")
            .with_children(vec![
                MenuNode::new("help-docs", "Documentation").with_path("/help/docs"),
                MenuNode::new("help-faq", "FAQ").with_path("/help/faq"),
                MenuNode::new("help-support", "Support").with_path("/help/support"),
            ]),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_menu_is_valid() {
        let tree = default_menu().unwrap();
        assert_eq!(tree.top_level().len(), 6);
        assert_eq!(tree.first_id(), Some("dashboard"));
        assert!(tree.contains("data-assets-local"));
    }
}
