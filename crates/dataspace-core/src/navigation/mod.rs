//! # Data Space Core - Navigation Module
//! 
//! Three-tier menu engine: the static menu tree, route-to-menu resolution, the layout
//! controller owning the active top-level menu and sidebar state, and the secondary
//! tree's expansion state.

pub mod menu;
pub mod menu_config;
pub mod resolver;
pub mod layout;
pub mod tree;
pub mod shell;

pub use menu::{MenuIter, MenuNode, MenuTree};
pub use menu_config::{default_company, default_menu};
pub use resolver::resolve;
pub use layout::{LayoutController, NavigationState};
pub use tree::{ClickOutcome, MenuRow, SecondaryMenuTree};
pub use shell::{ConsoleShell, LayoutSnapshot, TopMenuTab};
